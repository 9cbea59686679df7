//! Concurrency tests: queries must observe a consistent table set while
//! another thread replaces it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use nalgebra::{Isometry3, Translation3, UnitQuaternion};
use surface_types::{Footprint, Roi, Table};
use surface_world::SurfaceWorld;

fn square_table(id: &str, x: f64) -> Table {
    let footprint =
        Footprint::from_coords(&[[-0.5, -0.5], [0.5, -0.5], [0.5, 0.5], [-0.5, 0.5]])
            .expect("square footprint is simple");
    let pose = Isometry3::from_parts(
        Translation3::new(x, 0.0, 0.0),
        UnitQuaternion::identity(),
    );
    Table::new(id, pose, footprint)
}

/// Two alternating table sets with disjoint id prefixes. A reader that
/// ever sees ids from both prefixes in one query result has observed a
/// torn replacement.
fn set_a() -> Vec<Table> {
    (0..8).map(|i| square_table(&format!("a{i}"), i as f64 * 2.0)).collect()
}

fn set_b() -> Vec<Table> {
    (0..5).map(|i| square_table(&format!("b{i}"), i as f64 * 2.0)).collect()
}

#[test]
fn queries_never_observe_a_torn_replacement() {
    let world = Arc::new(SurfaceWorld::new("world"));
    world.replace_all(set_a()).unwrap();

    let stop = Arc::new(AtomicBool::new(false));
    let roi = Roi::from_extents(-100.0, -100.0, -100.0, 100.0, 100.0, 100.0);

    let writer = {
        let world = Arc::clone(&world);
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            let mut flip = false;
            while !stop.load(Ordering::Relaxed) {
                let next = if flip { set_b() } else { set_a() };
                world.replace_all(next).unwrap();
                flip = !flip;
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let world = Arc::clone(&world);
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                while !stop.load(Ordering::Relaxed) {
                    let names = world.table_names_in_roi(&roi).unwrap();
                    let from_a = names.iter().filter(|n| n.starts_with('a')).count();
                    let from_b = names.iter().filter(|n| n.starts_with('b')).count();
                    assert!(
                        from_a == 0 || from_b == 0,
                        "observed a mixed table set: {names:?}"
                    );
                    assert!(
                        names.len() == set_a().len() || names.len() == set_b().len(),
                        "observed a partial table set: {names:?}"
                    );
                }
            })
        })
        .collect();

    thread::sleep(std::time::Duration::from_millis(200));
    stop.store(true, Ordering::Relaxed);

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
}

#[test]
fn count_is_consistent_under_replacement() {
    let world = Arc::new(SurfaceWorld::new("world"));
    world.replace_all(set_a()).unwrap();

    let stop = Arc::new(AtomicBool::new(false));

    let writer = {
        let world = Arc::clone(&world);
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            let mut flip = false;
            while !stop.load(Ordering::Relaxed) {
                let next = if flip { set_b() } else { set_a() };
                world.replace_all(next).unwrap();
                flip = !flip;
            }
        })
    };

    let a_len = set_a().len();
    let b_len = set_b().len();
    for _ in 0..10_000 {
        let count = world.table_count();
        assert!(count == a_len || count == b_len, "partial count: {count}");
    }

    stop.store(true, Ordering::Relaxed);
    writer.join().unwrap();
}
