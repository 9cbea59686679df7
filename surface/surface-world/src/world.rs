//! Concurrent registry of detected support surfaces.

use std::sync::Arc;

use hashbrown::HashSet;
use nalgebra::{Isometry3, Point3, UnitQuaternion};
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};

use surface_geometry::{AREA_EPSILON, GeometryError, extrude, is_inside_table_contour};
use surface_place::{PlaceMarker, PlaceParams, generate_place_poses, place_location_markers};
use surface_types::{ObjectExtents, PlacePose, Roi, Table};

use crate::collision::{CollisionSink, NamedSolid};
use crate::error::{WorldError, WorldResult};

/// Observer invoked after each table-set change becomes visible.
pub type TableCallback = Arc<dyn Fn() + Send + Sync>;

/// A registry of the support surfaces currently known in the environment.
///
/// The table set is replaced wholesale on each observation and queried
/// concurrently from other threads. Readers take an atomic snapshot: they
/// clone an `Arc` handle under a shared lock and compute on the immutable
/// snapshot lock-free, so a query observes either the set before or after
/// a given replacement, never a mix.
///
/// The single-slot change callback is invoked strictly outside the
/// table-set lock, so it may itself query the registry.
///
/// # Example
///
/// ```
/// use nalgebra::Isometry3;
/// use surface_types::{Footprint, Roi, Table};
/// use surface_world::SurfaceWorld;
///
/// let world = SurfaceWorld::new("world");
///
/// let footprint = Footprint::from_coords(&[
///     [-0.5, -0.5],
///     [0.5, -0.5],
///     [0.5, 0.5],
///     [-0.5, 0.5],
/// ]).unwrap();
/// world
///     .replace_all(vec![Table::new("desk", Isometry3::identity(), footprint)])
///     .unwrap();
///
/// let roi = Roi::from_extents(-1.0, -1.0, -1.0, 1.0, 1.0, 1.0);
/// assert_eq!(world.table_names_in_roi(&roi).unwrap(), vec!["desk"]);
/// ```
pub struct SurfaceWorld {
    /// Frame name stamped on emitted place poses.
    frame: String,

    /// Current table set; replaced by swapping the `Arc`.
    tables: RwLock<Arc<Vec<Table>>>,

    /// Single-slot observer for table-set changes.
    table_callback: Mutex<Option<TableCallback>>,

    /// Most recent sampler output, kept only for visualization.
    last_place_poses: Mutex<Vec<PlacePose>>,

    /// Table ids currently present in the external collision world.
    published: Mutex<HashSet<String>>,
}

impl SurfaceWorld {
    /// Create an empty registry whose place poses are expressed in `frame`.
    #[must_use]
    pub fn new(frame: impl Into<String>) -> Self {
        Self {
            frame: frame.into(),
            tables: RwLock::new(Arc::new(Vec::new())),
            table_callback: Mutex::new(None),
            last_place_poses: Mutex::new(Vec::new()),
            published: Mutex::new(HashSet::new()),
        }
    }

    /// The frame name stamped on emitted place poses.
    #[must_use]
    pub fn frame(&self) -> &str {
        &self.frame
    }

    /// Take an immutable snapshot of the current table set.
    fn snapshot(&self) -> Arc<Vec<Table>> {
        Arc::clone(&self.tables.read())
    }

    /// Invoke the registered change observer, if any.
    ///
    /// Must be called with no table-set lock held. The slot guard is also
    /// released before the call, so the observer may query or mutate the
    /// registry, including replacing the callback itself.
    fn notify(&self) {
        let callback = self.table_callback.lock().clone();
        if let Some(cb) = callback {
            cb();
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Atomically replace the current table set.
    ///
    /// The previous set is discarded; queries started before the swap keep
    /// computing on their old snapshot. The change observer fires exactly
    /// once after the new set is visible.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateTable`] if two tables share an id,
    /// or a wrapped [`GeometryError::DegeneratePolygon`] if a footprint
    /// encloses no area. The current set is left untouched on error.
    pub fn replace_all(&self, tables: Vec<Table>) -> WorldResult<()> {
        let mut seen = HashSet::with_capacity(tables.len());
        for table in &tables {
            let area = table.footprint.signed_area();
            if area.abs() <= AREA_EPSILON {
                return Err(GeometryError::DegeneratePolygon { area }.into());
            }
            if !seen.insert(table.id.as_str()) {
                return Err(WorldError::DuplicateTable {
                    id: table.id.clone(),
                });
            }
        }
        drop(seen);

        info!(tables = tables.len(), "Replacing table set");
        let next = Arc::new(tables);
        *self.tables.write() = next;

        self.notify();
        Ok(())
    }

    /// Empty the table set. Subsequent queries behave as if no tables are
    /// known. Fires the change observer.
    pub fn clear(&self) {
        info!("Clearing table set");
        *self.tables.write() = Arc::new(Vec::new());
        self.notify();
    }

    /// Register the observer for "table set changed" notifications,
    /// replacing any previously registered one.
    pub fn add_table_callback(&self, callback: impl Fn() + Send + Sync + 'static) {
        *self.table_callback.lock() = Some(Arc::new(callback));
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Number of tables currently known.
    #[must_use]
    pub fn table_count(&self) -> usize {
        self.snapshot().len()
    }

    /// Look up a table by identifier.
    #[must_use]
    pub fn table(&self, id: &str) -> Option<Table> {
        self.snapshot().iter().find(|t| t.id == id).cloned()
    }

    /// All tables whose world-frame footprint centroid lies in the closed
    /// ROI box, in snapshot order.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidRoi`] for an inverted box. An empty
    /// result is a valid outcome.
    pub fn tables_in_roi(&self, roi: &Roi) -> WorldResult<Vec<Table>> {
        if !roi.is_valid() {
            return Err(WorldError::InvalidRoi {
                min: roi.min,
                max: roi.max,
            });
        }

        let snapshot = self.snapshot();
        Ok(snapshot
            .iter()
            .filter(|t| roi.contains(&t.world_centroid()))
            .cloned()
            .collect())
    }

    /// Identifiers of the tables matching [`SurfaceWorld::tables_in_roi`].
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidRoi`] for an inverted box.
    pub fn table_names_in_roi(&self, roi: &Roi) -> WorldResult<Vec<String>> {
        Ok(self
            .tables_in_roi(roi)?
            .into_iter()
            .map(|t| t.id)
            .collect())
    }

    /// Find the table a pose rests on, if any.
    ///
    /// Scans all known tables with the contour test; when several match,
    /// the table with the smallest non-negative vertical offset between
    /// the pose and the surface wins (the surface the object actually sits
    /// on, not one further below). Returns `None` when no table matches.
    #[must_use]
    pub fn find_object_table(
        &self,
        pose: &Isometry3<f64>,
        min_distance_from_edge: f64,
        min_vertical_offset: f64,
    ) -> Option<String> {
        let snapshot = self.snapshot();
        let position = Point3::from(pose.translation.vector);

        let mut best: Option<(&Table, f64)> = None;
        for table in snapshot.iter() {
            if !is_inside_table_contour(pose, table, min_distance_from_edge, min_vertical_offset)
            {
                continue;
            }
            let offset = table.pose.inverse_transform_point(&position).z;
            let better = match best {
                None => true,
                Some((_, best_offset)) => offset_rank(offset) < offset_rank(best_offset),
            };
            if better {
                best = Some((table, offset));
            }
        }

        best.map(|(table, offset)| {
            debug!(table = %table.id, offset, "Resolved object table");
            table.id.clone()
        })
    }

    // =========================================================================
    // Placement
    // =========================================================================

    /// Generate placement poses on a table with fully explicit parameters.
    ///
    /// The emitted poses are cached for [`SurfaceWorld::last_place_markers`].
    ///
    /// # Errors
    ///
    /// [`WorldError::TableNotFound`] for an unknown id, or a wrapped
    /// [`surface_place::PlaceError`] for a malformed request. An empty pose
    /// list is a valid outcome.
    pub fn place_poses_on(
        &self,
        table_id: &str,
        params: &PlaceParams,
    ) -> WorldResult<Vec<PlacePose>> {
        let table = self
            .table(table_id)
            .ok_or_else(|| WorldError::TableNotFound {
                id: table_id.to_string(),
            })?;

        let params = params.clone().with_frame(&self.frame);
        let poses = generate_place_poses(&table, &params)?;

        *self.last_place_poses.lock() = poses.clone();
        Ok(poses)
    }

    /// Generate placement poses for an object, deriving the edge margin
    /// and placement height from its bounding extents.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SurfaceWorld::place_poses_on`].
    pub fn place_poses_for_object(
        &self,
        table_id: &str,
        shape: &impl ObjectExtents,
        orientation: UnitQuaternion<f64>,
        resolution: f64,
    ) -> WorldResult<Vec<PlacePose>> {
        let params = PlaceParams::for_object(shape, resolution).with_orientation(orientation);
        self.place_poses_on(table_id, &params)
    }

    /// Visualization markers for the most recently sampled place poses.
    #[must_use]
    pub fn last_place_markers(&self) -> Vec<PlaceMarker> {
        place_location_markers(&self.last_place_poses.lock())
    }

    // =========================================================================
    // Collision volumes
    // =========================================================================

    /// Materialize a solid collision volume for every known table.
    ///
    /// Footprints are area-validated on insertion, so extrusion failures
    /// are unexpected here; a table that still fails is skipped with a
    /// warning rather than failing the batch.
    ///
    /// # Errors
    ///
    /// Returns a wrapped [`GeometryError::InvalidThickness`] when
    /// `thickness <= 0`.
    pub fn solid_tables(&self, thickness: f64) -> WorldResult<Vec<NamedSolid>> {
        if thickness <= 0.0 {
            return Err(GeometryError::InvalidThickness(thickness).into());
        }

        let snapshot = self.snapshot();
        let mut solids = Vec::with_capacity(snapshot.len());

        for table in snapshot.iter() {
            match extrude(&table.footprint, thickness) {
                Ok(mesh) => solids.push(NamedSolid {
                    id: table.id.clone(),
                    pose: table.pose,
                    mesh,
                }),
                Err(err) => {
                    warn!(table = %table.id, %err, "Skipping degenerate table footprint");
                }
            }
        }

        Ok(solids)
    }

    /// Push the current table set into an external collision world.
    ///
    /// Upserts a solid for every table and removes ids that were published
    /// before but have since vanished from the set. Returns the number of
    /// solids published.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SurfaceWorld::solid_tables`].
    pub fn publish_collision(
        &self,
        sink: &mut dyn CollisionSink,
        thickness: f64,
    ) -> WorldResult<usize> {
        let solids = self.solid_tables(thickness)?;

        let mut published = self.published.lock();
        let current: HashSet<String> = solids.iter().map(|s| s.id.clone()).collect();

        for solid in &solids {
            sink.upsert(solid);
        }
        for stale in published.difference(&current) {
            debug!(table = %stale, "Removing vanished table from collision world");
            sink.remove(stale);
        }

        *published = current;
        Ok(solids.len())
    }
}

/// Ordering key for the `find_object_table` tie-break: non-negative
/// offsets beat negative ones, then smaller magnitude wins.
fn offset_rank(offset: f64) -> (bool, f64) {
    (offset < 0.0, offset.abs())
}
