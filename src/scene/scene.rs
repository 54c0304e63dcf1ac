use std::collections::HashSet;
use std::sync::Arc;

use cgmath::Vector3;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::SceneError;
use crate::geometry::{generate_primitive, palette, MeshData, PrimitiveKind, Rgb};
use crate::placement::{find_free_cells, GridCell};

use super::primitive::{GroupParams, Primitive, PrimitiveId};

/// Main scene container holding the list of placed primitives.
///
/// All operations are synchronous and atomic: an operation either applies
/// completely or returns an error with the scene unchanged. Mutations
/// replace the primitive list wholesale (copy-on-write behind an `Arc`), so
/// snapshots taken via [`Scene::snapshot`] are never affected by later
/// operations.
pub struct Scene {
    primitives: Arc<Vec<Primitive>>,
    next_id: u64,
    rng: StdRng,
}

impl Scene {
    /// Creates an empty scene with a randomly seeded RNG
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Creates an empty scene with a fixed RNG seed, so color and
    /// special-face choices are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            primitives: Arc::new(Vec::new()),
            next_id: 0,
            rng,
        }
    }

    /// Adds a group of `count` primitives of one kind and size.
    ///
    /// Placement is all-or-nothing: if the grid cannot supply `count` free
    /// cells the scene is left unchanged and [`SceneError::GridFull`] is
    /// returned. On success the ids of the new primitives are returned in
    /// placement order. Each primitive gets its own freshly built geometry
    /// and an independently chosen swatch color.
    pub fn add_group(&mut self, params: &GroupParams) -> Result<Vec<PrimitiveId>, SceneError> {
        if params.count == 0 {
            return Err(SceneError::InvalidCount);
        }
        params.dimensions.validate()?;

        let mut occupied = self.occupied_cells();
        let cells = find_free_cells(params.count, &mut occupied);
        if cells.len() < params.count {
            log::warn!(
                "grid full: requested {} cells, found {}",
                params.count,
                cells.len()
            );
            return Err(SceneError::GridFull {
                requested: params.count,
                available: cells.len(),
            });
        }

        let dims = params.dimensions;
        let mut next = Vec::with_capacity(self.primitives.len() + cells.len());
        next.extend(self.primitives.iter().cloned());

        let mut ids = Vec::with_capacity(cells.len());
        for cell in cells {
            let geometry =
                generate_primitive(params.kind, dims.length, dims.width, dims.height, &mut self.rng)?;
            let id = PrimitiveId(self.next_id);
            self.next_id += 1;

            let swatch = palette::random_color(&mut self.rng);
            next.push(Primitive::new(id, params.kind, cell, dims, swatch, geometry));
            ids.push(id);
        }

        self.primitives = Arc::new(next);
        log::debug!(
            "added {} {} primitive(s), scene now holds {}",
            ids.len(),
            params.kind.label(),
            self.primitives.len()
        );
        Ok(ids)
    }

    /// Selects the primitive with the given id and deselects all others.
    ///
    /// An unknown id is an error and leaves the current selection intact.
    pub fn select(&mut self, id: PrimitiveId) -> Result<(), SceneError> {
        if !self.primitives.iter().any(|p| p.id == id) {
            return Err(SceneError::UnknownPrimitive(id));
        }

        let next: Vec<Primitive> = self
            .primitives
            .iter()
            .map(|p| {
                let mut p = p.clone();
                p.selected = p.id == id;
                p
            })
            .collect();
        self.primitives = Arc::new(next);
        Ok(())
    }

    /// Removes every primitive and clears the selection
    pub fn clear(&mut self) {
        let cleared = self.primitives.len();
        self.primitives = Arc::new(Vec::new());
        log::debug!("cleared {cleared} primitive(s)");
    }

    /// The live primitive list, in placement order
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// A cheap snapshot of the current list for observers. Later mutations
    /// never alter a snapshot.
    pub fn snapshot(&self) -> Arc<Vec<Primitive>> {
        Arc::clone(&self.primitives)
    }

    /// Gets the number of primitives in the scene
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// The currently selected primitive, if any
    pub fn selected(&self) -> Option<&Primitive> {
        self.primitives.iter().find(|p| p.selected)
    }

    /// Looks up a primitive by id
    pub fn get(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.primitives.iter().find(|p| p.id == id)
    }

    /// Derives the occupied cell set from the live primitive list. Derived
    /// on every allocation call, never cached.
    fn occupied_cells(&self) -> HashSet<GridCell> {
        self.primitives.iter().map(|p| p.cell).collect()
    }

    /// Ordered draw submissions for a rendering layer.
    ///
    /// Each instance carries the shared mesh, the world position (lifted by
    /// half the primitive's height so it sits on the ground plane), and
    /// whether a selection outline should be drawn.
    pub fn draw_list(&self) -> Vec<DrawInstance> {
        self.primitives
            .iter()
            .map(|p| DrawInstance {
                geometry: p.share_geometry(),
                position: p.render_position(),
                outlined: p.selected,
            })
            .collect()
    }

    /// Ordered rows for a list-display layer.
    ///
    /// Labels carry a 1-based ordinal among same-kind primitives ("Box 1",
    /// "Pyramid 2", ...), recomputed on every call so they stay dense after
    /// the list changes.
    pub fn list_entries(&self) -> Vec<ListEntry> {
        let mut box_count = 0;
        let mut pyramid_count = 0;

        self.primitives
            .iter()
            .map(|p| {
                let ordinal = match p.kind {
                    PrimitiveKind::Box => {
                        box_count += 1;
                        box_count
                    }
                    PrimitiveKind::Pyramid => {
                        pyramid_count += 1;
                        pyramid_count
                    }
                };
                ListEntry {
                    id: p.id,
                    label: format!("{} {}", p.kind.label(), ordinal),
                    swatch: p.color,
                    position: p.world_position(),
                    selected: p.selected,
                }
            })
            .collect()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// One primitive's draw submission for a rendering layer
#[derive(Debug, Clone)]
pub struct DrawInstance {
    /// Mesh buffers, shared with the scene
    pub geometry: Arc<MeshData>,
    /// World-space position of the mesh origin
    pub position: Vector3<f32>,
    /// Whether a selection outline/highlight should be drawn
    pub outlined: bool,
}

/// One row of the primitive list view
#[derive(Debug, Clone)]
pub struct ListEntry {
    pub id: PrimitiveId,
    /// Kind name plus 1-based per-kind ordinal, e.g. "Box 2"
    pub label: String,
    pub swatch: Rgb,
    /// World-space placement position (y = 0)
    pub position: Vector3<f32>,
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rgb;
    use crate::scene::primitive::Dimensions;

    /// Cells reachable by the ring scan; one more than this cannot fit.
    const GRID_CAPACITY: usize = 361;

    fn boxes(count: usize) -> GroupParams {
        GroupParams::new(PrimitiveKind::Box, Dimensions::default(), count)
    }

    fn pyramids(count: usize) -> GroupParams {
        GroupParams::new(PrimitiveKind::Pyramid, Dimensions::default(), count)
    }

    #[test]
    fn test_add_group_places_in_ring_order() {
        let mut scene = Scene::with_seed(1);
        let ids = scene.add_group(&boxes(3)).unwrap();

        assert_eq!(ids.len(), 3);
        let cells: Vec<_> = scene.primitives().iter().map(|p| p.cell).collect();
        assert_eq!(cells, vec![(0, 0), (-1, -1), (-1, 0)]);

        let positions: Vec<_> = scene.primitives().iter().map(|p| p.world_position()).collect();
        assert_eq!(positions[0], Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(positions[1], Vector3::new(-4.0, 0.0, -4.0));
        assert_eq!(positions[2], Vector3::new(-4.0, 0.0, 0.0));
    }

    #[test]
    fn test_three_unit_boxes_scenario() {
        let mut scene = Scene::with_seed(2);
        scene.add_group(&boxes(3)).unwrap();

        for primitive in scene.primitives() {
            let mesh = primitive.geometry();
            assert_eq!(mesh.vertex_count(), 24);

            // Exactly one 4-vertex face differs in color from the rest
            let faces: Vec<Rgb> = mesh.colors.chunks(4).map(|face| face[0]).collect();
            let base = *faces
                .iter()
                .max_by_key(|color| faces.iter().filter(|c| c == color).count())
                .unwrap();
            assert_eq!(faces.iter().filter(|c| **c != base).count(), 1);
        }
    }

    #[test]
    fn test_groups_avoid_existing_primitives() {
        let mut scene = Scene::with_seed(3);
        scene.add_group(&boxes(5)).unwrap();
        scene.add_group(&pyramids(5)).unwrap();

        let cells: HashSet<_> = scene.primitives().iter().map(|p| p.cell).collect();
        assert_eq!(cells.len(), 10);
    }

    #[test]
    fn test_add_group_is_all_or_nothing() {
        let mut scene = Scene::with_seed(4);
        scene.add_group(&boxes(10)).unwrap();

        let err = scene.add_group(&boxes(GRID_CAPACITY)).unwrap_err();
        match err {
            SceneError::GridFull { requested, available } => {
                assert_eq!(requested, GRID_CAPACITY);
                assert_eq!(available, GRID_CAPACITY - 10);
            }
            other => panic!("expected GridFull, got {other}"),
        }

        // Nothing was created by the failed request
        assert_eq!(scene.len(), 10);
    }

    #[test]
    fn test_invalid_requests_rejected() {
        let mut scene = Scene::with_seed(5);

        assert!(matches!(
            scene.add_group(&boxes(0)),
            Err(SceneError::InvalidCount)
        ));

        let degenerate = GroupParams::new(PrimitiveKind::Box, Dimensions::new(1.0, 0.0, 1.0), 1);
        assert!(matches!(
            scene.add_group(&degenerate),
            Err(SceneError::Geometry(_))
        ));

        assert!(scene.is_empty());
    }

    #[test]
    fn test_select_is_exclusive() {
        let mut scene = Scene::with_seed(6);
        let ids = scene.add_group(&boxes(3)).unwrap();

        scene.select(ids[0]).unwrap();
        scene.select(ids[2]).unwrap();

        let selected: Vec<_> = scene
            .primitives()
            .iter()
            .filter(|p| p.selected)
            .map(|p| p.id)
            .collect();
        assert_eq!(selected, vec![ids[2]]);
        assert_eq!(scene.selected().unwrap().id, ids[2]);
    }

    #[test]
    fn test_select_unknown_id_leaves_selection() {
        let mut scene = Scene::with_seed(7);
        let ids = scene.add_group(&boxes(2)).unwrap();
        scene.select(ids[1]).unwrap();

        let missing = PrimitiveId(999);
        assert!(matches!(
            scene.select(missing),
            Err(SceneError::UnknownPrimitive(id)) if id == missing
        ));
        assert_eq!(scene.selected().unwrap().id, ids[1]);
    }

    #[test]
    fn test_clear() {
        let mut scene = Scene::with_seed(8);
        let ids = scene.add_group(&pyramids(4)).unwrap();
        scene.select(ids[1]).unwrap();

        scene.clear();
        assert!(scene.is_empty());
        assert!(scene.selected().is_none());

        // The grid is free again
        let ids = scene.add_group(&boxes(1)).unwrap();
        assert_eq!(scene.get(ids[0]).unwrap().cell, (0, 0));
    }

    #[test]
    fn test_snapshots_are_stable() {
        let mut scene = Scene::with_seed(9);
        scene.add_group(&boxes(2)).unwrap();

        let snapshot = scene.snapshot();
        let ids = scene.add_group(&pyramids(1)).unwrap();
        scene.select(ids[0]).unwrap();

        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.iter().all(|p| !p.selected));
        assert_eq!(scene.len(), 3);
    }

    #[test]
    fn test_list_entries_labels_and_order() {
        let mut scene = Scene::with_seed(10);
        scene.add_group(&boxes(2)).unwrap();
        scene.add_group(&pyramids(1)).unwrap();
        let ids = scene.add_group(&boxes(1)).unwrap();
        scene.select(ids[0]).unwrap();

        let entries = scene.list_entries();
        let labels: Vec<_> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Box 1", "Box 2", "Pyramid 1", "Box 3"]);

        assert_eq!(entries[0].position, Vector3::new(0.0, 0.0, 0.0));
        assert!(entries[3].selected);
        assert_eq!(entries.iter().filter(|e| e.selected).count(), 1);
    }

    #[test]
    fn test_draw_list() {
        let mut scene = Scene::with_seed(11);
        let params = GroupParams::new(
            PrimitiveKind::Pyramid,
            Dimensions::new(2.0, 2.0, 3.0),
            2,
        );
        let ids = scene.add_group(&params).unwrap();
        scene.select(ids[1]).unwrap();

        let draws = scene.draw_list();
        assert_eq!(draws.len(), 2);

        // Meshes are lifted by half their height
        assert_eq!(draws[0].position, Vector3::new(0.0, 1.5, 0.0));
        assert_eq!(draws[0].geometry.vertex_count(), 18);
        assert!(!draws[0].outlined);
        assert!(draws[1].outlined);
    }

    #[test]
    fn test_ids_are_unique_across_groups() {
        let mut scene = Scene::with_seed(12);
        let a = scene.add_group(&boxes(3)).unwrap();
        scene.clear();
        let b = scene.add_group(&boxes(3)).unwrap();

        let all: HashSet<_> = a.iter().chain(b.iter()).collect();
        assert_eq!(all.len(), 6);
    }
}
