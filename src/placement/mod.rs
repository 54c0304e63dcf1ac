//! # Grid Placement
//!
//! This module finds free grid cells for newly added primitive groups. The
//! search walks expanding square rings centered on the origin so new groups
//! cluster near the middle of the scene and flow outward around existing
//! primitives.
//!
//! The search is fully deterministic: for a fixed occupied set and count the
//! returned sequence is always the same.

use std::collections::HashSet;

use cgmath::Vector3;

/// Spacing between adjacent grid cells in world units.
pub const GRID_STEP: i32 = 4;

/// Number of rings searched (ring indices `0..GRID_RADIUS`).
pub const GRID_RADIUS: i32 = 10;

/// Integer (x, z) grid coordinates; y is always 0 for placement.
pub type GridCell = (i32, i32);

/// Converts a grid cell to its world-space position on the ground plane.
pub fn cell_to_world(cell: GridCell) -> Vector3<f32> {
    Vector3::new((cell.0 * GRID_STEP) as f32, 0.0, (cell.1 * GRID_STEP) as f32)
}

/// Finds up to `count` free cells in expanding square rings.
///
/// Ring `r` is scanned with `x` from `-r..=r` and, for each `x`, `z` from
/// `-r..=r`, keeping only frame cells (`|x| == r || |z| == r`); interior
/// cells were already covered by smaller rings. Each cell returned is
/// inserted into `occupied` immediately, so a single call never yields
/// duplicates even across rings, and a follow-up call with the same set
/// never repeats a cell.
///
/// Returning fewer than `count` cells means the grid is full; callers must
/// treat that as a capacity failure and create nothing.
pub fn find_free_cells(count: usize, occupied: &mut HashSet<GridCell>) -> Vec<GridCell> {
    let mut result = Vec::with_capacity(count);
    if count == 0 {
        return result;
    }

    'rings: for r in 0..GRID_RADIUS {
        for x in -r..=r {
            for z in -r..=r {
                if x.abs() != r && z.abs() != r {
                    continue; // interior cell, covered by a smaller ring
                }
                if occupied.insert((x, z)) {
                    result.push((x, z));
                    if result.len() == count {
                        break 'rings;
                    }
                }
            }
        }
    }

    result
}

/// World-coordinate variant of [`find_free_cells`].
///
/// Each free cell `(x, z)` is returned as `(x * GRID_STEP, 0, z * GRID_STEP)`.
pub fn find_free_positions(count: usize, occupied: &mut HashSet<GridCell>) -> Vec<Vector3<f32>> {
    find_free_cells(count, occupied)
        .into_iter()
        .map(cell_to_world)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Total cells reachable by the ring scan: 1 + 8 * (1 + ... + 9).
    const TOTAL_CELLS: usize = 361;

    #[test]
    fn test_first_cell_is_origin() {
        let mut occupied = HashSet::new();
        let cells = find_free_cells(1, &mut occupied);
        assert_eq!(cells, vec![(0, 0)]);

        let mut occupied = HashSet::new();
        let positions = find_free_positions(1, &mut occupied);
        assert_eq!(positions, vec![Vector3::new(0.0, 0.0, 0.0)]);
    }

    #[test]
    fn test_ring_scan_order() {
        let mut occupied = HashSet::new();
        let cells = find_free_cells(9, &mut occupied);
        assert_eq!(
            cells,
            vec![
                (0, 0),
                (-1, -1),
                (-1, 0),
                (-1, 1),
                (0, -1),
                (0, 1),
                (1, -1),
                (1, 0),
                (1, 1),
            ]
        );
    }

    #[test]
    fn test_occupied_cells_are_skipped() {
        let mut occupied: HashSet<GridCell> = [(0, 0), (-1, 0)].into_iter().collect();
        let cells = find_free_cells(2, &mut occupied);
        assert_eq!(cells, vec![(-1, -1), (-1, 1)]);
    }

    #[test]
    fn test_repeated_calls_never_overlap() {
        let mut occupied = HashSet::new();
        let first = find_free_cells(10, &mut occupied);
        let second = find_free_cells(10, &mut occupied);
        for cell in &second {
            assert!(!first.contains(cell));
        }
    }

    #[test]
    fn test_capacity() {
        let mut occupied = HashSet::new();
        let cells = find_free_cells(TOTAL_CELLS, &mut occupied);
        assert_eq!(cells.len(), TOTAL_CELLS);

        // Every cell is distinct and inside the searched rings
        assert_eq!(occupied.len(), TOTAL_CELLS);
        for (x, z) in &cells {
            assert!(x.abs() < GRID_RADIUS && z.abs() < GRID_RADIUS);
        }

        // One more than the grid holds comes back short
        let mut occupied = HashSet::new();
        let cells = find_free_cells(TOTAL_CELLS + 1, &mut occupied);
        assert_eq!(cells.len(), TOTAL_CELLS);
    }

    #[test]
    fn test_search_is_deterministic() {
        let seed: HashSet<GridCell> = [(0, 0), (1, 1), (-2, 3)].into_iter().collect();
        let mut a = seed.clone();
        let mut b = seed;
        assert_eq!(find_free_cells(50, &mut a), find_free_cells(50, &mut b));
    }

    #[test]
    fn test_zero_count_consumes_nothing() {
        let mut occupied = HashSet::new();
        assert!(find_free_cells(0, &mut occupied).is_empty());
        assert!(occupied.is_empty());
    }

    #[test]
    fn test_world_conversion() {
        assert_eq!(cell_to_world((-1, 2)), Vector3::new(-4.0, 0.0, 8.0));
    }
}
