use engine::{Rect, Vec2};

use super::map::TileGrid;
use super::TILE_SIZE_PX;

/// Corner-sampled wall test: the rectangle's four corners are mapped to
/// tile coordinates and the rectangle collides if any corner tile is a
/// wall. Known approximation: an edge midpoint can penetrate a wall without
/// any corner doing so once a rectangle approaches tile size; kept as-is
/// for compatibility with the movement behavior built on it.
pub(crate) fn rect_overlaps_wall(rect: &Rect, grid: &TileGrid) -> bool {
    let corners = [
        (rect.x, rect.y),
        (rect.right(), rect.y),
        (rect.x, rect.bottom()),
        (rect.right(), rect.bottom()),
    ];

    let mut checked = [(0i32, 0i32); 4];
    let mut checked_len = 0;
    for (px, py) in corners {
        let tile = (px.div_euclid(TILE_SIZE_PX), py.div_euclid(TILE_SIZE_PX));
        if checked[..checked_len].contains(&tile) {
            continue;
        }
        checked[checked_len] = tile;
        checked_len += 1;

        if grid.is_wall(tile.0, tile.1) {
            return true;
        }
    }
    false
}

/// Axis-separated movement. Each component is truncated toward zero to a
/// whole pixel step, applied alone, and reverted if the result overlaps a
/// wall; X resolves before Y, which is what produces wall sliding on
/// diagonal input.
pub(crate) fn move_rect(rect: Rect, delta: Vec2, grid: &TileGrid) -> Rect {
    let mut moved = rect;

    let step_x = delta.x as i32;
    moved.x += step_x;
    if rect_overlaps_wall(&moved, grid) {
        moved.x -= step_x;
    }

    let step_y = delta.y as i32;
    moved.y += step_y;
    if rect_overlaps_wall(&moved, grid) {
        moved.y -= step_y;
    }

    moved
}

#[cfg(test)]
mod tests {
    use super::super::map::grid_from_rows;
    use super::*;

    // 6x4 tiles; the lone wall sits at tile (3, 2), pixels 96..128 x 64..96.
    fn wall_at_3_2() -> TileGrid {
        grid_from_rows(&[
            "......",
            "......",
            "...#..",
            "......",
        ])
    }

    fn entity_rect() -> Rect {
        Rect::new(64, 64, 26, 26)
    }

    #[test]
    fn straight_push_into_wall_is_blocked_on_that_axis() {
        let grid = wall_at_3_2();
        let moved = move_rect(entity_rect(), Vec2 { x: 40.0, y: 0.0 }, &grid);
        assert_eq!(moved, entity_rect());
    }

    #[test]
    fn diagonal_into_wall_keeps_the_clear_axis() {
        let grid = wall_at_3_2();
        let moved = move_rect(entity_rect(), Vec2 { x: 40.0, y: 8.0 }, &grid);
        assert_eq!(moved, Rect::new(64, 72, 26, 26));
    }

    #[test]
    fn unobstructed_move_applies_both_axes() {
        let grid = grid_from_rows(&["......", "......", "......", "......"]);
        let moved = move_rect(entity_rect(), Vec2 { x: 10.0, y: -12.0 }, &grid);
        assert_eq!(moved, Rect::new(74, 52, 26, 26));
    }

    #[test]
    fn fractional_components_truncate_toward_zero_per_axis() {
        let grid = grid_from_rows(&["......", "......", "......", "......"]);
        let still = move_rect(entity_rect(), Vec2 { x: 0.9, y: -0.9 }, &grid);
        assert_eq!(still, entity_rect());

        let one_px = move_rect(entity_rect(), Vec2 { x: 1.5, y: -1.5 }, &grid);
        assert_eq!(one_px, Rect::new(65, 63, 26, 26));
    }

    #[test]
    fn outside_the_grid_counts_as_solid() {
        let grid = grid_from_rows(&["..", ".."]);
        let rect = Rect::new(0, 0, 26, 26);
        let moved = move_rect(rect, Vec2 { x: 40.0, y: 0.0 }, &grid);
        assert_eq!(moved, rect);
    }

    #[test]
    fn corner_overlap_detection_matches_corner_tiles() {
        let grid = wall_at_3_2();
        assert!(!rect_overlaps_wall(&entity_rect(), &grid));
        // Right edge at 130 puts the top-left corner column at 104 / 32 = 3.
        assert!(rect_overlaps_wall(&Rect::new(104, 64, 26, 26), &grid));
        // One row above the wall: corner rows 1 and 2, column 3 only at row 2.
        assert!(rect_overlaps_wall(&Rect::new(104, 38, 26, 26), &grid));
        assert!(!rect_overlaps_wall(&Rect::new(104, 5, 26, 26), &grid));
    }
}
