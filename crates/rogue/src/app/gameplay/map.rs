use rand::Rng;
use thiserror::Error;

use super::WALL_OBSTACLE_PLACEMENTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TileKind {
    Floor,
    Wall,
}

/// Fixed-size occupancy grid for one scene session; immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TileGrid {
    width: i32,
    height: i32,
    tiles: Vec<TileKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum TileGridError {
    #[error("tile count mismatch: expected {expected}, got {actual}")]
    TileCountMismatch { expected: usize, actual: usize },
}

impl TileGrid {
    pub(crate) fn new(width: i32, height: i32, tiles: Vec<TileKind>) -> Result<Self, TileGridError> {
        let expected = width.max(0) as usize * height.max(0) as usize;
        let actual = tiles.len();
        if expected != actual {
            return Err(TileGridError::TileCountMismatch { expected, actual });
        }
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    pub(crate) fn width(&self) -> i32 {
        self.width
    }

    pub(crate) fn height(&self) -> i32 {
        self.height
    }

    pub(crate) fn kind_at(&self, x: i32, y: i32) -> Option<TileKind> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(self.tiles[(y * self.width + x) as usize])
    }

    /// Out-of-range coordinates count as solid. The border ring keeps valid
    /// entities away from that case, so in-bounds behavior is unaffected.
    pub(crate) fn is_wall(&self, x: i32, y: i32) -> bool {
        self.kind_at(x, y).map_or(true, |kind| kind == TileKind::Wall)
    }
}

/// Builds the session map: a solid border ring plus random interior wall
/// placements. Placements may repeat a cell; only the border is guaranteed.
pub(crate) fn generate_map(width: i32, height: i32, rng: &mut impl Rng) -> TileGrid {
    let mut tiles = vec![TileKind::Floor; (width * height) as usize];

    for x in 0..width {
        tiles[x as usize] = TileKind::Wall;
        tiles[((height - 1) * width + x) as usize] = TileKind::Wall;
    }
    for y in 0..height {
        tiles[(y * width) as usize] = TileKind::Wall;
        tiles[(y * width + width - 1) as usize] = TileKind::Wall;
    }

    for _ in 0..WALL_OBSTACLE_PLACEMENTS {
        let rx = rng.gen_range(1..width - 1);
        let ry = rng.gen_range(1..height - 1);
        tiles[(ry * width + rx) as usize] = TileKind::Wall;
    }

    TileGrid::new(width, height, tiles).expect("generated tile buffer matches the grid size")
}

/// Rejection-samples an interior floor tile; used for enemy spawns.
pub(crate) fn random_floor_tile(grid: &TileGrid, rng: &mut impl Rng) -> (i32, i32) {
    loop {
        let x = rng.gen_range(1..grid.width() - 1);
        let y = rng.gen_range(1..grid.height() - 1);
        if grid.kind_at(x, y) == Some(TileKind::Floor) {
            return (x, y);
        }
    }
}

/// Builds a grid from rows of `#` (wall) and `.` (floor); test maps read
/// the way they render.
#[cfg(test)]
pub(crate) fn grid_from_rows(rows: &[&str]) -> TileGrid {
    let height = rows.len() as i32;
    let width = rows.first().map_or(0, |row| row.len()) as i32;
    let mut tiles = Vec::with_capacity((width * height) as usize);
    for row in rows {
        for ch in row.chars() {
            tiles.push(match ch {
                '#' => TileKind::Wall,
                _ => TileKind::Floor,
            });
        }
    }
    TileGrid::new(width, height, tiles).expect("test grid shape is valid")
}
