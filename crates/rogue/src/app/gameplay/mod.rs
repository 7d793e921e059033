mod collision;
mod entity;
mod map;
mod scene;

pub(crate) use scene::RogueScene;

use engine::Rgba;

pub(crate) const TILE_SIZE_PX: i32 = 32;
pub(crate) const GRID_WIDTH: i32 = 25;
pub(crate) const GRID_HEIGHT: i32 = 18;

const PLAYER_SPEED_PX_PER_SECOND: f32 = 150.0;
const PLAYER_STARTING_HP: u32 = 5;
const PLAYER_SPAWN_TILE: (i32, i32) = (2, 2);
const ENEMY_SPEED_PX_PER_SECOND: f32 = 90.0;
const ENEMY_STARTING_HP: u32 = 1;
const ENEMY_COUNT: usize = 5;
const ENEMY_SPAWN_INSET_PX: i32 = 3;
const ENTITY_SIZE_PX: i32 = TILE_SIZE_PX - 6;
const WALL_OBSTACLE_PLACEMENTS: usize = 40;

const COLOR_BACKGROUND: Rgba = [12, 12, 16, 255];
const COLOR_WALL: Rgba = [50, 50, 70, 255];
const COLOR_FLOOR: Rgba = [22, 22, 28, 255];
const COLOR_PLAYER: Rgba = [80, 200, 120, 255];
const COLOR_ENEMY: Rgba = [220, 80, 80, 255];
const COLOR_HUD_TEXT: Rgba = [230, 230, 230, 255];

const HUD_TEXT_SCALE: i32 = 2;
const HUD_HP_ANCHOR: (i32, i32) = (8, 6);
const HUD_HINT_ANCHOR: (i32, i32) = (8, 28);
const HUD_HINT_TEXT: &str = "Move: WASD/Arrows - ESC to quit";
