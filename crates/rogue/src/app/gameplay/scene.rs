use engine::{ActionStates, Event, Font, Frame, InputAction, Rect, Scene, Vec2};
use rand::Rng;
use tracing::info;

use super::collision::move_rect;
use super::entity::Entity;
use super::map::{generate_map, random_floor_tile, TileGrid};
use super::{
    COLOR_BACKGROUND, COLOR_FLOOR, COLOR_HUD_TEXT, COLOR_WALL, ENEMY_COUNT, ENEMY_SPAWN_INSET_PX,
    ENTITY_SIZE_PX, GRID_HEIGHT, GRID_WIDTH, HUD_HINT_ANCHOR, HUD_HINT_TEXT, HUD_HP_ANCHOR,
    HUD_TEXT_SCALE, PLAYER_SPAWN_TILE, TILE_SIZE_PX,
};

/// Top-down tile roguelike: one player steered by held keys, enemies that
/// chase it, walls resolved through the shared collision pass.
pub(crate) struct RogueScene {
    grid: TileGrid,
    player: Entity,
    enemies: Vec<Entity>,
    move_intent: Vec2,
    held_keys: ActionStates,
    hud_font: Option<Font>,
}

impl RogueScene {
    pub(crate) fn new(rng: &mut impl Rng) -> Self {
        let grid = generate_map(GRID_WIDTH, GRID_HEIGHT, rng);

        let player = Entity::player(Rect::new(
            PLAYER_SPAWN_TILE.0 * TILE_SIZE_PX,
            PLAYER_SPAWN_TILE.1 * TILE_SIZE_PX,
            ENTITY_SIZE_PX,
            ENTITY_SIZE_PX,
        ));

        let mut enemies = Vec::with_capacity(ENEMY_COUNT);
        for _ in 0..ENEMY_COUNT {
            let (tx, ty) = random_floor_tile(&grid, rng);
            enemies.push(Entity::enemy(Rect::new(
                tx * TILE_SIZE_PX + ENEMY_SPAWN_INSET_PX,
                ty * TILE_SIZE_PX + ENEMY_SPAWN_INSET_PX,
                ENTITY_SIZE_PX,
                ENTITY_SIZE_PX,
            )));
        }

        Self {
            grid,
            player,
            enemies,
            move_intent: Vec2::ZERO,
            held_keys: ActionStates::default(),
            hud_font: None,
        }
    }

    #[cfg(test)]
    fn with_parts(grid: TileGrid, player: Entity, enemies: Vec<Entity>) -> Self {
        Self {
            grid,
            player,
            enemies,
            move_intent: Vec2::ZERO,
            held_keys: ActionStates::default(),
            hud_font: None,
        }
    }

    fn recompute_move_intent(&mut self) {
        self.move_intent = movement_intent(&self.held_keys);
    }
}

impl Scene for RogueScene {
    fn on_enter(&mut self) {
        self.hud_font = Some(Font::new(HUD_TEXT_SCALE));
        info!(
            enemy_count = self.enemies.len(),
            player_hp = self.player.hp,
            "scene_entered"
        );
    }

    fn on_exit(&mut self) {
        self.hud_font = None;
        info!("scene_exited");
    }

    fn handle_event(&mut self, event: &Event) {
        match *event {
            Event::KeyDown(action) => {
                self.held_keys.set(action, true);
                self.recompute_move_intent();
            }
            Event::KeyUp(action) => {
                self.held_keys.set(action, false);
                self.recompute_move_intent();
            }
            // Shutdown belongs to the engine loop.
            Event::Quit => {}
        }
    }

    fn update(&mut self, dt_seconds: f32) {
        if self.move_intent != Vec2::ZERO {
            let delta = Vec2 {
                x: self.move_intent.x * self.player.speed * dt_seconds,
                y: self.move_intent.y * self.player.speed * dt_seconds,
            };
            self.player.rect = move_rect(self.player.rect, delta, &self.grid);
        }

        // Enemies chase the player's already-moved position for this tick;
        // no pathfinding, so walls can pin them in place.
        let player_center = self.player.rect.center();
        for enemy in &mut self.enemies {
            let direction = direction_toward(enemy.rect.center(), player_center);
            if direction != Vec2::ZERO {
                let delta = Vec2 {
                    x: direction.x * enemy.speed * dt_seconds,
                    y: direction.y * enemy.speed * dt_seconds,
                };
                enemy.rect = move_rect(enemy.rect, delta, &self.grid);
            }
        }

        // Contact damage: every overlapping enemy drains one hit point per
        // tick. Cooldown-less on purpose; hp floors at zero.
        for enemy in &self.enemies {
            if enemy.rect.intersects(&self.player.rect) {
                self.player.hp = self.player.hp.saturating_sub(1);
            }
        }

        // Prune after the damage pass so iteration cursors stay valid.
        self.enemies.retain(|enemy| enemy.hp > 0);
    }

    fn render(&mut self, frame: &mut Frame<'_>) {
        frame.clear(COLOR_BACKGROUND);

        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let color = if self.grid.is_wall(x, y) {
                    COLOR_WALL
                } else {
                    COLOR_FLOOR
                };
                frame.fill_rect(
                    Rect::new(x * TILE_SIZE_PX, y * TILE_SIZE_PX, TILE_SIZE_PX, TILE_SIZE_PX),
                    color,
                );
            }
        }

        frame.fill_rect(self.player.rect, self.player.color);
        for enemy in &self.enemies {
            frame.fill_rect(enemy.rect, enemy.color);
        }

        if let Some(font) = &self.hud_font {
            let hp_line = format!("HP: {}", self.player.hp);
            frame.draw_text(font, &hp_line, HUD_HP_ANCHOR.0, HUD_HP_ANCHOR.1, COLOR_HUD_TEXT);
            frame.draw_text(
                font,
                HUD_HINT_TEXT,
                HUD_HINT_ANCHOR.0,
                HUD_HINT_ANCHOR.1,
                COLOR_HUD_TEXT,
            );
        }
    }
}

/// Movement intent from the full held-key snapshot: each axis is the signed
/// sum of its opposing keys, normalized to unit length when non-zero so
/// diagonal input contributes exactly `speed`.
fn movement_intent(held: &ActionStates) -> Vec2 {
    let mut x = 0.0f32;
    let mut y = 0.0f32;

    if held.is_down(InputAction::MoveRight) {
        x += 1.0;
    }
    if held.is_down(InputAction::MoveLeft) {
        x -= 1.0;
    }
    if held.is_down(InputAction::MoveDown) {
        y += 1.0;
    }
    if held.is_down(InputAction::MoveUp) {
        y -= 1.0;
    }

    let len_sq = x * x + y * y;
    if len_sq > 0.0 {
        let inv_len = len_sq.sqrt().recip();
        x *= inv_len;
        y *= inv_len;
    }

    Vec2 { x, y }
}

fn direction_toward(from: Vec2, to: Vec2) -> Vec2 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq <= 0.0 {
        return Vec2::ZERO;
    }
    let inv_len = len_sq.sqrt().recip();
    Vec2 {
        x: dx * inv_len,
        y: dy * inv_len,
    }
}
