use engine::{Rect, Rgba};

use super::{
    COLOR_ENEMY, COLOR_PLAYER, ENEMY_SPEED_PX_PER_SECOND, ENEMY_STARTING_HP,
    PLAYER_SPEED_PX_PER_SECOND, PLAYER_STARTING_HP,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    Player,
    Enemy,
}

/// A positioned, sized, colored actor. Owned exclusively by the scene that
/// created it; the scene's update passes are the only writers.
#[derive(Debug, Clone)]
pub(crate) struct Entity {
    pub(crate) rect: Rect,
    pub(crate) color: Rgba,
    pub(crate) speed: f32,
    pub(crate) hp: u32,
    #[allow(dead_code)]
    pub(crate) role: Role,
}

impl Entity {
    pub(crate) fn player(rect: Rect) -> Self {
        Self {
            rect,
            color: COLOR_PLAYER,
            speed: PLAYER_SPEED_PX_PER_SECOND,
            hp: PLAYER_STARTING_HP,
            role: Role::Player,
        }
    }

    pub(crate) fn enemy(rect: Rect) -> Self {
        Self {
            rect,
            color: COLOR_ENEMY,
            speed: ENEMY_SPEED_PX_PER_SECOND,
            hp: ENEMY_STARTING_HP,
            role: Role::Enemy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_assign_role_and_stats() {
        let player = Entity::player(Rect::new(64, 64, 26, 26));
        assert_eq!(player.role, Role::Player);
        assert_eq!(player.hp, 5);
        assert_eq!(player.speed, 150.0);

        let enemy = Entity::enemy(Rect::new(96, 96, 26, 26));
        assert_eq!(enemy.role, Role::Enemy);
        assert_eq!(enemy.hp, 1);
        assert_eq!(enemy.speed, 90.0);
        assert_ne!(enemy.color, player.color);
    }
}
