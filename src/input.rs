use ggez::Context;
use ggez::input::keyboard::KeyCode;

use crate::state::Heading;
use crate::ui::{ControlKind, UiControls};

/// Directions held during the current tick. Opposite directions cancel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

const MOVEMENT_KEYS: [KeyCode; 8] = [
    KeyCode::ArrowLeft,
    KeyCode::KeyA,
    KeyCode::ArrowRight,
    KeyCode::KeyD,
    KeyCode::ArrowUp,
    KeyCode::KeyW,
    KeyCode::ArrowDown,
    KeyCode::KeyS,
];

pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::ArrowLeft | KeyCode::KeyA => Some(Direction::Left),
        KeyCode::ArrowRight | KeyCode::KeyD => Some(Direction::Right),
        KeyCode::ArrowUp | KeyCode::KeyW => Some(Direction::Up),
        KeyCode::ArrowDown | KeyCode::KeyS => Some(Direction::Down),
        _ => None,
    }
}

/// Discrete actions raised by key presses and clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Respawn,
    ToggleSound,
    TogglePause,
}

/// Any fresh key press brings a dead ship back. Auto-repeat from a key
/// still held at the moment of death does not count.
pub fn key_down_action(player_alive: bool, repeated: bool) -> Option<GameAction> {
    (!player_alive && !repeated).then_some(GameAction::Respawn)
}

pub fn click_action(controls: &UiControls, x: f32, y: f32) -> Option<GameAction> {
    controls
        .hit(ggez::glam::Vec2::new(x, y))
        .map(|kind| match kind {
            ControlKind::Sound => GameAction::ToggleSound,
            ControlKind::Pause => GameAction::TogglePause,
        })
}

impl MoveIntent {
    pub fn from_keys(keys: impl IntoIterator<Item = KeyCode>) -> Self {
        let mut intent = Self::default();
        for key in keys {
            match direction_for_key(key) {
                Some(Direction::Left) => intent.left = true,
                Some(Direction::Right) => intent.right = true,
                Some(Direction::Up) => intent.up = true,
                Some(Direction::Down) => intent.down = true,
                None => {}
            }
        }
        intent
    }

    /// Reads the keys currently held down.
    pub fn poll(ctx: &Context) -> Self {
        Self::from_keys(
            MOVEMENT_KEYS
                .into_iter()
                .filter(|key| ctx.keyboard.is_key_pressed(*key)),
        )
    }

    /// Per-axis displacement for one tick.
    pub fn velocity(&self, speed: f32) -> (f32, f32) {
        let axis = |neg: bool, pos: bool| {
            (if pos { speed } else { 0.0 }) - (if neg { speed } else { 0.0 })
        };
        (axis(self.left, self.right), axis(self.up, self.down))
    }

    /// Facing after applying left, right, up, down in that order; the last
    /// active direction wins.
    pub fn heading(&self) -> Option<Heading> {
        let mut heading = None;
        if self.left {
            heading = Some(Heading::Left);
        }
        if self.right {
            heading = Some(Heading::Right);
        }
        if self.up {
            heading = Some(Heading::Up);
        }
        if self.down {
            heading = Some(Heading::Down);
        }
        heading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_wasd_map_alike() {
        assert_eq!(
            MoveIntent::from_keys([KeyCode::ArrowLeft]),
            MoveIntent::from_keys([KeyCode::KeyA])
        );
        assert_eq!(
            MoveIntent::from_keys([KeyCode::ArrowDown, KeyCode::KeyD]),
            MoveIntent {
                right: true,
                down: true,
                ..Default::default()
            }
        );
        assert_eq!(
            MoveIntent::from_keys([KeyCode::Space, KeyCode::Enter]),
            MoveIntent::default()
        );
    }

    #[test]
    fn test_key_down_respawns_only_when_dead() {
        assert_eq!(key_down_action(false, false), Some(GameAction::Respawn));
        assert_eq!(key_down_action(false, true), None);
        assert_eq!(key_down_action(true, false), None);
    }

    #[test]
    fn test_clicks_dispatch_to_controls() {
        let controls = UiControls::new(&crate::config::GameConfig::default());
        assert_eq!(click_action(&controls, 766.0, 34.0), Some(GameAction::ToggleSound));
        assert_eq!(click_action(&controls, 708.0, 34.0), Some(GameAction::TogglePause));
        assert_eq!(click_action(&controls, 10.0, 10.0), None);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let intent = MoveIntent::from_keys([KeyCode::ArrowLeft, KeyCode::ArrowRight]);
        assert_eq!(intent.velocity(5.0), (0.0, 0.0));
    }

    #[test]
    fn test_diagonal_combines() {
        let intent = MoveIntent::from_keys([KeyCode::KeyW, KeyCode::KeyA]);
        assert_eq!(intent.velocity(5.0), (-5.0, -5.0));
    }

    #[test]
    fn test_heading_last_direction_wins() {
        assert_eq!(MoveIntent::default().heading(), None);
        let left_up = MoveIntent {
            left: true,
            up: true,
            ..Default::default()
        };
        assert_eq!(left_up.heading(), Some(Heading::Up));
        let left_right = MoveIntent {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(left_right.heading(), Some(Heading::Right));
    }
}
