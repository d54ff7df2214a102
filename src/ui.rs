use ggez::glam::Vec2;
use ggez::graphics::Rect;

use crate::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Sound,
    Pause,
}

#[derive(Debug, Clone, Copy)]
pub struct UiControl {
    pub kind: ControlKind,
    pub region: Rect,
}

impl UiControl {
    pub fn contains(&self, point: Vec2) -> bool {
        let r = &self.region;
        point.x >= r.x && point.x <= r.x + r.w && point.y >= r.y && point.y <= r.y + r.h
    }
}

/// Toggle icons anchored to the top-right corner, sound outermost.
pub struct UiControls {
    controls: [UiControl; 2],
}

impl UiControls {
    pub fn new(config: &GameConfig) -> Self {
        let size = config.hud.icon_size;
        let margin = config.hud.icon_margin;
        let sound_x = config.width - margin - size;
        let pause_x = sound_x - margin - size;
        Self {
            controls: [
                UiControl {
                    kind: ControlKind::Sound,
                    region: Rect::new(sound_x, margin, size, size),
                },
                UiControl {
                    kind: ControlKind::Pause,
                    region: Rect::new(pause_x, margin, size, size),
                },
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &UiControl> {
        self.controls.iter()
    }

    pub fn hit(&self, point: Vec2) -> Option<ControlKind> {
        self.controls
            .iter()
            .find(|c| c.contains(point))
            .map(|c| c.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let controls = UiControls::new(&GameConfig::default());
        let regions: Vec<_> = controls.iter().map(|c| (c.kind, c.region)).collect();
        assert_eq!(regions[0], (ControlKind::Sound, Rect::new(742.0, 10.0, 48.0, 48.0)));
        assert_eq!(regions[1], (ControlKind::Pause, Rect::new(684.0, 10.0, 48.0, 48.0)));
    }

    #[test]
    fn test_hit_inside_and_outside() {
        let controls = UiControls::new(&GameConfig::default());
        assert_eq!(controls.hit(Vec2::new(760.0, 30.0)), Some(ControlKind::Sound));
        assert_eq!(controls.hit(Vec2::new(700.0, 57.0)), Some(ControlKind::Pause));
        // Gap between the two icons.
        assert_eq!(controls.hit(Vec2::new(736.0, 30.0)), None);
        assert_eq!(controls.hit(Vec2::new(400.0, 300.0)), None);
        assert_eq!(controls.hit(Vec2::new(760.0, 59.0)), None);
    }
}
