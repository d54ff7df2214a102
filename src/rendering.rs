use ggez::{
    Context, GameResult,
    glam::Vec2,
    graphics::{self, Color, DrawParam, Image, Text, TextFragment},
};
use std::time::Instant;

use crate::{
    config::{AssetPaths, HudLayout},
    state::{GameState, Obstacle, Player, Settings, minutes_seconds},
    ui::{ControlKind, UiControls},
};

pub const RESTART_PROMPT: &str = "Press any key to restart";

pub struct Assets {
    pub background: Image,
    pub ship: Image,
    pub meteor: Image,
    pub sound_on: Image,
    pub sound_off: Image,
    pub pause: Image,
    pub resume: Image,
}

impl Assets {
    /// Every image is required; the first missing one aborts startup.
    pub fn load(ctx: &mut Context, paths: &AssetPaths) -> GameResult<Self> {
        Ok(Self {
            background: Image::from_path(ctx, &paths.background)?,
            ship: Image::from_path(ctx, &paths.ship)?,
            meteor: Image::from_path(ctx, &paths.meteor)?,
            sound_on: Image::from_path(ctx, &paths.sound_on)?,
            sound_off: Image::from_path(ctx, &paths.sound_off)?,
            pause: Image::from_path(ctx, &paths.pause)?,
            resume: Image::from_path(ctx, &paths.resume)?,
        })
    }

    /// Icon reflecting the current toggle value.
    pub fn icon(&self, kind: ControlKind, settings: &Settings) -> &Image {
        match kind {
            ControlKind::Sound if settings.muted => &self.sound_off,
            ControlKind::Sound => &self.sound_on,
            ControlKind::Pause if settings.paused => &self.resume,
            ControlKind::Pause => &self.pause,
        }
    }
}

/// Anything drawn as a round, image-backed entity.
pub trait Sprite {
    fn center(&self) -> Vec2;
    fn radius(&self) -> f32;
    fn image<'a>(&self, assets: &'a Assets) -> &'a Image;

    /// Clockwise, in radians.
    fn rotation(&self) -> f32 {
        0.0
    }

    fn flipped(&self) -> (bool, bool) {
        (false, false)
    }
}

impl Sprite for Player {
    fn center(&self) -> Vec2 {
        self.pos
    }
    fn radius(&self) -> f32 {
        self.radius
    }
    fn image<'a>(&self, assets: &'a Assets) -> &'a Image {
        &assets.ship
    }
    // headings turn counter-clockwise, screen rotation is clockwise
    fn rotation(&self) -> f32 {
        -self.heading.degrees().to_radians()
    }
}

impl Sprite for Obstacle {
    fn center(&self) -> Vec2 {
        self.pos
    }
    fn radius(&self) -> f32 {
        self.radius
    }
    fn image<'a>(&self, assets: &'a Assets) -> &'a Image {
        &assets.meteor
    }
    fn flipped(&self) -> (bool, bool) {
        (self.flip_x, self.flip_y)
    }
}

/// Scale that stretches `image` to `size`, mirrored per axis.
pub fn fit_scale(image_size: Vec2, size: Vec2, flip: (bool, bool)) -> Vec2 {
    let sign = |f: bool| if f { -1.0 } else { 1.0 };
    Vec2::new(
        sign(flip.0) * size.x / image_size.x,
        sign(flip.1) * size.y / image_size.y,
    )
}

fn image_size(image: &Image) -> Vec2 {
    Vec2::new(image.width() as f32, image.height() as f32)
}

pub struct Renderer {
    assets: Assets,
    hud: HudLayout,
}

impl Renderer {
    pub fn new(assets: Assets, hud: HudLayout) -> Self {
        Self { assets, hud }
    }

    pub fn draw(
        &self,
        ctx: &mut Context,
        state: &GameState,
        controls: &UiControls,
        now: Instant,
    ) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, Color::BLACK);
        let field = Vec2::new(state.width, state.height);

        let bg = &self.assets.background;
        canvas.draw(
            bg,
            DrawParam::default().scale(fit_scale(image_size(bg), field, (false, false))),
        );

        for obstacle in &state.obstacles {
            self.draw_sprite(&mut canvas, obstacle);
        }
        self.draw_sprite(&mut canvas, &state.player);

        for control in controls.iter() {
            let icon = self.assets.icon(control.kind, &state.settings);
            let r = control.region;
            canvas.draw(
                icon,
                DrawParam::default()
                    .dest(Vec2::new(r.x, r.y))
                    .scale(fit_scale(image_size(icon), Vec2::new(r.w, r.h), (false, false))),
            );
        }

        if state.player.is_alive() {
            let (min, sec) = minutes_seconds(state.elapsed(now));
            let text = Text::new(
                TextFragment::new(format!("Time: {} min {} sec", min, sec))
                    .color(Color::WHITE)
                    .scale(self.hud.timer_font_size),
            );
            canvas.draw(&text, DrawParam::default().dest(Vec2::new(10.0, 10.0)));
        } else {
            let text = Text::new(
                TextFragment::new(RESTART_PROMPT)
                    .color(Color::WHITE)
                    .scale(self.hud.prompt_font_size),
            );
            let dims = text.measure(ctx)?;
            let center = state.center();
            let pos = Vec2::new(center.x - dims.x / 2.0, center.y - dims.y / 2.0);
            canvas.draw(&text, DrawParam::default().dest(pos));
        }

        canvas.finish(ctx)
    }

    fn draw_sprite(&self, canvas: &mut graphics::Canvas, sprite: &impl Sprite) {
        let image = sprite.image(&self.assets);
        let diameter = Vec2::splat(sprite.radius() * 2.0);
        canvas.draw(
            image,
            DrawParam::default()
                .dest(sprite.center())
                .offset(Vec2::splat(0.5))
                .rotation(sprite.rotation())
                .scale(fit_scale(image_size(image), diameter, sprite.flipped())),
        );
    }
}
