use ggez::event::{self, EventHandler};
use ggez::input::keyboard::KeyInput;
use ggez::input::mouse::MouseButton;
use ggez::{Context, ContextBuilder, GameError, GameResult};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::time::Instant;

mod audio;
mod collision;
mod config;
mod input;
mod physics;
mod rendering;
mod state;
mod ui;

use audio::MusicPlayer;
use config::{CONFIG_FILE, GameConfig};
use input::{GameAction, MoveIntent, click_action, key_down_action};
use physics::step;
use rendering::{Assets, Renderer};
use state::GameState;
use ui::UiControls;

struct MainState {
    config: GameConfig,
    game: GameState,
    controls: UiControls,
    music: MusicPlayer,
    renderer: Renderer,
}

impl MainState {
    fn new(ctx: &mut Context, config: GameConfig) -> GameResult<Self> {
        let seed = config.seed.unwrap_or_else(rand::random);
        log::info!("Game initialized with seed: {}", seed);
        let mut rng = StdRng::seed_from_u64(seed);

        let assets = Assets::load(ctx, &config.assets)?;
        let music = MusicPlayer::load(ctx, &config.assets.music);

        Ok(Self {
            game: GameState::new(&config, &mut rng, Instant::now()),
            controls: UiControls::new(&config),
            renderer: Renderer::new(assets, config.hud.clone()),
            music,
            config,
        })
    }

    fn apply(&mut self, action: GameAction) {
        let now = Instant::now();
        match action {
            GameAction::Respawn => self.game.respawn(now),
            GameAction::ToggleSound => self.game.toggle_mute(),
            GameAction::TogglePause => self.game.toggle_pause(now),
        }
    }
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while ctx.time.check_update_time(self.config.tick_rate) {
            let intent = MoveIntent::poll(ctx);
            let hit = step(&mut self.game, &intent, self.config.player_speed, Instant::now());
            if let Some(index) = hit {
                log::debug!("Hit by meteor #{}", index);
            }
        }

        self.music.sync(ctx, self.game.settings.audio_playing())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        self.renderer
            .draw(ctx, &self.game, &self.controls, Instant::now())
    }

    fn key_down_event(
        &mut self,
        _ctx: &mut Context,
        _input: KeyInput,
        repeated: bool,
    ) -> Result<(), GameError> {
        if let Some(action) = key_down_action(self.game.player.is_alive(), repeated) {
            self.apply(action);
        }
        Ok(())
    }

    fn mouse_button_down_event(
        &mut self,
        _ctx: &mut Context,
        button: MouseButton,
        x: f32,
        y: f32,
    ) -> Result<(), GameError> {
        if button != MouseButton::Left {
            return Ok(());
        }
        if let Some(action) = click_action(&self.controls, x, y) {
            self.apply(action);
        }
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> Result<bool, GameError> {
        log::info!("Window closed, shutting down");
        Ok(false)
    }
}

pub fn main() -> GameResult {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Meteor Dodge starting...");

    let config = GameConfig::load_or_default(CONFIG_FILE)
        .map_err(|e| GameError::CustomError(format!("{e:#}")))?;

    let mut builder = ContextBuilder::new("meteor_dodge", "meteor-dodge")
        .window_setup(ggez::conf::WindowSetup::default().title("Meteor Dodge"))
        .window_mode(ggez::conf::WindowMode::default().dimensions(config.width, config.height));
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        builder = builder.add_resource_path(PathBuf::from(manifest_dir).join("resources"));
    }
    let (mut ctx, event_loop) = builder.build()?;

    let game = MainState::new(&mut ctx, config)?;
    event::run(ctx, event_loop, game)
}
