use ggez::glam::Vec2;
use rand::Rng;
use std::time::{Duration, Instant};

use crate::config::GameConfig;

/// Cosmetic facing of the ship, counter-clockwise from "up".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heading {
    #[default]
    Up,
    Left,
    Down,
    Right,
}

impl Heading {
    pub fn degrees(self) -> f32 {
        match self {
            Heading::Up => 0.0,
            Heading::Left => 90.0,
            Heading::Down => 180.0,
            Heading::Right => 270.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Alive,
    Dead,
}

/// Time survived since the last (re)spawn, excluding paused spans.
///
/// Nothing is ticked here: the value is derived at query time from the
/// spawn instant minus the accumulated pause duration, and frozen at the
/// instant of death.
#[derive(Debug, Clone)]
pub struct AliveTimer {
    started: Instant,
    paused_total: Duration,
    paused_since: Option<Instant>,
    stopped_at: Option<Instant>,
}

impl AliveTimer {
    pub fn start(now: Instant) -> Self {
        Self {
            started: now,
            paused_total: Duration::ZERO,
            paused_since: None,
            stopped_at: None,
        }
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        let end = self.stopped_at.unwrap_or(now);
        let open_pause = self
            .paused_since
            .map(|since| end.saturating_duration_since(since))
            .unwrap_or_default();
        end.saturating_duration_since(self.started)
            .saturating_sub(self.paused_total + open_pause)
    }

    pub fn pause(&mut self, now: Instant) {
        if self.paused_since.is_none() {
            self.paused_since = Some(now);
        }
    }

    pub fn resume(&mut self, now: Instant) {
        if let Some(since) = self.paused_since.take() {
            let end = self.stopped_at.map_or(now, |stop| stop.min(now));
            self.paused_total += end.saturating_duration_since(since);
        }
    }

    pub fn stop(&mut self, now: Instant) {
        if self.stopped_at.is_none() {
            self.stopped_at = Some(now);
        }
    }
}

/// Whole minutes and leftover seconds, truncated.
pub fn minutes_seconds(elapsed: Duration) -> (u64, u64) {
    let secs = elapsed.as_secs();
    (secs / 60, secs % 60)
}

/// The two UI toggles. Audio playback is derived from both, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub muted: bool,
    pub paused: bool,
}

impl Settings {
    pub fn audio_playing(&self) -> bool {
        !self.muted && !self.paused
    }
}

pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub heading: Heading,
    pub lifecycle: Lifecycle,
}

impl Player {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            radius,
            heading: Heading::default(),
            lifecycle: Lifecycle::Alive,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.lifecycle == Lifecycle::Alive
    }
}

pub struct Obstacle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub flip_x: bool,
    pub flip_y: bool,
}

impl Obstacle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            flip_x: false,
            flip_y: false,
        }
    }

    /// Places the bounding box uniformly inside the playfield and picks a
    /// random direction on each axis.
    pub fn spawn(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let diameter = config.obstacle_radius * 2.0;
        let left = rng.random_range(0.0..config.width - diameter);
        let top = rng.random_range(0.0..config.height - diameter);
        let pos = Vec2::new(left, top) + Vec2::splat(config.obstacle_radius);

        let sign = |positive: bool| if positive { 1.0 } else { -1.0 };
        let vel = Vec2::new(
            sign(rng.random_bool(0.5)) * config.obstacle_speed,
            sign(rng.random_bool(0.5)) * config.obstacle_speed,
        );
        Self::new(pos, vel, config.obstacle_radius)
    }
}

pub struct GameState {
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub settings: Settings,
    pub timer: AliveTimer,
    pub width: f32,
    pub height: f32,
}

impl GameState {
    pub fn new(config: &GameConfig, rng: &mut impl Rng, now: Instant) -> Self {
        let obstacles = (0..config.obstacle_count)
            .map(|_| Obstacle::spawn(config, rng))
            .collect();
        Self {
            player: Player::new(config.center(), config.player_radius),
            obstacles,
            settings: Settings::default(),
            timer: AliveTimer::start(now),
            width: config.width,
            height: config.height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn kill_player(&mut self, now: Instant) {
        if !self.player.is_alive() {
            return;
        }
        self.player.lifecycle = Lifecycle::Dead;
        self.timer.stop(now);
        let (min, sec) = minutes_seconds(self.timer.elapsed(now));
        log::info!("Ship destroyed after {} min {} sec", min, sec);
    }

    /// Back to the center with a fresh timer; also lifts the pause.
    pub fn respawn(&mut self, now: Instant) {
        self.player.pos = self.center();
        self.player.heading = Heading::default();
        self.player.lifecycle = Lifecycle::Alive;
        self.timer = AliveTimer::start(now);
        self.settings.paused = false;
        log::info!("Respawned");
    }

    pub fn toggle_pause(&mut self, now: Instant) {
        self.settings.paused = !self.settings.paused;
        if self.settings.paused {
            self.timer.pause(now);
        } else {
            self.timer.resume(now);
        }
        log::debug!("Paused: {}", self.settings.paused);
    }

    pub fn toggle_mute(&mut self) {
        self.settings.muted = !self.settings.muted;
        log::debug!("Muted: {}", self.settings.muted);
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        self.timer.elapsed(now)
    }
}
