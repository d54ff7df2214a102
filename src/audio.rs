//! Background music, driven by the mute and pause toggles.
//!
//! The track is never paused or resumed directly from UI code. Each tick
//! the orchestrator hands over the desired state (`!muted && !paused`) and
//! the player works out which device call, if any, gets there.

use ggez::audio::{self, SoundSource};
use ggez::{Context, GameResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    /// Loaded, never started.
    Idle,
    Playing,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackAction {
    Start,
    Pause,
    Resume,
}

/// Device call needed to move from `current` to the wanted state.
pub fn transition(current: Playback, want_playing: bool) -> Option<PlaybackAction> {
    match (current, want_playing) {
        (Playback::Idle, true) => Some(PlaybackAction::Start),
        (Playback::Paused, true) => Some(PlaybackAction::Resume),
        (Playback::Playing, false) => Some(PlaybackAction::Pause),
        _ => None,
    }
}

pub fn next_state(current: Playback, action: Option<PlaybackAction>) -> Playback {
    match action {
        Some(PlaybackAction::Start) | Some(PlaybackAction::Resume) => Playback::Playing,
        Some(PlaybackAction::Pause) => Playback::Paused,
        None => current,
    }
}

pub struct MusicPlayer {
    track: Option<audio::Source>,
    state: Playback,
}

impl MusicPlayer {
    /// Loads the looping track. A missing or unreadable file leaves the
    /// game silent instead of failing startup.
    pub fn load(ctx: &mut Context, path: &str) -> Self {
        let track = match audio::Source::new(ctx, path) {
            Ok(mut source) => {
                source.set_repeat(true);
                Some(source)
            }
            Err(e) => {
                log::warn!("Music {} unavailable, continuing without sound: {}", path, e);
                None
            }
        };
        Self {
            track,
            state: Playback::Idle,
        }
    }

    pub fn sync(&mut self, ctx: &mut Context, want_playing: bool) -> GameResult {
        let Some(track) = &mut self.track else {
            return Ok(());
        };

        let action = transition(self.state, want_playing);
        match action {
            Some(PlaybackAction::Start) => track.play(ctx)?,
            Some(PlaybackAction::Resume) => track.resume(),
            Some(PlaybackAction::Pause) => track.pause(),
            None => {}
        }
        if action.is_some() {
            self.state = next_state(self.state, action);
            log::debug!("Music {:?}", self.state);
        }
        Ok(())
    }
}
