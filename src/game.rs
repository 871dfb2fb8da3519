//! Host-facing game facade
//!
//! Owns the one `GameSession`, the frame scheduler and the page's best score.
//! The host forwards its animation callback, input, and resize notifications;
//! it only has to request another animation frame when told to.

use crate::frame::{FrameOutcome, FrameScheduler};
use crate::input::{InputEvent, apply_movement};
use crate::renderer::{DrawSurface, render};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameSession, check_game_over, tick};
use crate::tuning::{Tuning, Viewport};

/// Game instance holding all state
#[derive(Debug)]
pub struct Game {
    pub session: GameSession,
    pub frames: FrameScheduler,
    pub settings: Settings,
    /// Best score this page visit
    pub best_score: u64,
    /// Events from the last processed frame
    pub last_events: Vec<GameEvent>,
}

impl Game {
    pub fn new(settings: Settings, viewport: Viewport, seed: u64) -> Self {
        Self {
            session: GameSession::new(settings.tuning(), viewport, seed),
            frames: FrameScheduler::default(),
            settings,
            best_score: 0,
            last_events: Vec::new(),
        }
    }

    pub fn with_tuning(tuning: Tuning, viewport: Viewport, seed: u64) -> Self {
        let settings = Settings {
            tuning: Some(tuning),
            ..Settings::default()
        };
        Self::new(settings, viewport, seed)
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    /// Start or retry. Returns true if the host must request an animation frame.
    pub fn on_start_requested(&mut self, seed: u64) -> bool {
        if self.session.is_playing() {
            return false;
        }
        // Settings may have changed since the last run
        self.session.set_tuning(self.settings.tuning());
        self.session.start(seed);
        self.last_events.clear();
        self.frames.start()
    }

    /// Animation callback. Returns true if the host should request another frame.
    pub fn on_frame(&mut self, timestamp_ms: f64, surface: &mut dyn DrawSurface) -> bool {
        match self.frames.on_frame(timestamp_ms) {
            FrameOutcome::Stopped => false,
            FrameOutcome::Skipped => true,
            FrameOutcome::Process { elapsed_ms } => {
                self.on_tick(elapsed_ms as f32, surface);
                if self.frames.is_running() {
                    true
                } else {
                    self.frames.cancel_pending();
                    false
                }
            }
        }
    }

    /// One processed frame: update, draw, then check for game over
    pub fn on_tick(&mut self, elapsed_ms: f32, surface: &mut dyn DrawSurface) {
        self.last_events = tick(&mut self.session, elapsed_ms);
        render(&self.session, self.best_score, surface);

        if let Some(event) = check_game_over(&mut self.session) {
            self.best_score = self.best_score.max(self.session.score);
            self.last_events.push(event);
            self.frames.stop();
            render(&self.session, self.best_score, surface);
        }
    }

    /// Forward an input event. Returns true if the host must request an animation frame.
    pub fn on_input(&mut self, event: InputEvent, seed: u64) -> bool {
        if !event.is_movement() {
            return self.on_start_requested(seed);
        }
        let enabled = match event {
            InputEvent::Tilt(_) => self.settings.tilt_controls,
            InputEvent::MoveTo(_) => self.settings.pointer_controls,
            _ => true,
        };
        if enabled {
            apply_movement(&mut self.session, event);
        }
        false
    }

    /// Viewport changed; redraw immediately when the loop is not running
    pub fn on_resize(&mut self, viewport: Viewport, surface: &mut dyn DrawSurface) {
        self.session.resize(viewport);
        if !self.frames.is_running() {
            self.render(surface);
        }
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        render(&self.session, self.best_score, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;
    use crate::sim::{Faller, FallerKind};

    fn game() -> Game {
        Game::new(
            Settings::from_preset(crate::Difficulty::Easy),
            Viewport::new(2000.0, 800.0),
            1,
        )
    }

    #[test]
    fn test_start_requests_one_frame_chain() {
        let mut g = game();
        assert!(g.on_start_requested(5));
        assert_eq!(g.phase(), GamePhase::Playing);
        // Double click while playing does nothing
        assert!(!g.on_start_requested(6));
        assert_eq!(g.session.seed, 5);
    }

    #[test]
    fn test_frames_drive_the_session() {
        let mut g = game();
        let mut surface = RecordingSurface::new();
        g.on_start_requested(5);

        assert!(g.on_frame(0.0, &mut surface));
        assert_eq!(surface.frames, 0);

        // Too soon
        assert!(g.on_frame(10.0, &mut surface));
        assert_eq!(surface.frames, 0);

        assert!(g.on_frame(1000.0, &mut surface));
        assert_eq!(surface.frames, 1);
        assert_eq!(g.session.fallers.len(), 1);
        assert!(surface.has_text("Score: 0"));
    }

    #[test]
    fn test_last_life_stops_loop_and_shows_game_over() {
        let mut g = game();
        let mut surface = RecordingSurface::new();
        g.on_start_requested(5);
        g.session.lives = 1;
        g.session.score = 4;

        let x = g.session.basket.as_ref().map(|b| b.center_x()).unwrap_or(0.0);
        let id = g.session.next_entity_id();
        g.session
            .fallers
            .push(Faller::new(id, FallerKind::Bomb, x, 690.0, 20.0, 1.0));

        g.on_frame(0.0, &mut surface);
        let more = g.on_frame(20.0, &mut surface);

        assert!(!more);
        assert_eq!(g.phase(), GamePhase::GameOver);
        assert_eq!(g.session.lives, 0);
        assert_eq!(g.best_score, 4);
        assert!(surface.has_text("Game Over"));
        assert!(g.last_events.contains(&GameEvent::GameOver { score: 4 }));
        assert!(!g.frames.is_pending());
    }

    #[test]
    fn test_retry_resets_session() {
        let mut g = game();
        let mut surface = RecordingSurface::new();
        g.on_start_requested(5);
        g.session.score = 9;
        g.session.lives = 0;
        g.on_frame(0.0, &mut surface);
        assert!(!g.on_frame(20.0, &mut surface));
        assert_eq!(g.phase(), GamePhase::GameOver);

        assert!(g.on_input(InputEvent::StartRequested, 8));
        assert_eq!(g.phase(), GamePhase::Playing);
        assert_eq!(g.session.score, 0);
        assert_eq!(g.session.lives, 3);
        assert!(g.session.fallers.is_empty());
        assert!(g.session.basket.is_some());
    }

    #[test]
    fn test_disabled_controls_are_ignored() {
        let mut g = game();
        g.settings.tilt_controls = false;
        g.on_start_requested(1);
        let before = g.session.basket.as_ref().map(|b| b.pos.x);

        g.on_input(InputEvent::Tilt(45.0), 0);
        assert_eq!(g.session.basket.as_ref().map(|b| b.pos.x), before);

        g.on_input(InputEvent::StepRight, 0);
        assert_ne!(g.session.basket.as_ref().map(|b| b.pos.x), before);
    }

    #[test]
    fn test_movement_never_starts_a_run() {
        let mut g = game();
        assert!(!g.on_input(InputEvent::StepRight, 3));
        assert!(!g.on_input(InputEvent::MoveTo(400.0), 3));
        assert_eq!(g.phase(), GamePhase::Start);
        assert!(!g.frames.is_running());

        assert!(g.on_input(InputEvent::StartRequested, 3));
        assert_eq!(g.phase(), GamePhase::Playing);

        g.settings.pointer_controls = false;
        let before = g.session.basket.as_ref().map(|b| b.pos.x);
        assert!(!g.on_input(InputEvent::MoveTo(10.0), 3));
        assert_eq!(g.session.basket.as_ref().map(|b| b.pos.x), before);
    }

    #[test]
    fn test_resize_redraws_idle_screen() {
        let mut g = game();
        let mut surface = RecordingSurface::new();
        g.on_resize(Viewport::new(600.0, 900.0), &mut surface);
        assert_eq!(surface.frames, 1);
        assert!(surface.has_text("Click or tap to play"));
        assert_eq!(g.session.layout.viewport.width, 600.0);
    }
}
