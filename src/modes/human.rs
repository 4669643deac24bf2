//! Interactive play in the terminal
//!
//! The game ticks on a fixed timer and is drawn on a separate, slower
//! timer. Key presses that arrive between two ticks are collected and handed
//! to the engine as that tick's input.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, Write, stderr};
use std::time::{Duration, Instant};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{error, info};

use crate::game::{GameConfig, GameEngine, GameState, TickInput};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionStats;
use crate::render::Renderer;

/// Timing and randomness knobs for a play session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanSettings {
    /// Time between game ticks
    pub tick_interval: Duration,
    /// Time between redraws
    pub render_interval: Duration,
    /// Fixed seed for food placement; random when `None`
    pub seed: Option<u64>,
}

impl Default for HumanSettings {
    fn default() -> Self {
        Self {
            // 60 ticks per second
            tick_interval: Duration::from_millis(16),
            // 30 FPS
            render_interval: Duration::from_millis(33),
            seed: None,
        }
    }
}

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    settings: HumanSettings,
    should_quit: bool,
    pending: TickInput,
}

impl HumanMode {
    pub fn new(config: GameConfig, settings: HumanSettings) -> Self {
        let engine = match settings.seed {
            Some(seed) => GameEngine::with_seed(config, seed),
            None => GameEngine::new(config),
        };
        let state = engine.new_state();

        Self {
            engine,
            state,
            stats: SessionStats::new(Instant::now()),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            settings,
            should_quit: false,
            pending: TickInput::default(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;

        info!(
            tick_ms = self.settings.tick_interval.as_millis() as u64,
            seed = ?self.settings.seed,
            "session started"
        );

        // Teardown runs whether setup, the loop or a draw failed
        let result = self.run_in_terminal().await;
        restore_terminal(&mut stderr());

        info!(
            rounds_played = self.stats.rounds_played(),
            high_score = self.state.high_score,
            "session ended"
        );

        result
    }

    async fn run_in_terminal(&mut self) -> Result<()> {
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        self.run_game_loop(&mut terminal).await
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.settings.tick_interval);
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut render_timer = interval(self.settings.render_interval);
        render_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.stats.refresh(Instant::now());
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, self.engine.config(), &self.stats);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(intent) => self.pending.intents.push(intent),
                KeyAction::Restart => self.pending.restart = true,
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) {
        let input = std::mem::take(&mut self.pending);
        let was_over = self.state.game_over;

        let report = self.engine.update(&mut self.state, &input);

        if report.restarted {
            self.stats.on_round_start(Instant::now());
        } else if !was_over && self.state.game_over {
            self.stats.on_round_end(&self.state, &report);
        }
    }
}

/// Best-effort terminal teardown. Every step is attempted; failures are
/// logged rather than cutting the teardown short.
fn restore_terminal(out: &mut impl Write) {
    if let Err(err) = disable_raw_mode() {
        error!(?err, "failed to disable raw mode");
    }
    if let Err(err) = execute!(out, LeaveAlternateScreen, Show) {
        error!(?err, "failed to leave alternate screen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CollisionType, Direction, Intent, Phase};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn seeded_mode() -> HumanMode {
        let settings = HumanSettings {
            seed: Some(3),
            ..Default::default()
        };
        HumanMode::new(GameConfig::default(), settings)
    }

    #[test]
    fn test_game_initialization() {
        let mut mode = seeded_mode();
        assert_eq!(mode.state.phase(), Phase::Uninitialized);

        mode.update_game();
        assert_eq!(mode.state.phase(), Phase::Ready);
        assert_eq!(mode.state.score(), 0);
    }

    #[test]
    fn test_key_presses_feed_next_tick() {
        let mut mode = seeded_mode();
        mode.update_game();

        mode.handle_event(key(KeyCode::Char('w')));
        mode.handle_event(key(KeyCode::Char('d')));
        assert_eq!(mode.pending.intents.len(), 2);

        mode.update_game();
        assert!(mode.pending.intents.is_empty());
        assert_eq!(mode.state.direction, Direction::Up);
        assert!(mode.state.game_started);
    }

    #[test]
    fn test_quit_key() {
        let mut mode = seeded_mode();
        mode.handle_event(key(KeyCode::Char('q')));
        assert!(mode.should_quit);
    }

    #[test]
    fn test_game_over_and_restart_update_stats() {
        let mut mode = seeded_mode();
        mode.update_game();

        // Head straight up into the top wall
        mode.pending.intents.push(Intent::Face(Direction::Up));
        for _ in 0..1_000 {
            mode.update_game();
            if mode.state.game_over {
                break;
            }
        }
        assert!(mode.state.game_over);
        assert_eq!(mode.stats.rounds_played(), 1);
        let round = mode.stats.last_round().unwrap();
        assert_eq!(round.cause, Some(CollisionType::Wall));
        assert_eq!(round.length, mode.state.snake_body().len());

        mode.handle_event(key(KeyCode::Char(' ')));
        mode.update_game();
        assert!(!mode.state.game_over);
        assert_eq!(mode.state.phase(), Phase::Sowing);
        assert_eq!(mode.stats.rounds_played(), 1);
        assert_eq!(mode.stats.round_clock(), "00:00");
    }

    #[test]
    fn test_restore_terminal_leaves_screen_and_shows_cursor() {
        // Runs without a raw-mode terminal, so only the escape sequences are checked
        let mut out = Vec::new();
        restore_terminal(&mut out);

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }
}
