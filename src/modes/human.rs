use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{GameEngine, GameStore};
use crate::input::{Flow, InputRouter};
use crate::metrics::GameMetrics;
use crate::render::Renderer;
use crate::tick::TickController;

pub struct HumanMode {
    store: GameStore,
    router: InputRouter,
    metrics: GameMetrics,
    renderer: Renderer,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(engine: GameEngine) -> Self {
        let store = GameStore::new(engine);
        let router = InputRouter::new(store.config());

        Self {
            store,
            router,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(
            "session ended: {} games started, high score {}",
            self.metrics.games_started,
            self.store.snapshot().high_score
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut ticker = TickController::new(self.store.config().tick_period);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

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
                _ = ticker.tick() => {
                    let info = self.store.advance();
                    if info.collision_type.is_some() || info.board_full {
                        self.metrics.on_game_over();
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update(self.store.snapshot().is_active());
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.store.snapshot(), &self.metrics);
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

            ticker.sync(self.store.snapshot().is_active());
        }

        ticker.stop();
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let running_before = self.game_running();

        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind != KeyEventKind::Press {
                    return;
                }

                if self.router.handle_key(key, &mut self.store) == Flow::Quit {
                    self.should_quit = true;
                }
            }
            Event::Mouse(mouse) => {
                let renderer = &self.renderer;
                self.router.handle_mouse(mouse, &mut self.store, |column, row| {
                    renderer.button_at(column, row)
                });
            }
            _ => {}
        }

        if !running_before && self.game_running() {
            self.metrics.on_game_start();
        }
    }

    fn game_running(&self) -> bool {
        let state = self.store.snapshot();
        state.is_started && !state.game_over
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
