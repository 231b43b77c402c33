use crate::app::{App, AppEvent, AppMode};
use crate::engine::Clock;
use crate::ui::reader::view::{
    render_anchor_guide, render_progress_bar, render_status_line, render_word_display, BACKGROUND,
};
use crate::ui::terminal_guard::TerminalGuard;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::debug;

/// Upper bound on blocking when no word is pending, e.g. on the final frame.
const IDLE_POLL: Duration = Duration::from_millis(250);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Runs until the user quits. Keyboard input and word deadlines share
    /// this one thread: the loop blocks in `poll` for exactly as long as the
    /// current word should stay up.
    pub fn run_event_loop<C: Clock>(&mut self, app: &mut App<C>) -> io::Result<AppMode> {
        self.render_frame(app)?;

        loop {
            if app.mode() == AppMode::Quit {
                return Ok(AppMode::Quit);
            }

            let timeout = app.time_until_next().unwrap_or(IDLE_POLL);
            let mut redraw = false;

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        handle_key(app, key);
                        redraw = true;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "terminal resized");
                        redraw = true;
                    }
                    _ => {}
                }
            }

            if app.tick() || redraw {
                self.render_frame(app)?;
            }
        }
    }

    pub fn render_frame<C: Clock>(&mut self, app: &App<C>) -> io::Result<()> {
        let state = app.render_state();
        let mode = app.mode();
        let wpm = app.current_wpm();

        self.terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(
                Block::default().style(Style::default().bg(BACKGROUND)),
                area,
            );

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(0),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Min(0),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(area);

            let anchor_column = area.width / 2;
            frame.render_widget(render_anchor_guide(anchor_column), rows[1]);
            if let Some(word) = &state.current_word {
                frame.render_widget(
                    render_word_display(word, state.anchor, anchor_column),
                    rows[2],
                );
            }
            frame.render_widget(render_anchor_guide(anchor_column), rows[3]);
            frame.render_widget(render_progress_bar(state), rows[5]);
            frame.render_widget(render_status_line(mode, state, wpm), rows[6]);
        })?;

        Ok(())
    }
}

fn handle_key<C: Clock>(app: &mut App<C>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.handle_event(AppEvent::Quit)
        }
        KeyCode::Char(c) => app.handle_keypress(c),
        KeyCode::Esc => app.handle_event(AppEvent::Quit),
        _ if app.mode() == AppMode::Finished => app.handle_event(AppEvent::Quit),
        _ => {}
    }
}
