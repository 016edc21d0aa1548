//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the two
//! screens, and translates keyboard and mouse events into `core::Action`
//! values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing on screen animates, so the loop sleeps up to 250ms waiting for
//! input and only redraws after an event (resize included). All pending
//! events are drained before the next draw.

mod component;
pub mod components;
pub mod event;
pub mod theme;
pub mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{CarDetailState, CarListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Theme;

const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core navigation logic)
#[derive(Default)]
pub struct TuiState {
    pub car_list: CarListState,
    pub car_detail: CarDetailState,
    pub theme: Theme,
}

impl TuiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }
}

struct TerminalModeGuard {
    mouse: bool,
}

impl TerminalModeGuard {
    fn new(mouse: bool) -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        if mouse {
            execute!(stdout(), EnableMouseCapture)?;
        }
        info!("Terminal modes enabled (hidden cursor, mouse capture: {})", mouse);
        Ok(Self { mouse })
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        if self.mouse {
            let _ = execute!(stdout(), DisableMouseCapture);
        }
        let _ = execute!(stdout(), Show);
    }
}

pub fn run(config: &ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(config);
    let mut tui = TuiState::new(Theme::from_colors(&config.theme));

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new(config.mouse)
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));
    ratatui::restore();

    info!("Exiting on {}", app.current_route());
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        let frame_area = terminal.get_frame().area();
        let mut pending = Some(first_event);
        while let Some(event) = pending {
            if let Some(action) = action_for(&event, app, tui, frame_area) {
                let before = app.current_route();
                if update(app, action) == Effect::Quit {
                    return Ok(());
                }
                let after = app.current_route();
                if before != after {
                    debug!("Route changed: {} -> {}", before, after);
                    if matches!(after, Route::Detail(_)) {
                        tui.car_detail = CarDetailState::new();
                    }
                }
            }
            pending = poll_event_immediate()?;
        }
    }
}

/// Translate a `TuiEvent` into a core action for the current screen.
///
/// Scroll keys on the detail screen are consumed by `CarDetailState` and
/// yield no action.
pub fn action_for(
    event: &TuiEvent,
    app: &App,
    tui: &mut TuiState,
    frame_area: Rect,
) -> Option<Action> {
    let on_detail = app.detail().is_some();
    match *event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Resize => None,
        TuiEvent::Back => Some(Action::Back),
        TuiEvent::Select => Some(Action::SelectHighlighted),
        TuiEvent::MouseClick(column, row) => ui::hit_test(app, tui, frame_area, column, row),
        TuiEvent::MouseMove(column, row) if !on_detail => {
            match ui::hit_test(app, tui, frame_area, column, row) {
                Some(Action::Select(id)) => Some(Action::Highlight(id)),
                _ => None,
            }
        }
        TuiEvent::MouseMove(..) => None,
        _ if on_detail => {
            tui.car_detail.handle_event(event);
            None
        }
        TuiEvent::CursorUp | TuiEvent::ScrollUp => Some(Action::CursorUp),
        TuiEvent::CursorDown | TuiEvent::ScrollDown => Some(Action::CursorDown),
        TuiEvent::PageUp => Some(Action::PageUp(tui.car_list.page_size())),
        TuiEvent::PageDown => Some(Action::PageDown(tui.car_list.page_size())),
        TuiEvent::Home => Some(Action::First),
        TuiEvent::End => Some(Action::Last),
    }
}
