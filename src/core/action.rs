//! # Actions
//!
//! Everything that can happen in the car selector becomes an `Action`.
//! User presses Enter? That's `Action::SelectHighlighted`.
//! User clicks a row? That's `Action::Select(id)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the event loop whether to keep
//! running. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::catalog::{self, CarId};
use crate::core::route::Route;
use crate::core::state::{App, DETAIL_HINT, LIST_HINT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the list highlight by one row.
    CursorUp,
    CursorDown,
    /// Move the list highlight by a page of the given size.
    PageUp(usize),
    PageDown(usize),
    First,
    Last,
    /// Move the list highlight to a specific row (mouse hover).
    Highlight(CarId),
    /// Open the detail screen for the highlighted row.
    SelectHighlighted,
    /// Open the detail screen for a specific car.
    Select(CarId),
    /// Pop the detail screen.
    Back,
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?} on {}", action, app.current_route());

    let last = catalog::list_car_types().len().saturating_sub(1);
    let on_list = app.current_route() == Route::List;

    match action {
        Action::Quit => return Effect::Quit,
        Action::CursorUp if on_list => {
            app.selected = app.selected.saturating_sub(1);
        }
        Action::CursorDown if on_list => {
            app.selected = (app.selected + 1).min(last);
        }
        Action::PageUp(page) if on_list => {
            app.selected = app.selected.saturating_sub(page.max(1));
        }
        Action::PageDown(page) if on_list => {
            app.selected = app.selected.saturating_add(page.max(1)).min(last);
        }
        Action::First if on_list => app.selected = 0,
        Action::Last if on_list => app.selected = last,
        Action::Highlight(id) if on_list && id.0 <= last => app.selected = id.0,
        Action::SelectHighlighted if on_list => {
            let id = app.selected_id();
            push_detail(app, id);
        }
        Action::Select(id) if on_list => {
            if catalog::car(id).is_some() {
                app.selected = id.0;
            }
            push_detail(app, id);
        }
        Action::Back if !on_list => {
            app.stack.pop();
            app.status_message = String::from(LIST_HINT);
            debug!("Popped to {}", app.current_route());
        }
        // Cursor keys on the detail screen, select while a detail is
        // already open, back on the list: all no-ops.
        _ => {}
    }

    Effect::None
}

fn push_detail(app: &mut App, id: CarId) {
    let route = Route::Detail(id);
    debug!("Pushing {}", route);
    app.stack.push(route);
    app.status_message = String::from(DETAIL_HINT);
}
