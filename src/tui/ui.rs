use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::core::action::Action;
use crate::core::catalog::{self, CarId};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::title_bar::hits_back;
use crate::tui::components::{CarDetail, CarList, TitleBar};

/// Title bar, body, hint line.
pub fn screen_areas(area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(1)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let [title_area, body_area, hint_area] = screen_areas(frame.area());

    let detail = app.detail();
    TitleBar::new(app.title(), detail.is_some(), tui.theme).render(frame, title_area);

    match detail {
        Some(view) => {
            CarDetail::new(&mut tui.car_detail, view, &tui.theme).render(frame, body_area);
        }
        None => {
            CarList::new(
                &mut tui.car_list,
                catalog::list_car_types(),
                app.selected,
                &tui.theme,
            )
            .render(frame, body_area);
        }
    }

    let hint = Span::styled(
        app.status_message.as_str(),
        Style::default().add_modifier(Modifier::DIM),
    );
    frame.render_widget(hint, hint_area);
}

/// What a click at (`column`, `row`) means on the current screen.
///
/// On the list, any cell of a card selects that card. On the detail screen,
/// only the back control reacts.
pub fn hit_test(
    app: &App,
    tui: &TuiState,
    frame_area: Rect,
    column: u16,
    row: u16,
) -> Option<Action> {
    let [title_area, ..] = screen_areas(frame_area);
    if app.detail().is_some() {
        return hits_back(title_area, column, row).then_some(Action::Back);
    }
    tui.car_list
        .row_at(column, row, catalog::list_car_types().len())
        .map(|index| Action::Select(CarId(index)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::update;
    use crate::test_support::{buffer_lines, find_row, test_terminal};
    use crate::tui::components::car_detail::{CONS_HEADING, PROS_HEADING};
    use crate::tui::components::car_list::{CALL_TO_ACTION, CARD_HEIGHT};

    fn draw(app: &App, tui: &mut TuiState, width: u16, height: u16) -> Vec<String> {
        let mut terminal = test_terminal(width, height);
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    #[test]
    fn test_draw_list_screen() {
        let app = App::new();
        let mut tui = TuiState::default();
        let lines = draw(&app, &mut tui, 60, 2 + CARD_HEIGHT * 9);

        assert!(lines[0].contains("Car Selector"));
        for car in catalog::list_car_types() {
            assert!(find_row(&lines, car.name).is_some(), "{} missing", car.name);
        }
        assert!(find_row(&lines, CALL_TO_ACTION).is_some());
        assert_eq!(lines.last().unwrap(), &app.status_message);
    }

    #[test]
    fn test_list_after_back_shows_every_car_in_order() {
        let mut app = App::new();
        let mut tui = TuiState::default();
        for id in catalog::ids() {
            update(&mut app, Action::Select(id));
            draw(&app, &mut tui, 60, 30);
            update(&mut app, Action::Back);

            let lines = draw(&app, &mut tui, 60, 2 + CARD_HEIGHT * 9);
            assert!(lines[0].contains("Car Selector"));
            let rows: Vec<usize> = catalog::list_car_types()
                .iter()
                .map(|car| find_row(&lines, car.name).unwrap())
                .collect();
            assert!(rows.windows(2).all(|w| w[0] < w[1]), "after {id}: {rows:?}");
            let cta_count = lines.iter().filter(|l| l.contains(CALL_TO_ACTION)).count();
            assert_eq!(cta_count, 9);
        }
    }

    #[test]
    fn test_draw_detail_screen() {
        let mut app = App::new();
        update(&mut app, Action::Select(CarId(1)));
        let mut tui = TuiState::default();
        let lines = draw(&app, &mut tui, 60, 30);

        assert!(lines[0].contains("Sedan"));
        assert!(lines[0].contains("Back"));
        let pros = find_row(&lines, PROS_HEADING).unwrap();
        let cons = find_row(&lines, CONS_HEADING).unwrap();
        assert!(pros < find_row(&lines, "-More fuel efficient").unwrap());
        assert!(find_row(&lines, "-Cheaper").unwrap() < cons);
        assert!(cons < find_row(&lines, "-Relatively small").unwrap());
        assert!(find_row(&lines, CALL_TO_ACTION).is_none());
    }

    #[test]
    fn test_hit_test_on_list_selects_clicked_card() {
        let app = App::new();
        let mut tui = TuiState::default();
        let area = Rect::new(0, 0, 60, 2 + CARD_HEIGHT * 4);
        draw(&app, &mut tui, area.width, area.height);

        // Body starts below the one-line title bar
        assert_eq!(hit_test(&app, &tui, area, 3, 1), Some(Action::Select(CarId(0))));
        assert_eq!(
            hit_test(&app, &tui, area, 55, 1 + CARD_HEIGHT * 2 + 2),
            Some(Action::Select(CarId(2)))
        );
        // Title bar and hint line are not cards
        assert_eq!(hit_test(&app, &tui, area, 3, 0), None);
        assert_eq!(hit_test(&app, &tui, area, 3, area.height - 1), None);
    }

    #[test]
    fn test_hit_test_on_detail_only_back() {
        let mut app = App::new();
        update(&mut app, Action::Select(CarId(4)));
        let tui = TuiState::default();
        let area = Rect::new(0, 0, 60, 20);

        assert_eq!(hit_test(&app, &tui, area, 2, 0), Some(Action::Back));
        assert_eq!(hit_test(&app, &tui, area, 30, 0), None);
        assert_eq!(hit_test(&app, &tui, area, 2, 5), None);
    }
}
