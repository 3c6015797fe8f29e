use chrono::{Datelike, Local};

use crate::tests::anchored;
use crate::{
    CalendarOptions, CalendarState, InvalidMonthNames, MonthListModel, MonthNames, WeekStart,
};

#[test]
fn defaults_generate_a_year_of_months() {
    let state = CalendarState::new(&anchored());

    assert_eq!(state.months().len(), 13);

    // The first initial_list_size + 1 months start out visible.
    let visible: Vec<_> = state
        .months()
        .iter()
        .map(|month| month.is_visible)
        .collect();

    assert_eq!(&visible[..4], [true, true, true, false]);
    assert!(visible[3..].iter().all(|flag| !flag));
}

#[test]
fn malformed_starting_month_falls_back_to_today() {
    let options = CalendarOptions::default().with_starting_month("not-a-date");
    let state = CalendarState::new(&options);

    let today = Local::now().date_naive();
    assert_eq!(state.months()[0].year, today.year());
    assert_eq!(state.months()[0].month_number, today.month());
}

#[test]
fn malformed_selection_degrades_to_unset() {
    let options = anchored().with_selection(Some("2024-13-40"), Some("garbage"));
    let state = CalendarState::new(&options);

    assert!(state.range().is_empty());
    assert_eq!(state.initial_scroll_index(), 0);
    assert_eq!(state.visible_months().len(), 6);
}

#[test]
fn malformed_bounds_degrade_to_unconstrained() {
    let options = anchored().with_bounds(Some("2024/01/01"), None);
    let state = CalendarState::new(&options);

    assert!(state.in_bounds(crate::date!("1999-01-01")));
    assert!(state.in_bounds(crate::date!("2999-12-31")));
}

#[test]
fn custom_month_names_shape_the_titles() {
    let names = MonthNames::from_slice(&[
        "Enero",
        "Febrero",
        "Marzo",
        "Abril",
        "Mayo",
        "Junio",
        "Julio",
        "Agosto",
        "Septiembre",
        "Octubre",
        "Noviembre",
        "Diciembre",
    ])
    .unwrap();

    let options = anchored().with_month_names(names);
    let state = CalendarState::new(&options);

    assert_eq!(state.months()[0].name, "Enero 2024");
}

#[test]
fn month_name_overrides_must_hold_twelve_entries() {
    let error = MonthNames::from_slice(&["Jan", "Feb", "Mar", "Apr", "May"]).unwrap_err();

    assert_eq!(error, InvalidMonthNames(5));
    assert_eq!(error.to_string(), "Expected 12 month names, got 5");
}

#[test]
fn item_layouts_stack_by_month_height() {
    let options = anchored().with_month_height(100);
    let state = CalendarState::new(&options);

    let layout = state.item_layout(3);
    assert_eq!(layout.length, 100);
    assert_eq!(layout.offset, 300);
    assert_eq!(layout.index, 3);
}

#[test]
fn the_list_model_serves_the_render_list() {
    let state = CalendarState::new(&anchored());
    let model: &dyn MonthListModel = &state;

    assert_eq!(model.data().len(), state.visible_months().len());
    assert_eq!(model.initial_scroll_index(), 0);
    assert_eq!(model.item_layout(1).offset, 370);
}

#[test]
fn sunday_aligned_grids_follow_the_week_start_option() {
    let options = anchored().with_week_start(WeekStart::Sunday);
    let state = CalendarState::new(&options);

    // September 2024 starts on a Sunday: no leading padding at all.
    let september = &state.months()[8];
    assert!(september.days[0].is_visible);
    assert_eq!(september.days[0].date.day(), 1);
}
