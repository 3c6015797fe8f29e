use crate::date;
use crate::{build_months, days_in_month, leap_year, month_days, MonthNames, WeekStart};

#[test]
fn leap_year_rule() {
    assert!(leap_year(2000));
    assert!(!leap_year(1900));
    assert!(leap_year(2024));
    assert!(!leap_year(2023));
}

#[test]
fn day_count_table() {
    let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

    for (month, expected) in (1..=12).zip(expected) {
        assert_eq!(days_in_month(month, 2023), expected);
    }

    assert_eq!(days_in_month(2, 2024), 29);
    assert_eq!(days_in_month(2, 2000), 29);
    assert_eq!(days_in_month(2, 1900), 28);
}

#[test]
fn grids_always_complete_week_rows() {
    for year in 2020..=2026 {
        for month in 1..=12 {
            let days = month_days(year, month, WeekStart::Monday);
            assert_eq!(days.len() % 7, 0, "{year}-{month:02}");

            let visible = days.iter().filter(|day| day.is_visible).count() as u32;
            assert_eq!(visible, days_in_month(month, year), "{year}-{month:02}");
        }
    }
}

#[test]
fn one_year_span() {
    let months = build_months(
        date!("2024-01-15"),
        11,
        &MonthNames::default(),
        WeekStart::Monday,
    );

    assert_eq!(months.len(), 12);

    for (index, month) in months.iter().enumerate() {
        assert_eq!(month.id, index);
        assert_eq!(month.year, 2024);
        assert_eq!(month.month_number as usize, index + 1);
    }

    assert_eq!(months[0].name, "January 2024");
    assert_eq!(months[11].name, "December 2024");
}

#[test]
fn year_rollover() {
    let months = build_months(
        date!("2024-12-31"),
        1,
        &MonthNames::default(),
        WeekStart::Monday,
    );

    assert_eq!(months[0].month_number, 12);
    assert_eq!(months[0].year, 2024);
    assert_eq!(months[1].month_number, 1);
    assert_eq!(months[1].year, 2025);
}

#[test]
fn leading_padding_aligns_the_first() {
    // March 2024 starts on a Friday.
    let days = month_days(2024, 3, WeekStart::Monday);

    assert_eq!(days[0].date, date!("2024-02-26"));
    assert!(!days[0].is_visible);
    assert_eq!(days[4].date, date!("2024-03-01"));
    assert!(days[4].is_visible);
}

#[test]
fn padding_days_keep_the_owning_month_in_their_id() {
    let days = month_days(2024, 3, WeekStart::Monday);

    assert_eq!(days[0].id, "3-2024-02-26");
    assert_eq!(days.last().unwrap().id, "3-2024-03-31");
}

#[test]
fn freshly_built_days_carry_no_selection() {
    let months = build_months(
        date!("2024-01-01"),
        11,
        &MonthNames::default(),
        WeekStart::Monday,
    );

    for month in &months {
        assert!(!month.is_visible);
        assert_eq!(month.start_date, None);
        assert_eq!(month.end_date, None);

        for day in &month.days {
            assert!(!day.is_active && !day.is_start_date && !day.is_end_date);
        }
    }
}
