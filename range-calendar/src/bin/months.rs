use std::env;

use chrono::{Datelike, Local};

use range_calendar::{
    weekday_labels, CalendarOptions, CalendarState, Day, DayContent, Event, Signal,
};

/// Marks today's cell in the printed grid.
struct TodayMarker(chrono::NaiveDate);

impl DayContent for TodayMarker {
    type Output = char;

    fn day_content(&self, day: &Day) -> Option<char> {
        (day.date == self.0).then_some('*')
    }
}

fn main() {
    let mut args = env::args().skip(1);
    let starting = args
        .next()
        .unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());
    let count: usize = args.next().and_then(|raw| raw.parse().ok()).unwrap_or(2);

    let options = CalendarOptions::default()
        .with_starting_month(starting)
        .with_number_of_months(count);

    let mut state = CalendarState::new(&options);

    // Optional pair of presses, e.g. `months 2024-03-01 1 2024-03-05 2024-03-20`.
    for raw in args.take(2) {
        let Some(date) = range_calendar::parse_date(&raw) else {
            continue;
        };

        let transition = state.apply(Event::DayPressed(date));

        if let Some(Signal::RangeChanged(range)) = &transition.signal {
            println!(" - selected: {:?} .. {:?}", range.start, range.end);
        }

        state = transition.state;
    }

    let marker = TodayMarker(Local::now().date_naive());

    let header = weekday_labels(options.week_start)
        .map(|weekday| format!("{:>4}", weekday.to_string()))
        .join(" ");

    for month in state.months() {
        println!();
        println!("{}", month.name);
        println!("{header}");

        for week in month.days.chunks(7) {
            let row = week
                .iter()
                .map(|day| cell(day, &marker))
                .collect::<Vec<_>>()
                .join(" ");

            println!("{row}");
        }
    }
}

fn cell(day: &Day, marker: &TodayMarker) -> String {
    if !day.is_visible {
        return "    ".into();
    }

    let tag = marker.day_content(day).unwrap_or(' ');

    if day.is_start_date || day.is_end_date {
        format!("[{:2}]", day.date.day())
    } else if day.is_active {
        format!("<{:2}>", day.date.day())
    } else {
        format!("{tag}{:2} ", day.date.day())
    }
}
