//! Calendar widget state machine backing the date inputs.
//!
//! One picker per text input: a month grid with month/year navigation and
//! direct month/year selection. Selecting a day writes a normalized
//! `YYYY-MM-DD` string into the paired hidden input and closes the picker;
//! clicking outside closes it. No validation beyond calendar arithmetic.
//! `today` is an input so the widget stays deterministic.

#![allow(dead_code)]

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

/// Years offered by the year dropdown, relative to today.
const YEARS_BACK: i32 = 100;
const YEARS_FORWARD: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePicker {
    visible_year: i32,
    visible_month: u32, // 1–12
    selected: Option<NaiveDate>,
    open: bool,
}

impl DatePicker {
    pub fn new(today: NaiveDate) -> Self {
        DatePicker {
            visible_year: today.year(),
            visible_month: today.month(),
            selected: None,
            open: false,
        }
    }

    /// Builds a picker from an input's existing value. Anything that is
    /// not a valid `YYYY-MM-DD` date falls back to today's month with no
    /// selection.
    pub fn from_value(value: &str, today: NaiveDate) -> Self {
        match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
            Ok(date) => DatePicker {
                visible_year: date.year(),
                visible_month: date.month(),
                selected: Some(date),
                open: false,
            },
            Err(_) => DatePicker::new(today),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn visible_year(&self) -> i32 {
        self.visible_year
    }

    pub fn visible_month(&self) -> u32 {
        self.visible_month
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Re-clicking the input toggles the picker.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn outside_click(&mut self) {
        self.open = false;
    }

    pub fn next_month(&mut self) {
        if self.visible_month == 12 {
            self.visible_month = 1;
            self.visible_year += 1;
        } else {
            self.visible_month += 1;
        }
    }

    pub fn prev_month(&mut self) {
        if self.visible_month == 1 {
            self.visible_month = 12;
            self.visible_year -= 1;
        } else {
            self.visible_month -= 1;
        }
    }

    pub fn next_year(&mut self) {
        self.visible_year += 1;
    }

    pub fn prev_year(&mut self) {
        self.visible_year -= 1;
    }

    /// Direct month selection from the dropdown; out-of-range values are
    /// ignored.
    pub fn set_month(&mut self, month: u32) {
        if (1..=12).contains(&month) {
            self.visible_month = month;
        }
    }

    pub fn set_year(&mut self, year: i32) {
        self.visible_year = year;
    }

    /// The visible month's day grid: leading `None` cells for the weekday
    /// offset of the 1st (Sunday-first), then every day of the month.
    pub fn grid(&self) -> Vec<Option<u32>> {
        let first = NaiveDate::from_ymd_opt(self.visible_year, self.visible_month, 1)
            .expect("visible month is always a real month");
        let offset = first.weekday().num_days_from_sunday() as usize;

        let mut cells = vec![None; offset];
        cells.extend((1..=days_in_month(self.visible_year, self.visible_month)).map(Some));
        cells
    }

    /// Selects a day of the visible month, closing the picker and
    /// returning the normalized value for the hidden input. Days the
    /// visible month does not have are ignored.
    pub fn select_day(&mut self, day: u32) -> Option<String> {
        let date = NaiveDate::from_ymd_opt(self.visible_year, self.visible_month, day)?;
        self.selected = Some(date);
        self.open = false;
        Some(date.format("%Y-%m-%d").to_string())
    }

    pub fn year_options(today: NaiveDate) -> RangeInclusive<i32> {
        (today.year() - YEARS_BACK)..=(today.year() + YEARS_FORWARD)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next_first
        .and_then(|d| d.pred_opt())
        .expect("every month has a last day")
        .day()
}

/// Month labels for the header dropdown. Unknown languages fall back to
/// French, the application default.
pub fn month_names(lang: &str) -> [&'static str; 12] {
    match lang {
        "en" => [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ],
        "tr" => [
            "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos",
            "Eylül", "Ekim", "Kasım", "Aralık",
        ],
        _ => [
            "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août",
            "septembre", "octobre", "novembre", "décembre",
        ],
    }
}

/// Day-of-week headers, Sunday first.
pub fn day_names(lang: &str) -> [&'static str; 7] {
    match lang {
        "en" => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
        "tr" => ["Pz", "Pt", "Sa", "Ça", "Pe", "Cu", "Ct"],
        _ => ["Di", "Lu", "Ma", "Me", "Je", "Ve", "Sa"],
    }
}
