//! Date and time generation plus the template formatter.
//!
//! Formats use moment-style tokens (`YYYY`, `MMM`, `DD`, ...) because that
//! is what rule templates carry on the wire.

use chrono::{Datelike, Duration, Local, NaiveDate};

use formfill_core::errors::GenerateError;

use super::{data, RandomValueProvider};

/// The default lower bound for unconstrained date generation.
pub fn epoch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).expect("valid date")
}

/// Today in local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse an ISO `YYYY-MM-DD` string; `None` when it does not parse,
/// matching how browsers treat unparseable min/max attributes.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Render a date through a moment-style token template. Unknown characters
/// pass through literally.
pub fn format_date(date: NaiveDate, template: &str) -> String {
    let mut out = String::with_capacity(template.len() + 4);
    let bytes = template.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let rest = &template[i..];
        let (rendered, consumed): (String, usize) = if rest.starts_with("YYYY") {
            (format!("{:04}", date.year()), 4)
        } else if rest.starts_with("YY") {
            (format!("{:02}", date.year() % 100), 2)
        } else if rest.starts_with("MMMM") {
            (data::MONTH_NAMES[date.month0() as usize].to_string(), 4)
        } else if rest.starts_with("MMM") {
            (data::MONTH_ABBREVIATIONS[date.month0() as usize].to_string(), 3)
        } else if rest.starts_with("MM") {
            (format!("{:02}", date.month()), 2)
        } else if rest.starts_with('M') {
            (date.month().to_string(), 1)
        } else if rest.starts_with("DD") {
            (format!("{:02}", date.day()), 2)
        } else if rest.starts_with('D') {
            (date.day().to_string(), 1)
        } else {
            let c = rest.chars().next().expect("non-empty rest");
            (c.to_string(), c.len_utf8())
        };

        out.push_str(&rendered);
        i += consumed;
    }

    out
}

impl RandomValueProvider {
    /// A date in the inclusive `[from, to]` range. Defaults: epoch to now.
    pub fn date_between(
        &mut self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<NaiveDate, GenerateError> {
        let from = from.unwrap_or_else(epoch_date);
        let to = to.unwrap_or_else(today);

        if from > to {
            return Err(GenerateError::InvalidDateRange {
                min: from.to_string(),
                max: to.to_string(),
            });
        }

        let span = (to - from).num_days();
        Ok(from + Duration::days(self.uniform(0, span)))
    }

    /// A wall-clock time, `HH:MM`.
    pub fn time(&mut self) -> String {
        format!("{:02}:{:02}", self.uniform(0, 23), self.uniform(0, 59))
    }

    /// A month value, `01`..`12`.
    pub fn month_value(&mut self) -> String {
        format!("{:02}", self.uniform(1, 12))
    }

    /// A year between 1970 and the current year.
    pub fn year(&mut self) -> i32 {
        self.uniform(1970, today().year() as i64) as i32
    }

    /// A zero-padded two-digit week number in `[1, 52]`.
    pub fn week_number(&mut self) -> String {
        format!("{:02}", self.uniform(1, 52))
    }
}
