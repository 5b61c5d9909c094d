use crate::utils::number::PLACEHOLDER;
use chrono::NaiveDate;
use serde::Serialize;

pub const INVALID_RANGE_WARNING: &str = "تاريخ العودة يجب أن يكون بعد تاريخ الذهاب";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TripDuration {
    /// One of the dates is missing or unreadable.
    Pending,
    /// Return is on or before departure.
    InvalidRange,
    Span { nights: u32, days: u32 },
}

impl TripDuration {
    pub fn nights(&self) -> u32 {
        match self {
            TripDuration::Span { nights, .. } => *nights,
            _ => 0,
        }
    }

    pub fn days(&self) -> u32 {
        match self {
            TripDuration::Span { days, .. } => *days,
            _ => 0,
        }
    }

    /// Text for the printed quotation.
    pub fn text(&self) -> String {
        match self {
            TripDuration::Span { nights, days } => {
                format!("{:02} ليالي / {:02} أيام", nights, days)
            }
            _ => PLACEHOLDER.to_string(),
        }
    }

    /// Text next to the date inputs, where a bad range is worth pointing out.
    pub fn hint(&self) -> String {
        match self {
            TripDuration::InvalidRange => INVALID_RANGE_WARNING.to_string(),
            other => other.text(),
        }
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Nights between two `YYYY-MM-DD` dates, with days counted as nights + 1.
pub fn calc_duration(departure: &str, return_date: &str) -> TripDuration {
    let (Some(go), Some(back)) = (parse_date(departure), parse_date(return_date)) else {
        return TripDuration::Pending;
    };

    let nights = back.signed_duration_since(go).num_days();
    if nights <= 0 {
        return TripDuration::InvalidRange;
    }

    let nights = u32::try_from(nights).unwrap_or(u32::MAX - 1);
    TripDuration::Span {
        nights,
        days: nights + 1,
    }
}
