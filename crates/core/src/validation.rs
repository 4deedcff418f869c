//! # Slot Validation
//!
//! A timetable slot is acceptable when it ends after it starts, lasts no more
//! than twelve hours, and both boundaries sit exactly on the hour or half hour.
//! The rules are checked in that order and the first failure is reported.

use chrono::{DateTime, Duration, Timelike, Utc};
use thiserror::Error;

/// Longest slot a doctor can be booked into a room for.
pub const MAX_SLOT_HOURS: i64 = 12;

/// Boundaries must fall on a multiple of this many minutes.
pub const SLOT_ALIGNMENT_MINUTES: u32 = 30;

/// Reason a proposed slot was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotViolation {
    #[error("'to' must be after 'from'")]
    Ordering,

    #[error("Duration cannot exceed {} hours", MAX_SLOT_HOURS)]
    DurationExceeded,

    #[error("Times must fall on the hour or half hour with zero seconds")]
    Misaligned,
}

/// Checks a proposed `[from, to)` slot against the scheduling rules.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use timetable_core::validation::{validate_slot, SlotViolation};
///
/// let from = Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap();
/// let to = Utc.with_ymd_and_hms(2024, 3, 4, 10, 30, 0).unwrap();
/// assert!(validate_slot(from, to).is_ok());
/// assert_eq!(validate_slot(to, from), Err(SlotViolation::Ordering));
/// ```
pub fn validate_slot(from: DateTime<Utc>, to: DateTime<Utc>) -> Result<(), SlotViolation> {
    if to <= from {
        return Err(SlotViolation::Ordering);
    }

    if to - from > Duration::hours(MAX_SLOT_HOURS) {
        return Err(SlotViolation::DurationExceeded);
    }

    if !is_aligned(from) || !is_aligned(to) {
        return Err(SlotViolation::Misaligned);
    }

    Ok(())
}

fn is_aligned(instant: DateTime<Utc>) -> bool {
    instant.minute() % SLOT_ALIGNMENT_MINUTES == 0
        && instant.second() == 0
        && instant.nanosecond() == 0
}
