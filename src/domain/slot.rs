use std::cmp::Ordering;
use std::fmt;

use crate::api::slot_dto::SlotDto;

/// A clock time in the fixed-width 24-hour `HH:MM` form the backend emits.
///
/// Comparison is total over arbitrary input: well-formed values order
/// lexicographically (which matches chronological order for zero-padded
/// `HH:MM`), and malformed values sort after every well-formed one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTime(String);

impl SlotTime {
    pub fn new(raw: impl Into<String>) -> Self {
        SlotTime(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the value matches `HH:MM` with `HH` in 00..=23 and `MM` in 00..=59.
    pub fn is_well_formed(&self) -> bool {
        let bytes = self.0.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return false;
        }
        if !bytes.iter().enumerate().all(|(i, b)| i == 2 || b.is_ascii_digit()) {
            return false;
        }

        let hours = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
        let minutes = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
        hours <= 23 && minutes <= 59
    }
}

impl Ord for SlotTime {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_well_formed(), other.is_well_formed()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for SlotTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One bookable time unit of a turf on a date. Read-only on the client;
/// the whole set is replaced on every reload.
#[derive(Debug, Clone)]
pub struct Slot {
    pub id: i64,
    pub start_time: SlotTime,
    pub end_time: SlotTime,

    /// Per-slot price; the turf's uniform price applies when absent.
    pub price: Option<f64>,

    pub is_booked: bool,

    /// Player name shown on booked slots, when the backend includes it.
    pub booked_by: Option<String>,
}

impl Slot {
    pub fn from_dto(dto: SlotDto) -> Self {
        Slot {
            id: dto.id,
            start_time: SlotTime::new(dto.start_time),
            end_time: SlotTime::new(dto.end_time),
            price: dto.price,
            is_booked: dto.is_booked,
            booked_by: dto.booking.and_then(|b| b.player_name),
        }
    }
}
