use std::collections::HashSet;

use chrono::{DateTime, Local, NaiveDate};

use crate::domain::slot::{Slot, SlotTime};

/// The ordered slot list for one (turf, date) pair.
///
/// Guarantees after `build`: ascending by start time, no duplicate slot ids.
/// May be empty. Rebuilt wholesale whenever the turf or date changes; never
/// patched incrementally.
#[derive(Debug, Clone, Default)]
pub struct SlotCatalog {
    slots: Vec<Slot>,
}

impl SlotCatalog {
    pub fn empty() -> Self {
        SlotCatalog { slots: Vec::new() }
    }

    /// Builds a catalog from raw slot records.
    ///
    /// Duplicate ids are dropped (first occurrence wins), slots are sorted
    /// ascending by start time, and when `reference_date` is today every slot
    /// whose start time is not strictly after the current time-of-day is
    /// filtered out.
    pub fn build(raw_slots: Vec<Slot>, reference_date: NaiveDate, now: DateTime<Local>) -> Self {
        let mut seen_ids = HashSet::new();
        let mut slots: Vec<Slot> = raw_slots.into_iter().filter(|slot| seen_ids.insert(slot.id)).collect();

        slots.sort_by(|a, b| a.start_time.cmp(&b.start_time));

        if reference_date == now.date_naive() {
            let current_time = SlotTime::new(now.format("%H:%M").to_string());
            let before = slots.len();
            slots.retain(|slot| slot.start_time > current_time);
            if slots.len() < before {
                log::debug!("Filtered {} past slot(s) for today's catalog.", before - slots.len());
            }
        }

        SlotCatalog { slots }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn index_of(&self, slot_id: i64) -> Option<usize> {
        self.slots.iter().position(|slot| slot.id == slot_id)
    }

    pub fn by_id(&self, slot_id: i64) -> Option<&Slot> {
        self.index_of(slot_id).and_then(|index| self.slots.get(index))
    }
}
