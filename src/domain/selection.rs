use thiserror::Error;

use crate::domain::catalog::SlotCatalog;
use crate::domain::slot::SlotTime;

/// The user's in-progress choice of slots for a new booking.
///
/// Invariant maintained by `toggle`: mapped back to catalog indices, the
/// members form one contiguous range and no member (nor any catalog slot
/// inside the range) is booked. Empty is a valid state. A fresh catalog
/// always starts with an empty selection.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    slot_ids: Vec<i64>,
}

impl Selection {
    pub fn new() -> Self {
        Selection::default()
    }

    pub fn is_empty(&self) -> bool {
        self.slot_ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slot_ids.len()
    }

    pub fn contains(&self, slot_id: i64) -> bool {
        self.slot_ids.contains(&slot_id)
    }

    /// Member ids in the order they were picked.
    pub fn slot_ids(&self) -> &[i64] {
        &self.slot_ids
    }

    /// Member ids sorted by catalog position; ids no longer present in the
    /// catalog are skipped.
    pub fn ordered_slot_ids(&self, catalog: &SlotCatalog) -> Vec<i64> {
        let mut indexed: Vec<(usize, i64)> =
            self.slot_ids.iter().filter_map(|&id| catalog.index_of(id).map(|index| (index, id))).collect();
        indexed.sort_by_key(|&(index, _)| index);
        indexed.into_iter().map(|(_, id)| id).collect()
    }

    fn member_indices(&self, catalog: &SlotCatalog) -> Vec<usize> {
        self.slot_ids.iter().filter_map(|&id| catalog.index_of(id)).collect()
    }
}

/// Why a toggle was refused. None of these mutate the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ToggleRejection {
    #[error("This slot is already booked.")]
    SlotBooked,

    #[error("This slot is no longer part of the current slot list.")]
    NotFound,

    #[error("Please select consecutive time slots only.")]
    NonConsecutive,

    #[error("Cannot select non-consecutive slots or skip booked slots.")]
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// Applies one user pick/unpick against the current catalog.
///
/// Accepted transitions:
/// - member slot → removed (interior removal is deliberately not re-validated;
///   see `compute_summary` docs and the selection tests),
/// - empty selection → the slot becomes the whole selection,
/// - non-empty selection → only a slot strictly adjacent to one extreme, and
///   only if every catalog slot between the new extremes is unbooked.
pub fn toggle(catalog: &SlotCatalog, selection: &mut Selection, slot_id: i64) -> Result<ToggleOutcome, ToggleRejection> {
    let Some(index) = catalog.index_of(slot_id) else {
        // The catalog may have been reloaded between render and tap; warn, never panic.
        log::warn!("Toggle ignored: slot {} is not in the current catalog.", slot_id);
        return Err(ToggleRejection::NotFound);
    };

    let slot = catalog.get(index).ok_or(ToggleRejection::NotFound)?;
    if slot.is_booked {
        return Err(ToggleRejection::SlotBooked);
    }

    if selection.contains(slot_id) {
        selection.slot_ids.retain(|&id| id != slot_id);
        return Ok(ToggleOutcome::Removed);
    }

    if selection.is_empty() {
        selection.slot_ids.push(slot_id);
        return Ok(ToggleOutcome::Added);
    }

    let member_indices = selection.member_indices(catalog);
    let extremes = member_indices.iter().copied().min().zip(member_indices.iter().copied().max());
    let Some((min_index, max_index)) = extremes else {
        // Every member referenced a slot id absent from this catalog; the
        // selection is stale and behaves as empty.
        log::warn!("Selection members missing from catalog; restarting from slot {}.", slot_id);
        selection.slot_ids.clear();
        selection.slot_ids.push(slot_id);
        return Ok(ToggleOutcome::Added);
    };

    let adjacent = index + 1 == min_index || index == max_index + 1;
    if !adjacent {
        return Err(ToggleRejection::NonConsecutive);
    }

    let new_min = min_index.min(index);
    let new_max = max_index.max(index);
    let all_available = catalog.slots()[new_min..=new_max].iter().all(|s| !s.is_booked);
    if !all_available {
        return Err(ToggleRejection::Blocked);
    }

    selection.slot_ids.push(slot_id);
    Ok(ToggleOutcome::Added)
}

/// Derived view of a selection: aggregate price and the covered time range.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSummary {
    pub total_price: f64,
    pub range_start: Option<SlotTime>,
    pub range_end: Option<SlotTime>,
    pub duration_units: usize,
}

impl SelectionSummary {
    /// Aggregate price formatted the way the booking payload carries it.
    pub fn amount(&self) -> String {
        format!("{:.2}", self.total_price)
    }
}

/// Recomputes the summary from scratch. Pure and idempotent; called after
/// every successful toggle and again at submit time.
///
/// Price precedence per slot: the slot's own price, else the turf's uniform
/// price, else zero. The range runs from the start of the lowest-index member
/// to the end of the highest-index member.
pub fn compute_summary(catalog: &SlotCatalog, selection: &Selection, uniform_price: Option<f64>) -> SelectionSummary {
    let member_indices = {
        let mut indices = selection.member_indices(catalog);
        indices.sort_unstable();
        indices
    };

    if member_indices.is_empty() {
        return SelectionSummary {
            total_price: 0.0,
            range_start: None,
            range_end: None,
            duration_units: 0,
        };
    }

    let total_price: f64 = member_indices
        .iter()
        .filter_map(|&index| catalog.get(index))
        .map(|slot| slot.price.or(uniform_price).unwrap_or(0.0))
        .sum();

    let first = member_indices.first().and_then(|&index| catalog.get(index));
    let last = member_indices.last().and_then(|&index| catalog.get(index));

    SelectionSummary {
        total_price,
        range_start: first.map(|slot| slot.start_time.clone()),
        range_end: last.map(|slot| slot.end_time.clone()),
        duration_units: member_indices.len(),
    }
}
