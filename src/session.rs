use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate};
use thiserror::Error;

use crate::api::booking_dto::BookingDto;
use crate::client::gateway::BookingGateway;
use crate::domain::booking::{
    BookingDraft, DraftRejection, SubmissionOutcome, build_payload, classify_submission_error, validate,
};
use crate::domain::catalog::SlotCatalog;
use crate::domain::selection::{Selection, SelectionSummary, ToggleOutcome, ToggleRejection, compute_summary, toggle};
use crate::domain::slot::Slot;
use crate::domain::turf::Turf;
use crate::error::{Error, Result};

/// Why a submit attempt did not produce a booking.
#[derive(Debug, Error)]
pub enum SubmitRejection {
    /// A local precondition failed; nothing was sent.
    #[error(transparent)]
    Draft(#[from] DraftRejection),

    /// The request was sent and came back as a non-success category.
    #[error("{}", .0.user_message())]
    Submission(SubmissionOutcome),

    /// A prior conflict invalidated the catalog; reload before retrying.
    #[error("Slot availability changed; reload slots before submitting again.")]
    StaleCatalog,
}

/// One offline-booking flow: a turf and date, their slot catalog, the
/// in-progress selection, and the player/payment draft.
///
/// There is exactly one mutator (the caller's event loop), and a completed
/// catalog fetch always wins over in-progress picks: `load_catalog` replaces
/// the catalog wholesale and resets the selection to empty rather than
/// reconciling.
pub struct OfflineBookingSession {
    gateway: Arc<dyn BookingGateway>,
    turf: Option<Turf>,
    catalog: SlotCatalog,
    selection: Selection,
    draft: BookingDraft,
    needs_refetch: bool,
}

impl OfflineBookingSession {
    pub fn new(gateway: Arc<dyn BookingGateway>, booking_date: NaiveDate) -> Self {
        OfflineBookingSession {
            gateway,
            turf: None,
            catalog: SlotCatalog::empty(),
            selection: Selection::new(),
            draft: BookingDraft::new(booking_date),
            needs_refetch: false,
        }
    }

    pub fn turf(&self) -> Option<&Turf> {
        self.turf.as_ref()
    }

    pub fn catalog(&self) -> &SlotCatalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut BookingDraft {
        &mut self.draft
    }

    /// Choosing a turf invalidates any catalog and selection built for the
    /// previous one.
    pub fn select_turf(&mut self, turf: Turf) {
        log::debug!("Turf selected: {} ({}).", turf.name, turf.id);
        self.turf = Some(turf);
        self.reset_catalog();
    }

    /// Changing the date likewise starts the slot flow over.
    pub fn set_booking_date(&mut self, date: NaiveDate) {
        if self.draft.booking_date != date {
            self.draft.booking_date = date;
            self.reset_catalog();
        }
    }

    fn reset_catalog(&mut self) {
        self.catalog = SlotCatalog::empty();
        self.selection = Selection::new();
        self.needs_refetch = false;
    }

    /// Fetches the slot grid for the current turf and date, asking the
    /// backend to generate it when the first fetch comes back empty.
    ///
    /// The fresh catalog fully replaces the previous one and the selection is
    /// reset to empty. Returns the number of slots in the new catalog.
    pub async fn load_catalog(&mut self, now: DateTime<Local>) -> Result<usize> {
        let turf_id = self
            .turf
            .as_ref()
            .map(|turf| turf.id)
            .ok_or_else(|| Error::InvalidInput("Select a turf before loading slots".to_string()))?;
        let date = self.draft.booking_date;

        let mut raw_slots = self.gateway.fetch_slots(turf_id, date).await?;

        if raw_slots.is_empty() {
            log::info!("No slots for turf {} on {}; requesting generation.", turf_id, date);
            match self.gateway.generate_slots(turf_id, date).await {
                Ok(()) => raw_slots = self.gateway.fetch_slots(turf_id, date).await?,
                Err(error) => log::error!("Slot generation failed: {}", error),
            }
        }

        let slots: Vec<Slot> = raw_slots.into_iter().map(Slot::from_dto).collect();
        self.catalog = SlotCatalog::build(slots, date, now);
        self.selection = Selection::new();
        self.needs_refetch = false;

        log::info!("Catalog loaded: {} slot(s) for turf {} on {}.", self.catalog.len(), turf_id, date);
        Ok(self.catalog.len())
    }

    pub fn toggle_slot(&mut self, slot_id: i64) -> std::result::Result<ToggleOutcome, ToggleRejection> {
        toggle(&self.catalog, &mut self.selection, slot_id)
    }

    pub fn summary(&self) -> SelectionSummary {
        let uniform_price = self.turf.as_ref().and_then(|turf| turf.uniform_price);
        compute_summary(&self.catalog, &self.selection, uniform_price)
    }

    /// Validates, builds the payload, and submits.
    ///
    /// On success the selection is consumed (reset to empty). On an
    /// availability conflict the session is marked stale and refuses further
    /// submits until `load_catalog` runs again. Submission is never retried
    /// automatically.
    pub async fn submit(&mut self) -> std::result::Result<BookingDto, SubmitRejection> {
        if self.needs_refetch {
            return Err(SubmitRejection::StaleCatalog);
        }

        validate(self.turf.as_ref(), &self.draft, &self.selection)?;

        let turf = self.turf.as_ref().ok_or(DraftRejection::MissingFacility)?;
        let payload = build_payload(turf, &self.draft, &self.catalog, &self.selection);

        match self.gateway.create_offline_booking(&payload).await {
            Ok(booking) => {
                log::info!("Offline booking {} created.", booking.id);
                self.selection = Selection::new();
                Ok(booking)
            }
            Err(error) => {
                let outcome = classify_submission_error(&error);
                log::warn!("Booking submission failed ({:?}): {}", outcome, error);
                if outcome.requires_catalog_refetch() {
                    self.needs_refetch = true;
                }
                Err(SubmitRejection::Submission(outcome))
            }
        }
    }
}
