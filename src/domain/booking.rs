use chrono::NaiveDate;
use lazy_static::lazy_static;
use thiserror::Error;

use crate::api::booking_dto::OfflineBookingRequest;
use crate::api::error_dto::ApiErrorBody;
use crate::domain::catalog::SlotCatalog;
use crate::domain::selection::{Selection, compute_summary};
use crate::domain::turf::Turf;
use crate::error::Error;

/// How the walk-in player pays. Wire names match the backend enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    Cash,
    Upi,
    PayOnTurf,
}

impl PaymentMethod {
    pub fn wire_name(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Upi => "upi",
            PaymentMethod::PayOnTurf => "pay_on_turf",
        }
    }
}

/// Player and payment fields entered independently of slot selection.
/// Validated only at submit time; discarded after submission.
#[derive(Debug, Clone)]
pub struct BookingDraft {
    pub player_name: String,
    pub player_phone: String,
    pub booking_date: NaiveDate,
    pub payment_method: PaymentMethod,
}

impl BookingDraft {
    pub fn new(booking_date: NaiveDate) -> Self {
        BookingDraft {
            player_name: String::new(),
            player_phone: String::new(),
            booking_date,
            payment_method: PaymentMethod::default(),
        }
    }
}

/// Local precondition violations, surfaced before anything goes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftRejection {
    #[error("Please select a turf.")]
    MissingFacility,

    #[error("Please enter player details.")]
    MissingPlayerInfo,

    #[error("Please select at least one time slot.")]
    EmptySelection,
}

/// Checks submit preconditions, reporting the first violation in the fixed
/// order turf, player info, selection.
pub fn validate(turf: Option<&Turf>, draft: &BookingDraft, selection: &Selection) -> Result<(), DraftRejection> {
    if turf.is_none() {
        return Err(DraftRejection::MissingFacility);
    }
    if draft.player_name.trim().is_empty() || draft.player_phone.trim().is_empty() {
        return Err(DraftRejection::MissingPlayerInfo);
    }
    if selection.is_empty() {
        return Err(DraftRejection::EmptySelection);
    }
    Ok(())
}

/// Shapes the outbound `POST /bookings/offline` payload from a finalized
/// selection. Pure; no network side effect.
pub fn build_payload(turf: &Turf, draft: &BookingDraft, catalog: &SlotCatalog, selection: &Selection) -> OfflineBookingRequest {
    let summary = compute_summary(catalog, selection, turf.uniform_price);

    OfflineBookingRequest {
        turf_id: turf.id,
        player_name: draft.player_name.clone(),
        player_phone: draft.player_phone.clone(),
        booking_date: draft.booking_date.format("%Y-%m-%d").to_string(),
        slot_ids: selection.ordered_slot_ids(catalog),
        start_time: summary.range_start.as_ref().map(|t| t.as_str().to_string()).unwrap_or_default(),
        end_time: summary.range_end.as_ref().map(|t| t.as_str().to_string()).unwrap_or_default(),
        amount: summary.amount(),
        payment_method: draft.payment_method.wire_name().to_string(),
    }
}

/// User-facing category of a booking submission result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    SlotsNoLongerAvailable,
    ValidationFailed,
    ServerError,
    AuthExpired,
    NetworkUnreachable,
    UnknownFailure,
}

impl SubmissionOutcome {
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmissionOutcome::Success => "Offline booking created successfully.",
            SubmissionOutcome::SlotsNoLongerAvailable => {
                "Selected time slots are no longer available. Please choose different slots."
            }
            SubmissionOutcome::ValidationFailed => "Please check all booking details and try again.",
            SubmissionOutcome::ServerError => "Server error. Please try again in a moment.",
            SubmissionOutcome::AuthExpired => "Session expired. Please login again.",
            SubmissionOutcome::NetworkUnreachable => "Network error. Please check your connection.",
            SubmissionOutcome::UnknownFailure => "Unable to create booking. Please try again.",
        }
    }

    /// A conflict means the local catalog no longer reflects availability;
    /// the caller must refetch before allowing another submit.
    pub fn requires_catalog_refetch(&self) -> bool {
        matches!(self, SubmissionOutcome::SlotsNoLongerAvailable)
    }
}

lazy_static! {
    /// Message fragments the backend uses for slot-availability conflicts.
    static ref CONFLICT_MARKERS: Vec<&'static str> = vec!["not available", "already", "unavailable"];
}

/// Maps a transport/HTTP result to its user-facing category.
///
/// `status` is `None` when no HTTP response was received; `network_error`
/// distinguishes "request never completed" from other status-less failures.
pub fn classify_submission_outcome(status: Option<u16>, body: Option<&ApiErrorBody>, network_error: bool) -> SubmissionOutcome {
    if network_error {
        return SubmissionOutcome::NetworkUnreachable;
    }

    let Some(status) = status else {
        return SubmissionOutcome::UnknownFailure;
    };

    match status {
        200..=299 => SubmissionOutcome::Success,
        400 => {
            let message = body.and_then(|b| b.message.as_deref()).unwrap_or("").to_lowercase();
            if CONFLICT_MARKERS.iter().any(|marker| message.contains(marker)) {
                SubmissionOutcome::SlotsNoLongerAvailable
            } else if body.is_some_and(|b| b.has_field_errors()) {
                SubmissionOutcome::ValidationFailed
            } else {
                // A bare 400 on this endpoint has only ever meant an
                // availability conflict in practice.
                SubmissionOutcome::SlotsNoLongerAvailable
            }
        }
        422 => SubmissionOutcome::ValidationFailed,
        401 | 403 => SubmissionOutcome::AuthExpired,
        500..=599 => SubmissionOutcome::ServerError,
        _ => SubmissionOutcome::UnknownFailure,
    }
}

/// Classifies a failed service call from the crate error it produced.
pub fn classify_submission_error(error: &Error) -> SubmissionOutcome {
    match error {
        Error::ApiRejection { status, body } => classify_submission_outcome(Some(*status), Some(body), false),
        Error::TransportError(transport) => {
            let status = transport.status().map(|s| s.as_u16());
            classify_submission_outcome(status, None, status.is_none())
        }
        _ => SubmissionOutcome::UnknownFailure,
    }
}
