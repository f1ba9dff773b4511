
use std::sync::Arc;

use chrono::{Local, NaiveDate};

use gateway_mock::{MockGateway, booking, conflict_rejection, slot};
use turf_owner_client::domain::booking::{DraftRejection, PaymentMethod, SubmissionOutcome};
use turf_owner_client::domain::turf::Turf;
use turf_owner_client::session::{OfflineBookingSession, SubmitRejection};

fn a_turf() -> Turf {
    Turf {
        id: 7,
        name: "Green Arena".to_string(),
        city: Some("Pune".to_string()),
        state: None,
        sport_type: Some("football".to_string()),
        size: None,
        status: "active".to_string(),
        uniform_price: Some(500.0),
    }
}

fn booking_date() -> NaiveDate {
    // A fixed past date so the same-day stale filter never interferes.
    NaiveDate::from_ymd_opt(2025, 6, 14).unwrap()
}

fn default_slots() -> Vec<turf_owner_client::api::slot_dto::SlotDto> {
    vec![
        slot(1, "09:00", "10:00", Some(450.0), false),
        slot(2, "10:00", "11:00", None, false),
        slot(3, "11:00", "12:00", None, true),
    ]
}

fn session_with(gateway: Arc<MockGateway>) -> OfflineBookingSession {
    let mut session = OfflineBookingSession::new(gateway, booking_date());
    session.select_turf(a_turf());
    session.draft_mut().player_name = "Ravi".to_string();
    session.draft_mut().player_phone = "9876543210".to_string();
    session.draft_mut().payment_method = PaymentMethod::Cash;
    session
}

#[tokio::test]
async fn test_empty_fetch_triggers_generation_and_refetch() {
    let mut gateway = MockGateway::with_slots(Vec::new());
    gateway.generated_slots = default_slots();
    let gateway = Arc::new(gateway);

    let mut session = session_with(gateway.clone());
    let count = session.load_catalog(Local::now()).await.unwrap();

    assert_eq!(count, 3);
    assert_eq!(*gateway.generate_calls.lock().unwrap(), 1);
    assert_eq!(*gateway.fetch_calls.lock().unwrap(), 2);
}

#[tokio::test]
async fn test_full_flow_builds_payload_and_creates_booking() {
    let gateway = Arc::new(MockGateway::with_slots(default_slots()));
    gateway.queue_submit(Ok(booking(42)));

    let mut session = session_with(gateway.clone());
    session.load_catalog(Local::now()).await.unwrap();

    session.toggle_slot(1).unwrap();
    session.toggle_slot(2).unwrap();

    let summary = session.summary();
    assert_eq!(summary.total_price, 950.0);
    assert_eq!(summary.duration_units, 2);

    let created = session.submit().await.unwrap();
    assert_eq!(created.id, 42);
    // The selection is consumed on success.
    assert!(session.selection().is_empty());

    let payload = gateway.last_payload.lock().unwrap().clone().unwrap();
    assert_eq!(payload.turf_id, 7);
    assert_eq!(payload.booking_date, "2025-06-14");
    assert_eq!(payload.slot_ids, vec![1, 2]);
    assert_eq!(payload.start_time, "09:00");
    assert_eq!(payload.end_time, "11:00");
    assert_eq!(payload.amount, "950.00");
    assert_eq!(payload.payment_method, "cash");
}

#[tokio::test]
async fn test_draft_violations_never_reach_the_wire() {
    let gateway = Arc::new(MockGateway::with_slots(default_slots()));
    let mut session = session_with(gateway.clone());
    session.load_catalog(Local::now()).await.unwrap();
    session.toggle_slot(1).unwrap();
    session.draft_mut().player_phone.clear();

    match session.submit().await {
        Err(SubmitRejection::Draft(DraftRejection::MissingPlayerInfo)) => {}
        other => panic!("expected MissingPlayerInfo, got {:?}", other.map(|b| b.id)),
    }
    assert!(gateway.last_payload.lock().unwrap().is_none());

    // With player info back but nothing selected, the selection check fires.
    session.draft_mut().player_phone = "9876543210".to_string();
    session.toggle_slot(1).unwrap(); // remove the only member
    match session.submit().await {
        Err(SubmitRejection::Draft(DraftRejection::EmptySelection)) => {}
        other => panic!("expected EmptySelection, got {:?}", other.map(|b| b.id)),
    }
}

#[tokio::test]
async fn test_conflict_requires_reload_before_resubmitting() {
    let gateway = Arc::new(MockGateway::with_slots(default_slots()));
    gateway.queue_submit(Err(conflict_rejection()));
    gateway.queue_submit(Ok(booking(77)));

    let mut session = session_with(gateway.clone());
    session.load_catalog(Local::now()).await.unwrap();
    session.toggle_slot(1).unwrap();
    session.toggle_slot(2).unwrap();

    match session.submit().await {
        Err(SubmitRejection::Submission(SubmissionOutcome::SlotsNoLongerAvailable)) => {}
        other => panic!("expected SlotsNoLongerAvailable, got {:?}", other.map(|b| b.id)),
    }

    // Resubmitting against the stale catalog is refused locally.
    match session.submit().await {
        Err(SubmitRejection::StaleCatalog) => {}
        other => panic!("expected StaleCatalog, got {:?}", other.map(|b| b.id)),
    }

    // The reload reflects the lost slot and drops the stale selection.
    gateway.set_slots(vec![
        slot(1, "09:00", "10:00", Some(450.0), true),
        slot(2, "10:00", "11:00", None, false),
        slot(3, "11:00", "12:00", None, true),
    ]);
    session.load_catalog(Local::now()).await.unwrap();
    assert!(session.selection().is_empty());

    session.toggle_slot(2).unwrap();
    let created = session.submit().await.unwrap();
    assert_eq!(created.id, 77);
}

#[tokio::test]
async fn test_reload_discards_in_progress_selection() {
    let gateway = Arc::new(MockGateway::with_slots(default_slots()));
    let mut session = session_with(gateway.clone());
    session.load_catalog(Local::now()).await.unwrap();
    session.toggle_slot(1).unwrap();
    assert_eq!(session.selection().len(), 1);

    // Last write wins: the fresh catalog replaces everything.
    session.load_catalog(Local::now()).await.unwrap();
    assert!(session.selection().is_empty());
}

#[tokio::test]
async fn test_changing_turf_or_date_resets_the_flow() {
    let gateway = Arc::new(MockGateway::with_slots(default_slots()));
    let mut session = session_with(gateway.clone());
    session.load_catalog(Local::now()).await.unwrap();
    session.toggle_slot(1).unwrap();

    session.set_booking_date(booking_date().succ_opt().unwrap());
    assert!(session.selection().is_empty());
    assert!(session.catalog().is_empty());

    session.load_catalog(Local::now()).await.unwrap();
    session.toggle_slot(1).unwrap();
    let mut other_turf = a_turf();
    other_turf.id = 8;
    session.select_turf(other_turf);
    assert!(session.selection().is_empty());
    assert!(session.catalog().is_empty());
}
