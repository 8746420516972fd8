//! The canonical approval chain, end to end

use dealdesk::{
    AccessTier, Actor, ActorId, ContractDraft, ContractStatus, Dealdesk, Error, Year,
};

const YEAR: Year = Year::new(2025);

fn draft(company: &str) -> ContractDraft {
    ContractDraft {
        customer_company: company.to_string(),
        ..Default::default()
    }
}

fn actor(id: u64, tier: AccessTier) -> Actor {
    Actor::new(ActorId::from_raw(id), tier)
}

/// Walks the full workflow exactly as the back office uses it:
/// two creations number 2025DJ1 and 2025DJ2, the writer submits,
/// a director may push but not finish, the president finishes.
#[test]
fn full_approval_walkthrough() {
    let desk = Dealdesk::in_memory();
    let writer = ActorId::from_raw(1);

    let first = desk.create_contract_in(YEAR, writer, &draft("Acme Co")).unwrap();
    assert_eq!(first.contract_no.to_string(), "2025DJ1");
    assert_eq!(first.status, ContractStatus::Draft);

    let second = desk.create_contract_in(YEAR, writer, &draft("Beta Ltd")).unwrap();
    assert_eq!(second.contract_no.to_string(), "2025DJ2");

    // Writer hands in their own draft.
    let submitted = desk
        .submit(first.id, actor(1, AccessTier::Employee))
        .unwrap();
    assert_eq!(submitted.status, ContractStatus::Submitted);

    // A director cannot finish a submitted contract.
    let err = desk
        .complete(first.id, actor(9, AccessTier::Director))
        .unwrap_err();
    assert!(matches!(err, Error::Forbidden { .. }));
    assert_eq!(
        desk.get_contract(first.id).unwrap().status,
        ContractStatus::Submitted
    );

    // But may push it into processing.
    let processing = desk
        .begin_processing(first.id, actor(9, AccessTier::Director))
        .unwrap();
    assert_eq!(processing.status, ContractStatus::Processing);

    // From processing, director is still not enough.
    let err = desk
        .complete(first.id, actor(9, AccessTier::Director))
        .unwrap_err();
    assert!(matches!(err, Error::Forbidden { .. }));

    // The president closes it out.
    let done = desk
        .complete(first.id, actor(3, AccessTier::President))
        .unwrap();
    assert_eq!(done.status, ContractStatus::Completed);

    // The second contract was never touched.
    assert_eq!(
        desk.get_contract(second.id).unwrap().status,
        ContractStatus::Draft
    );
}

#[test]
fn double_complete_is_rejected_idempotently() {
    let desk = Dealdesk::in_memory();
    let writer = ActorId::from_raw(1);
    let c = desk.create_contract_in(YEAR, writer, &draft("Acme")).unwrap();

    desk.submit(c.id, actor(1, AccessTier::Employee)).unwrap();
    desk.begin_processing(c.id, actor(9, AccessTier::Director))
        .unwrap();
    desk.complete(c.id, actor(3, AccessTier::President)).unwrap();

    let err = desk
        .complete(c.id, actor(3, AccessTier::President))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidState {
            current: ContractStatus::Completed,
            required: ContractStatus::Processing,
            ..
        }
    ));
    // Still completed, not reverted or corrupted.
    assert_eq!(
        desk.get_contract(c.id).unwrap().status,
        ContractStatus::Completed
    );
}

#[test]
fn transitions_only_touch_status() {
    let desk = Dealdesk::in_memory();
    let writer = ActorId::from_raw(1);
    let mut d = draft("Acme Co");
    d.special_note = "deliver before quarter end".to_string();
    let c = desk.create_contract_in(YEAR, writer, &d).unwrap();

    let after = desk.submit(c.id, actor(1, AccessTier::Employee)).unwrap();
    assert_eq!(after.special_note, "deliver before quarter end");
    assert_eq!(after.contract_no, c.contract_no);
    assert_eq!(after.writer, writer);
    assert_eq!(after.created_at, c.created_at);
}

#[test]
fn unknown_contract_is_not_found() {
    let desk = Dealdesk::in_memory();
    let missing = dealdesk::ContractId::from_raw(12345);
    assert!(matches!(
        desk.submit(missing, actor(1, AccessTier::Admin)).unwrap_err(),
        Error::NotFound(_)
    ));
    assert!(matches!(desk.get_contract(missing).unwrap_err(), Error::NotFound(_)));
}
