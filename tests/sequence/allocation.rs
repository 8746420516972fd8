//! Serial allocation behavior

use dealdesk::{ActorId, ContractDraft, Dealdesk, Error, Seq, Year};

const WRITER: ActorId = ActorId::from_raw(1);

fn draft(company: &str) -> ContractDraft {
    ContractDraft {
        customer_company: company.to_string(),
        ..Default::default()
    }
}

#[test]
fn numbers_start_at_one_per_year() {
    let desk = Dealdesk::in_memory();
    let c2025 = desk
        .create_contract_in(Year::new(2025), WRITER, &draft("A"))
        .unwrap();
    let c2026 = desk
        .create_contract_in(Year::new(2026), WRITER, &draft("B"))
        .unwrap();

    assert_eq!(c2025.contract_no.to_string(), "2025DJ1");
    assert_eq!(c2026.contract_no.to_string(), "2026DJ1");
}

#[test]
fn density_after_k_creations() {
    let desk = Dealdesk::in_memory();
    let year = Year::new(2025);
    const K: u32 = 25;

    let mut seen = std::collections::HashSet::new();
    for i in 0..K {
        let c = desk
            .create_contract_in(year, WRITER, &draft(&format!("Co {}", i)))
            .unwrap();
        assert!(seen.insert(c.contract_no), "duplicate {}", c.contract_no);
    }
    // No rollbacks happened, so the watermark is exactly K.
    assert_eq!(desk.last_seq(year).unwrap(), Some(Seq::from_raw(K)));
}

#[test]
fn failed_validation_burns_nothing() {
    let desk = Dealdesk::in_memory();
    let year = Year::new(2025);

    desk.create_contract_in(year, WRITER, &draft("A")).unwrap();
    let err = desk
        .create_contract_in(year, WRITER, &ContractDraft::default())
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    // The failed creation left no gap: the next number is DJ2.
    let b = desk.create_contract_in(year, WRITER, &draft("B")).unwrap();
    assert_eq!(b.contract_no.to_string(), "2025DJ2");
}

#[test]
fn number_is_derived_not_supplied() {
    let desk = Dealdesk::in_memory();
    let year = Year::new(2025);
    let c = desk.create_contract_in(year, WRITER, &draft("A")).unwrap();

    assert_eq!(c.contract_no.year(), year);
    assert_eq!(c.contract_no.seq(), Seq::FIRST);
    // Display form round-trips through the parser.
    let parsed = dealdesk::ContractNo::from_string(&c.contract_no.to_string()).unwrap();
    assert_eq!(parsed, c.contract_no);
}
