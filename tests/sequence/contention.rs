//! Concurrent allocation tests
//!
//! N threads hammer the same year behind a barrier; every creation
//! must come back with a distinct number and the watermark must land
//! exactly on the total.

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use dealdesk::{AccessTier, Actor, ActorId, ContractDraft, Dealdesk, Seq, Year};

const YEAR: Year = Year::new(2025);

fn draft(company: &str) -> ContractDraft {
    ContractDraft {
        customer_company: company.to_string(),
        ..Default::default()
    }
}

#[test]
fn concurrent_creations_get_distinct_numbers() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 10;

    let desk = Arc::new(Dealdesk::in_memory());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let desk = Arc::clone(&desk);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let writer = ActorId::from_raw(t as u64 + 1);
                barrier.wait();
                (0..PER_THREAD)
                    .map(|i| {
                        desk.create_contract_in(YEAR, writer, &draft(&format!("t{}-{}", t, i)))
                            .unwrap()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut pairs = HashSet::new();
    let mut numbers = HashSet::new();
    let mut total = 0;
    for handle in handles {
        for contract in handle.join().unwrap() {
            total += 1;
            assert!(
                pairs.insert((contract.contract_no.year(), contract.contract_no.seq())),
                "duplicate (year, seq): {}",
                contract.contract_no
            );
            assert!(
                numbers.insert(contract.contract_no.to_string()),
                "duplicate contract_no: {}",
                contract.contract_no
            );
        }
    }

    assert_eq!(total, THREADS * PER_THREAD);
    // No creation failed, so the sequence space is dense: exactly
    // 1..=total was handed out.
    assert_eq!(
        desk.last_seq(YEAR).unwrap(),
        Some(Seq::from_raw(total as u32))
    );
}

#[test]
fn concurrent_creations_across_years_stay_scoped() {
    const THREADS: usize = 6;

    let desk = Arc::new(Dealdesk::in_memory());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let desk = Arc::clone(&desk);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                // Threads alternate between two years.
                let year = Year::new(2025 + (t % 2) as i32);
                let writer = ActorId::from_raw(t as u64 + 1);
                barrier.wait();
                (0..5)
                    .map(|i| {
                        desk.create_contract_in(year, writer, &draft(&format!("t{}-{}", t, i)))
                            .unwrap()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut by_year: std::collections::HashMap<Year, HashSet<Seq>> = Default::default();
    for handle in handles {
        for contract in handle.join().unwrap() {
            let inserted = by_year
                .entry(contract.contract_no.year())
                .or_default()
                .insert(contract.contract_no.seq());
            assert!(inserted, "duplicate within year: {}", contract.contract_no);
        }
    }

    // Each year allocated exactly its own dense range.
    assert_eq!(by_year[&Year::new(2025)].len(), 15);
    assert_eq!(by_year[&Year::new(2026)].len(), 15);
    assert_eq!(desk.last_seq(Year::new(2025)).unwrap(), Some(Seq::from_raw(15)));
    assert_eq!(desk.last_seq(Year::new(2026)).unwrap(), Some(Seq::from_raw(15)));
}

#[test]
fn concurrent_transitions_settle_on_one_winner() {
    const THREADS: usize = 8;

    let desk = Arc::new(Dealdesk::in_memory());
    let writer = ActorId::from_raw(1);
    let contract = desk
        .create_contract_in(YEAR, writer, &draft("Contested"))
        .unwrap();
    desk.submit(contract.id, Actor::new(writer, AccessTier::Employee))
        .unwrap();

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let desk = Arc::clone(&desk);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let approver = Actor::new(ActorId::from_raw(100 + t as u64), AccessTier::Director);
                barrier.wait();
                desk.begin_processing(contract.id, approver).is_ok()
            })
        })
        .collect();

    let wins = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|won| *won)
        .count();

    // Exactly one approver got the transition; the CAS rejected the
    // rest against the latest committed state.
    assert_eq!(wins, 1);
    assert_eq!(
        desk.get_contract(contract.id).unwrap().status,
        dealdesk::ContractStatus::Processing
    );
}
