//! Property tests for the sequence space
//!
//! Arbitrary interleavings of creation and deletion never reuse a
//! contract number, and the per-year watermark only moves forward.

use std::collections::HashSet;

use dealdesk::{AccessTier, Actor, ActorId, ContractDraft, ContractId, Dealdesk, Year};
use proptest::prelude::*;

const YEAR: Year = Year::new(2025);

fn draft() -> ContractDraft {
    ContractDraft {
        customer_company: "Prop Co".to_string(),
        ..Default::default()
    }
}

proptest! {
    #[test]
    fn numbers_are_never_reused(
        // true = create, false = delete the oldest live contract
        ops in proptest::collection::vec(any::<bool>(), 1..80)
    ) {
        let desk = Dealdesk::in_memory();
        let writer = ActorId::from_raw(1);
        let admin = Actor::new(ActorId::from_raw(2), AccessTier::Admin);

        let mut ever_allocated: HashSet<String> = HashSet::new();
        let mut live: Vec<ContractId> = Vec::new();
        let mut last_watermark = 0u32;

        for op in ops {
            if op {
                let c = desk.create_contract_in(YEAR, writer, &draft()).unwrap();
                prop_assert!(
                    ever_allocated.insert(c.contract_no.to_string()),
                    "number {} reissued",
                    c.contract_no
                );
                live.push(c.id);
            } else if let Some(id) = live.first().copied() {
                desk.delete_contract(id, admin).unwrap();
                live.remove(0);
            }

            let watermark = desk
                .last_seq(YEAR)
                .unwrap()
                .map(|s| s.as_u32())
                .unwrap_or(0);
            prop_assert!(watermark >= last_watermark, "watermark moved backwards");
            last_watermark = watermark;
        }

        // Every allocation in a fresh year succeeded, so the maximum
        // assigned sequence equals the number of creations.
        prop_assert_eq!(ever_allocated.len() as u32, last_watermark);
    }
}
