/// Property-based tests using proptest
/// Tests invariants that should hold for all seeds, leads and configurations
use proptest::prelude::*;
use salesbooster_api::config::Config;
use salesbooster_api::models::LeadRecord;
use salesbooster_api::scoring::{LeadScorer, MockLeadScorer, FOLLOW_UP_ACTIONS};
use serde_json::{Map, Value};

fn arb_json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "\\PC{0,20}".prop_map(Value::String),
    ]
}

fn arb_lead() -> impl Strategy<Value = LeadRecord> {
    prop::collection::btree_map("[a-zA-Z_]{1,12}", arb_json_leaf(), 0..8).prop_map(|fields| {
        LeadRecord(fields.into_iter().collect::<Map<String, Value>>())
    })
}

// Property: Mock scores stay inside [0, 100) with the fixed action list
proptest! {
    #[test]
    fn score_always_in_range(seed in any::<u64>(), lead in arb_lead()) {
        let scorer = MockLeadScorer::seeded(seed);
        for _ in 0..16 {
            let insight = scorer.score(&lead).unwrap();
            prop_assert!(insight.score < 100);
            prop_assert_eq!(insight.follow_up_actions.len(), 3);
            prop_assert_eq!(&insight.follow_up_actions[..], &FOLLOW_UP_ACTIONS[..]);
        }
    }

    #[test]
    fn same_seed_same_score_regardless_of_lead(seed in any::<u64>(), a in arb_lead(), b in arb_lead()) {
        let left = MockLeadScorer::seeded(seed).score(&a).unwrap();
        let right = MockLeadScorer::seeded(seed).score(&b).unwrap();
        prop_assert_eq!(left, right);
    }
}

// Property: Any JSON object normalizes to a lead, nothing else does
proptest! {
    #[test]
    fn objects_become_leads(lead in arb_lead()) {
        let value = serde_json::to_value(&lead).unwrap();
        let normalized = LeadRecord::from_value(value).unwrap();
        prop_assert_eq!(normalized, lead);
    }

    #[test]
    fn leaves_are_not_leads(leaf in arb_json_leaf()) {
        prop_assert!(LeadRecord::from_value(leaf).is_err());
    }
}

// Property: PORT parsing accepts every u16 and rejects non-numeric input
proptest! {
    #[test]
    fn any_u16_port_accepted(port in any::<u16>()) {
        let raw = port.to_string();
        let config = Config::from_lookup(|key| (key == "PORT").then(|| raw.clone())).unwrap();
        prop_assert_eq!(config.port, port);
    }

    #[test]
    fn non_numeric_port_rejected(raw in "[a-zA-Z]{1,10}") {
        let result = Config::from_lookup(|key| (key == "PORT").then(|| raw.clone()));
        prop_assert!(result.is_err());
    }

    #[test]
    fn config_parsing_never_panics(raw in "\\PC*") {
        let _ = Config::from_lookup(|_| Some(raw.clone()));
    }
}
