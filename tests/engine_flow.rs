//! End-to-end flow: raw bookmaker payload -> opportunity -> settlement -> live alert

use chrono::{TimeZone, Utc};
use goldmatch::alert::{live_alert, AlertLevel};
use goldmatch::engine::{Engine, FixtureOdds};
use goldmatch::fixture::{Fixture, Score};
use goldmatch::odds::{Bookmaker, NormalizerConfig};
use goldmatch::prediction::{evaluate, BetResult};
use goldmatch::rules::{MatcherConfig, RuleSet};

const BOOKMAKER_PAYLOAD: &str = r#"[
    {
        "id": 8,
        "bets": [
            {
                "id": 38,
                "values": [
                    {"value": "2", "odd": "3.10"},
                    {"value": "3", "odd": "3.40"},
                    {"value": "4", "odd": "2.00"},
                    {"value": "5", "odd": "3.00"}
                ]
            },
            {
                "id": 5,
                "values": [
                    {"value": "Over 2.5", "odd": "1.23"},
                    {"value": "Under 2.5", "odd": "3.90"}
                ]
            },
            {
                "id": 8,
                "values": [
                    {"value": "Yes", "odd": "1.55"},
                    {"value": "No", "odd": "2.30"}
                ]
            }
        ]
    }
]"#;

const RULE_TABLE: &str = r#"[
    {
        "rule_id": 2,
        "name": "4-5 gol 2.40",
        "primary_odds": {"4-5": 2.40},
        "secondary_odds": null,
        "exclude_odds": null,
        "predictions": ["MS 1.5 ÜST", "MS 2.5 ÜST", "EV MS 0.5 ÜST"],
        "confidence_base": 89,
        "importance": "normal",
        "is_active": true
    },
    {
        "rule_id": 99,
        "name": "never matches",
        "primary_odds": {"4-5": 3.80},
        "predictions": ["KG VAR"],
        "confidence_base": 95
    }
]"#;

fn fixture() -> Fixture {
    Fixture {
        fixture_id: 7,
        home_team: "Trabzonspor".to_string(),
        away_team: "Beşiktaş".to_string(),
        league: "Süper Lig".to_string(),
        kickoff: Utc.with_ymd_and_hms(2025, 3, 9, 16, 0, 0).unwrap(),
    }
}

#[test]
fn raw_payload_to_opportunity() {
    let bookmakers: Vec<Bookmaker> = serde_json::from_str(BOOKMAKER_PAYLOAD).unwrap();
    let rules: RuleSet = serde_json::from_str(RULE_TABLE).unwrap();
    let engine = Engine::new(MatcherConfig::default(), NormalizerConfig::default(), 85);

    let cards = vec![FixtureOdds {
        fixture: fixture(),
        bookmakers,
    }];
    let opportunities = engine.scan(&cards, &rules);
    assert_eq!(opportunities.len(), 1);

    let opp = &opportunities[0];
    // 89 base + 1 (list of 3) + 1 (first-listed) = 91
    assert_eq!(opp.prediction, "MS 1.5 ÜST");
    assert_eq!(opp.confidence, 91);
    assert_eq!(opp.matched_rules.len(), 1);
    assert_eq!(opp.matched_rules[0].rule_id, 2);
    assert_eq!(opp.alternative_predictions.len(), 2);

    // Wire shape survives a round trip
    let json = serde_json::to_string(opp).unwrap();
    let back: goldmatch::engine::Opportunity = serde_json::from_str(&json).unwrap();
    assert_eq!(back.prediction, opp.prediction);
}

#[test]
fn opportunity_settles_and_alerts() {
    let prediction = "MS 1.5 ÜST";

    // Mid-match: one more goal needed
    let alert = live_alert(prediction, Some(Score::new(1, 0)), 60, None).unwrap();
    assert_eq!(alert.goals_needed, 1);
    assert_eq!(alert.alert_level, AlertLevel::Hot);
    assert!(!alert.is_already_hit);

    // Full time: settled as won
    assert_eq!(evaluate(prediction, Score::new(2, 1), None), BetResult::Won);
}

#[test]
fn shipped_rule_table_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/rules.example.json");
    let set = RuleSet::load(path).unwrap();
    assert_eq!(set.len(), 8);
    assert_eq!(set.active().count(), 8);
    assert!(set.validate().is_empty(), "{:?}", set.validate());
}
