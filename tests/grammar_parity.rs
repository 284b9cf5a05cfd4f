//! Grammar parity between the result evaluator and the live alert calculator
//!
//! Every prediction string the result evaluator can settle must also be
//! recognized by the live alert calculator: for each grammar form there is
//! some live state that produces an alert. Divergence between the two
//! would mean two grammars have crept in.

use goldmatch::alert::live_alert;
use goldmatch::fixture::Score;
use goldmatch::prediction::{evaluate, BetResult, Prediction};

const GRAMMAR_FORMS: &[&str] = &[
    "2.5 ÜST",
    "2.5 ALT",
    "MS 0.5 ÜST",
    "MS 1.5 ÜST",
    "MS 2.5 ÜST",
    "MS 3.5 ALT",
    "MS EV 1.5 ÜST",
    "MS EV 0.5 ALT",
    "MS DEP 0.5 ÜST",
    "EV MS 0.5 ÜST",
    "İY 0.5 ÜST",
    "İY 1.5 ÜST",
    "İY EV 0.5 ÜST",
    "İY DEP 0.5 ÜST",
    "MS 1",
    "MS X",
    "MS 2",
    "İY MS 1",
    "İY MS X",
    "İY MS 2",
    "KG VAR",
    "KG YOK",
    "İY KG VAR",
];

#[test]
fn every_form_parses() {
    for form in GRAMMAR_FORMS {
        assert!(
            Prediction::parse(form).is_some(),
            "grammar form not parsed: {form}"
        );
    }
}

#[test]
fn every_form_settles_with_full_data() {
    for form in GRAMMAR_FORMS {
        let result = evaluate(form, Score::new(2, 1), Some(Score::new(1, 0)));
        assert_ne!(
            result,
            BetResult::Undetermined,
            "evaluator cannot settle {form}"
        );
    }
}

#[test]
fn every_form_alerts_in_some_live_state() {
    // Probe a spread of scorelines in both halves; each form must produce
    // an alert somewhere, or the calculator silently dropped part of the
    // grammar.
    let scores = [
        Score::new(0, 0),
        Score::new(1, 0),
        Score::new(0, 1),
        Score::new(1, 1),
        Score::new(2, 1),
        Score::new(2, 2),
        Score::new(3, 2),
    ];
    let minutes = [30, 70];

    for form in GRAMMAR_FORMS {
        let alerted = scores.iter().any(|&score| {
            minutes
                .iter()
                .any(|&elapsed| live_alert(form, Some(score), elapsed, None).is_some())
        });
        assert!(alerted, "no live state produces an alert for {form}");
    }
}

#[test]
fn junk_is_rejected_by_both_sides() {
    for junk in ["", "MS", "falcon 0.5", "2.5", "ÜST ALT"] {
        assert!(Prediction::parse(junk).is_none());
        assert_eq!(
            evaluate(junk, Score::new(1, 0), None),
            BetResult::Undetermined
        );
        assert!(live_alert(junk, Some(Score::new(1, 0)), 30, None).is_none());
    }
}
