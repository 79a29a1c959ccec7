//! Integration tests for scoring invariants
//!
//! Bounds, negation, boosters, caps emphasis, punctuation, determinism

use std::sync::Arc;
use std::thread;

use vader::core::{Lexicon, SentimentAnalyzer};
use vader::types::SentimentRecord;

fn analyzer() -> SentimentAnalyzer {
    SentimentAnalyzer::new(
        Lexicon::new()
            .with_entry("good", 1.9)
            .with_entry("bad", -2.5)
            .with_entry("great", 3.1)
            .with_entry("horrible", -2.5)
            .with_entry("love", 3.2)
            .with_entry("hate", -2.7),
    )
}

const SENTENCES: &[&str] = &[
    "good",
    "not good",
    "VERY good",
    "this is GREAT!!!",
    "I love it but I hate the ending???",
    "horrible horrible horrible horrible horrible!!!!!!!",
    "great great great great great great great great",
    "never so good",
    "without doubt good",
    "the weather today",
    "?????",
    "",
];

#[test]
fn test_scores_within_bounds() {
    let a = analyzer();
    for text in SENTENCES {
        let record = a.polarity_scores(text);
        assert!(
            (-1.0..=1.0).contains(&record.compound),
            "compound out of range for {:?}: {}",
            text,
            record.compound
        );
        for share in [record.positive, record.negative, record.neutral] {
            assert!((0.0..=1.0).contains(&share), "share out of range for {:?}", text);
        }
        if record != SentimentRecord::zero() {
            let total = record.positive + record.negative + record.neutral;
            assert!((total - 1.0).abs() < 1e-9, "shares of {:?} sum to {}", text, total);
        }
    }
}

#[test]
fn test_empty_input_is_all_zero() {
    let record = analyzer().polarity_scores("");
    assert_eq!(record.compound, 0.0);
    assert_eq!(record.positive, 0.0);
    assert_eq!(record.negative, 0.0);
    assert_eq!(record.neutral, 0.0);
}

#[test]
fn test_negation_dampens_without_full_flip() {
    let a = analyzer();
    let good = a.polarity_scores("good").compound;
    let not_good = a.polarity_scores("not good").compound;
    let bad = a.polarity_scores("bad").compound;

    assert!(good > 0.0);
    assert!(not_good < good);
    assert!((not_good - bad).abs() > 1e-3, "negation should not mirror 'bad'");
    assert!((not_good + good).abs() > 1e-3, "negation should not be a full sign flip");
}

#[test]
fn test_booster_monotonicity() {
    let a = analyzer();
    let good = a.polarity_scores("good").compound;
    let very_good = a.polarity_scores("very good").compound;
    let caps_very_good = a.polarity_scores("VERY good").compound;

    assert!(very_good > good);
    assert!(caps_very_good > very_good);
}

#[test]
fn test_booster_pushes_negative_further() {
    let a = analyzer();
    let bad = a.polarity_scores("bad").compound;
    let very_bad = a.polarity_scores("very bad").compound;
    let slightly_bad = a.polarity_scores("slightly bad").compound;

    assert!(very_bad < bad);
    assert!(slightly_bad > bad);
}

#[test]
fn test_all_caps_sentence_has_no_emphasis() {
    let a = analyzer();
    let shouted = a.polarity_scores("VERY GOOD").compound;
    let plain = a.polarity_scores("very good").compound;
    assert_eq!(shouted, plain);
}

#[test]
fn test_contrastive_conjunction_shifts_weight() {
    let a = analyzer();
    let joined = a.polarity_scores("good but bad").compound;
    let unweighted = a.polarity_scores("good bad").compound;
    assert!(joined < unweighted);

    let reversed = a.polarity_scores("bad but good").compound;
    let unweighted = a.polarity_scores("bad good").compound;
    assert!(reversed > unweighted);
}

#[test]
fn test_exclamation_monotonicity() {
    let a = analyzer();
    for base in ["good", "bad"] {
        let mut last = a.polarity_scores(base).compound.abs();
        let sign = a.polarity_scores(base).compound.signum();
        for n in 1..=4 {
            let text = format!("{}{}", base, "!".repeat(n));
            let compound = a.polarity_scores(&text).compound;
            assert_eq!(compound.signum(), sign, "sign changed for {:?}", text);
            assert!(compound.abs() > last, "no increase for {:?}", text);
            last = compound.abs();
        }
        let capped = a.polarity_scores(&format!("{}!!!!", base)).compound;
        let beyond = a.polarity_scores(&format!("{}!!!!!!!!", base)).compound;
        assert_eq!(capped, beyond);
    }
}

#[test]
fn test_question_marks_amplify() {
    let a = analyzer();
    let one = a.polarity_scores("good?").compound;
    let two = a.polarity_scores("good??").compound;
    let many = a.polarity_scores("good????").compound;
    let more = a.polarity_scores("good?????????").compound;

    assert_eq!(one, a.polarity_scores("good").compound);
    assert!(two > one);
    assert!(many > two);
    assert_eq!(many, more);
}

#[test]
fn test_deterministic() {
    let a = analyzer();
    for text in SENTENCES {
        let r1 = a.polarity_scores(text);
        let r2 = a.polarity_scores(text);
        assert_eq!(r1.compound.to_bits(), r2.compound.to_bits());
        assert_eq!(r1.positive.to_bits(), r2.positive.to_bits());
        assert_eq!(r1.negative.to_bits(), r2.negative.to_bits());
        assert_eq!(r1.neutral.to_bits(), r2.neutral.to_bits());
    }
}

#[test]
fn test_shared_analyzer_across_threads() {
    let a = Arc::new(analyzer());
    let expected: Vec<SentimentRecord> = SENTENCES.iter().map(|t| a.polarity_scores(t)).collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let a = Arc::clone(&a);
            thread::spawn(move || {
                SENTENCES
                    .iter()
                    .map(|t| a.polarity_scores(t))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
