use std::collections::HashMap;

use healthiq_core::error::ScoreError;
use healthiq_core::questions::QuestionBank;
use healthiq_core::scoring::{ScoreMode, score};

fn submission(entries: &[(&str, i64)]) -> HashMap<String, i64> {
    entries
        .iter()
        .map(|(id, v)| (id.to_string(), *v))
        .collect()
}

#[test]
fn empty_submission_scores_zero() {
    let bank = QuestionBank::builtin();
    let summary = score(&bank, &HashMap::new(), ScoreMode::Lenient).unwrap();
    assert_eq!(summary.total_score, 0);
    assert_eq!(summary.answered_count, 0);
    assert_eq!(summary.max_possible, 0);
}

#[test]
fn valid_answers_are_summed() {
    let bank = QuestionBank::builtin();
    let summary = score(
        &bank,
        &submission(&[("Q1", 2), ("Q2", 3), ("Q3", 0)]),
        ScoreMode::Lenient,
    )
    .unwrap();
    assert_eq!(summary.total_score, 5);
    assert_eq!(summary.answered_count, 3);
    assert_eq!(summary.max_possible, 9);
}

#[test]
fn out_of_range_value_aborts_and_names_the_id() {
    let bank = QuestionBank::builtin();
    let err = score(&bank, &submission(&[("Q1", 2), ("Q2", 5)]), ScoreMode::Lenient).unwrap_err();
    match &err {
        ScoreError::InvalidAnswer { id, value } => {
            assert_eq!(id, "Q2");
            assert_eq!(*value, 5);
        }
        other => panic!("expected InvalidAnswer, got {other:?}"),
    }
    assert!(err.to_string().contains("Q2"));
}

#[test]
fn negative_value_is_rejected() {
    let bank = QuestionBank::builtin();
    let err = score(&bank, &submission(&[("Q1", -1)]), ScoreMode::Lenient).unwrap_err();
    assert!(matches!(err, ScoreError::InvalidAnswer { .. }));
}

#[test]
fn lenient_mode_skips_unknown_ids_but_counts_them() {
    let bank = QuestionBank::builtin();
    let summary = score(&bank, &submission(&[("Q1", 3), ("Q99", 1)]), ScoreMode::Lenient).unwrap();
    assert_eq!(summary.total_score, 3);
    assert_eq!(summary.answered_count, 2);
    assert_eq!(summary.max_possible, 6);
}

#[test]
fn strict_mode_rejects_unknown_ids() {
    let bank = QuestionBank::builtin();
    let err = score(&bank, &submission(&[("Q99", 1)]), ScoreMode::Strict).unwrap_err();
    match err {
        ScoreError::UnknownQuestion(id) => assert_eq!(id, "Q99"),
        other => panic!("expected UnknownQuestion, got {other:?}"),
    }
}
