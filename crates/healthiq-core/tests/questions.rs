use std::collections::HashSet;

use healthiq_core::error::QuestionBankError;
use healthiq_core::questions::QuestionBank;

#[test]
fn builtin_pool_has_ten_questions() {
    let bank = QuestionBank::builtin();
    assert_eq!(bank.len(), 10);
    assert!(bank.contains("Q1"));
    assert!(bank.contains("Q10"));
    assert!(!bank.contains("Q11"));
}

#[test]
fn sample_returns_distinct_ids_from_the_pool() {
    let bank = QuestionBank::builtin();
    for n in 0..=bank.len() {
        let prompts = bank.sample(n).unwrap();
        assert_eq!(prompts.len(), n);

        let ids: HashSet<_> = prompts.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), n, "sampled ids must be distinct");
        for id in &ids {
            assert!(bank.contains(id), "sampled id {id} not in pool");
        }
    }
}

#[test]
fn sample_beyond_pool_size_fails() {
    let bank = QuestionBank::builtin();
    let err = bank.sample(11).unwrap_err();
    match err {
        QuestionBankError::InsufficientPool {
            requested,
            available,
        } => {
            assert_eq!(requested, 11);
            assert_eq!(available, 10);
        }
    }
}

#[test]
fn prompts_do_not_expose_the_scale_tag() {
    let bank = QuestionBank::builtin();
    let prompts = bank.sample(5).unwrap();
    let json = serde_json::to_value(&prompts).unwrap();
    for prompt in json.as_array().unwrap() {
        let obj = prompt.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("id"));
        assert!(obj.contains_key("text"));
    }
}
