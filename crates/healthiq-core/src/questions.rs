//! The fixed assessment question pool and random sampling.
//!
//! Questions are based on common mood scales (PHQ, GAD, and friends) and are
//! answered on a Likert scale: 0 = not at all, 3 = nearly every day.

use rand::seq::SliceRandom;

use crate::error::QuestionBankError;
use crate::models::question::{Question, QuestionPrompt, Scale};

/// The static pool of assessment items. Built once at process start and
/// read-only afterwards.
pub struct QuestionBank {
    pool: Vec<Question>,
}

impl QuestionBank {
    /// The builtin ten-question reference pool.
    pub fn builtin() -> Self {
        let q = |id: &str, text: &str, scale: Scale| Question {
            id: id.to_string(),
            text: text.to_string(),
            scale,
        };
        QuestionBank {
            pool: vec![
                q(
                    "Q1",
                    "Over the last two weeks, how often have you felt little interest or pleasure in doing things?",
                    Scale::Phq,
                ),
                q(
                    "Q2",
                    "Over the last two weeks, how often have you felt down, depressed, or hopeless?",
                    Scale::Phq,
                ),
                q(
                    "Q3",
                    "Are you feeling easily annoyed, irritable, or restless lately?",
                    Scale::Gad,
                ),
                q(
                    "Q4",
                    "Have you been worrying too much about different things?",
                    Scale::Gad,
                ),
                q(
                    "Q5",
                    "Do you often feel bothered by feeling tired or having little energy?",
                    Scale::General,
                ),
                q(
                    "Q6",
                    "Do you find yourself sleeping much less or much more than usual?",
                    Scale::General,
                ),
                q(
                    "Q7",
                    "How often have you felt difficulty relaxing or winding down?",
                    Scale::Stress,
                ),
                q(
                    "Q8",
                    "Have you felt afraid, as if something awful might happen?",
                    Scale::Anxiety,
                ),
                q(
                    "Q9",
                    "How often have you found it hard to concentrate on things, such as reading or watching TV?",
                    Scale::Focus,
                ),
                q(
                    "Q10",
                    "Have you noticed any significant changes in your appetite or weight?",
                    Scale::General,
                ),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.pool.iter().any(|q| q.id == id)
    }

    /// Draw `n` distinct questions uniformly at random without replacement,
    /// projected to their client-facing form.
    pub fn sample(&self, n: usize) -> Result<Vec<QuestionPrompt>, QuestionBankError> {
        if n > self.pool.len() {
            return Err(QuestionBankError::InsufficientPool {
                requested: n,
                available: self.pool.len(),
            });
        }
        let mut rng = rand::thread_rng();
        Ok(self
            .pool
            .choose_multiple(&mut rng, n)
            .map(QuestionPrompt::from)
            .collect())
    }
}
