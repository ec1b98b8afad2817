use serde::{Deserialize, Serialize};

/// The mood scale a question was drawn from. Internal metadata — never
/// exposed to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    Phq,
    Gad,
    General,
    Stress,
    Anxiety,
    Focus,
}

/// An assessment item in the fixed question pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub scale: Scale,
}

/// The client-facing projection of a [`Question`]: id and text only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionPrompt {
    pub id: String,
    pub text: String,
}

impl From<&Question> for QuestionPrompt {
    fn from(q: &Question) -> Self {
        QuestionPrompt {
            id: q.id.clone(),
            text: q.text.clone(),
        }
    }
}
