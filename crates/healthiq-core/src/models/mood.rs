use serde::{Deserialize, Serialize};
use std::fmt;

/// Text sentiment label. Class codes match the trained classifier's output
/// categories: 0 = Negative, 1 = Positive; 2 is the empty-input fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextMood {
    Negative,
    Positive,
    Neutral,
}

impl TextMood {
    pub fn from_class_code(code: u8) -> TextMood {
        match code {
            0 => TextMood::Negative,
            1 => TextMood::Positive,
            _ => TextMood::Neutral,
        }
    }

    pub fn class_code(&self) -> u8 {
        match self {
            TextMood::Negative => 0,
            TextMood::Positive => 1,
            TextMood::Neutral => 2,
        }
    }
}

impl fmt::Display for TextMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TextMood::Negative => "Negative",
            TextMood::Positive => "Positive",
            TextMood::Neutral => "Neutral",
        };
        f.write_str(s)
    }
}

/// The final mood label produced by the consensus rules.
///
/// The serialized strings are part of the persisted record shape and must
/// not change. There is no `Neutral` variant: the reference decision table
/// declares one as a default but none of the four rules can produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinalMood {
    Positive,
    Distressed,
    #[serde(rename = "High Anxiety")]
    HighAnxiety,
    #[serde(rename = "Mixed/Stable")]
    MixedStable,
}

impl fmt::Display for FinalMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FinalMood::Positive => "Positive",
            FinalMood::Distressed => "Distressed",
            FinalMood::HighAnxiety => "High Anxiety",
            FinalMood::MixedStable => "Mixed/Stable",
        };
        f.write_str(s)
    }
}
