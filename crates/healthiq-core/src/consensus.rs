//! The final-mood consensus rules.
//!
//! Combines the text sentiment label, the voice emotion label, and the
//! questionnaire score into one final mood plus a fixed suggestion. Pure —
//! no learned parameters, no side effects.

use crate::models::checkin::{FinalCheckin, FinalDecision};
use crate::models::mood::FinalMood;

/// Signed contribution of a text sentiment label: Positive +1, Negative -1,
/// anything else 0.
pub fn text_weight(label: &str) -> i64 {
    match label {
        "Positive" => 1,
        "Negative" => -1,
        _ => 0,
    }
}

/// Signed contribution of a voice emotion label: happy/calm +1,
/// sad/angry/fearful -1, anything else 0.
pub fn voice_weight(label: &str) -> i64 {
    match label {
        "happy" | "calm" => 1,
        "sad" | "angry" | "fearful" => -1,
        _ => 0,
    }
}

fn suggestion(mood: FinalMood) -> &'static str {
    match mood {
        FinalMood::Positive => {
            "You're doing well. Keep up your current routine and stay connected with the people around you."
        }
        FinalMood::Distressed => {
            "Your signals suggest a rough patch. Consider reaching out to a trusted friend or a mental health professional today."
        }
        FinalMood::HighAnxiety => {
            "Your questionnaire score is elevated. Try a short breathing exercise and cut back on stimulants for the rest of the day."
        }
        FinalMood::MixedStable => {
            "Your mood signals are mixed but stable. A short walk or a few minutes of journaling may help you reflect."
        }
    }
}

/// Compute the final mood for a check-in.
///
/// The consensus score is the sum of the two signed label weights (range
/// -2..=+2; an absent or unrecognized signal contributes 0). The threshold
/// rules are evaluated in order, first match wins:
///
/// 1. consensus > 0 and psych_score < 5  → Positive
/// 2. consensus < 0 and psych_score > 8  → Distressed
/// 3. psych_score > 10                   → High Anxiety
/// 4. otherwise                          → Mixed/Stable
///
/// Rule 3 is reachable even though a score above 10 also satisfies rule 2's
/// psych threshold, because rule 2 additionally requires a negative
/// consensus.
pub fn evaluate(checkin: &FinalCheckin) -> FinalDecision {
    let ai_consensus_score = text_weight(&checkin.text_mood) + voice_weight(&checkin.voice_mood);
    let psych = checkin.psych_score;

    let final_mood = if ai_consensus_score > 0 && psych < 5 {
        FinalMood::Positive
    } else if ai_consensus_score < 0 && psych > 8 {
        FinalMood::Distressed
    } else if psych > 10 {
        FinalMood::HighAnxiety
    } else {
        FinalMood::MixedStable
    };

    FinalDecision {
        final_mood,
        suggestion: suggestion(final_mood).to_string(),
        ai_consensus_score,
        psych_score: psych,
    }
}
