//! Pure classification of three die faces into a round outcome.

use serde::{Deserialize, Serialize};

use crate::dice::{FACE_MAX, FACE_MIN};

/// Sum at or above which a non-triple round counts as Over (Tài).
pub const OVER_THRESHOLD: u8 = 11;

/// Outcome of one round. Serialized with the wire labels the persisted
/// snapshot has always used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "TAI")]
    Over,
    #[serde(rename = "XIU")]
    Under,
    #[serde(rename = "TAM HOA")]
    Triple,
}

/// A face outside 1..=6 reached the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("die face {face} outside 1..=6")]
pub struct InvalidDiceError {
    pub face: u8,
}

/// Classified result of one completed throw. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub dice: [u8; 3],
    pub sum: u8,
    pub is_triple: bool,
    pub outcome: Outcome,
}

/// Classify three faces. A triple overrides the sum rule and is always a
/// loss for the player regardless of chosen side.
///
/// # Errors
///
/// Returns [`InvalidDiceError`] if any face falls outside 1..=6.
pub fn classify(dice: [u8; 3]) -> Result<RoundResult, InvalidDiceError> {
    if let Some(face) = dice
        .iter()
        .copied()
        .find(|f| !(FACE_MIN..=FACE_MAX).contains(f))
    {
        return Err(InvalidDiceError { face });
    }
    Ok(classify_faces(dice))
}

/// Classification core for faces already known to be in range.
pub(crate) fn classify_faces(dice: [u8; 3]) -> RoundResult {
    let sum: u8 = dice.iter().sum();
    let is_triple = dice[0] == dice[1] && dice[1] == dice[2];
    let outcome = if is_triple {
        Outcome::Triple
    } else if sum >= OVER_THRESHOLD {
        Outcome::Over
    } else {
        Outcome::Under
    };
    RoundResult {
        dice,
        sum,
        is_triple,
        outcome,
    }
}
