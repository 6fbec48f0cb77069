use crate::labels::LabelSet;
use crate::tensor::PredictionVector;
use serde::Serialize;
use thiserror::Error;

/// Confidence percentage above which a match is presented as high
/// confidence. Exactly 90.00 stays moderate.
pub const HIGH_CONFIDENCE_THRESHOLD: f32 = 90.0;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("prediction vector has {len} entries but the label set has {expected}")]
pub struct EmptyVectorError {
    pub len: usize,
    pub expected: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    High,
    Moderate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub species: String,
    pub confidence: f32,
    pub tier: ConfidenceTier,
}

/// Picks the winning label from a probability vector. Ties keep the first
/// index so the result is deterministic.
pub fn interpret(
    vector: &PredictionVector,
    labels: &LabelSet,
) -> Result<Classification, EmptyVectorError> {
    if vector.is_empty() || vector.len() != labels.len() {
        return Err(EmptyVectorError {
            len: vector.len(),
            expected: labels.len(),
        });
    }

    let (best_index, best_score) = vector
        .scores()
        .iter()
        .copied()
        .enumerate()
        .reduce(|best, row| if row.1 > best.1 { row } else { best })
        .ok_or(EmptyVectorError {
            len: 0,
            expected: labels.len(),
        })?;

    let species = labels
        .get(best_index)
        .ok_or(EmptyVectorError {
            len: vector.len(),
            expected: labels.len(),
        })?
        .to_string();

    let confidence = 100.0 * best_score;
    let tier = if confidence > HIGH_CONFIDENCE_THRESHOLD {
        ConfidenceTier::High
    } else {
        ConfidenceTier::Moderate
    };

    Ok(Classification {
        species,
        confidence,
        tier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector_with_peak(peak_index: usize, peak: f32) -> PredictionVector {
        let mut scores = vec![0.01; 11];
        scores[peak_index] = peak;
        PredictionVector::new(scores)
    }

    #[test]
    fn argmax_selects_the_peak_label() {
        let labels = LabelSet::builtin();
        let result = interpret(&vector_with_peak(3, 0.90), &labels).unwrap();

        assert_eq!(result.species, "Gilt Head Bream");
        assert!((result.confidence - 90.0).abs() < 1e-3);
        assert_eq!(result.tier, ConfidenceTier::Moderate);
    }

    #[test]
    fn exactly_ninety_percent_is_moderate() {
        let labels = LabelSet::builtin();
        let result = interpret(&vector_with_peak(5, 0.90), &labels).unwrap();

        assert_eq!(result.tier, ConfidenceTier::Moderate);
    }

    #[test]
    fn just_above_ninety_percent_is_high() {
        let labels = LabelSet::builtin();
        let result = interpret(&vector_with_peak(5, 0.9001), &labels).unwrap();

        assert_eq!(result.tier, ConfidenceTier::High);
    }

    #[test]
    fn ties_resolve_to_the_first_index() {
        let labels = LabelSet::builtin();
        let mut scores = vec![0.0; 11];
        scores[2] = 0.5;
        scores[7] = 0.5;

        let result = interpret(&PredictionVector::new(scores), &labels).unwrap();

        assert_eq!(result.species, "Black Sea Sprat");
    }

    #[test]
    fn the_label_always_comes_from_the_label_set() {
        let labels = LabelSet::builtin();
        let result = interpret(&vector_with_peak(10, 0.99), &labels).unwrap();

        assert!(labels.names().contains(&result.species.as_str()));
    }

    #[test]
    fn empty_vectors_are_rejected() {
        let labels = LabelSet::builtin();
        let err = interpret(&PredictionVector::new(Vec::new()), &labels).unwrap_err();

        assert_eq!(
            err,
            EmptyVectorError {
                len: 0,
                expected: 11
            }
        );
    }

    #[test]
    fn length_mismatches_are_rejected() {
        let labels = LabelSet::builtin();
        let err = interpret(&PredictionVector::new(vec![0.5; 4]), &labels).unwrap_err();

        assert_eq!(
            err,
            EmptyVectorError {
                len: 4,
                expected: 11
            }
        );
    }
}
