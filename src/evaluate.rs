//! Scoring a [`Rule`] against labeled data.

use serde::{Deserialize, Serialize};

use crate::classify::Rule;
use crate::point::{Dataset, Label};

/// 2x2 contingency counts where "positive" is [`Label::Positive`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub true_positive: usize,
    pub false_positive: usize,
    pub true_negative: usize,
    pub false_negative: usize,
}

impl ConfusionMatrix {
    /// Counts one prediction against its ground truth.
    pub fn record(&mut self, predicted: Label, actual: Label) {
        match (predicted, actual) {
            (Label::Positive, Label::Positive) => self.true_positive += 1,
            (Label::Positive, Label::Negative) => self.false_positive += 1,
            (Label::Negative, Label::Negative) => self.true_negative += 1,
            (Label::Negative, Label::Positive) => self.false_negative += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.true_positive + self.false_positive + self.true_negative + self.false_negative
    }

    /// Count for one (actual, predicted) cell.
    pub fn get(&self, actual: Label, predicted: Label) -> usize {
        match (actual, predicted) {
            (Label::Positive, Label::Positive) => self.true_positive,
            (Label::Positive, Label::Negative) => self.false_negative,
            (Label::Negative, Label::Positive) => self.false_positive,
            (Label::Negative, Label::Negative) => self.true_negative,
        }
    }

    /// TP / (TP + FP), or 0 when nothing was predicted positive.
    pub fn precision(&self) -> f64 {
        ratio(self.true_positive, self.true_positive + self.false_positive)
    }

    /// TP / (TP + FN), or 0 when there are no actual positives.
    pub fn recall(&self) -> f64 {
        ratio(self.true_positive, self.true_positive + self.false_negative)
    }

    /// (TP + TN) / total, or 0 for an empty matrix.
    pub fn accuracy(&self) -> f64 {
        ratio(self.true_positive + self.true_negative, self.total())
    }

    /// Harmonic mean of precision and recall, or 0 when both are 0.
    pub fn f1_score(&self) -> f64 {
        let precision = self.precision();
        let recall = self.recall();
        if precision + recall == 0.0 {
            return 0.0;
        }
        2.0 * precision * recall / (precision + recall)
    }

    pub fn metrics(&self) -> Metrics {
        Metrics {
            accuracy: self.accuracy(),
            precision: self.precision(),
            recall: self.recall(),
            f1_score: self.f1_score(),
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}

/// Snapshot of the derived scores of a [`ConfusionMatrix`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

/// Classifies every point with `rule` and tallies the outcomes.
pub fn evaluate(data: &Dataset, rule: Rule) -> ConfusionMatrix {
    data.iter().fold(ConfusionMatrix::default(), |mut cm, p| {
        cm.record(rule.predict(p.x, p.y), p.class);
        cm
    })
}
