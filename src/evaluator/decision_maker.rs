use std::collections::BTreeMap;

use tracing::{debug, info};

use super::regret::{max_regrets, regret_matrix};
use super::scorer::{hurwicz_score, row_max, row_mean, row_min, select_best, Objective};
use super::{Criterion, Decision, Evaluation};
use crate::error::{DecisionError, Result};

/// Hurwicz coefficient used when a single Hurwicz evaluation gets no alpha.
pub const DEFAULT_HURWICZ_ALPHA: f64 = 0.5;

/// Hurwicz coefficient used when every criterion is evaluated together.
pub const DEFAULT_SUMMARY_ALPHA: f64 = 0.6;

/// Evaluates one payoff matrix under the classical decision criteria.
///
/// Rows are alternatives and columns are states of nature. The matrix and
/// its labels are fixed at construction, so every criterion is a pure
/// function of them and an engine can be shared freely between readers.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionMaker {
    matrix: Vec<Vec<f64>>,
    alternatives: Vec<String>,
    states: Vec<String>,
}

impl DecisionMaker {
    pub fn new(matrix: Vec<Vec<f64>>) -> Result<Self> {
        Self::with_labels(matrix, None, None)
    }

    /// Builds an engine with explicit labels. Missing labels default to
    /// `Alternative i` / `State i`, counted from 1.
    pub fn with_labels(
        matrix: Vec<Vec<f64>>,
        alternatives: Option<Vec<String>>,
        states: Option<Vec<String>>,
    ) -> Result<Self> {
        let cols = match matrix.first() {
            None => return Err(DecisionError::invalid_matrix("The payoff matrix cannot be empty.")),
            Some(first) if first.is_empty() => {
                return Err(DecisionError::invalid_matrix(
                    "The payoff matrix needs at least one state.",
                ))
            }
            Some(first) => first.len(),
        };
        let rows = matrix.len();

        for (r, row) in matrix.iter().enumerate() {
            if row.len() != cols {
                return Err(DecisionError::invalid_matrix(format!(
                    "Alternative {} has {} states, expected {}.",
                    r + 1,
                    row.len(),
                    cols
                )));
            }
            if let Some(c) = row.iter().position(|payoff| !payoff.is_finite()) {
                return Err(DecisionError::invalid_matrix(format!(
                    "Payoff for alternative {} in state {} is not a finite number.",
                    r + 1,
                    c + 1
                )));
            }
        }

        let alternatives = match alternatives {
            Some(labels) if labels.len() != rows => {
                return Err(DecisionError::invalid_matrix(format!(
                    "Expected {} alternative labels, got {}.",
                    rows,
                    labels.len()
                )))
            }
            Some(labels) => labels,
            None => (1..=rows).map(|i| format!("Alternative {}", i)).collect(),
        };

        let states = match states {
            Some(labels) if labels.len() != cols => {
                return Err(DecisionError::invalid_matrix(format!(
                    "Expected {} state labels, got {}.",
                    cols,
                    labels.len()
                )))
            }
            Some(labels) => labels,
            None => (1..=cols).map(|i| format!("State {}", i)).collect(),
        };

        info!("DecisionMaker initialized with {} alternatives and {} states", rows, cols);

        Ok(Self {
            matrix,
            alternatives,
            states,
        })
    }

    pub fn rows(&self) -> usize {
        self.matrix.len()
    }

    pub fn cols(&self) -> usize {
        self.states.len()
    }

    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// Optimistic: the alternative with the best best-case payoff.
    pub fn maximax(&self) -> Decision {
        let maxima: Vec<f64> = self.matrix.iter().map(|row| row_max(row)).collect();
        debug!("Row maxima: {:?}", maxima);
        self.decide(&maxima, Objective::Maximize)
    }

    /// Pessimistic: the alternative with the best worst-case payoff.
    pub fn maximin(&self) -> Decision {
        let minima: Vec<f64> = self.matrix.iter().map(|row| row_min(row)).collect();
        debug!("Row minima: {:?}", minima);
        self.decide(&minima, Objective::Maximize)
    }

    pub fn hurwicz(&self, alpha: f64) -> Result<Decision> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(DecisionError::invalid_parameter(format!(
                "Hurwicz alpha must be between 0 and 1, got {}.",
                alpha
            )));
        }

        let scores: Vec<f64> = self
            .matrix
            .iter()
            .map(|row| hurwicz_score(row, alpha))
            .collect();
        debug!("Hurwicz scores (alpha={}): {:?}", alpha, scores);
        Ok(self.decide(&scores, Objective::Maximize))
    }

    /// Opportunity loss of every payoff against the best payoff of its state.
    pub fn regret_matrix(&self) -> Vec<Vec<f64>> {
        regret_matrix(&self.matrix)
    }

    /// The alternative whose worst regret is smallest.
    pub fn minimax_regret(&self) -> Decision {
        let worst = max_regrets(&self.regret_matrix());
        debug!("Maximum regrets: {:?}", worst);
        self.decide(&worst, Objective::Minimize)
    }

    /// Equal likelihood: the alternative with the best average payoff.
    pub fn laplace(&self) -> Decision {
        let means: Vec<f64> = self.matrix.iter().map(|row| row_mean(row)).collect();
        debug!("Row means: {:?}", means);
        self.decide(&means, Objective::Maximize)
    }

    pub fn evaluate(&self, criterion: Criterion, alpha: f64) -> Result<Decision> {
        match criterion {
            Criterion::Maximax => Ok(self.maximax()),
            Criterion::Maximin => Ok(self.maximin()),
            Criterion::Hurwicz => self.hurwicz(alpha),
            Criterion::MinimaxRegret => Ok(self.minimax_regret()),
            Criterion::Laplace => Ok(self.laplace()),
        }
    }

    /// Runs every criterion, using `alpha` for Hurwicz.
    pub fn evaluate_all(&self, alpha: f64) -> Result<Evaluation> {
        self.evaluate_selected(&Criterion::ALL, alpha)
    }

    pub fn evaluate_selected(&self, criteria: &[Criterion], alpha: f64) -> Result<Evaluation> {
        let mut results = BTreeMap::new();
        for &criterion in criteria {
            results.insert(criterion, self.evaluate(criterion, alpha)?);
        }

        info!("Evaluated {} criteria", results.len());

        Ok(Evaluation {
            hurwicz_alpha: alpha,
            results,
        })
    }

    fn decide(&self, scores: &[f64], objective: Objective) -> Decision {
        // rows >= 1 and all payoffs are finite, so a best score always exists
        let (index, value) = select_best(scores, objective).unwrap_or((0, scores[0]));

        Decision {
            index,
            alternative: self.alternatives[index].clone(),
            value,
        }
    }
}
