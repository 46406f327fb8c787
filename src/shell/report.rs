use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::evaluator::{Criterion, Decision, DecisionMaker, Evaluation};

/// One-line rendering of a criterion's recommendation.
pub fn format_decision(criterion: Criterion, decision: &Decision) -> String {
    match criterion {
        Criterion::Maximax => format!("{} (Max Payoff: {})", decision.alternative, decision.value),
        Criterion::Maximin => format!(
            "{} (Guaranteed Min Payoff: {})",
            decision.alternative, decision.value
        ),
        Criterion::Hurwicz => format!("{} (Score: {:.2})", decision.alternative, decision.value),
        Criterion::MinimaxRegret => {
            format!("{} (Max Regret: {})", decision.alternative, decision.value)
        }
        Criterion::Laplace => format!(
            "{} (Average Value: {:.2})",
            decision.alternative, decision.value
        ),
    }
}

fn heading(criterion: Criterion, alpha: f64) -> String {
    match criterion {
        Criterion::Hurwicz => format!("Hurwicz (Alpha={}):", alpha),
        Criterion::MinimaxRegret => "Minimax Regret:".to_string(),
        other => format!("{} ({}):", other.name(), other.attitude()),
    }
}

pub fn format_summary(evaluation: &Evaluation) -> String {
    let mut out = String::from("\n--- Final Decision Results (Under Uncertainty) ---\n");
    for (criterion, decision) in evaluation.iter() {
        let position = Criterion::ALL
            .iter()
            .position(|c| *c == criterion)
            .map_or(0, |p| p + 1);
        out.push_str(&format!(
            "{}. {:<29} {}\n",
            position,
            heading(criterion, evaluation.hurwicz_alpha),
            format_decision(criterion, decision)
        ));
    }
    out
}

/// Regret table with one row per alternative and one column per state.
pub fn format_regret_table(engine: &DecisionMaker) -> String {
    let regrets = engine.regret_matrix();
    let cells: Vec<Vec<String>> = regrets
        .iter()
        .map(|row| row.iter().map(|v| v.to_string()).collect())
        .collect();

    let label_width = engine
        .alternatives()
        .iter()
        .map(String::len)
        .chain(std::iter::once("Alternative".len()))
        .max()
        .unwrap_or_default();
    let widths: Vec<usize> = engine
        .states()
        .iter()
        .enumerate()
        .map(|(col, state)| {
            cells
                .iter()
                .map(|row| row[col].len())
                .chain(std::iter::once(state.len()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let mut out = String::from("\n--- Regret Matrix ---\n");
    out.push_str(&format!("{:<width$}", "Alternative", width = label_width));
    for (state, width) in engine.states().iter().zip(&widths) {
        out.push_str(&format!("  {:>width$}", state, width = *width));
    }
    out.push('\n');

    for (label, row) in engine.alternatives().iter().zip(&cells) {
        out.push_str(&format!("{:<width$}", label, width = label_width));
        for (cell, width) in row.iter().zip(&widths) {
            out.push_str(&format!("  {:>width$}", cell, width = *width));
        }
        out.push('\n');
    }
    out
}

/// Machine-readable result of an evaluation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub generated_at: DateTime<Utc>,
    pub alternatives: Vec<String>,
    pub states: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regret_matrix: Option<Vec<Vec<f64>>>,
    pub evaluation: Evaluation,
}

impl EvaluationReport {
    pub fn new(engine: &DecisionMaker, evaluation: Evaluation, include_regret: bool) -> Self {
        Self {
            generated_at: Utc::now(),
            alternatives: engine.alternatives().to_vec(),
            states: engine.states().to_vec(),
            matrix: engine.matrix().to_vec(),
            regret_matrix: include_regret.then(|| engine.regret_matrix()),
            evaluation,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
