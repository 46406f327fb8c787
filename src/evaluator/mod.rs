pub mod scorer;
pub mod regret;
pub mod decision_maker;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use decision_maker::{DecisionMaker, DEFAULT_HURWICZ_ALPHA, DEFAULT_SUMMARY_ALPHA};

/// The five classical criteria for decisions under uncertainty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Maximax,
    Maximin,
    Hurwicz,
    MinimaxRegret,
    Laplace,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::Maximax,
        Criterion::Maximin,
        Criterion::Hurwicz,
        Criterion::MinimaxRegret,
        Criterion::Laplace,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Criterion::Maximax => "Maximax",
            Criterion::Maximin => "Maximin",
            Criterion::Hurwicz => "Hurwicz",
            Criterion::MinimaxRegret => "Minimax Regret",
            Criterion::Laplace => "Laplace",
        }
    }

    /// Short characterisation shown next to the name in menus.
    pub fn attitude(&self) -> &'static str {
        match self {
            Criterion::Maximax => "Optimistic",
            Criterion::Maximin => "Pessimistic",
            Criterion::Hurwicz => "Realism",
            Criterion::MinimaxRegret => "Opportunity Loss",
            Criterion::Laplace => "Equal Likelihood",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Criterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "maximax" | "optimistic" => Ok(Criterion::Maximax),
            "maximin" | "pessimistic" => Ok(Criterion::Maximin),
            "hurwicz" | "realism" => Ok(Criterion::Hurwicz),
            "minimaxregret" | "regret" | "savage" => Ok(Criterion::MinimaxRegret),
            "laplace" | "equallikelihood" => Ok(Criterion::Laplace),
            _ => Err(format!(
                "unknown criterion '{}' (expected maximax, maximin, hurwicz, minimax-regret or laplace)",
                s
            )),
        }
    }
}

/// The alternative a criterion recommends and the score it was chosen on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Zero-based row of the chosen alternative.
    pub index: usize,
    pub alternative: String,
    pub value: f64,
}

/// Results of every criterion against one matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub hurwicz_alpha: f64,
    pub results: BTreeMap<Criterion, Decision>,
}

impl Evaluation {
    pub fn get(&self, criterion: Criterion) -> Option<&Decision> {
        self.results.get(&criterion)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, &Decision)> {
        self.results.iter().map(|(criterion, decision)| (*criterion, decision))
    }
}
