//! Per-row statistics and the selection rule shared by every criterion.

/// Whether a criterion wants the largest or the smallest score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    Maximize,
    Minimize,
}

pub fn row_max(row: &[f64]) -> f64 {
    row.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

pub fn row_min(row: &[f64]) -> f64 {
    row.iter().copied().fold(f64::INFINITY, f64::min)
}

pub fn row_mean(row: &[f64]) -> f64 {
    row.iter().sum::<f64>() / row.len() as f64
}

/// Blend of best and worst case, weighted by `alpha` towards the best case.
pub fn hurwicz_score(row: &[f64], alpha: f64) -> f64 {
    alpha * row_max(row) + (1.0 - alpha) * row_min(row)
}

/// Index and value of the best score. Ties keep the earliest index because
/// only a strictly better score replaces the current pick.
pub fn select_best(scores: &[f64], objective: Objective) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for (index, &score) in scores.iter().enumerate() {
        let better = match best {
            None => !score.is_nan(),
            Some((_, current)) => match objective {
                Objective::Maximize => score > current,
                Objective::Minimize => score < current,
            },
        };
        if better {
            best = Some((index, score));
        }
    }

    best
}
