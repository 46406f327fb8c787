use super::scorer::row_max;

/// Best payoff reachable in each state, across all alternatives.
pub fn column_maxima(matrix: &[Vec<f64>]) -> Vec<f64> {
    let cols = matrix.first().map_or(0, Vec::len);

    (0..cols)
        .map(|col| {
            matrix
                .iter()
                .map(|row| row[col])
                .fold(f64::NEG_INFINITY, f64::max)
        })
        .collect()
}

/// Opportunity loss of every cell: the column's best payoff minus the cell.
pub fn regret_matrix(matrix: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let best = column_maxima(matrix);

    matrix
        .iter()
        .map(|row| {
            row.iter()
                .zip(&best)
                .map(|(payoff, best)| best - payoff)
                .collect()
        })
        .collect()
}

/// Worst regret each alternative can suffer.
pub fn max_regrets(regrets: &[Vec<f64>]) -> Vec<f64> {
    regrets.iter().map(|row| row_max(row)).collect()
}
