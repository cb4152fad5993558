/// Rank scored rows and slice the result window.
///
/// The returned sequence is the query row first, then the `k` most similar
/// other rows in descending score order; equal scores break ties by
/// ascending row index so repeated calls always produce the same order.
pub fn rank_rows(scores: &[f64], query_row: usize, k: usize) -> Vec<usize> {
    let mut others: Vec<usize> = (0..scores.len()).filter(|&i| i != query_row).collect();
    others.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));

    let mut ranked = Vec::with_capacity(k + 1);
    ranked.push(query_row);
    ranked.extend(others.into_iter().take(k));
    ranked
}
