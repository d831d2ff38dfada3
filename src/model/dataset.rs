use std::collections::HashSet;

use crate::stats::GameRow;

/// Combine game-row collections into one working dataset, dropping exact
/// duplicates. Identity is full-row equality: overlapping queries return the
/// same game with identical fields, so this collapses them; two different
/// games that happen to match in every field would also collapse, which is an
/// accepted approximation.
///
/// First-occurrence order is preserved.
pub fn dedup_rows(collections: &[&[GameRow]]) -> Vec<GameRow> {
    let mut seen: HashSet<GameRow> = HashSet::new();
    let mut out = Vec::new();
    for rows in collections {
        for row in *rows {
            if seen.insert(row.clone()) {
                out.push(row.clone());
            }
        }
    }
    out
}

/// Sort newest game first. Applied before any "last N" truncation so the
/// selection never depends on the provider's default row order.
pub fn sort_newest_first(rows: &mut [GameRow]) {
    rows.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Games whose matchup text mentions the opponent's abbreviation.
/// Substring match, as the matchup string embeds the abbreviation in either
/// "XXX vs. YYY" or "XXX @ YYY" form.
pub fn filter_matchups(rows: &[GameRow], opponent_abbr: &str) -> Vec<GameRow> {
    rows.iter()
        .filter(|r| r.matchup.contains(opponent_abbr))
        .cloned()
        .collect()
}

/// Mean points across a set of games; `None` when empty.
pub fn average_points(rows: &[GameRow]) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    let total: u32 = rows.iter().map(|r| r.points).sum();
    Some(f64::from(total) / rows.len() as f64)
}
