use crate::stats::GameRow;

/// Width of the feature space: five box-score stats plus the venue flag.
pub const NUM_FEATURES: usize = 6;

/// Build the feature matrix and label vector for a points-threshold model.
///
/// Each row becomes `[points, rebounds, assists, steals, blocks, home_flag]`.
/// The venue flag describes the *upcoming* game, not the historical one, so
/// the same 0/1 value is broadcast to every row. Labels are 1 when the row's
/// points strictly exceed the threshold.
pub fn build_features(
    rows: &[GameRow],
    threshold: u32,
    home: bool,
) -> (Vec<[f64; NUM_FEATURES]>, Vec<u8>) {
    let home_flag = if home { 1.0 } else { 0.0 };
    let features = rows
        .iter()
        .map(|r| {
            [
                f64::from(r.points),
                f64::from(r.rebounds),
                f64::from(r.assists),
                f64::from(r.steals),
                f64::from(r.blocks),
                home_flag,
            ]
        })
        .collect();
    let labels = rows
        .iter()
        .map(|r| u8::from(r.points > threshold))
        .collect();
    (features, labels)
}

/// The point the fitted model is evaluated at: the threshold value in the
/// points slot and zeros elsewhere, plus the venue flag. This mirrors the
/// original tool's behavior verbatim; see DESIGN.md for why it is kept.
pub fn query_point(threshold: u32, home: bool) -> [f64; NUM_FEATURES] {
    [
        f64::from(threshold),
        0.0,
        0.0,
        0.0,
        0.0,
        if home { 1.0 } else { 0.0 },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(points: u32) -> GameRow {
        GameRow {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            matchup: "LAL vs. BOS".into(),
            points,
            rebounds: 8,
            assists: 7,
            steals: 2,
            blocks: 1,
        }
    }

    #[test]
    fn labels_are_strict_greater_than() {
        let rows = vec![row(19), row(20), row(21)];
        let (_, labels) = build_features(&rows, 20, true);
        assert_eq!(labels, vec![0, 0, 1]);
    }

    #[test]
    fn home_flag_is_broadcast_to_every_row() {
        let rows = vec![row(10), row(30), row(25)];
        let (home_x, _) = build_features(&rows, 20, true);
        let (away_x, _) = build_features(&rows, 20, false);
        assert!(home_x.iter().all(|f| f[5] == 1.0));
        assert!(away_x.iter().all(|f| f[5] == 0.0));
    }

    #[test]
    fn feature_row_carries_box_score_in_order() {
        let (x, _) = build_features(&[row(33)], 20, false);
        assert_eq!(x[0], [33.0, 8.0, 7.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn query_point_places_target_in_points_column() {
        // Known quirk carried over from the original tool: the target value
        // is substituted into the points feature, with zeros for the rest of
        // the stat line, rather than querying at an expected stat line.
        assert_eq!(query_point(20, true), [20.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(query_point(35, false), [35.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }
}
