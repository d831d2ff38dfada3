use crate::model::{PredictionReport, Verdict};
use crate::stats::GameRow;

/// Print a titled fixed-width table of game rows.
pub fn print_games(title: &str, rows: &[GameRow]) {
    println!("\n{}:", title);
    if rows.is_empty() {
        println!("  (no games)");
        return;
    }
    println!(
        "  {:<12} {:<14} {:>4} {:>4} {:>4} {:>4} {:>4}",
        "GAME_DATE", "MATCHUP", "PTS", "REB", "AST", "STL", "BLK"
    );
    for row in rows {
        println!(
            "  {:<12} {:<14} {:>4} {:>4} {:>4} {:>4} {:>4}",
            row.date.format("%Y-%m-%d"),
            row.matchup,
            row.points,
            row.rebounds,
            row.assists,
            row.steals,
            row.blocks
        );
    }
}

pub fn print_average(label: &str, average: Option<f64>) {
    match average {
        Some(avg) => println!("{}: {:.2}", label, avg),
        None => println!("{}: n/a", label),
    }
}

/// Print the final verdict with accuracy and confidence when the modeled
/// path ran; the degenerate path carries neither.
pub fn print_prediction(player: &str, threshold: u32, report: &PredictionReport) {
    let direction = match report.verdict {
        Verdict::Over => "above",
        Verdict::Under => "below",
    };
    println!(
        "\nThe model predicts {} will score {} {} points.",
        player, direction, threshold
    );
    if let Some(accuracy) = report.cv_accuracy {
        println!("Cross-validated model accuracy: {:.2}%", accuracy * 100.0);
    }
    if let Some(confidence) = report.confidence {
        println!(
            "Model confidence in scoring above {} points: {:.2}%",
            threshold,
            confidence * 100.0
        );
    }
    if report.cv_accuracy.is_none() && report.confidence.is_none() {
        println!(
            "(every historical game fell on the same side of {} points, so no model was trained)",
            threshold
        );
    }
}
