use colored::Colorize;
use std::fmt::Write;

use crate::ranking::{Ranking, RankingRow};

const NAME_WIDTH: usize = 24;

/// Renders every category as a plain-text table, in category order.
/// An empty ranking renders as an empty string.
pub fn render_text(ranking: &Ranking) -> String {
    let mut out = String::new();

    for (category, rows) in ranking {
        if !out.is_empty() {
            out.push('\n');
        }
        render_category(&mut out, category, rows);
    }

    out
}

fn render_category(out: &mut String, category: &str, rows: &[RankingRow]) {
    let _ = writeln!(out, "{}", format!("Category {}", category).bold());
    let header = format!(
        "{:>3}  {:<width$}  {:>6}  {:>6}  {:>4}",
        "#",
        "Player",
        "Points",
        "Played",
        "Won",
        width = NAME_WIDTH
    );
    let _ = writeln!(out, "{}", header.underline());

    for row in rows {
        let line = format!(
            "{:>3}  {:<width$}  {:>6}  {:>6}  {:>4}",
            row.position,
            truncate(&row.name, NAME_WIDTH),
            row.points,
            row.tournaments_played,
            row.tournaments_won,
            width = NAME_WIDTH
        );

        if row.is_placeholder() {
            let _ = writeln!(out, "{}", line.dimmed());
        } else {
            let _ = writeln!(out, "{}", line);
        }
    }
}

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        return name.to_string();
    }
    let mut short: String = name.chars().take(width - 1).collect();
    short.push('…');
    short
}
