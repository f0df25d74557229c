//! # Rendering
//!
//! Terminal output for drivers and messages. Layout math (column widths,
//! truncation, padding) is Unicode-width aware so names with accents or wide
//! characters keep the table aligned. Points are shown with one decimal; the
//! file keeps full precision.

use colored::Colorize;
use pitlane::api::{CmdMessage, MessageLevel};
use pitlane::model::Driver;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 80;

const NUMBER_WIDTH: usize = 5;
const NAME_WIDTH: usize = 20;
const TEAM_WIDTH: usize = 18;
const NATIONALITY_WIDTH: usize = 15;
const AGE_WIDTH: usize = 5;
const POINTS_WIDTH: usize = 12;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn format_points(points: f64) -> String {
    format!("{:.1}", points)
}

/// The full driver table. Empty input renders nothing; the caller prints the
/// "no drivers" message.
pub fn render_driver_table(drivers: &[Driver]) -> String {
    if drivers.is_empty() {
        return String::new();
    }

    let rule = "=".repeat(LINE_WIDTH);
    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    let header = [
        cell("No.", NUMBER_WIDTH),
        cell("Name", NAME_WIDTH),
        cell("Team", TEAM_WIDTH),
        cell("Nat.", NATIONALITY_WIDTH),
        cell("Age", AGE_WIDTH),
        cell("Pts", POINTS_WIDTH),
    ]
    .join(" ");
    out.push_str(&format!("{}\n", header.trim_end().bold()));
    out.push_str(&rule);
    out.push('\n');

    for d in drivers {
        let row = [
            cell(&d.number.to_string(), NUMBER_WIDTH).yellow().to_string(),
            cell(&d.name, NAME_WIDTH),
            cell(&d.team, TEAM_WIDTH),
            cell(&d.nationality, NATIONALITY_WIDTH),
            cell(&d.age.to_string(), AGE_WIDTH),
            format_points(d.season_points),
        ]
        .join(" ");
        out.push_str(&row);
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

pub fn render_search_hits(drivers: &[Driver]) -> String {
    drivers
        .iter()
        .map(|d| {
            format!(
                "Found: {} {} ({}) - Points: {}\n",
                format!("#{}", d.number).yellow(),
                d.name,
                d.team,
                format_points(d.season_points)
            )
        })
        .collect()
}

pub fn render_standings(drivers: &[Driver]) -> String {
    drivers
        .iter()
        .enumerate()
        .map(|(i, d)| {
            format!(
                "{}. {} {} ({}) - {} Pts\n",
                i + 1,
                cell(&format!("#{}", d.number), NUMBER_WIDTH + 1).yellow(),
                d.name.bold(),
                d.team,
                format_points(d.season_points)
            )
        })
        .collect()
}

/// Pad `s` to exactly `width` columns, truncating with an ellipsis if needed.
fn cell(s: &str, width: usize) -> String {
    let fitted = if s.width() > width {
        truncate_to_width(s, width)
    } else {
        s.to_string()
    };
    let padding = width.saturating_sub(fitted.width());
    format!("{}{}", fitted, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(number: i64, name: &str, team: &str, season_points: f64) -> Driver {
        Driver {
            number,
            name: name.to_string(),
            team: team.to_string(),
            age: 40,
            nationality: "British".to_string(),
            podiums: 0,
            entries: 0,
            championships: 0,
            career_points: 0.0,
            season_points,
        }
    }

    fn hamilton() -> Driver {
        driver(44, "Lewis Hamilton", "Ferrari", 120.0)
    }

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn cells_pad_and_truncate_by_display_width() {
        assert_eq!(cell("Ferrari", 10), "Ferrari   ");
        assert_eq!(cell("Kimi Räikkönen", 14), "Kimi Räikkönen");
        assert_eq!(cell("Andrea Kimi Antonelli", 10), "Andrea Ki…");
        assert_eq!(cell("Andrea Kimi Antonelli", 10).width(), 10);
    }

    #[test]
    fn table_has_header_rows_and_rules() {
        plain();
        let table = render_driver_table(&[hamilton()]);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "=".repeat(LINE_WIDTH));
        assert!(lines[1].starts_with("No.   Name"));
        assert!(lines[3].starts_with("44    Lewis Hamilton"));
        assert!(lines[3].ends_with("120.0"));
    }

    #[test]
    fn empty_table_renders_nothing() {
        assert!(render_driver_table(&[]).is_empty());
    }

    #[test]
    fn standings_are_numbered_from_one() {
        plain();
        let out = render_standings(&[driver(4, "Lando Norris", "McLaren", 200.0), hamilton()]);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "1. #4     Lando Norris (McLaren) - 200.0 Pts");
        assert_eq!(lines[1], "2. #44    Lewis Hamilton (Ferrari) - 120.0 Pts");
    }

    #[test]
    fn search_hits_show_points_with_one_decimal() {
        plain();
        let out = render_search_hits(&[driver(16, "Charles Leclerc", "Ferrari", 94.26)]);
        assert_eq!(out, "Found: #16 Charles Leclerc (Ferrari) - Points: 94.3\n");
    }
}
