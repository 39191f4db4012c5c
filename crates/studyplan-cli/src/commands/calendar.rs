//! Calendar view commands for CLI.

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use clap::Subcommand;
use colored::Colorize;
use studyplan_core::{calendar_marks, legend, legend_text, CalendarMark, DensityColor};

use super::PlanContext;

#[derive(Subcommand)]
pub enum CalendarAction {
    /// List highlighted days, colored by number of reviews
    Show {
        /// Only show this month (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,
        /// Print marks as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the color key
    Legend {
        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,
    },
}

fn parse_month(month: &str) -> Result<(i32, u32), String> {
    NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d")
        .map(|d| (d.year(), d.month()))
        .map_err(|e| format!("invalid month '{month}' (expected YYYY-MM): {e}"))
}

fn paint(text: &str, background: DensityColor, foreground: DensityColor) -> String {
    let (br, bg, bb) = background.rgb();
    let (fr, fg, fb) = foreground.rgb();
    text.on_truecolor(br, bg, bb)
        .truecolor(fr, fg, fb)
        .bold()
        .to_string()
}

fn render_mark(mark: &CalendarMark) -> String {
    let day = format!(" {} ", mark.date.format("%a %Y-%m-%d"));
    format!(
        "{}  [{}] {}",
        paint(&day, mark.background, mark.foreground),
        mark.count,
        mark.text
    )
}

pub fn run(action: CalendarAction, file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CalendarAction::Show {
            month,
            no_color,
            json,
        } => {
            let ctx = PlanContext::open(file)?;
            colored::control::set_override(ctx.config.calendar.color && !no_color);

            let month = month.as_deref().map(parse_month).transpose()?;
            let marks: Vec<CalendarMark> = calendar_marks(&ctx.engine.snapshot())
                .into_iter()
                .filter(|m| month.map_or(true, |(y, mo)| m.date.year() == y && m.date.month() == mo))
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&marks)?);
            } else if marks.is_empty() {
                println!("No reviews planned.");
            } else {
                for mark in &marks {
                    println!("{}", render_mark(mark));
                }
            }
        }
        CalendarAction::Legend { no_color } => {
            if no_color {
                println!("{}", legend_text());
            } else {
                println!("Color Key:");
                for (label, background, foreground) in legend() {
                    let swatch = format!(" {:<6} ", background.name());
                    println!("{} {label}", paint(&swatch, background, foreground));
                }
            }
        }
    }
    Ok(())
}
