//! Review planning commands for CLI.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use studyplan_core::{render_summary, PlanStore};

use super::PlanContext;

#[derive(Subcommand)]
pub enum PlanAction {
    /// Schedule reviews of a subject
    Add {
        /// Subject name
        subject: String,
        /// Start date as YYYY-MM-DD (default: today)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Print the planned session as JSON
        #[arg(long)]
        json: bool,
        /// Show the reviews without saving them
        #[arg(long)]
        dry_run: bool,
    },
    /// Show every scheduled date and its reviews
    Show {
        /// Print the plan in its persisted JSON form
        #[arg(long)]
        json: bool,
    },
    /// Remove every scheduled review
    Clear,
    /// Write the plan to another file
    Export {
        /// Destination JSON file
        path: PathBuf,
    },
    /// Replace the plan with the contents of another file
    Import {
        /// Source JSON file
        path: PathBuf,
    },
}

pub fn run(action: PlanAction, file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PlanAction::Add {
            subject,
            start,
            json,
            dry_run,
        } => {
            let mut ctx = PlanContext::open(file)?;
            let start = start.unwrap_or_else(|| Local::now().date_naive());
            let session = ctx.engine.plan(&subject, start)?;
            if !dry_run {
                ctx.persist()?;
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&session)?);
            } else {
                println!("Planned {} starting {start}:", session.subject);
                for entry in &session.entries {
                    println!("  {}  {}", entry.date, entry.label);
                }
                if !dry_run {
                    println!("Saved to {}", ctx.store.path().display());
                }
            }
        }
        PlanAction::Show { json } => {
            let ctx = PlanContext::open(file)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&ctx.engine.serialize())?);
            } else if ctx.engine.is_empty() {
                println!("No reviews planned.");
            } else {
                let snapshot = ctx.engine.snapshot();
                print!(
                    "{}",
                    render_summary(&snapshot, &ctx.config.summary.date_format)
                );
            }
        }
        PlanAction::Clear => {
            let ctx = PlanContext::open_empty(file)?;
            ctx.persist()?;
            println!("The study plan has been cleared.");
        }
        PlanAction::Export { path } => {
            let ctx = PlanContext::open(file)?;
            PlanStore::with_path(&path).save(&ctx.engine)?;
            println!("Exported {} dates to '{}'.", ctx.engine.len(), path.display());
        }
        PlanAction::Import { path } => {
            let mut ctx = PlanContext::open_empty(file)?;
            if !PlanStore::with_path(&path).load_into(&mut ctx.engine)? {
                return Err(format!("no plan file at '{}'", path.display()).into());
            }
            ctx.persist()?;
            println!("Imported {} dates from '{}'.", ctx.engine.len(), path.display());
        }
    }
    Ok(())
}
