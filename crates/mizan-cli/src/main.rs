//! Mizan CLI - daily habit and reflection check-ins
//!
//! # Usage
//! ```bash
//! mizan checkin --done Fajr --done Dhuhr --mood serene --reflection "Calm day."
//! mizan status
//! mizan dashboard --from 2025-07-01 --to 2025-07-31
//! mizan habits
//! ```

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use colored::Colorize;
use mizan_core::{
    dashboard_view, trailing_streak, CheckIn, Config, Journal, JournalRecord, LexiconSentiment,
    Mood, SaveOutcome,
};
use std::path::PathBuf;

mod render;

/// Mizan - Daily Habit & Reflection Tracker
#[derive(Parser)]
#[command(name = "mizan", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the config file
    #[arg(short, long, value_name = "FILE", default_value = "mizan.toml")]
    config: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Record today's check-in
    Checkin {
        /// Habit completed today; repeatable, required or bonus, case-insensitive
        #[arg(long = "done", value_name = "HABIT")]
        done: Vec<String>,

        /// Today's mood: radiant, neutral, frustrated, tearful, serene (or the emoji)
        #[arg(long, default_value = "neutral")]
        mood: Mood,

        /// Free-text reflection
        #[arg(long, default_value = "")]
        reflection: String,

        /// Compute scores and suggestions without saving
        #[arg(long)]
        dry_run: bool,

        /// Output in JSON format for integrations
        #[arg(long)]
        json: bool,
    },

    /// Show today's entry and current streaks
    Status {
        /// Output in JSON format for integrations
        #[arg(long)]
        json: bool,
    },

    /// Summarize the journal: score trend, moods, habit consistency
    Dashboard {
        /// First day to include (inclusive)
        #[arg(long, value_name = "YYYY-MM-DD")]
        from: Option<NaiveDate>,

        /// Last day to include (inclusive)
        #[arg(long, value_name = "YYYY-MM-DD")]
        to: Option<NaiveDate>,

        /// Output in JSON format for integrations
        #[arg(long)]
        json: bool,
    },

    /// List the tracked habit catalogs
    Habits,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_target(false)
            .init();
    }

    let config = Config::load_or_default(&cli.config);

    match cli.command {
        Commands::Checkin {
            done,
            mood,
            reflection,
            dry_run,
            json,
        } => run_checkin(&config, &done, mood, &reflection, dry_run, json),
        Commands::Status { json } => run_status(&config, json),
        Commands::Dashboard { from, to, json } => run_dashboard(&config, from, to, json),
        Commands::Habits => run_habits(&config),
    }
}

fn run_checkin(
    config: &Config,
    done: &[String],
    mood: Mood,
    reflection: &str,
    dry_run: bool,
    json: bool,
) -> anyhow::Result<()> {
    let required_catalog = config.required_catalog();
    let bonus_catalog = config.bonus_catalog();

    let mut required = required_catalog.empty_set();
    let mut bonus = bonus_catalog.empty_set();
    for name in done {
        if let Some(habit) = required_catalog.resolve(name) {
            required.set_completed(habit, true);
        } else if let Some(habit) = bonus_catalog.resolve(name) {
            bonus.set_completed(habit, true);
        } else {
            anyhow::bail!("Unknown habit '{name}'. Run `mizan habits` to list trackable habits.");
        }
    }

    let checkin = CheckIn::new(required, bonus, mood, reflection);
    let eval = checkin
        .evaluate(&LexiconSentiment)
        .context("Failed to evaluate check-in")?;
    let record = JournalRecord::from_checkin(&checkin, &eval, Utc::now());

    if !json {
        render::print_evaluation(&eval);
    }

    // The evaluation above stays valid and displayed even when the save
    // below fails; persistence is a separate failure domain.
    let journal = Journal::new(&config.journal_path);
    let saved = if dry_run {
        "dry_run"
    } else {
        match journal.append_checked(&record) {
            Ok(SaveOutcome::Saved) => "saved",
            Ok(SaveOutcome::AlreadyLogged) => "already_logged",
            Err(err) => {
                if json {
                    print_checkin_json(&record, "failed");
                } else {
                    eprintln!(
                        "{} {}",
                        "Could not save the entry:".red().bold(),
                        err.to_string().red()
                    );
                }
                return Err(err).context("Failed to append to the journal");
            }
        }
    };

    if json {
        print_checkin_json(&record, saved);
    } else {
        match saved {
            "saved" => println!(
                "\n{} {}",
                "Entry saved to".green(),
                config.journal_path.display().to_string().green()
            ),
            "already_logged" => println!(
                "\n{}",
                "Today is already logged; keeping the original entry.".yellow()
            ),
            _ => println!("\n{}", "Dry run: nothing was saved.".dimmed()),
        }
    }

    Ok(())
}

fn print_checkin_json(record: &JournalRecord, saved: &str) {
    println!(
        "{}",
        serde_json::json!({
            "timestamp": record.timestamp.to_rfc3339(),
            "mood": record.mood,
            "sentiment_score": record.sentiment_score,
            "alignment_score": record.alignment_score,
            "recommendations": record.recommendations,
            "saved": saved,
        })
    );
}

fn run_status(config: &Config, json: bool) -> anyhow::Result<()> {
    let journal = Journal::new(&config.journal_path);
    let history = journal.load().context("Failed to read the journal")?;

    let today = Utc::now().date_naive();
    let todays = history.iter().find(|r| r.logical_day() == today);

    let required_catalog = config.required_catalog();
    let streaks: Vec<(String, usize)> = required_catalog
        .names()
        .map(|habit| (habit.to_string(), trailing_streak(&history, habit)))
        .collect();

    if json {
        println!(
            "{}",
            serde_json::json!({
                "today": todays,
                "streaks": streaks
                    .iter()
                    .map(|(habit, days)| serde_json::json!({ "habit": habit, "days": days }))
                    .collect::<Vec<_>>(),
            })
        );
        return Ok(());
    }

    match todays {
        Some(record) => render::print_today(record),
        None => println!(
            "{}",
            "No check-in recorded today. Run `mizan checkin` to log one.".yellow()
        ),
    }
    render::print_streaks(&streaks);
    Ok(())
}

fn run_dashboard(
    config: &Config,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    json: bool,
) -> anyhow::Result<()> {
    let journal = Journal::new(&config.journal_path);
    let history = journal.load().context("Failed to read the journal")?;

    let view = dashboard_view(&history, from, to, &config.required_catalog());

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    render::print_dashboard(&view);
    Ok(())
}

fn run_habits(config: &Config) -> anyhow::Result<()> {
    println!("{}", "Required habits".bold());
    for habit in config.required_catalog().names() {
        println!("  {habit}");
    }
    println!();
    println!("{}", "Bonus habits".bold());
    for habit in config.bonus_catalog().names() {
        println!("  {habit}");
    }
    Ok(())
}
