//! Terminal rendering for evaluations and the dashboard

use colored::Colorize;
use mizan_core::{
    AlignmentBand, DashboardSummary, DashboardView, Evaluation, JournalRecord, SentimentBand,
};

const BAR_WIDTH: usize = 20;

/// A unit-interval value as a fixed-width bar
fn score_bar(score: f64) -> String {
    let filled = (score.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Print the sentiment line, alignment line, and suggestions for one evaluation
pub fn print_evaluation(eval: &Evaluation) {
    let sentiment = format!(
        "{} (score: {})",
        eval.sentiment_band().describe(),
        eval.sentiment_score
    );
    match eval.sentiment_band() {
        SentimentBand::Positive => println!("{}", sentiment.green()),
        SentimentBand::Neutral => println!("{sentiment}"),
        SentimentBand::Negative => println!("{}", sentiment.yellow()),
    }

    let alignment = format!(
        "{} (score: {})",
        eval.alignment_band().describe(),
        eval.alignment_score
    );
    match eval.alignment_band() {
        AlignmentBand::High => println!("{}", alignment.green()),
        AlignmentBand::Moderate => println!("{}", alignment.cyan()),
        AlignmentBand::Low => println!("{}", alignment.yellow()),
    }

    println!();
    if eval.recommendations.is_empty() {
        println!("{}", "You're doing great! No suggestions for tomorrow.".green());
    } else {
        println!("{}", "Suggested habits for tomorrow:".bold());
        for habit in &eval.recommendations {
            println!("  - {habit}");
        }
    }
}

/// Print today's recorded entry
pub fn print_today(record: &JournalRecord) {
    println!("{}", "Today's check-in".bold());
    println!("  mood       {}", record.mood);
    println!("  sentiment  {}", record.sentiment_score);
    println!(
        "  alignment  {}  {}",
        record.alignment_score,
        score_bar(record.alignment_score)
    );
    let completed: Vec<&str> = record
        .habits
        .iter()
        .filter(|e| e.completed)
        .map(|e| e.name.as_str())
        .collect();
    if !completed.is_empty() {
        println!("  completed  {}", completed.join(", "));
    }
    if !record.recommendations.is_empty() {
        println!("  tomorrow   {}", record.recommendations.join(", "));
    }
}

/// Print current trailing streaks
pub fn print_streaks(streaks: &[(String, usize)]) {
    println!();
    println!("{}", "Streaks".bold());
    for (habit, days) in streaks {
        let line = format!("  {habit:<14} {days} day{}", if *days == 1 { "" } else { "s" });
        if *days > 0 {
            println!("{}", line.green());
        } else {
            println!("{}", line.dimmed());
        }
    }
}

/// Print the full dashboard view
pub fn print_dashboard(view: &DashboardView) {
    match view {
        DashboardView::NoData => println!(
            "{}",
            "No journal entries yet. Record your first check-in with `mizan checkin`.".yellow()
        ),
        DashboardView::EmptyRange => println!(
            "{}",
            "The journal has entries, but none in the selected date range.".yellow()
        ),
        DashboardView::Summary(summary) => print_summary(summary),
    }
}

fn print_summary(summary: &DashboardSummary) {
    println!("{}", "Progress Dashboard".bold());
    println!(
        "  {} entries, average alignment {}",
        summary.entries, summary.average_alignment
    );

    println!();
    println!("{}", "Alignment over time".bold());
    for point in &summary.alignment_series {
        println!(
            "  {}  {:>5}  {}",
            point.timestamp.date_naive(),
            point.score,
            score_bar(point.score)
        );
    }

    println!();
    println!("{}", "Mood trends".bold());
    let most = summary
        .mood_counts
        .iter()
        .map(|m| m.count)
        .max()
        .unwrap_or(1);
    for mood in &summary.mood_counts {
        println!(
            "  {}  {:>3}  {}",
            mood.mood,
            mood.count,
            "█".repeat(BAR_WIDTH * mood.count / most.max(1))
        );
    }

    println!();
    println!("{}", "Habit consistency".bold());
    for total in &summary.habit_totals {
        println!(
            "  {:<14} {:>3}/{}",
            total.habit, total.completed, summary.entries
        );
    }

    println!();
    println!("{}", "Required habit streaks".bold());
    for streak in &summary.streaks {
        let line = format!(
            "  {:<14} {} day{}",
            streak.habit,
            streak.days,
            if streak.days == 1 { "" } else { "s" }
        );
        if streak.days > 0 {
            println!("{}", line.green());
        } else {
            println!("{}", line.dimmed());
        }
    }
}
