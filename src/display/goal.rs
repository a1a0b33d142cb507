//! Goal display formatting
//!
//! Renders savings goals with a text progress bar.

use chrono::NaiveDate;

use crate::models::GoalProgress;

const BAR_WIDTH: usize = 20;

/// A fixed-width bar for a percentage in [0, 100]
pub fn progress_bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Format a single goal line
pub fn format_goal_row(goal: &GoalProgress, currency: &str, today: NaiveDate) -> String {
    let g = &goal.goal;
    let mut line = format!(
        "{:<8} {:<20} {} {:>5.1}%  {} / {}",
        g.id.to_string(),
        g.name,
        progress_bar(goal.progress),
        goal.progress,
        g.current_amount.format_with_symbol(currency),
        g.target_amount.format_with_symbol(currency)
    );

    match g.days_until_deadline(today) {
        Some(days) if days < 0 => line.push_str(&format!("  (overdue by {} days)", -days)),
        Some(days) => line.push_str(&format!("  ({} days left)", days)),
        None => {}
    }

    line
}

/// Format a list of goals
pub fn format_goal_list(goals: &[GoalProgress], currency: &str, today: NaiveDate) -> String {
    if goals.is_empty() {
        return "No goals yet.\n".to_string();
    }

    let mut output = String::new();
    for goal in goals {
        output.push_str(&format_goal_row(goal, currency, today));
        output.push('\n');
    }
    output
}

/// Format goal details
pub fn format_goal_details(goal: &GoalProgress, currency: &str) -> String {
    let g = &goal.goal;
    let mut output = String::new();

    output.push_str(&format!("Goal: {}\n", g.name));
    output.push_str(&format!("  ID:        {}\n", g.id));
    output.push_str(&format!(
        "  Target:    {}\n",
        g.target_amount.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "  Saved:     {}\n",
        g.current_amount.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "  Remaining: {}\n",
        goal.remaining.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "  Progress:  {} {:.1}%\n",
        progress_bar(goal.progress),
        goal.progress
    ));

    if let Some(deadline) = g.deadline {
        output.push_str(&format!("  Deadline:  {}\n", deadline.format("%Y-%m-%d")));
    }

    output
}
