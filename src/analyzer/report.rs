//! Console report formatting for analysis results

use console::style;

use super::efficiency::{EfficiencyRating, Rating};
use super::issues::{Issue, Severity};
use super::load::{Demand, LoadPrediction};
use super::recommendation::Recommendation;
use super::schedule::HeatingSchedule;
use crate::fmt::format_temp;

fn rule() {
    println!("{}", style("─".repeat(60)).dim());
}

/// Print the efficiency score followed by detected issues
pub fn print_efficiency_report(rating: &EfficiencyRating, issues: &[Issue]) {
    println!();
    println!("{}", style("Efficiency Rating").bold().underlined());
    println!();

    let label = match rating.rating {
        Rating::Excellent | Rating::VeryGood => style(rating.rating.label()).green().bold(),
        Rating::Good => style(rating.rating.label()).cyan().bold(),
        Rating::Fair => style(rating.rating.label()).yellow().bold(),
        Rating::Poor => style(rating.rating.label()).red().bold(),
    };
    println!(
        "  {} {}/100  {}",
        style("Score:").bold(),
        style(rating.score).bold(),
        label
    );
    println!();

    if issues.is_empty() {
        println!("  {} No issues detected", style("✓").green());
        println!();
        return;
    }

    println!("{}", style("ISSUES:").bold());
    rule();
    for issue in issues {
        let tag = match issue.severity {
            Severity::High => style(format!("[{}]", issue.severity)).red().bold(),
            Severity::Medium => style(format!("[{}]", issue.severity)).yellow().bold(),
            Severity::Low => style(format!("[{}]", issue.severity)).dim(),
        };
        println!("  {:<9} {}", tag, issue.message);
        println!("            {} {}", style("→").dim(), style(&issue.action).green());
    }
    rule();
    println!();
}

/// Print a load prediction
pub fn print_load_report(prediction: &LoadPrediction) {
    println!();
    println!("{}", style("Heating Load Forecast").bold().underlined());
    println!();
    println!(
        "  {:<18} {}",
        style("Temperature gap:").bold(),
        format_temp(prediction.temp_difference)
    );
    println!(
        "  {:<18} ×{}",
        style("Humidity factor:").bold(),
        prediction.humidity_factor
    );
    println!(
        "  {:<18} {}",
        style("Predicted load:").bold(),
        style(prediction.predicted_load).cyan()
    );
    println!(
        "  {:<18} {} h",
        style("Heating hours:").bold(),
        style(prediction.estimated_hours).cyan()
    );
    println!(
        "  {:<18} {:.2}",
        style("Estimated cost:").bold(),
        style(prediction.estimated_cost).yellow().bold()
    );
    println!();

    let advice = match prediction.demand {
        Demand::High => style(prediction.recommendation.as_str()).yellow(),
        Demand::Normal => style(prediction.recommendation.as_str()).green(),
    };
    println!("  {}", advice);
    println!();
}

/// Print the daily schedule
pub fn print_schedule_report(schedule: &HeatingSchedule) {
    println!();
    println!("{}", style("Heating Schedule").bold().underlined());
    println!();
    for slot in &schedule.slots {
        println!(
            "  {}  {:<10} {}",
            style(&slot.time).cyan(),
            slot.period.name(),
            style(format_temp(slot.target_temp)).bold()
        );
    }
    println!();
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{}", style(title).bold());
    for (i, item) in items.iter().enumerate() {
        println!("  {}. {}", i + 1, item);
    }
    println!();
}

/// Print a structured recommendation
pub fn print_recommendation(rec: &Recommendation) {
    println!();
    print_list("IMMEDIATE STEPS:", &rec.immediate_steps);
    print_list("WEEKLY STRATEGIES:", &rec.weekly_strategies);
    print_list("MAINTENANCE:", &rec.maintenance);

    println!("{}", style("TEMPERATURE SETTINGS:").bold());
    let t = &rec.temperature_settings;
    println!("  occupied    {}", format_temp(t.occupied));
    println!("  unoccupied  {}", format_temp(t.unoccupied));
    println!("  sleeping    {}", format_temp(t.sleeping));
    println!("  minimum     {}", format_temp(t.minimum));
    println!();

    println!(
        "  {} ~{}%   {} {}",
        style("Energy savings:").bold(),
        style(rec.energy_savings_percent).green().bold(),
        style("Cost:").bold(),
        rec.cost_reduction
    );
    println!();
}
