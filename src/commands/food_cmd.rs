use colored::Colorize;

use crate::food::analysis::synergy::{RiskLevel, ScientificConsensus, SynergyAnalysis};
use crate::food::catalog::{SynergyRecord, GOAL_CHIPS, SAMPLE_FOODS, SUGGESTED_ACTIVATORS, SUGGESTED_BASES};
use crate::food::filter::{CategoryFilter, DATABASE_FILTERS};

pub fn print_records(records: &[&SynergyRecord]) {
    if records.is_empty() {
        println!("{}", "No combinations found. Try a different search or goal.".yellow());
        return;
    }

    for record in records {
        println!(
            "{:>3}. {} {} {}",
            record.rank,
            record.name.bold(),
            format!("[{}]", record.ingredients.join(" + ")).cyan(),
            format!("{} · {} · {}", record.amplification, record.domain, record.synergy_type.label()).dimmed(),
        );
    }
    println!("{}", format!("{} result(s)", records.len()).dimmed());
}

pub fn print_goals() {
    for chip in GOAL_CHIPS {
        println!("  {:<8} {}", chip.id, chip.label.dimmed());
    }
}

pub fn print_database_filters() {
    let labels: Vec<String> = DATABASE_FILTERS.iter().map(CategoryFilter::label).collect();
    println!("Filters: {}", labels.join(" | ").dimmed());
}

pub fn print_samples() {
    println!("🌱 Bases:      {}", SUGGESTED_BASES.join(", "));
    println!("⚡ Activators: {}", SUGGESTED_ACTIVATORS.join(", "));
    println!("📦 Samples:    {}", SAMPLE_FOODS.join(", "));
}

fn consensus_label(consensus: ScientificConsensus) -> String {
    let text = format!("{:?}", consensus);
    match consensus {
        ScientificConsensus::High => text.green().to_string(),
        ScientificConsensus::Medium => text.yellow().to_string(),
        ScientificConsensus::Low => text.red().to_string(),
    }
}

fn risk_label(risk: RiskLevel) -> String {
    let text = format!("{:?}", risk);
    match risk {
        RiskLevel::None | RiskLevel::Low => text.green().to_string(),
        RiskLevel::Moderate => text.yellow().to_string(),
        RiskLevel::High => text.red().to_string(),
    }
}

pub fn print_analysis(analysis: &SynergyAnalysis) {
    println!();
    println!(
        "🧬 {}  {}",
        analysis.synergy_name.bold(),
        format!("score {:.0} · magnitude {:.0} · {}", analysis.score, analysis.magnitude, analysis.amplification)
            .cyan()
    );
    println!(
        "   {} synergy ({}) · {} · consensus {} · risk {}",
        analysis.synergy_type,
        analysis.synergy_type.label(),
        analysis.impact_domain,
        consensus_label(analysis.scientific_consensus),
        risk_label(analysis.risk_level),
    );
    println!("\n{}", analysis.summary);
    println!("\n{} {}", "Mechanism:".bold(), analysis.mechanism);

    if !analysis.pros.is_empty() {
        println!("\n{}", "Pros".green().bold());
        for pro in &analysis.pros {
            println!("  + {}", pro);
        }
    }
    if !analysis.cons.is_empty() {
        println!("\n{}", "Cons".red().bold());
        for con in &analysis.cons {
            println!("  - {}", con);
        }
    }

    if !analysis.chart_data.is_empty() {
        println!("\n{}", "Benefit Index".bold());
        for entry in &analysis.chart_data {
            let bar = "█".repeat(entry.value.clamp(0.0, 10.0).round() as usize);
            if entry.is_combined_effect() {
                println!("  {:<20} {} {}", entry.name, bar.magenta().bold(), entry.value);
            } else {
                println!("  {:<20} {} {}", entry.name, bar.blue(), entry.value);
            }
        }
    }
    println!();
}
