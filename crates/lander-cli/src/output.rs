//! Terminal output formatting.

use colored::Colorize;
use lander_core::content::model::CampaignContent;

/// Print campaign content.
pub fn print_content(content: &CampaignContent) {
    println!("{}", content.headline.cyan().bold());
    println!("{}", content.subheadline);
    println!();

    println!(
        "{}: {} {}",
        "Button".bold(),
        content.button_text.yellow(),
        format!("→ {}", content.button_link).dimmed()
    );

    if !content.benefits.is_empty() {
        println!();
        println!("{}", "Benefits".bold());
        for (i, benefit) in content.benefits.iter().enumerate() {
            println!("  {}. {}", i + 1, benefit);
        }
    }

    if !content.social_proof.is_empty() {
        println!();
        println!("{}", "Social Proof".bold());
        for proof in &content.social_proof {
            println!("  \"{}\"", proof.quote);
            println!("    {} {}", "—".dimmed(), proof.author.dimmed());
        }
    }
}
