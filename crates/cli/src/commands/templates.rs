//! List the available lesson templates

use anyhow::Result;
use colored::Colorize;

use crate::templates::TEMPLATES;

pub fn run() -> Result<()> {
    println!();
    for template in TEMPLATES {
        println!("  {} — {}", template.id.bold(), template.title.cyan());
        println!("    {}", template.description);
        println!(
            "    {}",
            format!("{} \u{2022} {}", template.duration, template.best_for).dimmed()
        );
        println!();
    }
    println!(
        "  Use {} to pick one.",
        "plansmith generate --template <id>".bold()
    );
    Ok(())
}
