use std::path::Path;

use colored::Colorize;

pub fn run(catalog: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;
    let issues = catalog.audit();

    if issues.is_empty() {
        println!("  All checks passed.");
    } else {
        for issue in &issues {
            println!("  {} {issue}", "issue:".yellow());
        }
        println!();
        println!("  {} issues found (reported only, nothing was changed)", issues.len());
    }

    let relationships: usize = catalog.shows().map(|s| s.relationships.len()).sum();
    println!(
        "  {} shows, {} relationships",
        catalog.len(),
        relationships
    );

    Ok(())
}
