use std::path::Path;

use colored::Colorize;

use sc_core::Season;

pub fn run(catalog: Option<&Path>, title: &str, season: Option<&str>) -> Result<(), String> {
    let session = super::open_session(catalog, title)?;
    let show = session
        .current_show()
        .ok_or_else(|| format!("show not found: \"{title}\""))?;

    let seasons: Vec<&Season> = match season {
        Some(label) => vec![
            show.season(label)
                .ok_or_else(|| format!("season not found: \"{label}\""))?,
        ],
        None => show.seasons.iter().collect(),
    };

    if seasons.is_empty() {
        println!("  No episodes recorded.");
        return Ok(());
    }

    for season in seasons {
        println!(
            "  {} {}",
            season.label.bold(),
            format!("({} episodes)", season.episodes.len()).dimmed()
        );
        for episode in &season.episodes {
            println!("    {episode}");
        }
        println!();
    }

    Ok(())
}
