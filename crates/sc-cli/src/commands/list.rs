use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(catalog: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Title",
        "Genre",
        "Ratings",
        "Characters",
        "Seasons",
        "Episodes",
        "Quiz",
    ]);

    for show in catalog.shows() {
        let ratings: Vec<String> = show.ratings.iter().map(|r| r.to_string()).collect();
        table.add_row(vec![
            show.title.clone(),
            show.genre.clone(),
            ratings.join(", "),
            show.characters.len().to_string(),
            show.seasons.len().to_string(),
            show.episode_count().to_string(),
            show.quiz.len().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} shows", catalog.len());

    Ok(())
}
