//! Debug script to run every operation against the live site
//!
//! Run with: RUST_LOG=iwaatch_core=debug cargo run --example debug_search -p iwaatch-core -- "inception"

use iwaatch_core::IwaatchScraper;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let keyword = std::env::args().nth(1).unwrap_or_else(|| "inception".to_string());
    let scraper = IwaatchScraper::new()?;

    println!("Searching for '{}'...\n", keyword);

    let results = scraper.search(&keyword).await;
    if results.is_fallback() {
        println!("Search failed, see log output");
        return Ok(());
    }

    let movies = results.into_payload();
    if movies.is_empty() {
        println!("No results found!");
        return Ok(());
    }

    println!("Found {} results:\n", movies.len());
    for (i, movie) in movies.iter().take(5).enumerate() {
        println!("{}. {}", i + 1, movie.title);
        println!("   Page: {}", movie.href);
        println!("   Poster: {}", movie.image);
    }

    let movie = &movies[0];
    println!("\nDetails for: {}", movie.title);
    for detail in scraper.fetch_details(&movie.href).await.payload() {
        println!("   {}", detail.description);
        println!("   {}", detail.aliases);
        println!("   {}", detail.airdate);
    }

    println!("\nEpisodes:\n{}", scraper.list_episodes(&movie.href).to_json());

    let bundle = scraper.resolve_stream(&movie.href).await;
    println!("\nStreams:");
    for stream in &bundle.payload().streams {
        println!("   {} -> {}", stream.title, stream.url);
    }
    if !bundle.payload().subtitles.is_empty() {
        println!("   Arabic subtitles: {}", bundle.payload().subtitles);
    }

    Ok(())
}
