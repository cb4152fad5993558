use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;

use mixtape_server::catalog::Song;
use mixtape_server::config::{ArtifactFilesConfig, ArtifactPaths};
use mixtape_server::recommender::{load_engine, RecommendError, RecommenderEngine};

#[derive(clap::ValueEnum, Clone, Debug)]
enum Strategy {
    Content,
    Collaborative,
    Hybrid,
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the directory holding the recommendation artifacts.
    pub data_dir: PathBuf,

    /// Recommendation strategy to run.
    #[clap(long, value_enum, default_value = "content")]
    pub strategy: Strategy,

    /// How many recommendations to print.
    #[clap(short, long, default_value_t = 5)]
    pub k: usize,

    /// Content weight for the hybrid strategy.
    #[clap(long, default_value_t = 0.5)]
    pub weight_content_based: f64,
}

fn read_line(prompt: &str) -> Result<String> {
    println!("{}", prompt);
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_owned())
}

fn print_results(songs: &[Song]) {
    for (position, song) in songs.iter().enumerate() {
        if position == 0 {
            println!(
                "Currently playing: {} by {} - {}",
                song.name, song.artist, song.preview_url
            );
        } else {
            println!(
                "{}. {} by {} - {}",
                position, song.name, song.artist, song.preview_url
            );
        }
    }
    println!();
}

fn recommend(
    engine: &RecommenderEngine,
    args: &CliArgs,
    song: &str,
    artist: &str,
) -> Result<Vec<Song>, RecommendError> {
    match args.strategy {
        Strategy::Content => engine.recommend_content(song, artist, args.k),
        Strategy::Collaborative => engine.recommend_collaborative(song, artist, args.k),
        Strategy::Hybrid => {
            engine.recommend_hybrid(song, artist, args.k, args.weight_content_based)
        }
    }
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    println!(
        "Cli Recommend loading artifacts at {}...",
        cli_args.data_dir.display()
    );
    let paths = ArtifactPaths::resolve(&cli_args.data_dir, &ArtifactFilesConfig::default());
    let engine = load_engine(&paths)?;
    println!("Done!");

    loop {
        let song = read_line("Please enter a song name:")?;
        let artist = read_line("Please enter the artist name:")?;

        match recommend(&engine, &cli_args, &song, &artist) {
            Ok(songs) => {
                println!(
                    "Found {} recommendations for \"{}\" by \"{}\":\n",
                    songs.len().saturating_sub(1),
                    song,
                    artist
                );
                print_results(&songs);
            }
            Err(err) => println!("{}\n", err),
        }
    }
}
