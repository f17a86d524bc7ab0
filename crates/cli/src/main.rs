use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use pipeline::{
    get_available_recs, get_friends_unique_watched, get_most_watched_genre, get_new_rec_by_genre,
    get_rec_from_favorites, get_unique_watched, get_watched_avg_rating,
};
use profile::{Movie, Profile, create_movie};
use std::path::PathBuf;
use tracing::{info, warn};

/// Viewing Party - movie recommendations from you and your friends
#[derive(Parser)]
#[command(name = "viewing-party")]
#[command(about = "Movie recommendations from your watch history and your friends'", long_about = None)]
struct Cli {
    /// Path to the profile JSON document
    #[arg(
        short,
        long,
        env = "VIEWING_PARTY_PROFILE",
        default_value = "data/sample_profile.json"
    )]
    profile: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show list sizes, average rating and favorite genre
    Stats,

    /// List recommendations of one kind
    Recommend {
        /// Which recommendation query to run
        #[arg(long, value_enum, default_value_t = RecommendationKind::Available)]
        kind: RecommendationKind,
    },

    /// Move a title from the watchlist to the watched list (in memory only)
    Watch {
        /// Title to move
        #[arg(long)]
        title: String,

        /// Print the updated profile as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a movie and append it to a list (in memory only)
    Add {
        /// List to append to
        #[arg(long, value_enum)]
        list: TargetList,

        /// Movie title
        #[arg(long, default_value = "")]
        title: String,

        /// Movie genre
        #[arg(long, default_value = "")]
        genre: String,

        /// Movie rating (zero is rejected)
        #[arg(long, default_value_t = 0.0)]
        rating: f64,

        /// Streaming service carrying the movie
        #[arg(long)]
        host: Option<String>,

        /// Print the updated profile as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RecommendationKind {
    /// Friends' movies on one of your subscriptions
    Available,
    /// Friends' movies in your most watched genre
    Genre,
    /// Your favorites that no friend has watched
    Favorites,
    /// Everything friends watched that you have not
    Friends,
    /// Movies you watched that no friend has
    Unique,
}

impl RecommendationKind {
    fn run(self, profile: &Profile) -> Vec<Movie> {
        match self {
            Self::Available => get_available_recs(profile),
            Self::Genre => get_new_rec_by_genre(profile),
            Self::Favorites => get_rec_from_favorites(profile),
            Self::Friends => get_friends_unique_watched(profile),
            Self::Unique => get_unique_watched(profile),
        }
    }

    fn heading(self) -> &'static str {
        match self {
            Self::Available => "Available on your subscriptions:",
            Self::Genre => "New in your favorite genre:",
            Self::Favorites => "Favorites your friends have missed:",
            Self::Friends => "Watched by your friends, not by you:",
            Self::Unique => "Watched by you, not by your friends:",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum TargetList {
    Watched,
    Watchlist,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut profile = Profile::load_from_file(&cli.profile)
        .with_context(|| format!("Failed to load profile from {}", cli.profile.display()))?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Stats => handle_stats(&profile),
        Commands::Recommend { kind } => handle_recommend(&profile, kind),
        Commands::Watch { title, json } => handle_watch(&mut profile, &title, json)?,
        Commands::Add {
            list,
            title,
            genre,
            rating,
            host,
            json,
        } => handle_add(&mut profile, list, &title, &genre, rating, host, json)?,
    }

    Ok(())
}

/// Handle the 'stats' command
fn handle_stats(profile: &Profile) {
    println!("{}", "Profile:".bold().blue());
    println!("{}Watched: {}", "• ".green(), profile.watched.len());
    println!("{}Watchlist: {}", "• ".green(), profile.watchlist.len());
    println!("{}Favorites: {}", "• ".green(), profile.favorites.len());
    println!("{}Friends: {}", "• ".green(), profile.friends.len());

    let subscriptions: Vec<&str> = profile.subscriptions.iter().map(String::as_str).collect();
    println!("{}Subscriptions: {}", "• ".green(), subscriptions.join(", "));

    println!(
        "{}Average rating: {:.2}",
        "• ".cyan(),
        get_watched_avg_rating(profile)
    );
    println!(
        "{}Most watched genre: {}",
        "• ".cyan(),
        get_most_watched_genre(profile).unwrap_or("none yet")
    );
}

/// Handle the 'recommend' command
fn handle_recommend(profile: &Profile, kind: RecommendationKind) {
    let movies = kind.run(profile);
    info!(count = movies.len(), "recommendations computed");
    print_movies(kind.heading(), &movies);
}

/// Handle the 'watch' command
fn handle_watch(profile: &mut Profile, title: &str, json: bool) -> Result<()> {
    let watched_before = profile.watched.len();
    profile.watch_movie(title);

    if json {
        println!("{}", render_profile_json(profile)?);
        return Ok(());
    }

    if profile.watched.len() == watched_before {
        println!("{} '{}' is not on the watchlist", "✗".yellow(), title);
    } else {
        println!("{} Watched '{}'", "✓".green(), title);
    }

    print_movies("Watched:", &profile.watched);
    print_movies("Watchlist:", &profile.watchlist);
    Ok(())
}

/// Handle the 'add' command
fn handle_add(
    profile: &mut Profile,
    list: TargetList,
    title: &str,
    genre: &str,
    rating: f64,
    host: Option<String>,
    json: bool,
) -> Result<()> {
    let Some(mut movie) = create_movie(title, genre, rating) else {
        warn!(title, genre, rating, "movie rejected");
        bail!("A movie needs a non-empty title, a non-empty genre and a non-zero rating");
    };
    if let Some(host) = host.filter(|h| !h.is_empty()) {
        movie = movie.with_host(host);
    }

    match list {
        TargetList::Watched => profile.add_to_watched(movie),
        TargetList::Watchlist => profile.add_to_watchlist(movie),
    };

    if json {
        println!("{}", render_profile_json(profile)?);
    } else {
        match list {
            TargetList::Watched => print_movies("Watched:", &profile.watched),
            TargetList::Watchlist => print_movies("Watchlist:", &profile.watchlist),
        }
    }
    Ok(())
}

/// Serialize the in-memory profile for `--json` output
fn render_profile_json(profile: &Profile) -> Result<String> {
    profile
        .to_json_pretty()
        .context("Failed to serialize profile")
}

/// Helper function to format and print a list of movies
fn print_movies(heading: &str, movies: &[Movie]) {
    println!("{}", heading.bold().blue());
    if movies.is_empty() {
        println!("  (none)");
        return;
    }
    for (idx, movie) in movies.iter().enumerate() {
        let host = movie
            .host
            .as_deref()
            .map(|h| format!(" on {}", h))
            .unwrap_or_default();
        println!(
            "{}. {} [{}] - Rating: {:.1}{}",
            (idx + 1).to_string().green(),
            movie.title,
            movie.genre,
            movie.rating,
            host
        );
    }
}
