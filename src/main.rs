use clap::Parser;
use scoutx_api::RestApi;
use scoutx_engine::SimilarityEngine;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// An in-memory player similarity engine
#[derive(Parser, Debug)]
#[command(name = "scoutx")]
#[command(about = "Find football players similar to a given player", long_about = None)]
struct Args {
    /// Path to the player CSV file
    #[arg(short, long, default_value = "./data/players.csv")]
    data: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 8000)]
    http_port: u16,

    /// Number of similar players returned per query
    #[arg(short = 'k', long, default_value_t = scoutx_engine::DEFAULT_NEIGHBORS)]
    neighbors: usize,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Run an interactive query loop on stdin instead of the HTTP server
    #[arg(long)]
    interactive: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting ScoutX v{}", env!("CARGO_PKG_VERSION"));
    info!("Player data: {:?}", args.data);
    info!("Neighbors per query: {}", args.neighbors);

    // The whole pipeline runs here; a failure aborts before any serving.
    let engine = Arc::new(SimilarityEngine::build(&args.data, args.neighbors)?);
    info!(
        "Indexed {} players into {} fused features",
        engine.player_count(),
        engine.feature_count()
    );

    if args.interactive {
        return run_query_loop(&engine);
    }

    let engine_http = engine.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(engine_http, http_port).await {
                eprintln!("HTTP server error: {}", e);
            }
        })
    });

    info!("ScoutX started successfully");
    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}

fn run_query_loop(engine: &SimilarityEngine) -> anyhow::Result<()> {
    let stdin = io::stdin();
    loop {
        print!("\nEnter player name (or 'quit' to exit): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        if name.eq_ignore_ascii_case("quit") {
            break;
        }

        match engine.find_similar(name) {
            Ok(players) => {
                println!("\nMost similar players to {}:", name);
                println!(
                    "{:<28} {:>3} {:>4} {:<16} {:<20} {:>7}",
                    "name", "age", "ovr", "position", "club", "score"
                );
                for p in players {
                    println!(
                        "{:<28} {:>3} {:>4} {:<16} {:<20} {:>7.4}",
                        p.name, p.age, p.overall, p.best_position, p.club, p.similarity_score
                    );
                }
            }
            Err(e) if e.is_client_error() => {
                println!("\nPlayer '{}' not found in database.", name);
            }
            Err(e) => {
                println!("\nAn error occurred: {}", e);
            }
        }
    }
    Ok(())
}
