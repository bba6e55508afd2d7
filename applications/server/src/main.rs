/// Tonearm Server - local music library server
use axum::{routing::get, Router};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tonearm_artwork::{ArtworkResolver, FolderArtResolver};
use tonearm_metadata::CatalogBuilder;
use tonearm_server::{api, config::ServerConfig, state::AppState};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tonearm-server")]
#[command(about = "Local music library server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Index a directory and print the catalog
    Scan {
        /// Directory path to scan
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tonearm_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config.as_deref()).await?;
        }
        Commands::Scan { path } => {
            scan(&path)?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<&Path>) -> anyhow::Result<()> {
    // Load configuration; refuse to start on a missing or placeholder
    // music directory
    let config = ServerConfig::load(config_path)?;
    config.validate()?;

    tracing::info!("Starting Tonearm server");
    tracing::info!("Serving music from: {}", config.library.music_dir.display());

    // One folder-art cache for the process lifetime, injected into
    // every catalog build
    let folder_art = Arc::new(FolderArtResolver::new());
    let catalog = Arc::new(CatalogBuilder::new(ArtworkResolver::new(folder_art)));
    let app_state = AppState::new(catalog, config.library.music_dir.clone());

    let app = create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(app_state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/tracks", get(api::tracks::list_tracks));

    // Static web player
    let web_dir = std::env::var("TONEARM_WEB_DIR")
        .unwrap_or_else(|_| "applications/server/web".to_string());

    Router::new()
        .nest("/api", api_routes)
        .route("/music/*path", get(api::media::serve_music))
        .fallback_service(ServeDir::new(web_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

fn scan(path: &Path) -> anyhow::Result<()> {
    let folder_art = Arc::new(FolderArtResolver::new());
    let catalog = CatalogBuilder::new(ArtworkResolver::new(folder_art));
    let tracks = catalog.build(path)?;

    println!("Indexed {} tracks under {}", tracks.len(), path.display());
    for track in &tracks {
        println!(
            "  [{}] {} - {} ({})",
            track.id, track.artist, track.title, track.album
        );
    }

    Ok(())
}
