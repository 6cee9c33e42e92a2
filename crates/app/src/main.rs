use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tower_cookies::Key;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use app::config::prepare_sqlite_file;
use app::{AppState, Cli, Command, build_router};
use services::{AppServices, Clock, Seeder};
use storage::repository::Storage;

const DEFAULT_LOG_DIRECTIVES: &[&str] = &["app=info", "services=info", "storage=info"];

fn init_tracing() -> Result<(), tracing_subscriber::filter::ParseError> {
    let mut filter = EnvFilter::from_default_env();
    for directive in DEFAULT_LOG_DIRECTIVES {
        filter = filter.add_directive(directive.parse()?);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;
    let cli = Cli::parse();

    // Open + migrate SQLite in the binary glue so core/services stay pure.
    let db_url = cli.database_url(std::env::var("DATABASE_URL").ok())?;
    prepare_sqlite_file(&db_url)?;

    match cli.command() {
        Command::Seed => {
            let storage = Storage::sqlite(&db_url).await?;
            let report = Seeder::new(
                Arc::clone(&storage.vocabulary),
                Arc::clone(&storage.questions),
            )
            .seed_if_empty()
            .await?;
            println!("seeded {db_url}: {report}");
            Ok(())
        }
        Command::Serve => {
            let key = cli.session_key()?.unwrap_or_else(|| {
                warn!("SESSION_SECRET not set; sessions will not survive a restart");
                Key::generate()
            });
            let services = AppServices::new_sqlite(&db_url, Clock::default_clock()).await?;
            let router = build_router(AppState::new(services, key));

            let listener = TcpListener::bind(cli.bind).await?;
            info!(addr = %listener.local_addr()?, db = %db_url, "listening");
            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
            Ok(())
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
