use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use riverview_api::{AppState, AppStateInner, mail::Mailer, router};
use riverview_db::{Database, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "riverview=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let db_path = std::env::var("RIVERVIEW_DB_PATH").unwrap_or_else(|_| "riverview.db".into());
    let host = std::env::var("RIVERVIEW_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("RIVERVIEW_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;

    // Init database and seed reference data before serving
    let db = Database::open(&PathBuf::from(&db_path))?;
    let seeded = seed::seed_rooms(&db)?;
    if seeded > 0 {
        info!("Seeded {} rooms", seeded);
    }

    let mailer = Mailer::from_env();

    let state: AppState = Arc::new(AppStateInner { db, mailer });

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Riverview server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
