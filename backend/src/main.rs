//! Backend entry-point: loads settings, selects the webinar store, and runs
//! the HTTP server.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use webinars_backend::demo_data::demo_webinar;
use webinars_backend::inbound::http::health::HealthState;
use webinars_backend::outbound::memory::InMemoryWebinarRepository;
use webinars_backend::outbound::persistence::{
    DbPool, DieselWebinarRepository, PoolConfig, run_pending_migrations,
};
use webinars_backend::settings::ServerSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let config = ServerConfig::new(bind_addr);
    let config = match settings.database_url() {
        Some(url) => config.with_db_pool(connect_database(url, &settings).await?),
        None => {
            info!("no database configured; webinars are kept in memory");
            config.with_in_memory_webinars(in_memory_store(&settings)?)
        }
    };

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}

async fn connect_database(url: &str, settings: &ServerSettings) -> std::io::Result<DbPool> {
    run_pending_migrations(url)
        .await
        .map_err(std::io::Error::other)?;

    let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.db_max_connections()))
        .await
        .map_err(|e| std::io::Error::other(format!("database pool: {e}")))?;

    if settings.seed_demo_webinar {
        let webinar = demo_webinar().map_err(std::io::Error::other)?;
        let inserted = DieselWebinarRepository::new(pool.clone())
            .insert_if_absent(&webinar)
            .await
            .map_err(std::io::Error::other)?;
        info!(webinar_id = %webinar.id(), inserted, "demo webinar seeded");
    }

    Ok(pool)
}

fn in_memory_store(settings: &ServerSettings) -> std::io::Result<Arc<InMemoryWebinarRepository>> {
    let store = InMemoryWebinarRepository::default();
    if settings.seed_demo_webinar {
        let webinar = demo_webinar().map_err(std::io::Error::other)?;
        info!(webinar_id = %webinar.id(), "demo webinar seeded");
        store.insert(webinar);
    }
    Ok(Arc::new(store))
}
