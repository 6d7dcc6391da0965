// order_service/src/main.rs

use anyhow::Context;
use actix_web::{web as actix_data, App, HttpServer};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use order_service::config::{AppConfig, LogFormat};
use order_service::services::{HttpNotifier, PgOrderStore, PgUserStore};
use order_service::state::{AppState, Services};
use order_service::web::configure_app_routes;

fn init_tracing(format: LogFormat) {
  // RUST_LOG overrides the default level.
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt().with_env_filter(filter);
  match format {
    LogFormat::Text => builder.init(),
    LogFormat::Json => builder.json().init(),
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;
  init_tracing(app_config.log_format);

  tracing::info!("Starting order service...");

  let db_pool = PgPoolOptions::new()
    .max_connections(app_config.database_max_connections)
    .connect(&app_config.database_url)
    .await
    .context("Failed to connect to the database")?;
  tracing::info!(max_connections = app_config.database_max_connections, "Connected to the database.");

  if app_config.run_migrations {
    sqlx::migrate!("./migrations")
      .run(&db_pool)
      .await
      .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied.");
  }

  let notifier = HttpNotifier::new(app_config.notification_url.clone(), app_config.notifier_timeout)
    .context("Failed to build the notification client")?;
  tracing::info!(endpoint = notifier.endpoint(), "Notification client ready.");

  let services = Services {
    users: Arc::new(PgUserStore::new(db_pool.clone())),
    orders: Arc::new(PgOrderStore::new(db_pool.clone())),
    notifier: Arc::new(notifier),
  };
  let app_state = AppState::new(services);

  let server_address = (app_config.server_host.clone(), app_config.server_port);
  tracing::info!(host = %server_address.0, port = server_address.1, "Binding HTTP server.");

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(TracingLogger::default())
      .configure(configure_app_routes)
  })
  .bind(server_address)
  .context("Failed to bind the HTTP server")?
  .run()
  .await
  .context("HTTP server terminated with an error")?;

  tracing::info!("Server stopped; closing the database pool.");
  db_pool.close().await;
  Ok(())
}
