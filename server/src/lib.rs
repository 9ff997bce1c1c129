use axum::{
  http::{
    header::CONTENT_TYPE,
    Request,
  },
  body::Body,
  response::Response,
  routing::get,
  Router,
};
use anyhow::Result;
use tracing_subscriber::EnvFilter;
use std::{path::Path, time::Duration};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use routes::{
  health,
  list_tracks,
  get_track_by_id,
  create_track,
  update_track,
  delete_track,
};
use std::sync::Arc;
use db::{init_db, setup_database, verify_connection};
use tower_http::{
  cors::{Any, CorsLayer}, trace::{self, TraceLayer}
};
use tracing::Span;
use tokio::signal;

pub mod config;
pub mod errors;
pub mod routes;
pub mod entities;
pub mod repositories;
pub mod utils;
pub mod db;

pub struct AppState {
  pub pool: Pool<SqliteConnectionManager>,
}

impl AppState {
  pub fn new(pool: Pool<SqliteConnectionManager>) -> Self {
    Self { pool }
  }
}

pub fn init_tracing() {
  tracing_subscriber::fmt()
    .compact()
    .with_env_filter(EnvFilter::from_env("TRACKLIB_LOG"))
    .init();
}

pub fn app(state: Arc<AppState>) -> Router {
  let api_routes = Router::new()
    .route("/tracks", get(list_tracks::route).post(create_track::route))
    .route(
      "/tracks/:track_id",
      get(get_track_by_id::route)
        .put(update_track::route)
        .delete(delete_track::route),
    );

  Router::new()
    .route("/", get(health::route))
    .nest("/api", api_routes)
    .with_state(state)
    .layer(
      TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
          let headers = request.headers();
          let user_agent = headers
            .get(axum::http::header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");
          let method = request.method().to_string();
          let uri = request.uri().to_string();

          tracing::info_span!("request", method, uri, user_agent)
        })
        .on_response(|response: &Response, latency: Duration, _span: &Span| {
          let status_code = response.status().as_u16();
          let latency = latency.as_millis();

          tracing::info!(
            message = "finished processing request",
            latency = latency,
            status_code = status_code,
          )
        })
        .on_failure(trace::DefaultOnFailure::new().level(tracing::Level::ERROR))
    )
    .layer(
      CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([CONTENT_TYPE])
    )
}

pub async fn serve(port: u16, database: &Path) -> Result<()> {
  init_tracing();

  let pool = init_db(database)?;

  match pool.get().map_err(anyhow::Error::from).and_then(|conn| verify_connection(&conn)) {
    Ok(_) => tracing::info!(message = "connected to database from server", path = %database.display()),
    Err(err) => tracing::error!(
      message = "unable to connect to database from server",
      path = %database.display(),
      error = format!("{:#}", err),
    ),
  }

  let state = Arc::new(AppState::new(pool));

  let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
  tracing::info!(message = "tracks server is listening", address = %listener.local_addr()?);
  axum::serve(listener, app(state))
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

pub fn setup(database: &Path) -> Result<()> {
  init_tracing();

  if let Err(err) = setup_database(database) {
    tracing::error!(message = "database setup error", error = format!("{:#}", err));
    return Err(err);
  }

  Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
