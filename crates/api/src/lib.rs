//! HTTP API server for cities and their points of interest.
//!
//! Provides REST endpoints under `/api/cities`, with structured logging
//! (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;

use std::any::Any;
use std::sync::Arc;

use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use domain::{CityService, PointOfInterestService};
use metrics_exporter_prometheus::PrometheusHandle;
use notifications::{CloudMailService, LocalMailService, MailService};
use store::CityStore;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use config::{AppEnvironment, Config};
use error::ApiError;
use routes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: CityStore + Clone + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/api/cities", get(routes::cities::list::<S>))
        .route("/api/cities/{city_id}", get(routes::cities::get::<S>))
        .route(
            "/api/cities/{city_id}/pointsofinterest",
            get(routes::points_of_interest::list::<S>)
                .post(routes::points_of_interest::create::<S>),
        )
        .route(
            "/api/cities/{city_id}/pointsofinterest/{id}",
            get(routes::points_of_interest::get::<S>)
                .put(routes::points_of_interest::update::<S>)
                .patch(routes::points_of_interest::partially_update::<S>)
                .delete(routes::points_of_interest::delete::<S>),
        )
        .with_state(state)
        .merge(metrics_router)
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AnyOrigin)
                .allow_headers(AnyOrigin),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state around a store and a mail service.
pub fn create_state<S: CityStore + Clone + 'static>(
    store: S,
    mail_service: Arc<dyn MailService>,
) -> Arc<AppState<S>> {
    Arc::new(AppState {
        city_service: CityService::new(store.clone()),
        point_of_interest_service: PointOfInterestService::new(store, mail_service),
    })
}

/// Picks the mail service for the configured environment.
pub fn mail_service_for(config: &Config) -> Arc<dyn MailService> {
    match config.environment {
        AppEnvironment::Development => Arc::new(LocalMailService::new(config.mail.clone())),
        AppEnvironment::Production => Arc::new(CloudMailService::new(config.mail.clone())),
    }
}

async fn not_found() -> ApiError {
    ApiError::NotFound("No route matches the requested path".to_string())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(format!("handler panicked: {detail}")).into_response()
}
