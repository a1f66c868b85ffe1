use axum::{
    http::Method,
    routing::{get, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod location;
pub mod offers;
pub mod saved;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // The browser UI is served from elsewhere; let it talk to us.
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
        ]);

    Router::new()
        .route("/v1/offers", get(offers::list_offers))
        .route("/v1/offers/{id}", get(offers::get_offer))
        .route("/v1/filters", get(offers::list_filters))
        .route("/v1/saved", get(saved::list_saved))
        .route(
            "/v1/saved/{id}",
            put(saved::save_offer).delete(saved::remove_saved),
        )
        .route("/v1/location/current", get(location::current_location))
        .route("/v1/location/name", get(location::locality_name))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
