use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{delete, get, patch, post};
use axum::Router;
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod policy;
pub mod services;
pub mod state;

use middleware::{require_admin, require_auth};
use state::AppState;

/// Build the full application router. Gates are composed per tier:
/// public routes carry none, protected routes the authentication gate,
/// elevated routes authentication plus the admin role check.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(public_routes())
        .merge(protected_routes())
        .merge(elevated_routes(state.clone()))
        .layer(cors_layer(&config::config().security.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    use handlers::public;

    Router::new()
        .route("/jwt", post(public::tokens::issue))
        .route("/add-user", post(public::users::add))
        .route("/user", get(public::users::get))
        .route("/pets", get(public::pets::available))
        .route("/category-all-pets", get(public::pets::search))
        .route("/pet/:id", get(public::pets::get))
        .route("/donation", get(public::donations::list))
        .route("/donation/:id", get(public::donations::get))
        .route("/collect-donation/:id", get(public::donations::collected))
}

fn protected_routes() -> Router<AppState> {
    use handlers::protected;

    Router::new()
        .route("/add-pet", post(protected::pets::add))
        .route("/my-pets", get(protected::pets::mine))
        .route("/update-pet", patch(protected::pets::update))
        .route("/delete-pet/:id", delete(protected::pets::delete))
        .route("/add-donation", post(protected::donations::add))
        .route("/my-added-donation", get(protected::donations::mine))
        .route("/update-donation", patch(protected::donations::update))
        .route("/create-payment-intent", post(protected::payments::create_intent))
        .route("/payment-success", post(protected::payments::success))
        .route("/payment-user/:id", get(protected::payments::for_campaign))
        .route("/my-donations", get(protected::payments::mine))
        .route("/delete-donation/:id", delete(protected::payments::delete))
        .route("/adopt", post(protected::adoptions::adopt))
        .route("/adoption-request", get(protected::adoptions::incoming))
        .route(
            "/reject-adoption-request/:id",
            delete(protected::adoptions::reject),
        )
        .route_layer(from_fn(require_auth))
}

fn elevated_routes(state: AppState) -> Router<AppState> {
    use handlers::elevated;

    Router::new()
        .route("/allusers", get(elevated::users::list))
        .route("/user-role-update", patch(elevated::users::set_role))
        .route("/allpets", get(elevated::pets::list))
        .route("/update-pet-status", patch(elevated::pets::set_status))
        .route("/pet-delete/:id", delete(elevated::pets::remove))
        .route("/all-donation", get(elevated::donations::list))
        .route("/update-donation-status", patch(elevated::donations::set_status))
        .route("/donation-delete/:id", delete(elevated::donations::remove))
        // Authentication gate is outermost so it runs before the role check
        .route_layer(from_fn_with_state(state, require_admin))
        .route_layer(from_fn(require_auth))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let parsed: Vec<axum::http::HeaderValue> =
        origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Adoptly API",
        "version": version,
        "description": "Pet adoption platform backend",
        "endpoints": {
            "public": "/jwt, /add-user, /user, /pets, /pet/:id, /category-all-pets, /donation[/:id], /collect-donation/:id",
            "protected": "/add-pet, /my-pets, /update-pet, /delete-pet/:id, /add-donation, /my-added-donation, /update-donation, /create-payment-intent, /payment-success, /payment-user/:id, /my-donations, /delete-donation/:id, /adopt, /adoption-request, /reject-adoption-request/:id (bearer token)",
            "elevated": "/allusers, /allpets, /all-donation, /user-role-update, /update-pet-status, /update-donation-status, /pet-delete/:id, /donation-delete/:id (bearer token + admin)",
        }
    }))
}

async fn health(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match database::pool::health_check(&state.pool).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
