use axum::Router;

pub mod health;
pub mod items;

/// Creates the API routes served at the root of the server.
///
/// This function takes a reference to AppState and initializes the domain
/// services. Returns a stateless Router (all sub-routers have state already
/// applied). Only Arc pointer clones remain when domains extract db
/// connections (cheap).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().merge(items::router(state))
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// This router has state applied and can be merged with the stateless app
/// router from `create_router`. The /ready endpoint checks the database
/// connection.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
