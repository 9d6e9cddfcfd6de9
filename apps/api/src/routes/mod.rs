pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::auth::handlers as auth;
use crate::catalog::handlers as catalog;
use crate::participation::handlers as participation;
use crate::recommendation::handlers as recommendation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Sessions
        .route(
            "/api/v1/session",
            post(auth::handle_login)
                .get(auth::handle_current_session)
                .delete(auth::handle_logout),
        )
        .route("/api/v1/signup", post(auth::handle_signup))
        // Events
        .route(
            "/api/v1/events",
            get(catalog::handle_list_events).post(catalog::handle_create_event),
        )
        .route("/api/v1/events/:id", get(catalog::handle_get_event))
        .route("/api/v1/categories", get(catalog::handle_list_categories))
        // Participation
        .route(
            "/api/v1/events/:id/registration",
            put(participation::handle_register).delete(participation::handle_unregister),
        )
        .route(
            "/api/v1/events/:id/reminder",
            put(participation::handle_set_reminder).delete(participation::handle_unset_reminder),
        )
        .route(
            "/api/v1/events/:id/messages",
            post(participation::handle_send_message).get(participation::handle_list_messages),
        )
        .route(
            "/api/v1/me/registrations",
            get(participation::handle_my_registrations),
        )
        // Recommendations
        .route(
            "/api/v1/recommendations",
            post(recommendation::handle_recommend),
        )
        .with_state(state)
}
