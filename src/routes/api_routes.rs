/**
 * API Route Table
 *
 * This module wires every /api endpoint to its handler.
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/signup` - create account
 * - `POST /api/login`  - authenticate
 * - all blog endpoints (see below)
 *
 * ## Protected (bearer token required)
 * - `GET /api/me`
 * - `PUT /api/profile`
 * - `PUT /api/personal`
 * - `PUT /api/password`
 *
 * Protected routes sit behind the `require_auth` middleware, so a missing
 * token is rejected with 401 and an invalid one with 403 before any
 * handler runs.
 */

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::auth::handlers::{
    change_password, get_me, login, signup, update_personal, update_profile,
};
use crate::blog::handlers::{
    create_blog, delete_blog, get_blog, list_blogs, list_blogs_by_author, update_blog,
};
use crate::middleware::auth::require_auth;
use crate::server::state::AppState;

/// Configure the /api routes
pub fn configure_api_routes(app_state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/me", get(get_me))
        .route("/api/profile", put(update_profile))
        .route("/api/personal", put(update_personal))
        .route("/api/password", put(change_password))
        .route_layer(middleware::from_fn_with_state(app_state, require_auth));

    // The blog endpoints are public, matching the shipped behavior: callers
    // are not required to own a post to update or delete it. A missing
    // ownership check, kept as-is rather than silently changed.
    Router::new()
        .route("/api/signup", post(signup))
        .route("/api/login", post(login))
        .route("/api/blogs", post(create_blog).get(list_blogs))
        .route(
            "/api/blogs/{id}",
            get(get_blog).put(update_blog).delete(delete_blog),
        )
        .route("/api/myblogs/{user_id}", get(list_blogs_by_author))
        .merge(protected)
}
