/**
 * API Routes
 *
 * Paths and methods are fixed by the deployed client.
 *
 * ## Contacts
 * - `POST /contacts/add` - mutual add
 * - `POST /contacts/remove` - single-sided remove
 * - `GET /contacts/{userId}` - a user's list
 *
 * ## Message threads
 * - `POST /addMessage`
 * - `POST /getAllMessages`
 * - `POST /createSchema`
 *
 * ## Authentication
 * - `POST /register`
 * - `POST /login`
 * - `GET /me` - requires `Authorization: Bearer <token>`
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::contacts::{add_contact, get_contacts, remove_contact};
use crate::backend::server::state::AppState;
use crate::backend::threads::{append_message, create_thread, get_all_messages};

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Contact endpoints
        .route("/contacts/add", post(add_contact))
        .route("/contacts/remove", post(remove_contact))
        .route("/contacts/{user_id}", get(get_contacts))
        // Message thread endpoints
        .route("/addMessage", post(append_message))
        .route("/getAllMessages", post(get_all_messages))
        .route("/createSchema", post(create_thread))
        // Authentication endpoints
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(get_me))
}
