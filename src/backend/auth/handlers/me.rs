/**
 * Current User Handler
 *
 * GET /me. Echoes the id behind the bearer token; `CurrentUser` does the
 * verification and rejects with 401.
 */

use axum::response::Json;

use crate::backend::middleware::CurrentUser;
use crate::shared::identity::MeResponse;

pub async fn get_me(CurrentUser(user_id): CurrentUser) -> Json<MeResponse> {
    Json(MeResponse { id: user_id })
}
