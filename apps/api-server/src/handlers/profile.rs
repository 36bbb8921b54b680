//! Profile section handlers.

use actix_web::{HttpResponse, web};

use hilite_core::validation::validate_bio;
use hilite_shared::dto::UpdateBioRequest;

use super::auth::user_response;
use super::not_found;
use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// PUT /api/profile/bio - an empty bio clears it.
pub async fn update_bio(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<UpdateBioRequest>,
) -> AppResult<HttpResponse> {
    let bio = validate_bio(&body.bio)?;

    let user = state
        .users
        .update_bio(identity.user_id, bio)
        .await
        .map_err(not_found("User", identity.user_id))?;

    tracing::info!(user_id = %user.id, "Bio updated");

    Ok(HttpResponse::Ok().json(user_response(&user)))
}
