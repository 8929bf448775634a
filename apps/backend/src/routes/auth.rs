use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::info;

use crate::auth::claims::Identity;
use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub token: String,
    pub expires_at: i64,
}

/// The identity decoded from the caller's token.
async fn me(identity: Identity) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(Envelope::ok(identity)))
}

/// Re-issue a token for the same subject and role with a fresh lifetime.
async fn refresh(
    identity: Identity,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (token, renewed) = app_state
        .codec
        .issue(identity.subject_id, identity.role, SystemTime::now())?;

    info!(
        subject_id = renewed.subject_id,
        expires_at = renewed.expires_at,
        "token refreshed"
    );

    Ok(HttpResponse::Ok().json(Envelope::ok(RefreshResponse {
        token,
        expires_at: renewed.expires_at,
    })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/me", web::get().to(me))
        .route("/refresh", web::post().to(refresh));
}
