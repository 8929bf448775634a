use actix_web::{web, HttpResponse};

use crate::auth::claims::Identity;
use crate::error::AppError;
use crate::routes::auth::Envelope;

/// Admin panel session check; only reachable through the admin role guard.
async fn whoami(identity: Identity) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(Envelope::ok(identity)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/whoami", web::get().to(whoami));
}
