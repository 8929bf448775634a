//! Route wiring for test apps.
//!
//! Tests build `App::new().wrap(RequestTrace).configure(...)` themselves so the
//! service type stays inferred; these helpers supply the `configure` closures.

use actix_web::web;
use gallery_backend::{routes, AppState, TokenCodec};

/// The production route table and gates, plus the shared `AppState`.
pub fn production_routes(codec: &TokenCodec) -> impl FnOnce(&mut web::ServiceConfig) {
    let codec = codec.clone();
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(AppState {
            codec: codec.clone(),
        }));
        routes::configure(cfg, &codec);
    }
}
