use actix_web::web;

use crate::auth::claims::Role;
use crate::auth::jwt::TokenCodec;
use crate::middleware::{AuthGate, OptionalAuthGate, RequireRole};

pub mod admin;
pub mod auth;
pub mod gallery;
pub mod health;

/// Register every route with its gates.
///
/// Shared by `main.rs` and the integration tests so both exercise the same
/// gate wiring. Within a scope actix runs the last `.wrap` first, so the
/// admin scope authenticates before it checks the role.
pub fn configure(cfg: &mut web::ServiceConfig, codec: &TokenCodec) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Authenticated user routes: /api/auth/**
    cfg.service(
        web::scope("/api/auth")
            .wrap(AuthGate::new(codec.clone()))
            .configure(auth::configure_routes),
    );

    // Admin panel routes: /api/admin/**
    cfg.service(
        web::scope("/api/admin")
            .wrap(RequireRole::new(Role::Admin))
            .wrap(AuthGate::new(codec.clone()))
            .configure(admin::configure_routes),
    );

    // Public catalog routes personalized for logged-in viewers: /api/gallery/**
    cfg.service(
        web::scope("/api/gallery")
            .wrap(OptionalAuthGate::new(codec.clone()))
            .configure(gallery::configure_routes),
    );
}
