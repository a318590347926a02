use std::{sync::Arc, time::Duration};

use gatekeep_cors::{Cors, CorsOptions, ValidationError};

pub type SharedCors = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ValidationError> {
    let options = CorsOptions::new()
        .allow_wildcard(true)
        .allow_origins(["http://app.example.com", "http://*.example.dev"])
        .allow_methods(["GET", "POST", "OPTIONS"])
        .allow_headers(["Content-Type", "X-Requested-With", "X-Example-Trace"])
        .expose_headers(["X-Example-Trace"])
        .allow_credentials(true)
        .max_age(Duration::from_secs(600))
        .reject_disallowed(true);

    let cors = Arc::new(Cors::new(options)?);

    Ok(AppState {
        cors,
        greeting: "Welcome to the gatekeep_cors Axum demo!",
    })
}

pub mod middleware;
