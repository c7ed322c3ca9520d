//! App Router

use salvo::Router;

use crate::{auth, healthcheck, settings};

pub fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("api/auth")
                .push(Router::with_path("login").post(auth::login::handler))
                .push(Router::with_path("logout").post(auth::logout::handler))
                .push(Router::with_path("verify").get(auth::verify::handler)),
        )
        .push(
            Router::with_path("api/settings")
                .get(settings::get::handler)
                .push(
                    Router::new()
                        .hoop(auth::middleware::handler)
                        .put(settings::update::handler),
                ),
        )
}
