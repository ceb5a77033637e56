//! Calendar page and static assets
//!
//! The UI itself is plain files on disk; this module only serves them.
//! Without a configured directory only the redirects are mounted.

use std::path::Path;
use std::sync::Arc;

use axum::{response::Redirect, routing::get, Router};
use tower_http::services::ServeFile;

use crate::http::server::AppState;

/// Entry page of the calendar UI
pub const INDEX_PATH: &str = "/Todo/Index";

/// GET / and GET /Todo - redirect to the calendar page
async fn to_index() -> Redirect {
    Redirect::to(INDEX_PATH)
}

/// Page routes. Assets other than the index are served by the router
/// fallback (see [`crate::http::build_router`]).
pub fn router(static_dir: Option<&Path>) -> Router<Arc<AppState>> {
    let router = Router::new()
        .route("/", get(to_index))
        .route("/Todo", get(to_index));

    match static_dir {
        Some(dir) => {
            tracing::info!(path = %dir.display(), "Serving calendar UI");
            router.route_service(INDEX_PATH, ServeFile::new(dir.join("index.html")))
        }
        None => router,
    }
}
