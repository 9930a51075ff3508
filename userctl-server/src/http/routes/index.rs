//! Root banner

use axum::{routing::get, Router};

/// Plain-text banner served at `/`
pub const BANNER: &str = "userctl: users CRUD service";

/// GET /
async fn index() -> &'static str {
    BANNER
}

/// Index routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn index_returns_banner() {
        assert_eq!(index().await, "userctl: users CRUD service");
    }
}
