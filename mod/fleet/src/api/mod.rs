pub mod moto;
pub mod tag;
pub mod yard;

use std::sync::Arc;

use axum::Router;

use crate::service::FleetService;

/// Shared application state.
pub type AppState = Arc<FleetService>;

/// Build the fleet API router, mounted under `/api/v1`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(yard::routes())
        .merge(moto::routes())
        .merge(tag::routes())
}

/// Render the fixed part of a collection URL query string (filters and
/// sort), ready to be suffixed with `page=&pageSize=`. Pairs with a
/// `None` value are omitted; values are percent-encoded.
pub(crate) fn query_prefix(pairs: &[(&str, Option<&str>)]) -> String {
    let mut out = String::new();
    for (key, value) in pairs {
        if let Some(value) = value {
            out.push_str(key);
            out.push('=');
            out.push_str(&urlencoding::encode(value));
            out.push('&');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_prefix_skips_absent_pairs() {
        let prefix = query_prefix(&[
            ("search", Some("Central")),
            ("sortBy", None),
            ("sortDir", Some("desc")),
        ]);
        assert_eq!(prefix, "search=Central&sortDir=desc&");
        assert_eq!(query_prefix(&[("search", None)]), "");
    }

    #[test]
    fn query_prefix_percent_encodes_values() {
        let prefix = query_prefix(&[("search", Some("Patio Central"))]);
        assert_eq!(prefix, "search=Patio%20Central&");

        let prefix = query_prefix(&[("search", Some("a&b=c"))]);
        assert_eq!(prefix, "search=a%26b%3Dc&");
    }
}
