//! Hello Route
//!
//! - GET /hello?name=X - plain-text greeting

use axum::extract::Query;

use crate::api::dto::HelloParams;

/// GET /hello?name=X
///
/// Greets the caller by name. A missing name renders `Hello !`.
pub async fn hello(Query(params): Query<HelloParams>) -> String {
    format!("Hello {}!", params.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hello_with_name() {
        let body = hello(Query(HelloParams {
            name: "World".to_string(),
        }))
        .await;
        assert_eq!(body, "Hello World!");
    }

    #[tokio::test]
    async fn test_hello_without_name() {
        let body = hello(Query(HelloParams {
            name: String::new(),
        }))
        .await;
        assert_eq!(body, "Hello !");
    }
}
