use crate::error::AppError;
use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

/// `Json` extractor whose rejections use the service's `{"error": ...}` body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        tracing::warn!(status = %rejection.status(), %message, "request body rejected");
        AppError::BadRequest(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        count: u32,
    }

    fn request(body: &'static str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let ApiJson(payload) = ApiJson::<Payload>::from_request(request(r#"{"count": 3}"#), &())
            .await
            .unwrap();
        assert_eq!(payload.count, 3);
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        match ApiJson::<Payload>::from_request(request(r#"{"count": "#), &()).await {
            Err(AppError::BadRequest(msg)) => assert!(!msg.is_empty()),
            other => panic!("Expected BadRequest, got {:?}", other.map(|p| p.0)),
        }
    }

    #[tokio::test]
    async fn test_wrong_shape_is_bad_request() {
        let result = ApiJson::<Payload>::from_request(request(r#"{"count": -1}"#), &()).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
