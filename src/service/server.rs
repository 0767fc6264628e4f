//! HTTP transport for the [`Dispatcher`] built on axum.
//!
//! Every path goes through a single fallback handler. `GET` requests are
//! dispatched on the blocking pool because the first request for a
//! dictionary may build its word list and index; `HEAD` answers with the
//! JSON content type and no body.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use log::info;
use tokio::net::TcpListener;

use crate::error::{Result, WordhoardError};
use crate::service::dispatcher::Dispatcher;
use crate::service::response::{CONTENT_TYPE_JSON, EncodedResponse};

impl IntoResponse for EncodedResponse {
    fn into_response(self) -> Response {
        match self.body {
            Some(body) => {
                (self.status, [(header::CONTENT_TYPE, CONTENT_TYPE_JSON)], body).into_response()
            }
            None => self.status.into_response(),
        }
    }
}

/// Router serving every operation of `dispatcher`.
pub fn router(dispatcher: Arc<Dispatcher>) -> Router {
    Router::new().fallback(handle).with_state(dispatcher)
}

async fn handle(
    State(dispatcher): State<Arc<Dispatcher>>,
    method: Method,
    uri: Uri,
) -> Response {
    if method == Method::HEAD {
        return (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE_JSON)]).into_response();
    }
    if method != Method::GET {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let path = uri.path().to_string();
    let query = uri.query().map(str::to_string);
    let worker = Arc::clone(&dispatcher);

    let outcome = tokio::task::spawn_blocking(move || worker.dispatch(&path, query.as_deref()))
        .await
        .unwrap_or_else(|err| {
            Err(WordhoardError::internal(format!(
                "request task failed: {err}"
            )))
        });

    dispatcher.encoder().encode(outcome).into_response()
}

/// Serve `dispatcher` on `addr` until the process exits.
pub async fn serve(addr: SocketAddr, dispatcher: Arc<Dispatcher>) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(dispatcher)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ResourceCache;
    use crate::dictionary::{DictionaryRegistry, DictionarySource};
    use crate::service::ServiceConfig;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    fn app(debug: bool) -> Router {
        let registry = DictionaryRegistry::new().with_entry(
            "en",
            DictionarySource::Words(vec!["act".into(), "cat".into()]),
        );
        let cache = Arc::new(ResourceCache::with_defaults(registry));
        let config = ServiceConfig::default().with_debug(debug);
        router(Arc::new(Dispatcher::new(cache, config)))
    }

    async fn send(
        app: Router,
        method: Method,
        uri: &str,
    ) -> (StatusCode, Option<String>, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|value| value.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_get_permutations() {
        let (status, content_type, body) =
            send(app(false), Method::GET, "/permutations?word=tca&dict=en").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some(CONTENT_TYPE_JSON));
        assert_eq!(body, r#"["act","cat"]"#);
    }

    #[tokio::test]
    async fn test_unknown_path() {
        let (status, _, body) = send(app(true), Method::GET, "/nowhere").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_error_detail_only_in_debug() {
        let (status, _, body) = send(app(false), Method::GET, "/regex?dict=en").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.is_empty());

        let (status, _, body) = send(app(true), Method::GET, "/regex?dict=en").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("missing parameter: word"));
    }

    #[tokio::test]
    async fn test_head_and_other_methods() {
        let (status, content_type, _) = send(app(false), Method::HEAD, "/anything").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some(CONTENT_TYPE_JSON));

        let (status, _, _) = send(app(false), Method::POST, "/dicts").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
