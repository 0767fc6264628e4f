//! Encoding operation results and errors into wire responses.

use axum::http::StatusCode;
use serde::Serialize;

use crate::dictionary::DictionaryId;
use crate::error::{ErrorKind, Result, WordhoardError};

/// Content type of every JSON body the service sends.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Output of a successful operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    /// Matching words.
    Words(Vec<String>),
    /// A status token such as `"Done"`.
    Status(String),
    /// Known dictionary identifiers, sorted.
    Dictionaries(Vec<DictionaryId>),
}

/// A transport-neutral response: status plus an optional JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedResponse {
    pub status: StatusCode,
    /// Serialized JSON; `None` means an empty body.
    pub body: Option<Vec<u8>>,
}

#[derive(Serialize)]
struct Diagnostic {
    message: &'static str,
    detail: String,
}

/// Maps outcomes to responses.
///
/// Error bodies carry the cause only when debug mode is on.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseEncoder {
    debug: bool,
}

impl ResponseEncoder {
    pub fn new(debug: bool) -> Self {
        ResponseEncoder { debug }
    }

    pub fn encode(&self, outcome: Result<Reply>) -> EncodedResponse {
        match outcome {
            Ok(reply) => self.success(&reply),
            Err(err) => self.failure(&err),
        }
    }

    fn success(&self, reply: &Reply) -> EncodedResponse {
        match serde_json::to_vec(reply) {
            Ok(body) => EncodedResponse {
                status: StatusCode::OK,
                body: Some(body),
            },
            Err(err) => self.failure(&WordhoardError::from(err)),
        }
    }

    fn failure(&self, err: &WordhoardError) -> EncodedResponse {
        let status = status_for(err.kind());
        if status == StatusCode::NOT_FOUND || !self.debug {
            return EncodedResponse { status, body: None };
        }

        let diagnostic = Diagnostic {
            message: "Request processing error.",
            detail: err.to_string(),
        };
        EncodedResponse {
            status,
            body: serde_json::to_vec(&diagnostic).ok(),
        }
    }
}

/// HTTP status for an error class.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::BadRequest | ErrorKind::UnknownDictionary => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_json(response: &EncodedResponse) -> serde_json::Value {
        serde_json::from_slice(response.body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn test_success_payloads() {
        let encoder = ResponseEncoder::default();

        let response = encoder.encode(Ok(Reply::Words(vec!["act".into(), "cat".into()])));
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body.as_deref(), Some(&b"[\"act\",\"cat\"]"[..]));

        let response = encoder.encode(Ok(Reply::Status("Done".into())));
        assert_eq!(response.body.as_deref(), Some(&b"\"Done\""[..]));

        let response = encoder.encode(Ok(Reply::Dictionaries(vec![])));
        assert_eq!(response.body.as_deref(), Some(&b"[]"[..]));
    }

    #[test]
    fn test_errors_hide_detail_by_default() {
        let encoder = ResponseEncoder::default();

        let response = encoder.encode(Err(WordhoardError::internal("disk on fire")));
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body, None);

        let response = encoder.encode(Err(WordhoardError::unknown_dictionary("xx")));
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body, None);
    }

    #[test]
    fn test_debug_mode_includes_cause() {
        let encoder = ResponseEncoder::new(true);

        let response = encoder.encode(Err(WordhoardError::bad_request("missing parameter: word")));
        assert_eq!(response.status, StatusCode::BAD_REQUEST);

        let body = body_json(&response);
        assert_eq!(body["message"], "Request processing error.");
        assert_eq!(body["detail"], "Bad request: missing parameter: word");
    }

    #[test]
    fn test_not_found_never_has_body() {
        let encoder = ResponseEncoder::new(true);
        let response = encoder.encode(Err(WordhoardError::not_found("/nowhere")));

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body, None);
    }
}
