//! Paste publishing: load the source file, POST it, interpret the answer.
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::error::AxypeError;

/// Header naming the paste being updated.
pub const PASTE_HEADER: &str = "script";

/// Header carrying the stored API token.
pub const TOKEN_HEADER: &str = "authentication";

/// A source file ready to be published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    /// Remote paste identifier.
    pub paste_name: String,
    /// Resolved path of the source file.
    pub source_path: PathBuf,
    /// File contents.
    pub source: String,
}

#[derive(Serialize)]
struct SetSourceBody<'a> {
    source: &'a str,
}

impl PublishRequest {
    /// Resolve `source_path` against `cwd` and read it.
    ///
    /// # Errors
    ///
    /// Returns [`AxypeError::FileNotFound`] if the path does not exist and
    /// [`AxypeError::ReadError`] if it exists but cannot be read as text.
    pub fn load(paste_name: &str, cwd: &Path, source_path: &str) -> Result<Self, AxypeError> {
        let path = cwd.join(source_path);
        if !path.exists() {
            return Err(AxypeError::FileNotFound(path));
        }
        let source = fs::read_to_string(&path).map_err(|source| AxypeError::ReadError {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            paste_name: paste_name.to_string(),
            source_path: path,
            source,
        })
    }
}

/// Blocking client for the paste endpoint.
#[derive(Debug, Clone)]
pub struct PasteClient {
    agent: ureq::Agent,
    endpoint: String,
}

impl PasteClient {
    /// Create a client posting to `endpoint`.
    #[must_use]
    pub fn new(endpoint: &str) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            endpoint: endpoint.to_string(),
        }
    }

    /// Endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Replace the remote source of `request.paste_name`.
    ///
    /// # Errors
    ///
    /// Returns [`AxypeError::PublishRejected`] on transport failure, non-2xx
    /// status, unparsable body or a falsy `success` flag.
    pub fn set_source(&self, request: &PublishRequest, token: &str) -> Result<(), AxypeError> {
        let rejected = |status: Option<u16>, body: String| AxypeError::PublishRejected {
            paste: request.paste_name.clone(),
            status,
            body,
        };

        let mut response = self
            .agent
            .post(&self.endpoint)
            .header(PASTE_HEADER, &request.paste_name)
            .header(TOKEN_HEADER, token)
            .send_json(SetSourceBody {
                source: &request.source,
            })
            .map_err(|e| rejected(None, e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| rejected(Some(status), e.to_string()))?;

        interpret_response(&request.paste_name, status, body)
    }
}

/// Decide whether a publish response means success.
///
/// Success requires a 2xx status and a JSON body with a truthy `success`.
///
/// # Errors
///
/// Returns [`AxypeError::PublishRejected`] carrying the raw body otherwise.
pub fn interpret_response(paste: &str, status: u16, body: String) -> Result<(), AxypeError> {
    let confirmed = (200..300).contains(&status)
        && serde_json::from_str::<Value>(&body)
            .is_ok_and(|json| json.get("success").is_some_and(is_truthy));

    if confirmed {
        Ok(())
    } else {
        Err(AxypeError::PublishRejected {
            paste: paste.to_string(),
            status: Some(status),
            body,
        })
    }
}

/// JavaScript-style truthiness of a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn load_reads_file_relative_to_cwd() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("output")).unwrap();
        fs::write(tmp.path().join("output/server.luau"), "print(1)").unwrap();

        let request = PublishRequest::load("myScript", tmp.path(), "output/server.luau").unwrap();
        assert_eq!(request.paste_name, "myScript");
        assert_eq!(request.source, "print(1)");
        assert_eq!(request.source_path, tmp.path().join("output/server.luau"));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let result = PublishRequest::load("myScript", tmp.path(), "nope.luau");
        assert!(matches!(result, Err(AxypeError::FileNotFound(_))));
    }

    #[test]
    fn load_directory_is_read_error() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("output")).unwrap();
        let result = PublishRequest::load("myScript", tmp.path(), "output");
        assert!(matches!(result, Err(AxypeError::ReadError { .. })));
    }

    #[test]
    fn load_non_utf8_is_read_error() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("bin.luau"), [0xff, 0xfe, 0x00]).unwrap();
        let result = PublishRequest::load("myScript", tmp.path(), "bin.luau");
        assert!(matches!(result, Err(AxypeError::ReadError { .. })));
    }

    #[test]
    fn success_requires_ok_status_and_flag() {
        assert!(interpret_response("p", 200, r#"{"success":true}"#.to_string()).is_ok());
        assert!(interpret_response("p", 201, r#"{"success":1}"#.to_string()).is_ok());
    }

    #[test]
    fn server_error_is_rejected_with_raw_body() {
        let err = interpret_response("p", 500, "Internal Server Error".to_string()).unwrap_err();
        assert!(matches!(
            err,
            AxypeError::PublishRejected { status: Some(500), ref body, .. } if body == "Internal Server Error"
        ));
    }

    #[test]
    fn ok_status_with_false_flag_is_rejected() {
        let body = r#"{"success":false,"error":"unauthorized"}"#;
        let err = interpret_response("p", 200, body.to_string()).unwrap_err();
        assert!(matches!(err, AxypeError::PublishRejected { body: ref b, .. } if b == body));
    }

    #[test]
    fn ok_status_with_malformed_body_is_rejected() {
        assert!(interpret_response("p", 200, "<html>".to_string()).is_err());
        assert!(interpret_response("p", 200, String::new()).is_err());
        assert!(interpret_response("p", 200, "{}".to_string()).is_err());
    }

    #[test]
    fn truthiness_matches_javascript() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&serde_json::json!(false)));
        assert!(!is_truthy(&serde_json::json!(0)));
        assert!(!is_truthy(&serde_json::json!("")));
        assert!(is_truthy(&serde_json::json!(true)));
        assert!(is_truthy(&serde_json::json!(-1.5)));
        assert!(is_truthy(&serde_json::json!("yes")));
        assert!(is_truthy(&serde_json::json!([])));
        assert!(is_truthy(&serde_json::json!({})));
    }
}
