use std::error::Error;
use std::fmt;

use serde_json::Value;

pub const DEFAULT_OUTCOME_MESSAGE: &str = "operation complete";

/// Normalized result of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub ok: bool,
    pub message: String,
}

impl Outcome {
    pub fn new(ok: bool, message: impl Into<String>) -> Self {
        Self {
            ok,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(false, message)
    }

    pub fn network_error(error: &(dyn Error + 'static)) -> Self {
        Self::failure(format!("network error: {}", error_chain(error)))
    }

    pub fn server_error(status: u16) -> Self {
        Self::failure(format!("server error: {}", status))
    }

    pub fn parse_error(cause: impl fmt::Display) -> Self {
        Self::failure(format!("response parse error: {}", cause))
    }

    /// Interprets a completed response.
    ///
    /// Non-success statuses fail without looking at the body. A success
    /// status needs a JSON object body; `success` defaults to `true` and
    /// `message` to [`DEFAULT_OUTCOME_MESSAGE`].
    pub fn from_response(status: u16, body: &str) -> Self {
        if !(200..300).contains(&status) {
            return Self::server_error(status);
        }

        let value: Value = match serde_json::from_str(body) {
            Ok(value) => value,
            Err(e) => return Self::parse_error(e),
        };
        let Value::Object(object) = value else {
            return Self::parse_error("expected a JSON object");
        };

        let ok = match object.get("success") {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) if s.eq_ignore_ascii_case("false") => false,
            _ => true,
        };
        let message = match object.get("message") {
            None | Some(Value::Null) => DEFAULT_OUTCOME_MESSAGE.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };
        Self::new(ok, message)
    }

    /// Text shown to the user: the profile's own message on success,
    /// `error: ...` otherwise.
    pub fn user_message(&self, success_message: &str) -> String {
        if self.ok {
            success_message.to_string()
        } else {
            format!("error: {}", self.message)
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.ok { "ok" } else { "failed" };
        write!(f, "{}: {}", status, self.message)
    }
}

fn error_chain(error: &(dyn Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}
