use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_SUCCESS_MESSAGE: &str = "command executed";
pub const DEFAULT_CATEGORY: &str = "custom";

/// HTTP method a profile is dispatched with.
///
/// Persisted as `"GET"` / `"POST"`. Reading is lenient: any value that is not
/// a string spelling some casing of `post` (including `null`, numbers and
/// other strings) reads as `GET`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Method {
    #[default]
    Get,
    Post,
}

/// How parameters travel with the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestShape {
    /// Appended to the URL as query pairs, no body.
    Query,
    /// Sent as a flat JSON object body.
    JsonBody,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }

    pub fn request_shape(&self) -> RequestShape {
        match self {
            Method::Post => RequestShape::JsonBody,
            Method::Get => RequestShape::Query,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Method {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("post") {
            Method::Post
        } else {
            Method::Get
        }
    }
}

impl<'de> Deserialize<'de> for Method {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(s)) => Method::from(s),
            _ => Method::Get,
        })
    }
}

impl From<Method> for String {
    fn from(value: Method) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for Method {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            _ => Err(ProfileError::UnsupportedMethod(s.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Profile name must not be empty")]
    EmptyName,

    #[error("Endpoint must not be empty")]
    EmptyEndpoint,

    #[error("Endpoint '{0}' must start with '/'")]
    RelativeEndpoint(String),

    #[error("Unsupported method '{0}' (expected GET or POST)")]
    UnsupportedMethod(String),
}

/// A user-defined remote action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommandProfile {
    /// Empty until the profile has been persisted.
    pub id: String,
    pub name: String,
    pub endpoint: String,
    pub method: Method,
    pub parameters: BTreeMap<String, String>,
    pub success_message: String,
    pub category: String,
    pub is_dangerous: bool,
}

impl Default for CommandProfile {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            endpoint: String::new(),
            method: Method::Get,
            parameters: BTreeMap::new(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            is_dangerous: false,
        }
    }
}

impl CommandProfile {
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>, method: Method) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            method,
            ..Self::default()
        }
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = message.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn dangerous(mut self) -> Self {
        self.is_dangerous = true;
        self
    }

    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }

    /// Copy with the id cleared, ready to be stored as a new profile.
    pub fn as_new_copy(&self) -> Self {
        Self {
            id: String::new(),
            ..self.clone()
        }
    }

    /// Checks the fields an editor must fill in before saving.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::EmptyName);
        }
        if self.endpoint.trim().is_empty() {
            return Err(ProfileError::EmptyEndpoint);
        }
        if !self.endpoint.starts_with('/') {
            return Err(ProfileError::RelativeEndpoint(self.endpoint.clone()));
        }
        Ok(())
    }
}
