//! Backend contract and its JSON wire format.
//!
//! The backend owns all knowledge of column names, operators and values; the
//! editor side only knows the grammar. Two calls exist: `complete` returns
//! candidates for a position, `validate` returns semantic errors for a filter.

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const COMPLETE_PATH: &str = "/api/v0/console/filter/complete";
pub const VALIDATE_PATH: &str = "/api/v0/console/filter/validate";
pub const HEALTHCHECK_PATH: &str = "/api/v0/healthcheck";
pub const CONFIGURATION_PATH: &str = "/api/v0/console/configuration";

/// What kind of candidate is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum What {
    Column,
    Operator,
    Value,
}

/// Body of a completion request.
///
/// `column` is set for operator and value requests; `prefix` only when the user
/// has typed something at the cursor. Absent fields are omitted, not `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub what: What,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

/// One completion candidate as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Must be inserted between double quotes.
    #[serde(default)]
    pub quoted: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub completions: Vec<Candidate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateRequest {
    pub filter: String,
}

/// Semantic error reported by the backend.
///
/// `offset` counts characters from the start of the filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteError {
    pub offset: usize,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidateResponse {
    #[serde(default)]
    pub errors: Option<Vec<RemoteError>>,
}

/// Source of completion candidates and semantic errors.
///
/// Implementations must be usable from several tasks at once.
pub trait Backend: Send + Sync {
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl Future<Output = Result<Vec<Candidate>>> + Send;

    fn validate(&self, filter: &str) -> impl Future<Output = Result<Vec<RemoteError>>> + Send;
}
