//! In-memory backend for unit tests.

use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use crate::backend::{Backend, Candidate, CompletionRequest, RemoteError, What};
use crate::error::{Error, Result};

const COLUMNS: [&str; 6] = [
    "SrcAS",
    "SrcAddr",
    "SrcCountry",
    "DstAS",
    "DstAddr",
    "DstCountry",
];

/// Serves a small fixed catalogue and records every request.
#[derive(Debug, Default)]
pub struct MockBackend {
    requests: Mutex<Vec<CompletionRequest>>,
    validated: Mutex<Vec<String>>,
    errors: Vec<RemoteError>,
    failing: bool,
    gate: Option<Arc<Notify>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with an HTTP 500.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_errors(errors: Vec<RemoteError>) -> Self {
        Self {
            errors,
            ..Self::default()
        }
    }

    /// Calls block until `gate` is notified.
    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn validated(&self) -> Vec<String> {
        self.validated.lock().unwrap().clone()
    }

    async fn wait(&self) -> Result<()> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if self.failing {
            return Err(Error::Http {
                status: 500,
                message: "backend down".into(),
            });
        }
        Ok(())
    }
}

fn candidate(label: &str, detail: &str, quoted: bool) -> Candidate {
    Candidate {
        label: label.into(),
        detail: Some(detail.into()),
        quoted,
    }
}

fn catalogue(request: &CompletionRequest) -> Vec<Candidate> {
    let prefix = request.prefix.as_deref().unwrap_or("");
    let column = request.column.as_deref();
    let candidates = match (request.what, column) {
        (What::Column, _) => COLUMNS
            .iter()
            .map(|c| candidate(c, "column name", false))
            .collect(),
        (What::Operator, Some("SrcAS")) => ["=", "!=", "IN"]
            .iter()
            .map(|o| candidate(o, "operator", false))
            .collect(),
        (What::Value, Some("DstNetName")) => vec![
            candidate("something", "network name", true),
            candidate("squid", "network name", true),
        ],
        // AS numbers ignore the prefix
        (What::Value, Some("SrcAS")) => {
            return ["AS65403", "AS65404", "AS65405"]
                .iter()
                .map(|v| candidate(v, "AS number", false))
                .collect();
        }
        _ => Vec::new(),
    };
    candidates
        .into_iter()
        .filter(|c| c.label.starts_with(prefix))
        .collect()
}

impl Backend for MockBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<Vec<Candidate>> {
        self.requests.lock().unwrap().push(request.clone());
        self.wait().await?;
        Ok(catalogue(request))
    }

    async fn validate(&self, filter: &str) -> Result<Vec<RemoteError>> {
        self.validated.lock().unwrap().push(filter.to_string());
        self.wait().await?;
        Ok(self.errors.clone())
    }
}
