//! Editing session: the current filter text plus versioned, shared snapshots.
//!
//! Every edit replaces the snapshot atomically. Completion and lint requests
//! run against the snapshot current when they start; when the text changed
//! while the backend was answering, the result is reported as stale so the
//! editor can drop it.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::ArcSwap;
use filterlang_syntax::{Parse, parse};
use tracing::debug;

use crate::backend::Backend;
use crate::complete::{self, CompletionList};
use crate::lint::{self, LintFinding};

/// Immutable view of the filter at one version.
#[derive(Debug)]
pub struct Snapshot {
    version: u64,
    text: String,
    parse: Parse,
}

impl Snapshot {
    fn new(version: u64, text: String) -> Self {
        let parse = parse(&text);
        Self {
            version,
            text,
            parse,
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parse(&self) -> &Parse {
        &self.parse
    }
}

/// Result of a request that awaited the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Fresh(T),
    /// The text changed to `current` while the request was in flight.
    Stale { current: u64 },
}

impl<T> Outcome<T> {
    pub fn fresh(self) -> Option<T> {
        match self {
            Outcome::Fresh(value) => Some(value),
            Outcome::Stale { .. } => None,
        }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, Outcome::Stale { .. })
    }
}

pub struct Session<B> {
    backend: B,
    current: ArcSwap<Snapshot>,
    versions: AtomicU64,
}

impl<B: Backend> Session<B> {
    pub fn new(backend: B, text: impl Into<String>) -> Self {
        Self {
            backend,
            current: ArcSwap::from_pointee(Snapshot::new(0, text.into())),
            versions: AtomicU64::new(0),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current.load_full()
    }

    pub fn version(&self) -> u64 {
        self.current.load().version()
    }

    /// Replaces the text and returns the new snapshot.
    ///
    /// Concurrent updates never move the session back to an older version.
    pub fn update(&self, text: impl Into<String>) -> Arc<Snapshot> {
        let version = self.versions.fetch_add(1, Ordering::AcqRel) + 1;
        let snapshot = Arc::new(Snapshot::new(version, text.into()));
        self.current.rcu(|current| {
            if current.version() > version {
                Arc::clone(current)
            } else {
                Arc::clone(&snapshot)
            }
        });
        debug!(version, "filter updated");
        snapshot
    }

    pub async fn complete(&self, cursor: usize) -> Outcome<CompletionList> {
        let snapshot = self.snapshot();
        let list = complete::complete(snapshot.parse(), cursor, &self.backend).await;
        self.settle(&snapshot, list)
    }

    pub async fn lint(&self) -> Outcome<Vec<LintFinding>> {
        let snapshot = self.snapshot();
        let findings = lint::lint(snapshot.parse(), &self.backend).await;
        self.settle(&snapshot, findings)
    }

    fn settle<T>(&self, snapshot: &Snapshot, value: T) -> Outcome<T> {
        let current = self.version();
        if current == snapshot.version() {
            Outcome::Fresh(value)
        } else {
            debug!(requested = snapshot.version(), current, "dropping stale result");
            Outcome::Stale { current }
        }
    }
}

impl<B: std::fmt::Debug> std::fmt::Debug for Session<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("backend", &self.backend)
            .field("version", &self.current.load().version())
            .finish()
    }
}
