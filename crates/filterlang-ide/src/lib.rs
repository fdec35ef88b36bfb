//! Editor services for the flow filter language.
//!
//! Completion and linting combine the resilient syntax tree from
//! [`filterlang_syntax`] with a [`Backend`] that knows the column names,
//! operators and values of a deployment. [`HttpBackend`] talks to the
//! console API; [`Session`] ties both to an evolving piece of text.
//!
//! # Example
//!
//! ```no_run
//! use filterlang_ide::{BackendConfig, HttpBackend, Session};
//!
//! # async fn run() -> filterlang_ide::Result<()> {
//! let backend = HttpBackend::new(BackendConfig::new("http://localhost:8080"))?;
//! let session = Session::new(backend, "SrcAS = 1000 AND ");
//! if let Some(list) = session.complete(17).await.fresh() {
//!     for option in &list.options {
//!         println!("{}", option.label);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod complete;
pub mod context;
pub mod error;
pub mod http;
pub mod lint;
pub mod session;

#[cfg(test)]
mod test_backend;

#[cfg(test)]
mod context_tests;

pub use backend::{Backend, Candidate, CompletionRequest, RemoteError, What};
pub use complete::{CompletionList, CompletionOption, complete};
pub use context::{CompletionContext, Expected, ListPosition, classify};
pub use error::{Error, Result};
pub use http::{BackendConfig, Configuration, HttpBackend};
pub use lint::{LintFinding, LintSeverity, lint};
pub use session::{Outcome, Session, Snapshot};
