//! Turning a classified cursor position into editor completion options.

use filterlang_syntax::Parse;
use serde::Serialize;
use tracing::{debug, warn};

use crate::backend::{Backend, Candidate};
use crate::context::{CompletionContext, Expected, ListPosition, classify_clamped};

const LOGIC_OPERATOR: &str = "logic operator";
const CONNECTIVES: [&str; 4] = ["AND", "OR", "AND NOT", "OR NOT"];

/// One entry in the completion popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionOption {
    /// Shown to the user. Quoted values are shown with their quotes.
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Inserted in place of `[from, to)`.
    pub apply: String,
}

/// Completion result for one request.
///
/// `to` is absent only when the cursor position offers nothing; an editor then
/// replaces nothing and the empty `options` list closes the popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionList {
    pub from: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<usize>,
    pub options: Vec<CompletionOption>,
}

impl CompletionList {
    pub fn empty(at: usize) -> Self {
        Self {
            from: at,
            to: None,
            options: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.label.as_str())
    }
}

/// Classifies `cursor` in `parse` and resolves the options.
pub async fn complete<B: Backend>(parse: &Parse, cursor: usize, backend: &B) -> CompletionList {
    let (cursor, context) = classify_clamped(parse, cursor);
    resolve(context, cursor, backend).await
}

/// Resolves a context into options, asking `backend` where candidates are dynamic.
///
/// Backend failures are logged and yield no remote options; the keyword options
/// of the context are still returned.
pub async fn resolve<B: Backend>(
    context: Option<CompletionContext>,
    cursor: usize,
    backend: &B,
) -> CompletionList {
    let Some(context) = context else {
        return CompletionList::empty(cursor);
    };

    let mut options = Vec::new();

    if let Expected::Column { offer_not: true } = context.expected {
        options.push(keyword_option("NOT"));
    }

    if context.expected == Expected::Connective {
        options.extend(CONNECTIVES.into_iter().map(keyword_option));
    } else if let Some(request) = context.request() {
        match backend.complete(&request).await {
            Ok(candidates) => {
                debug!(what = ?request.what, count = candidates.len(), "received candidates");
                let list = context.list_position();
                options.extend(
                    candidates
                        .into_iter()
                        .filter_map(|candidate| candidate_option(candidate, list)),
                );
            }
            Err(err) => {
                warn!(error = %err, what = ?request.what, "completion request failed");
            }
        }
    }

    CompletionList {
        from: context.from,
        to: Some(context.to),
        options,
    }
}

fn keyword_option(keyword: &str) -> CompletionOption {
    CompletionOption {
        label: keyword.to_string(),
        detail: Some(LOGIC_OPERATOR.to_string()),
        apply: format!("{keyword} "),
    }
}

fn candidate_option(candidate: Candidate, list: Option<ListPosition>) -> Option<CompletionOption> {
    if candidate.label.is_empty() {
        debug_assert!(false, "backend returned a candidate without label");
        warn!("skipping completion candidate without label");
        return None;
    }

    let label = if candidate.quoted {
        quote(&candidate.label)
    } else {
        candidate.label
    };
    let apply = match list {
        None => format!("{label} "),
        Some(ListPosition::First | ListPosition::AfterComma { needs_space: false }) => {
            format!("{label}, ")
        }
        Some(ListPosition::AfterComma { needs_space: true }) => format!(" {label}, "),
    };

    Some(CompletionOption {
        label,
        detail: candidate.detail,
        apply,
    })
}

/// Wraps `value` in double quotes, escaping backslashes and quotes.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}
