use crate::search::{BinarySearch, LinearSearch};
use crate::SearchScheme;
use serde::Serialize;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchKind {
    Binary,
    Sequential,
}

/// One fully resolved run: which algorithm, under which label, over how many
/// elements. Immutable after construction.
pub struct SearchRequest {
    pub kind: SearchKind,
    pub scheme: &'static dyn SearchScheme,
    pub label: &'static str,
    pub len: u32,
}

/// Selector table: one entry per algorithm, keyed by a single character.
const DISPATCH: [(char, SearchKind, &dyn SearchScheme, &str); 2] = [
    ('b', SearchKind::Binary, &BinarySearch, "binary"),
    ('s', SearchKind::Sequential, &LinearSearch, "sequential"),
];

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("missing selector or element count argument")]
    InsufficientArguments,
    #[error("unknown search selector {0:?}")]
    UnknownSelector(String),
    #[error("invalid element count {raw:?}: {source}")]
    InvalidCount {
        raw: String,
        source: ParseIntError,
    },
}

/// Resolve the raw positional arguments into a [`SearchRequest`].
///
/// Only the first character of the selector argument is consulted. The
/// element count is parsed as base-10 `u32`; a malformed count is surfaced
/// as [`ResolveError::InvalidCount`] rather than silently treated as zero.
pub fn resolve(selector: Option<&str>, count: Option<&str>) -> Result<SearchRequest, ResolveError> {
    let (Some(selector), Some(count)) = (selector, count) else {
        return Err(ResolveError::InsufficientArguments);
    };

    let key = selector.chars().next();
    let &(_, kind, scheme, label) = DISPATCH
        .iter()
        .find(|&&(c, ..)| Some(c) == key)
        .ok_or_else(|| ResolveError::UnknownSelector(selector.to_string()))?;

    let len = count.parse().map_err(|source| ResolveError::InvalidCount {
        raw: count.to_string(),
        source,
    })?;

    Ok(SearchRequest {
        kind,
        scheme,
        label,
        len,
    })
}
