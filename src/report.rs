use crate::request::{SearchKind, SearchRequest};
use log::info;
use serde::Serialize;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Outcome of a single timed search.
#[derive(Serialize)]
pub struct Report {
    pub kind: SearchKind,
    pub label: &'static str,
    /// Dataset length.
    pub len: u32,
    pub key: u32,
    pub index: Option<usize>,
    pub value: Option<u32>,
    /// Duration of the single search call.
    pub duration: Duration,
}

impl Report {
    pub fn found(&self) -> bool {
        self.index.is_some()
    }

    pub fn human_line(&self) -> String {
        match self.value {
            Some(v) => format!("{} - value found = {}", self.label, v),
            None => format!("{} - search failed", self.label),
        }
    }
}

/// Run the resolved request once against the populated dataset.
///
/// The key is fixed at `len - 2`, a near-end value. The subtraction wraps,
/// so for len < 2 the key lands outside the dataset and the search misses.
pub fn run(request: &SearchRequest, vals: &[u32]) -> Report {
    let key = request.len.wrapping_sub(2);

    let start = Instant::now();
    let index = black_box(request.scheme.search(vals, key));
    let duration = start.elapsed();
    info!(
        "{}: searched {} elements for key {} in {:?}",
        request.scheme.name(),
        vals.len(),
        key,
        duration
    );

    Report {
        kind: request.kind,
        label: request.label,
        len: request.len,
        key,
        index,
        value: index.map(|i| vals[i]),
        duration,
    }
}
