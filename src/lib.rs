//! Search over an ascending in-memory dataset, plus the tiny benchmark
//! driver around it: resolve a request from the command line, populate the
//! dataset, run the selected algorithm once, report the outcome.

pub mod dataset;
pub mod report;
pub mod request;
pub mod search;

#[ctor::ctor]
fn init_color_backtrace() {
    color_backtrace::install();
}

/// A search algorithm over an ascending slice of integers.
pub trait SearchScheme: Sync + Send {
    /// Return the index of `key` in `vals`, or `None` when absent.
    ///
    /// `vals` must be sorted ascending; implementations never mutate it.
    fn search(&self, vals: &[u32], key: u32) -> Option<usize>;

    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
