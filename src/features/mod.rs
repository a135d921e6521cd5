//! Feature flows composed from the fetch, extract and summarize modules.

pub mod summarize;

pub use summarize::SummaryService;
