//! Application services for persistent records.

mod context;

pub use context::{RecordContext, RecordContextError, RecordContextResult};
