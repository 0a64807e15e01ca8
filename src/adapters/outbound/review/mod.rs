/// Review adapters rendering warnings and failures
mod console_sink;
mod json_sink;

pub use console_sink::ConsoleReviewSink;
pub use json_sink::{JsonReviewSink, ReviewDocument, ReviewSummary, ToolInfo};
