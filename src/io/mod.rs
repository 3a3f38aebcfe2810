//! Problem instance parsing and report formatting.

mod reader;
mod writer;

pub use reader::parse_instance;
pub use writer::{write_manifest, write_pending, write_run, write_run_json};
