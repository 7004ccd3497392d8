pub mod entry;

pub use entry::{load_entries, parse_entries, Entry, Field};
