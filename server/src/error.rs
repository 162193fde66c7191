pub use siteshell_types::error::{Error, ShResult};

// vim: ts=4
