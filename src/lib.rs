pub mod cli;
pub mod config;
pub mod convert;
pub mod escape;
pub mod imports;
pub mod tables;
pub mod templates;
pub mod title;

// Convenience re-exports (optional, but nice)
pub use config::Config;
pub use convert::convert;
pub use escape::escape_for_js_template_literal;
pub use imports::extract_imports;
pub use templates::STLITE_VERSION;
pub use title::{detect_title_from_code, DEFAULT_TITLE};
