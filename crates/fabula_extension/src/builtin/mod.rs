//! Built-in extensions.
//!
//! - [`RandomWeekdayExtension`]: `pick_random_weekday` instruction
//! - [`SessionExtension`]: session bookkeeping driver and `reset_session` instruction
//! - [`ScriptImporterExtension`]: line-based `.story` scripts
//! - [`TomlImporterExtension`]: `.toml` story documents
//! - [`JsonImporterExtension`]: compiled `.json` story metadata

mod json_importer;
mod script;
mod session;
mod toml_importer;
mod weekday;

pub use json_importer::JsonImporterExtension;
pub use script::{ScriptImporterExtension, parse_script};
pub use session::SessionExtension;
pub use toml_importer::TomlImporterExtension;
pub use weekday::{RandomWeekdayExtension, WEEKDAY_NAMES};
