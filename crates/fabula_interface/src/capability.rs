//! Capability families an extension may implement.

use serde::{Deserialize, Serialize};

/// The three capability families recognised by the registry.
///
/// # Examples
///
/// ```
/// use fabula_interface::Capability;
/// use strum::IntoEnumIterator;
///
/// let all: Vec<_> = Capability::iter().collect();
/// assert_eq!(all.len(), 3);
/// assert_eq!(Capability::Instruction.to_string(), "instruction");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Hooks into turn execution
    #[display("driver")]
    Driver,
    /// Adds script verbs
    #[display("instruction")]
    Instruction,
    /// Adds a story source format
    #[display("importer")]
    Importer,
}
