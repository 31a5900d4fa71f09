//! Story verification for Fabula.
//!
//! A verifier is an independent analysis pass over compiled
//! [`StoryMetadata`](fabula_core::StoryMetadata). It reports structural defects
//! as [`ImportErrorLine`](fabula_core::ImportErrorLine) values and only fails
//! for programming errors. The [`VerificationPipeline`] runs every registered
//! verifier against the same story and concatenates their reports in
//! registration order.
//!
//! # Example
//!
//! ```rust,ignore
//! use fabula_verify::VerificationPipeline;
//!
//! let report = VerificationPipeline::standard().run(&story).await?;
//! if !report.is_publishable() {
//!     for line in report.errors() {
//!         eprintln!("{}", line);
//!     }
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod pipeline;
mod report;
mod verifier;
mod verifiers;

pub use pipeline::VerificationPipeline;
pub use report::VerificationReport;
pub use verifier::Verifier;
pub use verifiers::{
    DanglingReferenceVerifier, DuplicateSceneVerifier, StartSceneVerifier,
    UnknownInstructionVerifier, UnreachableSceneVerifier,
};
