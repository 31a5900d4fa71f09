//! Built-in structural verifiers.

mod dangling_reference;
mod duplicate_scene;
mod start_scene;
mod unknown_instruction;
mod unreachable_scene;

pub use dangling_reference::DanglingReferenceVerifier;
pub use duplicate_scene::DuplicateSceneVerifier;
pub use start_scene::StartSceneVerifier;
pub use unknown_instruction::UnknownInstructionVerifier;
pub use unreachable_scene::UnreachableSceneVerifier;
