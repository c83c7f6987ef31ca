// Entity Models
// Typed, immutable records for the kill chain dataset.
//
// Each entity is plain owned data: constructed once when the dataset is
// built, cross-checked by `Dataset::validate`, then only read.

pub mod ai_system;
pub mod company;
pub mod exclusion;
pub mod phase;
pub mod source;

pub use ai_system::AiSystem;
pub use company::{Company, HoldingStatus};
pub use exclusion::ExcludedEntity;
pub use phase::{Phase, PhaseKey};
pub use source::{SourceCategory, SourceRef};
