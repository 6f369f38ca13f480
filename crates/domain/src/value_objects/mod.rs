//! Value Objects - Immutable, identity-less domain primitives

mod capability;
mod input_kind;
mod language;
mod output_kind;
mod scratch_area;

pub use capability::Capability;
pub use input_kind::InputKind;
pub use language::Language;
pub use output_kind::OutputKind;
pub use scratch_area::ScratchArea;
