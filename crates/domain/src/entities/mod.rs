//! Domain entities - Objects with identity and lifecycle

mod conversion_request;
mod conversion_result;
mod transient_file;

pub use conversion_request::{ConversionInput, ConversionRequest};
pub use conversion_result::{ConversionResult, OutputPayload, ResolvedText};
pub use transient_file::TransientFile;
