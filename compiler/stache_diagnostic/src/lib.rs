//! Error codes for template diagnostics.
//!
//! Every syntax error the tokenizer reports carries a stable code (`E0001`…)
//! so that messages can be searched and explained with `stache explain`.

mod error_code;
pub mod errors;

pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
