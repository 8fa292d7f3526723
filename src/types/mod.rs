//! Type definitions for langpay

mod error;
mod survey;

pub use error::*;
pub use survey::*;
