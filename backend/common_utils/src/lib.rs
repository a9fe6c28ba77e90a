//! Common utilities for the offsite connector toolkit

pub mod consts;
pub mod crypto;
pub mod errors;
pub mod ext_traits;
pub mod request;
pub mod types;

// Re-export commonly used items
pub use errors::{CustomResult, ParsingError};
pub use request::{Method, Request, RequestContent};
pub use types::{
    AmountConvertor, MinorUnit, StringMajorUnit, StringMajorUnitForConnector, StringMinorUnit,
    StringMinorUnitForConnector,
};
