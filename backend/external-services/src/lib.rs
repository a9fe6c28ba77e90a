pub mod configs;
pub mod errors;
pub mod logger;
pub mod service;

pub use service::HttpTransport;
