pub mod error;
pub mod logger;
pub mod number;
pub mod validation;
