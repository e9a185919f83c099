pub mod core_error;
pub mod general_error;

pub use core_error::CoreError;
pub use general_error::GeneralError;
