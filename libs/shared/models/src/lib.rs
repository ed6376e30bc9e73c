pub mod appointment;
pub mod auth;
pub mod catalog;
pub mod contact;
pub mod error;

pub use appointment::*;
pub use auth::*;
pub use catalog::*;
pub use contact::*;
pub use error::{AppError, ValidationIssue};
