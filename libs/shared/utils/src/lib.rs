pub mod test_utils;
pub mod validation;

pub use validation::{is_valid_email, rejected_body, FieldValidator};
