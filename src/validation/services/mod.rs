//! Services orchestrating the validation rules.

mod validator;

pub use validator::PropValidator;
