pub mod prompt;
pub mod value_object;
