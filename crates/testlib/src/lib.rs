pub mod assert;
pub mod tokens;
