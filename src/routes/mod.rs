pub mod nav;
pub mod swap;
pub mod tokens;
