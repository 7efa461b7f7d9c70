pub mod escape_result;
pub mod multibrot;
