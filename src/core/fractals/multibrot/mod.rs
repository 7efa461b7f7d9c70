pub mod algorithm;
pub mod grayscale;
