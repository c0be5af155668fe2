mod display;
mod errors;
mod ops;
mod vector;

pub use vector::Vector;
