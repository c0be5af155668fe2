/*!
One-dimensional numerical vectors.

Element-wise arithmetic, scaling, function application, dot products and
constant constructors over a shared-storage `Vector<T>`.
*/

mod core;
pub use core::Vector;
