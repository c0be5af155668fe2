use anyhow::{bail, Result};
use num_traits::{One, Zero};
use std::sync::Arc;

use crate::core::errors::{IndexOutOfRangeError, LengthMismatchError};

pub struct Vector<T> {
    pub(crate) data: Arc<Vec<T>>,
}

impl<T: Copy> Vector<T> {
    pub(crate) fn init(data: Vec<T>) -> Vector<T> {
        Vector {
            data: Arc::new(data),
        }
    }

    pub fn new(data: &[T]) -> Vector<T> {
        Vector::init(data.to_vec())
    }

    pub fn same(element: T, len: usize) -> Vector<T> {
        Vector::init(vec![element; len])
    }

    pub fn zeros(len: usize) -> Vector<T>
    where
        T: Zero,
    {
        Vector::same(T::zero(), len)
    }

    pub fn ones(len: usize) -> Vector<T>
    where
        T: One,
    {
        Vector::same(T::one(), len)
    }

    // --- Data ---

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn index(&self, index: usize) -> Result<T> {
        match self.data.get(index) {
            Some(&element) => Ok(element),
            None => bail!(IndexOutOfRangeError {
                index,
                len: self.data.len(),
            }),
        }
    }

    // --- Maps and Zips ---

    pub fn unary_map<R: Copy>(&self, f: impl Fn(T) -> R) -> Vector<R> {
        Vector::init(self.data.iter().map(|&elem| f(elem)).collect())
    }

    pub fn binary_map<R: Copy>(&self, rhs: T, f: impl Fn(T, T) -> R) -> Vector<R> {
        Vector::init(self.data.iter().map(|&elem| f(elem, rhs)).collect())
    }

    pub fn zip<R: Copy>(&self, rhs: &Vector<T>, f: impl Fn(T, T) -> R) -> Result<Vector<R>> {
        if self.len() != rhs.len() {
            bail!(LengthMismatchError {
                lhs_len: self.len(),
                rhs_len: rhs.len(),
            });
        }

        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&lhs_elem, &rhs_elem)| f(lhs_elem, rhs_elem))
            .collect();

        Ok(Vector::init(data))
    }
}

impl<T> Vector<T> {
    // --- Shape Attributes ---

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Single-element shape descriptor. `shape()[0] == len()` always holds.
    pub fn shape(&self) -> [usize; 1] {
        [self.data.len()]
    }
}

impl<T> Clone for Vector<T> {
    fn clone(&self) -> Vector<T> {
        Vector {
            data: Arc::clone(&self.data),
        }
    }
}

impl<T: Copy + PartialEq> PartialEq for Vector<T> {
    fn eq(&self, rhs: &Vector<T>) -> bool {
        self.data == rhs.data
    }
}
