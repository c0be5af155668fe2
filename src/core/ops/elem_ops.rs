use anyhow::{bail, Result};
use std::ops::{Add, Div, Mul, Sub};

use crate::{core::errors::LogDomainError, Vector};

// --- Standard binary operations ---

macro_rules! binary_ops {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T> $trait for Vector<T>
        where
            T: Copy + $trait<Output = T>,
        {
            type Output = Result<Vector<T>>;
            fn $method(self, rhs: Vector<T>) -> Self::Output {
                self.zip(&rhs, |l, r| l $op r)
            }
        }

        impl<T> $trait for &Vector<T>
        where
            T: Copy + $trait<Output = T>,
        {
            type Output = Result<Vector<T>>;
            fn $method(self, rhs: &Vector<T>) -> Self::Output {
                self.zip(rhs, |l, r| l $op r)
            }
        }

        impl<T> $trait<Vector<T>> for &Vector<T>
        where
            T: Copy + $trait<Output = T>,
        {
            type Output = Result<Vector<T>>;
            fn $method(self, rhs: Vector<T>) -> Self::Output {
                self.zip(&rhs, |l, r| l $op r)
            }
        }

        impl<T> $trait<&Vector<T>> for Vector<T>
        where
            T: Copy + $trait<Output = T>,
        {
            type Output = Result<Vector<T>>;
            fn $method(self, rhs: &Vector<T>) -> Self::Output {
                self.zip(rhs, |l, r| l $op r)
            }
        }

        impl<T> $trait<T> for Vector<T>
        where
            T: Copy + $trait<Output = T>,
        {
            type Output = Vector<T>;
            fn $method(self, rhs: T) -> Self::Output {
                self.binary_map(rhs, |l, r| l $op r)
            }
        }

        impl<T> $trait<T> for &Vector<T>
        where
            T: Copy + $trait<Output = T>,
        {
            type Output = Vector<T>;
            fn $method(self, rhs: T) -> Self::Output {
                self.binary_map(rhs, |l, r| l $op r)
            }
        }
    };
}

binary_ops!(Add, add, +);
binary_ops!(Sub, sub, -);
binary_ops!(Mul, mul, *);
binary_ops!(Div, div, /);

// --- Named element-wise operations ---

impl<T> Vector<T>
where
    T: Copy + Mul<Output = T>,
{
    /// Hadamard product, same length contract as `+` and `*`.
    pub fn hadamard(&self, rhs: &Vector<T>) -> Result<Vector<T>> {
        self.zip(rhs, |l, r| l * r)
    }

    pub fn scale(&self, rhs: T) -> Vector<T> {
        self.binary_map(rhs, |l, r| l * r)
    }
}

// --- Operations for floats ---

impl<F> Vector<F>
where
    F: num_traits::Float,
{
    /// IEEE semantics: `-inf` at zero, `NaN` below it. See `checked_ln`
    /// for the erroring alternative.
    pub fn ln(&self) -> Vector<F> {
        self.unary_map(|elem| elem.ln())
    }

    /// IEEE semantics, like `ln`.
    pub fn log10(&self) -> Vector<F> {
        self.unary_map(|elem| elem.log10())
    }

    pub fn exp(&self) -> Vector<F> {
        self.unary_map(|elem| elem.exp())
    }

    pub fn powi(&self, rhs: i32) -> Vector<F> {
        self.unary_map(|elem| elem.powi(rhs))
    }

    pub fn powf(&self, rhs: F) -> Vector<F> {
        self.unary_map(|elem| elem.powf(rhs))
    }

    pub fn sqrt(&self) -> Vector<F> {
        self.unary_map(|elem| elem.sqrt())
    }

    pub fn checked_ln(&self) -> Result<Vector<F>> {
        self.valid_log_domain()?;
        Ok(self.ln())
    }

    pub fn checked_log10(&self) -> Result<Vector<F>> {
        self.valid_log_domain()?;
        Ok(self.log10())
    }

    fn valid_log_domain(&self) -> Result<()> {
        if let Some(index) = self.data.iter().position(|elem| *elem <= F::zero()) {
            bail!(LogDomainError { index });
        }

        Ok(())
    }
}
