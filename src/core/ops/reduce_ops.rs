use anyhow::Result;
use std::{iter::Sum, ops::Mul};

use crate::Vector;

impl<T> Vector<T>
where
    T: Copy,
{
    pub fn sum(&self) -> T
    where
        T: Sum<T>,
    {
        self.data.iter().copied().sum()
    }

    /// Sum of element-wise products. Exact for integer dtypes, standard
    /// left-to-right accumulation for floats.
    pub fn dot(&self, rhs: &Vector<T>) -> Result<T>
    where
        T: Mul<Output = T> + Sum<T>,
    {
        Ok(self.zip(rhs, |l, r| l * r)?.sum())
    }
}
