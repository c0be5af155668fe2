use prettytable::{
    format::consts::FORMAT_BOX_CHARS,
    {Cell, Row, Table},
};
use std::{
    any::type_name,
    fmt::{Debug, Display, Formatter, Result},
};

use crate::Vector;

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("Vector")
            .field("dtype", &type_name::<T>())
            .field("len", &self.data.len())
            .finish()
    }
}

impl<T: Display + Debug + Copy> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if !self.data.is_empty() {
            let row = Row::from(self.data.iter().map(Cell::from));
            let mut table = Table::init(vec![row]);
            table.set_format(*FORMAT_BOX_CHARS);

            write!(f, "{}", table)?;
        }

        writeln!(f, "{:?}", self)
    }
}
