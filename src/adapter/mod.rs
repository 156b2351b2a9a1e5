/// CSV codec backed by the `csv` crate.
pub mod csv;
