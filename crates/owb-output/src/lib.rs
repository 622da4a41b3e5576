pub mod writer;

pub use writer::{write_rows, write_table};
