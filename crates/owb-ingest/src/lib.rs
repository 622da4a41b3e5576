pub mod header;
pub mod reader;

pub use header::{normalize_columns, normalize_header};
pub use reader::{InputEncoding, read_rows, read_table};
