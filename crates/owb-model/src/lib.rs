pub mod error;
pub mod ids;
pub mod table;

pub use error::{ReshapeError, Result};
pub use ids::variable_id;
pub use table::Table;
