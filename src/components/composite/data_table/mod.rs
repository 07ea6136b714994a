//! DataTable - Generic Column-Based Table

pub mod column;
pub mod data_table;
pub mod load_more;

pub use column::{Column, ColumnWidth};
pub use data_table::DataTable;
pub use load_more::LoadMore;
