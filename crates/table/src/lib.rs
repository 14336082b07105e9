//! # thermowave-table
//!
//! A small column-oriented table holding daily observations: one integer
//! year column, one integer day-of-year column and any number of numeric
//! measures. The detection crates borrow it immutably and hand back an
//! annotated copy.
//!
//! ## Quick Start
//!
//! ```
//! use thermowave_table::{Column, ObservationTable};
//!
//! let table = ObservationTable::new()
//!     .with_column("year", Column::Int(vec![2000, 2000]))
//!     .unwrap()
//!     .with_column("doy", Column::Int(vec![1, 2]))
//!     .unwrap()
//!     .with_column("tasmax", Column::Float(vec![31.5, 33.0]))
//!     .unwrap();
//!
//! assert_eq!(table.n_rows(), 2);
//! assert_eq!(table.int_column("doy").unwrap(), &[1, 2]);
//! ```

mod column;
mod error;
mod table;

pub use column::{Column, ColumnKind};
pub use error::TableError;
pub use table::ObservationTable;
