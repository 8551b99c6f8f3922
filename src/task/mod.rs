//! Task management module
//!
//! This module holds the task core:
//! - Todo / deadline / event model with datafile and display forms
//! - Date parsing for user input and the datafile
//! - Sorting by description, start date or deadline/end date
//! - Datafile line parsing and file persistence

pub mod datetime;
pub mod error;
pub mod list;
pub mod model;
pub mod parser;
pub mod sort;
pub mod storage;

pub use error::TaskError;
pub use list::TaskList;
pub use model::{Task, TaskKind};
pub use parser::parse_line;
pub use sort::{SortKey, SortOrder};
pub use storage::Storage;
