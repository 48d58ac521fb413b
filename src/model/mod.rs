pub mod format;
pub mod names;
pub mod subject;
pub mod table;
