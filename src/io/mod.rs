pub mod catalog;
pub mod date;
pub mod json;
pub mod prompt;
pub mod report;
