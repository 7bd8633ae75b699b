pub mod connection;
pub mod report;

pub use connection::Database;
pub use report::{load_report, replace_report};
