pub mod history;
pub mod notification;
pub mod summary;
pub mod timestamps;
