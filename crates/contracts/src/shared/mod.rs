pub mod api;
pub mod database;
pub mod format;
pub mod notification;
pub mod stats;
pub mod table_view;
pub mod transfer;
