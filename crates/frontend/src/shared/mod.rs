pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod confirm;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod notifications;
pub mod stats_modal;
