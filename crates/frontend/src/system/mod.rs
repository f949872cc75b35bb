pub mod error_hooks;
