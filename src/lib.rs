pub mod app;
pub mod config;
pub mod error;
pub(crate) mod event;
pub mod input;
pub mod person;
pub mod picker;
pub mod ui;
