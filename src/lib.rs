//! Chick Feed library exports.

pub mod config;
pub mod diag;
pub mod error;
pub mod events;
pub mod fetch;
pub mod filter;
pub mod keys;
pub mod nav;
pub mod notifications;
pub mod recipe;
pub mod state;
pub mod theme;
pub mod views;
pub mod widgets;
