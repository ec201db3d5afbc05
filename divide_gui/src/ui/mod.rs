//! UI module for the Divide GUI
//!
//! # Pages
//! - `form` - Dividend/Divider inputs, Divide button, result line
//! - `replaced` - Full-window critical message once the session terminates

pub mod form;
pub mod replaced;
