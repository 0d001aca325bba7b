//! rowscope - a virtualized list viewport for the terminal
//!
//! The viewport renders a window of rows over a dataset it never
//! materializes: rows are addressed by opaque ids through [`source::DataSource`],
//! and only the rows that fit the granted area are produced each frame.

pub mod config;
pub mod logging;
pub mod menu;
pub mod source;
pub mod tui;
pub mod viewport;
