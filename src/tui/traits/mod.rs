//! Component trait system for the TUI
//!
//! The App does not know how each list renders, navigates or copies. Panels
//! declare their capabilities through traits and the App only routes.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                     App                      │
//! │  (orchestrator: global keys, focus, footer)  │
//! └──────────────────────────────────────────────┘
//!                        │
//!            ┌───────────┴───────────┐
//!            ▼                       ▼
//!     ┌─────────────┐         ┌─────────────┐
//!     │    Rows     │         │    Menu     │
//!     │ (virtual)   │         │ (classic)   │
//!     └─────────────┘         └─────────────┘
//!                        │
//!              Implements traits:
//!        Component, Interactive, Copyable
//! ```
//!
//! - [`Component`] - Base trait: render + identity
//! - [`Interactive`] - Components that handle input and keyboard focus
//! - [`Copyable`] - Components that provide clipboard content

mod component;
mod copyable;
mod interactive;

pub use component::{Component, ComponentId};
pub use copyable::{CopyResult, Copyable};
pub use interactive::{Handled, Interactive};
