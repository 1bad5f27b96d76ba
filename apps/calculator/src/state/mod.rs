//! # State Module
//!
//! Application state for the calculator.
//!
//! ## State Types
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Calculator State                                     │
//! │                                                                         │
//! │  ┌───────────────────────────┐   ┌───────────────────────────────┐     │
//! │  │        FormState          │   │         ConfigState           │     │
//! │  │                           │   │                               │     │
//! │  │  • Four raw input fields  │   │  • Title / intro text         │     │
//! │  │  • Last result            │   │  • Currency symbol            │     │
//! │  │  • Mutated on every edit  │   │  • Statement dir / width      │     │
//! │  └───────────────────────────┘   └───────────────────────────────┘     │
//! │                                                                         │
//! │  Both are owned by the command being run; nothing is global.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod form;

pub use config::{ConfigError, ConfigState};
pub use form::{FormResult, FormState};
