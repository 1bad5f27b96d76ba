//! # Commands Module
//!
//! Everything the calculator front end can ask for.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── calculate.rs  ◄─── Run the fee formula on the form
//! ├── statement.rs  ◄─── Export a commission statement
//! ├── form.rs       ◄─── Interactive prompt-driven form
//! └── config.rs     ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! Each command takes only the state it needs and returns
//! `Result<T, ApiError>`. The CLI in `lib.rs` decides how to print the
//! result (text or JSON) and which exit code to use.

pub mod calculate;
pub mod config;
pub mod form;
pub mod statement;
