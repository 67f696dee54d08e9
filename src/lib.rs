//! Number sequence puzzle (workspace facade crate).
//!
//! The game lives in dedicated crates under `crates/`; this package
//! re-exports them as `number_sequence::{core,input,term,types}` and adds the
//! pieces the terminal binary is assembled from (configuration, logging and
//! the app controller).

pub use number_sequence_core as core;
pub use number_sequence_input as input;
pub use number_sequence_term as term;
pub use number_sequence_types as types;

pub mod app;
pub mod config;
pub mod logging;
