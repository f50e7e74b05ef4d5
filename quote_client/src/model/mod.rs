//! Event types flowing through the presentation layer.
//!
//! - `event` — controller inputs/outputs and the terminal commands that produce inputs.
pub mod event;
