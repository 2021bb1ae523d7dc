//! Core library components.
//!
//! Each module is one stage of the generate pipeline; `render` chains the
//! in-memory stages.

pub mod carrier;
pub mod config;
pub mod constants;
pub mod normalize;
pub mod output;
pub mod render;
pub mod resolve;
pub mod template;
pub mod validation;
