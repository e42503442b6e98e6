//! img2ascii library crate.
//!
//! Exposes the pipeline stages for the binary and for integration testing:
//! [`loader`] decodes, [`resize`] fits and resamples, [`ascii`] maps pixels
//! to ramp characters, [`writer`] persists the result, and [`pipeline`] ties
//! the four together.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod resize;
pub mod writer;
