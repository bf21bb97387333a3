//! Analytic model of a single relativistic electron in a magnetic bottle, and of the
//! cyclotron radiation frequency a stationary receiver observes from it.
pub mod configuration;
pub mod constant;
pub mod doppler;
pub mod electron;
pub mod error;
pub mod magnetic;
pub mod maths;
pub mod motion;
pub mod trap;

pub use error::{Result, TrapError};
