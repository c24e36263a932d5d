//! Library exports for the controls vocabulary.
//!
//! Exposes the [`Key`] and [`Button`] enumerations alongside the configuration
//! types that name them, so applications and tools share one set of names and
//! one validation path.

pub mod config;
pub mod input;

pub use config::Config;
pub use input::{Button, Key};
