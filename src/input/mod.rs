//! Mouse button and keyboard key vocabulary.
//!
//! This module gives the rest of an application stable names for physical
//! inputs. Every member carries the Linux input code the compositor reports for
//! it, so the enums double as array indices and as comparison values for raw
//! event codes. Event handling itself lives with the consumer.

pub mod button;
pub mod codes;
pub mod control;
pub mod error;
pub mod key;
pub mod modifiers;
pub mod table;

// Re-export commonly used types at module level
pub use button::Button;
pub use control::Control;
pub use error::ControlError;
pub use key::{Key, KeyGroup};
pub use modifiers::Modifiers;
pub use table::{ButtonTable, ControlTable, KeyTable};
