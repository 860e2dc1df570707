//! Calculator state machine.
//!
//! A [`Calculator`] owns the expression buffer, the memory register, the
//! angle mode, and the last answer. The UI layer turns button presses and key
//! presses into [`Action`]s, applies them, and renders the resulting
//! [`DisplaySnapshot`].

mod action;
mod display;
mod state;

pub use action::Action;
pub use display::{format_number, DisplaySnapshot, MEMORY_PLACEHOLDER};
pub use state::{Calculator, CalculatorConfig};
