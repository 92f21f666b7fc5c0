//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - Input events via [`InputEvent`]
//! - The shared token vocabulary ([`Operator`], [`Token`])
//! - The input state machine ([`CalculatorState`]) and its transition function
//!
//! All logic in this module is pure (no side effects), following the
//! "pure core, imperative shell" philosophy.

mod event;
mod state;
pub mod token;

pub use event::InputEvent;
pub use state::{CalculatorState, Phase, Transition};
pub use token::{Operator, Token};
