//! Deskcalc: a pure functional desktop-calculator core
//!
//! Deskcalc is built around a "pure core, imperative shell" split. The input
//! state machine and the expression evaluator are pure functions with no
//! side effects; the single effect a calculation produces (appending to the
//! history log) is isolated in [`CalculatorSession`].
//!
//! # Core Concepts
//!
//! - **Input state machine**: [`CalculatorState`] assembles an arithmetic
//!   expression from discrete [`InputEvent`]s, returning a new state per
//!   event
//! - **Evaluator**: [`eval::evaluate`] computes a finished expression with a
//!   closed recursive-descent grammar over decimal arithmetic
//! - **History**: [`HistoryStore`] implementations keep an append-only,
//!   capped log of completed calculations
//!
//! # Example
//!
//! ```rust
//! use deskcalc::{CalculatorSession, HistoryStore, InputEvent, MemoryHistory, Operator};
//!
//! let mut session = CalculatorSession::new(MemoryHistory::new());
//! session.handle(InputEvent::Digit(4));
//! session.handle(InputEvent::Operator(Operator::Multiply));
//! session.handle(InputEvent::Digit(5));
//! session.handle(InputEvent::Evaluate);
//!
//! assert_eq!(session.display(), "20");
//! assert_eq!(session.history().list()[0].expression, "4 × 5");
//! ```

pub mod core;
pub mod eval;
pub mod history;
mod session;

// Re-export commonly used types
pub use crate::core::{CalculatorState, InputEvent, Operator, Phase, Token, Transition};
pub use eval::EvalError;
pub use history::{CalculationRecord, HistoryStore, JsonFileHistory, MemoryHistory};
pub use session::CalculatorSession;
