//! Input events accepted by the calculator state machine.

use super::token::Operator;

/// A discrete user input event.
///
/// Events are the entire interface between the UI and the core: every
/// button press or keyboard shortcut is translated into one of these
/// variants and fed to [`CalculatorState::apply`](super::CalculatorState::apply).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputEvent {
    /// A digit key, `0` through `9`.
    Digit(u8),
    /// The decimal point key.
    DecimalPoint,
    /// One of the four arithmetic operator keys.
    Operator(Operator),
    /// The `=` key.
    Evaluate,
    /// The `C` key: reset everything.
    Clear,
    /// The `CE` key: discard the in-progress operand.
    ClearEntry,
    /// Remove the last entered character.
    Backspace,
    /// The `±` key: invert the sign of the current operand.
    SignToggle,
}
