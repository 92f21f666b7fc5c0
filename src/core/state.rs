//! The calculator input state machine.
//!
//! The machine owns the display buffer and the pending expression and turns
//! a stream of discrete input events into buffer mutations. It is written as
//! a pure transition function: applying an event to a state returns a new
//! state plus an optional history record, with no side effects. The
//! imperative shell lives in [`crate::CalculatorSession`].

use super::event::InputEvent;
use super::token::{to_canonical, to_display, Operator};
use crate::eval;
use crate::history::CalculationRecord;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The phase the input state machine is in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// No pending expression; the buffer is `"0"` or a finished result.
    Fresh,
    /// A number is being typed, possibly after a pending expression.
    Operand,
    /// The buffer ends with an operator glyph, awaiting the next operand.
    PendingOperator,
    /// The buffer shows `"Error"`; only `Clear` is meaningful.
    Error,
}

impl Phase {
    /// Get the phase's name for display and logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Fresh => "Fresh",
            Self::Operand => "Operand",
            Self::PendingOperator => "PendingOperator",
            Self::Error => "Error",
        }
    }

    /// Check if this is the error phase.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// Result of applying one input event: the successor state and, after a
/// successful evaluation, the record to append to history.
#[derive(Clone, Debug)]
pub struct Transition {
    pub next: CalculatorState,
    pub record: Option<CalculationRecord>,
}

/// One calculator session's input state.
///
/// Holds the display buffer (operator glyphs, segments separated by single
/// spaces) and the pending expression (canonical symbols, ending in one
/// operator flanked by single spaces whenever it is non-empty). The state is
/// immutable per transition: [`CalculatorState::apply`] returns a new value.
///
/// # Example
///
/// ```rust
/// use chrono::Local;
/// use deskcalc::{CalculatorState, InputEvent, Operator, Phase};
///
/// let now = Local::now();
/// let state = CalculatorState::new();
/// let state = state.apply(InputEvent::Digit(2), now).next;
/// let state = state.apply(InputEvent::Operator(Operator::Add), now).next;
/// let state = state.apply(InputEvent::Digit(3), now).next;
///
/// assert_eq!(state.display(), "2 + 3");
/// assert_eq!(state.pending(), "2 + ");
///
/// let transition = state.apply(InputEvent::Evaluate, now);
/// assert_eq!(transition.next.display(), "5");
/// assert_eq!(transition.next.phase(), Phase::Fresh);
/// assert_eq!(transition.record.unwrap().expression, "2 + 3");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    display: String,
    pending: String,
    phase: Phase,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// The state at rest: buffer `"0"`, no pending expression.
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            pending: String::new(),
            phase: Phase::Fresh,
        }
    }

    /// The text currently shown to the user. Never empty.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The operator-joined prefix accumulated so far, in canonical symbols.
    /// When non-empty it ends with exactly one operator flanked by single
    /// spaces; it is empty until an operator is confirmed.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Apply one input event, returning the successor state and an optional
    /// history record.
    ///
    /// This is a pure function. `at` stamps the history record produced by a
    /// successful `Evaluate`; it is ignored for every other event.
    ///
    /// In the error phase every event except `Clear` is ignored.
    pub fn apply(&self, event: InputEvent, at: DateTime<Local>) -> Transition {
        if self.phase.is_error() && event != InputEvent::Clear {
            return Transition {
                next: self.clone(),
                record: None,
            };
        }

        let next = match event {
            InputEvent::Digit(d) => self.digit(d),
            InputEvent::DecimalPoint => self.decimal_point(),
            InputEvent::Operator(op) => self.operator(op),
            InputEvent::Evaluate => return self.evaluate(at),
            InputEvent::Clear => Self::new(),
            InputEvent::ClearEntry => self.clear_entry(),
            InputEvent::Backspace => self.backspace(),
            InputEvent::SignToggle => self.sign_toggle(),
        };

        Transition { next, record: None }
    }

    fn digit(&self, d: u8) -> Self {
        let Some(ch) = char::from_digit(u32::from(d), 10) else {
            return self.clone();
        };
        let mut next = self.clone();
        match self.phase {
            Phase::PendingOperator => {
                next.display.push(' ');
                next.display.push(ch);
            }
            _ if self.display == "0" => {
                next.display = ch.to_string();
            }
            _ => next.display.push(ch),
        }
        next.phase = Phase::Operand;
        next
    }

    fn decimal_point(&self) -> Self {
        let mut next = self.clone();
        match self.phase {
            Phase::PendingOperator => next.display.push_str(" 0."),
            _ => {
                // at most one decimal point per number segment
                if self.last_segment().contains('.') {
                    return next;
                }
                next.display.push('.');
            }
        }
        next.phase = Phase::Operand;
        next
    }

    fn operator(&self, op: Operator) -> Self {
        let display = match self.phase {
            // No operand was typed since the last operator: the new
            // operator replaces the trailing one, it never stacks.
            Phase::PendingOperator => {
                let prefix = match self.display.rfind(' ') {
                    Some(i) => &self.display[..i],
                    None => "",
                };
                format!("{} {}", prefix, op.glyph())
            }
            _ => format!("{} {}", self.display, op.glyph()),
        };
        let pending = format!("{} ", to_canonical(&display));
        Self {
            display,
            pending,
            phase: Phase::PendingOperator,
        }
    }

    fn evaluate(&self, at: DateTime<Local>) -> Transition {
        let expression = to_canonical(&self.display);
        match eval::evaluate(&expression) {
            Ok(value) => {
                let result = value.to_string();
                let record = CalculationRecord::new(self.display.clone(), result.clone(), at);
                Transition {
                    next: Self {
                        display: result,
                        pending: String::new(),
                        phase: Phase::Fresh,
                    },
                    record: Some(record),
                }
            }
            // Any evaluator failure drives the same transition; the kind is
            // not inspected here.
            Err(_) => Transition {
                next: Self {
                    display: "Error".to_string(),
                    pending: String::new(),
                    phase: Phase::Error,
                },
                record: None,
            },
        }
    }

    fn clear_entry(&self) -> Self {
        if self.pending.is_empty() {
            return Self::new();
        }
        Self {
            display: to_display(self.pending.trim_end()),
            pending: self.pending.clone(),
            phase: Phase::PendingOperator,
        }
    }

    fn backspace(&self) -> Self {
        if self.display == "0" {
            return self.clone();
        }
        let mut text = self.display.clone();
        text.pop();
        let text = text.trim_end().to_string();
        // Backspacing through to nothing, or to a bare operator marker,
        // resets the whole session rather than restoring the prior operand.
        if text.is_empty() || is_lone_operator(&text) {
            return Self::new();
        }
        Self::from_display(text)
    }

    fn sign_toggle(&self) -> Self {
        let mut next = self.clone();
        if !self.pending.is_empty() && self.display.contains(' ') {
            // Toggle only the last numeric segment of a multi-term display.
            let mut segments: Vec<String> = self.display.split(' ').map(str::to_string).collect();
            if let Some(last) = segments.last_mut() {
                if is_numeric_segment(last) {
                    *last = toggled(last);
                    next.display = segments.join(" ");
                }
            }
        } else {
            next.display = toggled(&self.display);
        }
        next
    }

    /// Rebuild pending expression and phase from edited display text, so a
    /// backspace that removed an operator glyph re-syncs the two.
    fn from_display(display: String) -> Self {
        let segments: Vec<&str> = display.split(' ').collect();
        match segments.iter().rposition(|s| is_lone_operator(s)) {
            Some(i) if i + 1 == segments.len() => {
                let pending = format!("{} ", to_canonical(&display));
                Self {
                    display,
                    pending,
                    phase: Phase::PendingOperator,
                }
            }
            Some(i) => {
                let pending = format!("{} ", to_canonical(&segments[..=i].join(" ")));
                Self {
                    display,
                    pending,
                    phase: Phase::Operand,
                }
            }
            None => {
                let phase = if display == "0" {
                    Phase::Fresh
                } else {
                    Phase::Operand
                };
                Self {
                    display,
                    pending: String::new(),
                    phase,
                }
            }
        }
    }

    fn last_segment(&self) -> &str {
        self.display.rsplit(' ').next().unwrap_or(&self.display)
    }
}

/// True when the text is exactly one operator glyph or symbol.
fn is_lone_operator(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Operator::from_glyph(c).is_some(),
        _ => false,
    }
}

/// True when the segment is a number: an optional leading minus followed by
/// digits and at most a decimal point.
fn is_numeric_segment(segment: &str) -> bool {
    let body = segment.strip_prefix('-').unwrap_or(segment);
    !body.is_empty()
        && body.chars().all(|c| c.is_ascii_digit() || c == '.')
        && body.chars().any(|c| c.is_ascii_digit())
}

fn toggled(segment: &str) -> String {
    match segment.strip_prefix('-') {
        Some(rest) => rest.to_string(),
        None => format!("-{segment}"),
    }
}
