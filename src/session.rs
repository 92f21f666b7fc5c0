//! The imperative shell around the pure calculator core.

use crate::core::{CalculatorState, InputEvent};
use crate::history::{HistoryStore, MemoryHistory};
use chrono::Local;

/// One calculator session: the current input state plus a history store.
///
/// `handle` applies the pure transition function with the wall clock and
/// performs the single effect the core produces, appending a record to
/// history after a successful evaluation. A slow or failing store must not
/// delay or corrupt display state, so append failures are swallowed here.
///
/// # Example
///
/// ```rust
/// use deskcalc::{CalculatorSession, HistoryStore, InputEvent, MemoryHistory, Operator};
///
/// let mut session = CalculatorSession::new(MemoryHistory::new());
/// session.handle(InputEvent::Digit(2));
/// session.handle(InputEvent::Operator(Operator::Add));
/// session.handle(InputEvent::Digit(3));
/// session.handle(InputEvent::Evaluate);
///
/// assert_eq!(session.display(), "5");
/// assert_eq!(session.history().list().len(), 1);
/// ```
#[derive(Debug)]
pub struct CalculatorSession<H: HistoryStore> {
    state: CalculatorState,
    history: H,
}

impl Default for CalculatorSession<MemoryHistory> {
    fn default() -> Self {
        Self::new(MemoryHistory::new())
    }
}

impl<H: HistoryStore> CalculatorSession<H> {
    /// Start a session at rest, recording into the given store.
    pub fn new(history: H) -> Self {
        Self {
            state: CalculatorState::new(),
            history,
        }
    }

    /// Handle one input event to completion.
    pub fn handle(&mut self, event: InputEvent) {
        let transition = self.state.apply(event, Local::now());
        if let Some(record) = transition.record {
            // best effort: persistence failure never blocks the calculator
            let _ = self.history.append(record);
        }
        self.state = transition.next;
    }

    /// The text currently shown to the user.
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// The full input state.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }
}
