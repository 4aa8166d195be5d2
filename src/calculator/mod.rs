//! Calculator core: state, intents, the reducer that ties them together,
//! and the helpers that turn operands into display text.

pub mod arithmetic;
mod format;
mod intent;
mod operation;
mod reducer;
mod script;
mod state;

pub use arithmetic::ERROR_MARKER;
pub use format::{format_operand, OperandFormatter};
pub use intent::CalculatorIntent;
pub use operation::{Digit, Operation};
pub use reducer::CalculatorReducer;
pub use script::{parse_script, replay, ScriptError};
pub use state::CalculatorState;
