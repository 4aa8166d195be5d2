//! Model-View-Intent (MVI) primitives shared by the calculator and the UI.
//!
//! ```text
//! key / click ──→ Intent ──→ Reducer ──→ State ──→ draw
//!      ↑                                             │
//!      └─────────────────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of everything the view renders
//! - **Intent**: a user action (button press, shortcut)
//! - **Reducer**: pure `(State, Intent) -> State` transition

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
