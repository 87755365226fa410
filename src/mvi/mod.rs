//! Model-View-Intent (MVI) primitives.
//!
//! Stateful pieces that a presentation layer renders from are modelled as
//! unidirectional data flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of everything the view needs
//! - **Intent**: Lifecycle events (fetch started, fetch finished)
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ViewState;
