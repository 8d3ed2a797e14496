//! Unidirectional data-flow primitives for resource stores.
//!
//! Each server-owned collection (suppliers, custom orders, auth) is
//! mirrored by one store: an immutable state value, an intent enum for
//! every event that can change it, and a pure reducer tying the two
//! together. The [`Store`] container serializes reducer application and
//! guards fetch completions against stale responses.

mod intent;
mod reducer;
mod state;
#[allow(clippy::module_inception)]
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::StoreState;
pub use store::{FetchTicket, Store};
