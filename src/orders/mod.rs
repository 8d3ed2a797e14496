//! Custom order resource store: state, intents, reducer, actions, and
//! the pre-submission form validation.

mod actions;
mod intent;
mod reducer;
mod state;
mod validate;

pub use actions::{
    analyze_order, cancel_order, confirm_order, create_custom_order, fetch_custom_order,
    fetch_custom_orders, fetch_my_orders, fetch_pending_analysis, fetch_urgent_orders,
    update_custom_order,
};
pub use intent::OrderIntent;
pub use reducer::OrderReducer;
pub use state::OrderState;
pub use validate::{validate_order_request, ValidationError};

/// Store alias used by views and actions.
pub type OrderStore = crate::store::Store<OrderReducer>;
