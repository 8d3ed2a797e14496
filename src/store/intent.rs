//! Intent marker trait.

/// An event a store can reduce.
///
/// Everything that changes state arrives as an intent: fulfilled or
/// rejected completions of API calls, the pending markers dispatched
/// before a fetch goes out, and purely local view events such as
/// clearing the error slot or selecting a page.
pub trait Intent: Send + 'static {}
