//! State marker trait.

/// The cached value a resource store holds.
///
/// A state is a plain snapshot: cloned out for readers, replaced
/// wholesale by the reducer, compared with `PartialEq` so a view can
/// tell whether anything it renders actually moved. `Default` is the
/// empty pre-fetch state a fresh store starts from.
pub trait StoreState: Clone + PartialEq + Default + Send + 'static {}
