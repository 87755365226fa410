//! Base trait for view state.

/// Marker trait for state handed to a view.
///
/// States are cloned into snapshots, compared to detect changes, and have a
/// well-defined initial value.
pub trait ViewState: Clone + PartialEq + Default + Send + 'static {}
