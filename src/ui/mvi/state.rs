/// Marker trait for snapshot types.
///
/// Snapshots are replaced, never edited, and `PartialEq` is what the render
/// loop uses to decide whether anything changed.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
