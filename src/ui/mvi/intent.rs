/// Marker trait for user actions fed to a reducer.
///
/// Intents are transient: they are built inside an input handler, reduced
/// against the committed snapshot, and dropped.
pub trait Intent: Send + 'static {}
