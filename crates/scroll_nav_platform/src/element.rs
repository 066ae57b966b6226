//! Tracked element abstraction

/// The element whose class membership reflects the scroll state
///
/// Implemented by platform-specific element wrappers.
pub trait TrackedElement {
    /// Add classes; adding a class that is already present is a no-op
    fn add_classes(&self, classes: &[&str]);

    /// Remove classes; removing an absent class is a no-op
    fn remove_classes(&self, classes: &[&str]);

    /// Check class membership
    fn has_class(&self, class: &str) -> bool;

    /// Current rendered height in CSS pixels
    fn rendered_height(&self) -> f64;
}
