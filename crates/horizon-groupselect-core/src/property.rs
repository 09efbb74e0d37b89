//! Change-detecting properties.
//!
//! A [`Property`] wraps a value and reports whether a write actually changed
//! it, so the owner only emits its notification signal on real changes.
//!
//! ```
//! use horizon_groupselect_core::{Property, Signal};
//!
//! struct Dropdown {
//!     open: Property<bool>,
//!     open_changed: Signal<bool>,
//! }
//!
//! impl Dropdown {
//!     fn toggle(&self) {
//!         let open = !self.open.get();
//!         if self.open.set(open) {
//!             self.open_changed.emit(open);
//!         }
//!     }
//! }
//! ```

use parking_lot::RwLock;

/// A reactive property that tracks changes.
///
/// `set()` compares the new value with the current one and returns whether
/// the value actually changed.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// The caller emits the associated notification signal when this
    /// returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }
}

/// A read-only view of a property.
///
/// Lets an owner expose a property publicly while keeping the setter private.
pub struct ReadOnlyProperty<'a, T> {
    inner: &'a Property<T>,
}

impl<'a, T: Clone> ReadOnlyProperty<'a, T> {
    /// Create a read-only view of a property.
    pub fn new(property: &'a Property<T>) -> Self {
        Self { inner: property }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.inner.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_set_detects_change() {
        let prop = Property::new(10);

        assert!(!prop.set(10));
        assert_eq!(prop.get(), 10);

        assert!(prop.set(20));
        assert_eq!(prop.get(), 20);
    }

    #[test]
    fn test_read_only_view() {
        let prop = Property::new(String::from("Fruit"));
        let view = ReadOnlyProperty::new(&prop);
        assert_eq!(view.get(), "Fruit");
        prop.set("Veg".to_string());
        assert_eq!(view.get(), "Veg");
    }
}
