//! Visual styling sink.

use std::cell::RefCell;
use std::collections::BTreeSet;

/// Class applied to the visual root while effective darkness is on.
pub const DARK_CLASS: &str = "dark";

/// The single global styling root the reconciler writes to.
///
/// Both operations are idempotent.
pub trait ThemeTarget {
    fn add_dark_class(&self);
    fn remove_dark_class(&self);
}

/// Plain class-list implementation of [`ThemeTarget`].
///
/// Stands in for the rendering layer's root element: hosts read the class
/// set when styling, tests assert on it directly.
#[derive(Default)]
pub struct ClassList {
    classes: RefCell<BTreeSet<String>>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    pub fn remove(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}

impl ThemeTarget for ClassList {
    fn add_dark_class(&self) {
        self.add(DARK_CLASS);
    }

    fn remove_dark_class(&self) {
        self.remove(DARK_CLASS);
    }
}
