//! The "get random user" button.

use std::fmt;
use std::rc::Rc;

use crate::constants::BUTTON_LABEL;

/// Stateless activation control.
///
/// Two buttons are equal when they share the same callback `Rc`, which is
/// what lets the container skip re-rendering an unchanged button.
#[derive(Clone)]
pub struct Button {
    on_click: Rc<dyn Fn()>,
}

impl Button {
    pub fn new(on_click: Rc<dyn Fn()>) -> Self {
        Self { on_click }
    }

    /// Fire the callback once.
    pub fn activate(&self) {
        (self.on_click)();
    }

    pub fn label(&self) -> &'static str {
        BUTTON_LABEL
    }

    pub fn render(&self) -> String {
        format!("[ {} ]", self.label())
    }
}

impl PartialEq for Button {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.on_click, &other.on_click)
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button").field("label", &BUTTON_LABEL).finish()
    }
}
