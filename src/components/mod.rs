//! Presentational components and the root container.
//!
//! Components render to plain text. Colour is left to the front-end so the
//! rendered output stays comparable in tests.

pub mod app;
pub mod button;
pub mod user_info;

use std::cell::{Cell, RefCell};

pub use app::{Activation, App};
pub use button::Button;
pub use user_info::UserInfo;

/// Remembers the last props and output of a view and skips re-rendering
/// while the props stay equal.
#[derive(Debug)]
pub struct Memo<P> {
    last: RefCell<Option<(P, String)>>,
    renders: Cell<usize>,
}

impl<P: PartialEq + Clone> Memo<P> {
    pub fn new() -> Self {
        Self {
            last: RefCell::new(None),
            renders: Cell::new(0),
        }
    }

    /// Return the cached output for `props`, or run `view` and cache it.
    pub fn render(&self, props: &P, view: impl FnOnce(&P) -> String) -> String {
        if let Some((prev, out)) = self.last.borrow().as_ref() {
            if prev == props {
                return out.clone();
            }
        }
        let out = view(props);
        self.renders.set(self.renders.get() + 1);
        *self.last.borrow_mut() = Some((props.clone(), out.clone()));
        out
    }

    /// How many times `view` actually ran.
    pub fn renders(&self) -> usize {
        self.renders.get()
    }
}

impl<P: PartialEq + Clone> Default for Memo<P> {
    fn default() -> Self {
        Self::new()
    }
}
