//! Root container: owns the cache and the current user, gates clicks
//! through the throttle, and composes the header, button and user info.
//!
//! The container is single-threaded. Fetches run as local tasks, so
//! [`App::click`] (and [`Button::activate`]) must be called from inside a
//! [`tokio::task::LocalSet`].
//!
//! Overlapping fetches are not de-duplicated: whichever completes last
//! decides the current user. Completions that arrive after the container
//! was unmounted are dropped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::components::button::Button;
use crate::components::user_info::UserInfo;
use crate::components::Memo;
use crate::constants::HEADER_TEXT;
use crate::fetcher::{self, IdPicker, UserSource};
use crate::models::UserId;
use crate::state::{AppState, Event, Status};
use crate::throttle::{Clock, SystemClock, Throttle};

/// What a click turned into.
#[derive(Debug)]
pub enum Activation {
    /// Dropped by the throttle gate.
    Throttled,
    /// Served from the cache; state is already updated.
    CacheHit(UserId),
    /// A fetch for `id` is in flight. Awaiting `handle` waits for it to
    /// settle; it never yields an error.
    Fetching { id: UserId, handle: JoinHandle<()> },
}

type Observer = Box<dyn Fn(&AppState)>;
type GatedAction = Throttle<Box<dyn Fn() -> Activation>>;

/// State shared between the container and its in-flight fetches.
struct Shared {
    state: RefCell<AppState>,
    source: Arc<dyn UserSource>,
    ids: Box<dyn IdPicker>,
    observers: RefCell<Vec<Observer>>,
    mounted: Cell<bool>,
}

impl Shared {
    fn dispatch(&self, event: Event) {
        let next = self.state.borrow().apply(event);
        *self.state.borrow_mut() = next.clone();

        // Observers may subscribe more observers while they run.
        let observers = std::mem::take(&mut *self.observers.borrow_mut());
        for observer in &observers {
            observer(&next);
        }
        let mut slot = self.observers.borrow_mut();
        let added = std::mem::replace(&mut *slot, observers);
        slot.extend(added);
    }

    fn activate(self: &Rc<Self>) -> Activation {
        let id = self.ids.pick();
        let hit = self.state.borrow().cached(id).is_some();
        if hit {
            tracing::debug!(id, "user served from cache");
            self.dispatch(Event::CacheHit(id));
            return Activation::CacheHit(id);
        }

        let shared = Rc::clone(self);
        let handle = tokio::task::spawn_local(async move { shared.load(id).await });
        Activation::Fetching { id, handle }
    }

    async fn load(&self, id: UserId) {
        match fetcher::fetch_checked(self.source.as_ref(), id).await {
            Ok(user) => {
                if !self.mounted.get() {
                    tracing::debug!(id, "fetch finished after unmount, result dropped");
                    return;
                }
                self.dispatch(Event::Fetched(user));
            }
            Err(error) => {
                tracing::error!(id, %error, "fetching user failed");
            }
        }
    }
}

/// The mounted widget.
pub struct App {
    shared: Rc<Shared>,
    gate: Rc<GatedAction>,
    on_click: Rc<dyn Fn()>,
    button_view: Memo<Button>,
    user_info: UserInfo,
}

impl App {
    /// Mount with empty state, gating clicks by `interval` on the system clock.
    pub fn mount(
        source: Arc<dyn UserSource>,
        ids: Box<dyn IdPicker>,
        interval: Duration,
    ) -> Self {
        Self::mount_with_clock(source, ids, interval, Rc::new(SystemClock))
    }

    /// Mount with an explicit clock for the throttle gate.
    pub fn mount_with_clock(
        source: Arc<dyn UserSource>,
        ids: Box<dyn IdPicker>,
        interval: Duration,
        clock: Rc<dyn Clock>,
    ) -> Self {
        let shared = Rc::new(Shared {
            state: RefCell::new(AppState::default()),
            source,
            ids,
            observers: RefCell::new(Vec::new()),
            mounted: Cell::new(true),
        });

        let action_shared = Rc::clone(&shared);
        let action: Box<dyn Fn() -> Activation> = Box::new(move || action_shared.activate());
        let gate = Rc::new(Throttle::with_clock(action, interval, clock));

        let click_gate = Rc::clone(&gate);
        let on_click: Rc<dyn Fn()> = Rc::new(move || {
            click_gate.call();
        });

        tracing::debug!(interval_ms = interval.as_millis() as u64, "widget mounted");

        Self {
            shared,
            gate,
            on_click,
            button_view: Memo::new(),
            user_info: UserInfo::new(),
        }
    }

    /// Activate through the throttle gate.
    pub fn click(&self) -> Activation {
        self.gate.call().unwrap_or(Activation::Throttled)
    }

    /// The button, wired to the gated action. Every call returns a button
    /// equal to the previous one.
    pub fn button(&self) -> Button {
        Button::new(Rc::clone(&self.on_click))
    }

    /// Register a callback run after every state change.
    pub fn subscribe(&self, observer: impl Fn(&AppState) + 'static) {
        self.shared.observers.borrow_mut().push(Box::new(observer));
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AppState {
        self.shared.state.borrow().clone()
    }

    pub fn status(&self) -> Status {
        self.shared.state.borrow().status()
    }

    /// Render header, button and user info.
    pub fn render(&self) -> String {
        let button = self.button();
        let button_text = self.button_view.render(&button, Button::render);
        let state = self.shared.state.borrow();
        let info = self.user_info.view(state.current.as_ref());

        let mut out = format!("{HEADER_TEXT}\n{button_text}\n");
        if !info.is_empty() {
            out.push('\n');
            out.push_str(&info);
        }
        out
    }

    /// Real renders of (button, user info) so far.
    pub fn view_renders(&self) -> (usize, usize) {
        (self.button_view.renders(), self.user_info.renders())
    }

    /// Tear the widget down. In-flight fetches keep running but their
    /// results are discarded.
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shared.mounted.set(false);
        self.shared.observers.borrow_mut().clear();
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("state", &self.shared.state.borrow())
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}
