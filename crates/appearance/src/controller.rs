//! Appearance reconciliation.
//!
//! Loads the persisted preference once at mount, tracks the OS dark/light
//! signal, and keeps the styling root's dark class in sync with the
//! effective appearance.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::appearance::Appearance;
use crate::prefs::PreferencesRepository;
use crate::signal::{ColorScheme, Subscription};
use crate::style::ThemeTarget;

struct State {
    /// `None` until `init` has run. Consumers rendering a selection control
    /// use this window to suppress the selected icon, so the first frame
    /// cannot flash a choice the user never made.
    preference: Option<Appearance>,
    system_dark: bool,
}

/// Reconciles the persisted appearance preference, the OS dark/light
/// signal, and the styling root.
///
/// One controller per mounted UI. Dropping it releases the OS-signal
/// subscription.
pub struct AppearanceController {
    state: Rc<RefCell<State>>,
    prefs: PreferencesRepository,
    scheme: Rc<dyn ColorScheme>,
    target: Rc<dyn ThemeTarget>,
    _watch: Option<Subscription>,
}

impl AppearanceController {
    /// A controller that has not read the store yet:
    /// [`preference`](Self::preference) stays `None` until
    /// [`init`](Self::init) runs.
    pub fn new(
        prefs: PreferencesRepository,
        scheme: Rc<dyn ColorScheme>,
        target: Rc<dyn ThemeTarget>,
    ) -> Self {
        let system_dark = scheme.is_dark();
        Self {
            state: Rc::new(RefCell::new(State {
                preference: None,
                system_dark,
            })),
            prefs,
            scheme,
            target,
            _watch: None,
        }
    }

    /// First reconciliation. Runs once; later calls are no-ops.
    ///
    /// Loads the persisted preference (default `System`), applies the dark
    /// class for the effective state, and only then subscribes to the OS
    /// signal, so this transition is ordered before any signal-driven one.
    /// The loaded value is not written back: a default the user never chose
    /// must not end up persisted.
    pub fn init(&mut self) {
        if self.state.borrow().preference.is_some() {
            return;
        }

        let loaded = self.prefs.appearance();
        {
            let mut state = self.state.borrow_mut();
            state.preference = Some(loaded);
            state.system_dark = self.scheme.is_dark();
        }
        self.apply();

        let state = Rc::downgrade(&self.state);
        let target = Rc::clone(&self.target);
        self._watch = Some(self.scheme.watch(Box::new(move |dark| {
            system_scheme_changed(&state, &target, dark);
        })));
    }

    /// Explicit user selection: persist the new preference, then restyle.
    pub fn select(&self, appearance: Appearance) {
        self.state.borrow_mut().preference = Some(appearance);
        self.prefs.set_appearance(appearance);
        self.apply();
    }

    /// The tri-state preference: `None` until `init` has run.
    pub fn preference(&self) -> Option<Appearance> {
        self.state.borrow().preference
    }

    /// Effective darkness after resolving `System` against the OS signal.
    pub fn is_dark(&self) -> bool {
        let state = self.state.borrow();
        match state.preference {
            Some(Appearance::Dark) => true,
            Some(Appearance::Light) => false,
            Some(Appearance::System) | None => state.system_dark,
        }
    }

    fn apply(&self) {
        if self.is_dark() {
            self.target.add_dark_class();
        } else {
            self.target.remove_dark_class();
        }
    }
}

fn system_scheme_changed(state: &Weak<RefCell<State>>, target: &Rc<dyn ThemeTarget>, dark: bool) {
    let Some(state) = state.upgrade() else { return };
    let mut state = state.borrow_mut();
    state.system_dark = dark;
    // The preference itself did not change: restyle, never persist.
    if state.preference == Some(Appearance::System) {
        if dark {
            target.add_dark_class();
        } else {
            target.remove_dark_class();
        }
    }
}
