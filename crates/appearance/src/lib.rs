// Appearance preference - light/dark/system reconciliation

pub mod appearance;
pub mod boot;
pub mod controller;
pub mod prefs;
pub mod selector;
pub mod signal;
pub mod style;

pub use appearance::Appearance;
pub use boot::apply_boot_class;
pub use controller::AppearanceController;
pub use prefs::PreferencesRepository;
pub use signal::{ColorScheme, SchemeRelay, Subscription};
pub use style::{ClassList, ThemeTarget, DARK_CLASS};
