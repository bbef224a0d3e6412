//! First-paint styling, before any controller exists.
//!
//! The persisted preference is only reconciled after the UI mounts, which
//! is too late for the very first frame. This pass decides darkness
//! straight from the raw store contents and applies the class up front, so
//! the first paint already has the right scheme.

use shade_store::KeyValueStore;

use crate::prefs::APPEARANCE;
use crate::signal::ColorScheme;
use crate::style::ThemeTarget;

/// Older builds stored the choice under this key.
const LEGACY_THEME_KEY: &str = "theme";

/// Apply the dark class for the state the store already holds.
///
/// Dark when the stored preference is `"dark"`, or when no preference is
/// stored (or `"system"` is) and the OS reports dark. Only ever adds the
/// class: this runs against a pristine root.
pub fn apply_boot_class(
    store: &dyn KeyValueStore,
    scheme: &dyn ColorScheme,
    target: &dyn ThemeTarget,
) {
    let stored = store.get(APPEARANCE.key());
    let legacy_dark = store
        .get(LEGACY_THEME_KEY)
        .is_some_and(|v| v == "dark");

    let dark = legacy_dark
        || match stored.as_deref() {
            Some("dark") => true,
            None | Some("system") => scheme.is_dark(),
            Some(_) => false,
        };

    if dark {
        target.add_dark_class();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::SchemeRelay;
    use crate::style::{ClassList, DARK_CLASS};
    use shade_store::MemoryStore;

    fn boot(store: &MemoryStore, os_dark: bool) -> ClassList {
        let classes = ClassList::new();
        apply_boot_class(store, &SchemeRelay::new(os_dark), &classes);
        classes
    }

    #[test]
    fn stored_dark_paints_dark() {
        let store = MemoryStore::new();
        store.set("appearance", "dark");
        assert!(boot(&store, false).contains(DARK_CLASS));
    }

    #[test]
    fn empty_store_follows_the_os() {
        let store = MemoryStore::new();
        assert!(boot(&store, true).contains(DARK_CLASS));
        assert!(!boot(&store, false).contains(DARK_CLASS));
    }

    #[test]
    fn stored_system_follows_the_os() {
        let store = MemoryStore::new();
        store.set("appearance", "system");
        assert!(boot(&store, true).contains(DARK_CLASS));
    }

    #[test]
    fn stored_light_stays_light_even_when_os_is_dark() {
        let store = MemoryStore::new();
        store.set("appearance", "light");
        assert!(!boot(&store, true).contains(DARK_CLASS));
    }

    #[test]
    fn legacy_theme_key_still_paints_dark() {
        let store = MemoryStore::new();
        store.set("theme", "dark");
        store.set("appearance", "light");
        assert!(boot(&store, false).contains(DARK_CLASS));
    }
}
