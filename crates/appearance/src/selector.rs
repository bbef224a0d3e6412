//! Headless model for an appearance selection control.
//!
//! The rendering layer draws whatever widget it likes; this module only
//! decides which options exist and which icon represents the current state.

use crate::appearance::Appearance;

/// Icon shown for an appearance option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Sun,
    Moon,
    Monitor,
}

/// The options a selection control offers, in display order.
pub const OPTIONS: [Appearance; 3] = [Appearance::Light, Appearance::Dark, Appearance::System];

/// Icon for one option row.
pub fn option_icon(appearance: Appearance) -> Icon {
    match appearance {
        Appearance::Light => Icon::Sun,
        Appearance::Dark => Icon::Moon,
        Appearance::System => Icon::Monitor,
    }
}

/// Display label for one option row.
pub fn label(appearance: Appearance) -> &'static str {
    appearance.as_str()
}

/// Icon for the control's button.
///
/// `None` while the preference is still unknown, so a pre-initialization
/// frame shows no selection instead of a wrong one. `System` shows the icon
/// of whatever the OS currently resolves to.
pub fn button_icon(preference: Option<Appearance>, system_dark: bool) -> Option<Icon> {
    Some(match preference? {
        Appearance::System => {
            if system_dark {
                Icon::Moon
            } else {
                Icon::Sun
            }
        }
        explicit => option_icon(explicit),
    })
}
