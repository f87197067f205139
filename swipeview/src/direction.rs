//! Layout direction resolution.

use serde::{Deserialize, Serialize};

/// Layout direction accepted at mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
    /// Defer to the platform's text-direction setting at resolution
    /// time.
    Locale,
}

impl LayoutDirection {
    /// Resolve the `Locale` sentinel against the process environment.
    /// Explicit values pass through unchanged.
    pub fn resolve(self) -> ResolvedDirection {
        match self {
            LayoutDirection::Ltr => ResolvedDirection::Ltr,
            LayoutDirection::Rtl => ResolvedDirection::Rtl,
            LayoutDirection::Locale => locale_direction(),
        }
    }
}

/// A direction with the `Locale` sentinel resolved away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedDirection {
    Ltr,
    Rtl,
}

/// Thin environment query: derive text direction from the process
/// locale. `LC_ALL` overrides `LC_MESSAGES` overrides `LANG`, per
/// POSIX precedence.
pub fn locale_direction() -> ResolvedDirection {
    let locale = ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .find_map(|key| std::env::var(key).ok().filter(|value| !value.is_empty()))
        .unwrap_or_default();
    direction_for_locale(&locale)
}

/// Script direction for a POSIX locale string such as `ar_EG.UTF-8`.
pub fn direction_for_locale(locale: &str) -> ResolvedDirection {
    // Right-to-left scripts: Arabic, Hebrew (he and legacy iw),
    // Persian, Urdu, Yiddish, Divehi, Pashto, Sindhi, Uyghur.
    const RTL_LANGUAGES: &[&str] = &["ar", "he", "iw", "fa", "ur", "yi", "dv", "ps", "sd", "ug"];

    let language = locale
        .split(&['_', '-', '.', '@'][..])
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    if RTL_LANGUAGES.contains(&language.as_str()) {
        ResolvedDirection::Rtl
    } else {
        ResolvedDirection::Ltr
    }
}
