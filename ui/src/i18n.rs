//! Internationalization (i18n) support for `landing-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/landing_ui.ftl   (fallback/reference)
//!   es-ES/landing_ui.ftl
//!   fr-FR/landing_ui.ftl
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let label = t!("nav-about");
//! ```
//!
//! To add a new locale:
//! 1. Copy `en-US/landing_ui.ftl` to `i18n/<lang-id>/landing_ui.ftl`.
//! 2. Translate each message value (keep IDs identical).
//! 3. Add a native name to `language_label` and register the file in
//!    `tests/i18n_missing_keys.rs`.
//!
//! Platform notes:
//! - Web/WASM: uses `WebLanguageRequester` (`navigator.languages`).
//! - Native (server rendering, tests): uses `DesktopLanguageRequester`.
//! - Assets are always embedded on WASM (`debug-embed` is enabled for that target).
use std::sync::Once;

use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation macro routing every lookup through the shared loader.
///
/// ```ignore
/// let label = t!("nav-home");
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain (crate name with underscores, as `fl!` resolves it); the
/// fallback file lives at `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "landing_ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n from the platform's preferred languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => tracing::debug!(?selected, "i18n initialized"),
            Err(err) => {
                tracing::warn!(%err, "failed selecting languages; continuing with fallback")
            }
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        tracing::debug!(tag, "ignoring unparseable language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Language tag currently used for lookups.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Native display name for a language tag (falls back to the tag itself).
pub fn language_label(tag: &str) -> String {
    match tag {
        "en-US" => "English".to_string(),
        "es-ES" => "Español".to_string(),
        "fr-FR" => "Français".to_string(),
        other => other.to_string(),
    }
}

/// Subscribe the calling component to the platform's global language signal
/// (if one is provided) so it re-renders after a locale switch.
///
/// Render the returned value in a hidden node to keep the dependency.
pub fn use_lang_marker() -> String {
    let code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    code.map(|c| c()).unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == FALLBACK_LANGUAGE));
    }

    #[test]
    fn every_embedded_language_has_a_native_label() {
        for tag in available_languages() {
            assert_ne!(language_label(&tag), tag, "no native label for {tag}");
        }
    }

    #[test]
    fn fallback_bundle_is_named_after_the_domain() {
        let path = format!("{FALLBACK_LANGUAGE}/{DOMAIN}.ftl");
        assert!(Localizations::get(&path).is_some(), "missing embedded {path}");
        for lang in available_languages() {
            let path = format!("{lang}/{DOMAIN}.ftl");
            assert!(Localizations::get(&path).is_some(), "missing embedded {path}");
        }
    }

    #[test]
    fn current_language_is_an_embedded_one() {
        init();
        assert!(available_languages().contains(&current_language()));
    }

    #[test]
    fn unknown_tag_label_is_passthrough() {
        assert_eq!(language_label("de-DE"), "de-DE");
    }

    #[test]
    fn invalid_tag_is_ignored() {
        init();
        assert!(set_language("not a tag!").is_ok());
    }

    #[test]
    fn dynamic_language_switch_reverts_on_failure() {
        init();
        let before = fl!(&*LOADER, "nav-contact");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "nav-contact");
        assert_eq!(before, after);
    }
}
