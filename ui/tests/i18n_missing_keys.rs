//! Translation completeness test.
//! Ensures every non‑fallback locale provides *at least* the keys present
//! in the fallback (en-US) `landing_ui.ftl`, and that
//! no file defines the same message twice.
//!
//! This is a lightweight parser:
//! - Ignores comment lines starting with `#`
//! - Treats any line of the form `key =` or `key=` as a message definition
//! - Skips blank / attribute / continuation lines
//! - Does not attempt to parse multi-line pattern bodies (only keys)
//!
//! If you add a new locale:
//! 1. Create `ui/i18n/<locale>/landing_ui.ftl`
//! 2. Copy all keys from `en-US/landing_ui.ftl`
//! 3. Register it in `LOCALES` below.

use std::collections::{BTreeSet, HashSet};

const EN_US: &str = include_str!("../i18n/en-US/landing_ui.ftl");

const LOCALES: &[(&str, &str)] = &[
    ("es-ES", include_str!("../i18n/es-ES/landing_ui.ftl")),
    ("fr-FR", include_str!("../i18n/fr-FR/landing_ui.ftl")),
];

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback_keys = extract_keys(EN_US);

    // Ensure fallback itself has no duplicates and at least one key.
    assert!(
        !fallback_keys.is_empty(),
        "Fallback (en-US) contains no keys."
    );
    assert_no_dup_keys(EN_US, "en-US");

    let mut failures = Vec::new();

    for (locale, src) in LOCALES {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let mut missing: BTreeSet<String> = BTreeSet::new();

        for k in &fallback_keys {
            if !keys.contains(k) {
                missing.insert(k.clone());
            }
        }

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn no_locale_defines_extra_keys() {
    let fallback_keys = extract_keys(EN_US);
    for (locale, src) in LOCALES {
        let mut extra: Vec<_> = extract_keys(src)
            .into_iter()
            .filter(|k| !fallback_keys.contains(k))
            .collect();
        extra.sort();
        assert!(
            extra.is_empty(),
            "Locale {locale} defines keys unknown to en-US: {}",
            extra.join(", ")
        );
    }
}

#[test]
fn translations_are_not_left_empty() {
    for (locale, src) in LOCALES.iter().chain(std::iter::once(&("en-US", EN_US))) {
        for line in src.lines() {
            let line = line.trim();
            if line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                assert!(
                    !value.trim().is_empty(),
                    "{locale}: `{}` has an empty value",
                    key.trim()
                );
            }
        }
    }
}

/// Message ids defined on non-comment, non-attribute lines, with their line text.
fn definitions(src: &str) -> impl Iterator<Item = (&str, &str)> {
    src.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('.'))
        .filter_map(|line| {
            let (key, _) = line.split_once('=')?;
            let key = key.trim();
            let plain = !key.is_empty()
                && !key.contains(char::is_whitespace)
                && !key.starts_with(['[', '@']);
            plain.then_some((key, line))
        })
}

fn extract_keys(src: &str) -> HashSet<String> {
    definitions(src).map(|(key, _)| key.to_string()).collect()
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let dups: BTreeSet<String> = definitions(src)
        .filter(|(key, _)| !seen.insert(*key))
        .map(|(key, line)| format!("{key}  (line: \"{line}\")"))
        .collect();

    assert!(
        dups.is_empty(),
        "Duplicate key definitions in {locale}:\n  {}",
        dups.into_iter().collect::<Vec<_>>().join("\n  ")
    );
}
