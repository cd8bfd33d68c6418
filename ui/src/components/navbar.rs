use dioxus::prelude::*;

use crate::components::LanguageSwitcher;
use crate::i18n::{self, use_lang_marker};
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// In-page sections linked from the navbar, in display order.
pub const SECTIONS: [&str; 3] = ["home", "about", "contact"];

/// Anchor for `section` on the page at `path`. Any fragment already on the
/// path is replaced; an empty path means the site root.
pub fn anchor_href(path: &str, section: &str) -> String {
    let base = path.split_once('#').map_or(path, |(base, _)| base);
    let base = if base.is_empty() { "/" } else { base };
    format!("{base}#{section}")
}

fn section_label(section: &str) -> String {
    match section {
        "home" => t!("nav-home"),
        "about" => t!("nav-about"),
        "contact" => t!("nav-contact"),
        other => other.to_string(),
    }
}

/// Fixed header with the section anchors and the locale switcher.
///
/// `path` is the current route path (the platform owns the router), and
/// `on_language_change` fires after the loader switched to the chosen tag so
/// the platform can move to the matching localized route.
#[component]
pub fn Navbar(#[props(into)] path: String, on_language_change: EventHandler<String>) -> Element {
    i18n::init();
    let lang_marker = use_lang_marker();

    let links = SECTIONS.map(|section| (anchor_href(&path, section), section_label(section)));

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "navbar",
            // Hidden marker ensures the navbar re-renders when the global language signal changes.
            div { style: "display:none", "{lang_marker}" }
            div { class: "navbar__inner",
                nav { class: "navbar__links",
                    for (href, label) in links {
                        a { key: "{href}", class: "navbar__link", href: "{href}", "{label}" }
                    }
                }
                LanguageSwitcher { on_change: on_language_change }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_relative_to_the_current_path() {
        assert_eq!(anchor_href("/", "about"), "/#about");
        assert_eq!(anchor_href("/fr-FR", "contact"), "/fr-FR#contact");
    }

    #[test]
    fn empty_path_is_root() {
        assert_eq!(anchor_href("", "home"), "/#home");
    }

    #[test]
    fn existing_fragment_is_replaced() {
        assert_eq!(anchor_href("/es-ES#about", "contact"), "/es-ES#contact");
        assert_eq!(anchor_href("#about", "home"), "/#home");
    }

    #[test]
    fn every_section_has_an_anchor_target() {
        // Hero, AboutSection and ContactSection carry these ids.
        assert_eq!(SECTIONS, ["home", "about", "contact"]);
    }
}
