use dioxus::prelude::*;

use crate::components::{AboutSection, Navbar};
use crate::contact::ContactSection;
use crate::Hero;

/// The whole landing page: fixed navbar over the hero, about and contact
/// sections.
#[component]
pub fn Home(#[props(into)] path: String, on_language_change: EventHandler<String>) -> Element {
    #[cfg(debug_assertions)]
    tracing::trace!(path = %path, lang = %crate::i18n::current_language(), "home render");

    rsx! {
        Navbar { path, on_language_change }
        main { class: "page page-home",
            Hero {}
            AboutSection {}
            ContactSection {}
        }
    }
}
