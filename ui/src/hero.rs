use dioxus::prelude::*;

use crate::i18n::use_lang_marker;
use crate::t;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

/// Landing banner; the `#home` anchor target.
#[component]
pub fn Hero() -> Element {
    let lang_marker = use_lang_marker();

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section { id: "home", class: "hero",
            div { style: "display:none", "{lang_marker}" }
            h1 { class: "hero__title", {t!("hero-title")} }
            p { class: "hero__description", {t!("hero-description")} }
        }
    }
}
