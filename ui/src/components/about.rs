use dioxus::prelude::*;

use crate::i18n::use_lang_marker;
use crate::t;

const ABOUT_CSS: Asset = asset!("/assets/styling/about.css");
const LOGO: Asset = asset!("/assets/images/logo.svg");

#[component]
fn CheckIcon() -> Element {
    rsx! {
        svg {
            class: "about__check",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            "aria-hidden": "true",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "M5 13l4 4L19 7",
            }
        }
    }
}

#[component]
pub fn AboutSection() -> Element {
    let lang_marker = use_lang_marker();

    let features = [
        t!("about-feature-1"),
        t!("about-feature-2"),
        t!("about-feature-3"),
    ];

    rsx! {
        document::Link { rel: "stylesheet", href: ABOUT_CSS }

        section { id: "about", class: "about",
            div { style: "display:none", "{lang_marker}" }
            div { class: "about__inner",
                div { class: "about__header",
                    h2 { class: "about__title", {t!("about-title")} }
                    div { class: "about__rule" }
                }

                div { class: "about__grid",
                    div { class: "about__text",
                        h3 { class: "about__subtitle", {t!("about-subtitle")} }
                        p { class: "about__description", {t!("about-description")} }
                        ul { class: "about__features",
                            for (idx, feature) in features.into_iter().enumerate() {
                                li { key: "{idx}", class: "about__feature",
                                    CheckIcon {}
                                    span { "{feature}" }
                                }
                            }
                        }
                    }
                    div { class: "about__media",
                        img {
                            class: "about__logo",
                            src: LOGO,
                            alt: t!("about-image-alt"),
                            width: "300",
                            height: "100",
                        }
                    }
                }
            }
        }
    }
}
