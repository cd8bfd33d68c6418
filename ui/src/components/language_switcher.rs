use dioxus::prelude::*;

use crate::i18n;
use crate::t;

/// Locale `<select>` over the embedded languages. Hidden when only one
/// language is embedded.
///
/// On change the shared loader is switched first; the global language signal
/// (if the platform provided one) and `on_change` are only notified when that
/// succeeds.
#[component]
pub fn LanguageSwitcher(on_change: EventHandler<String>) -> Element {
    let mut local_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();

    // The platform signal wins so switches made elsewhere (a localized route) show up here.
    let current = match lang_code_ctx {
        Some(code) => code(),
        None => local_lang(),
    };

    let show_switcher = langs().len() > 1;

    let on_input = move |evt: FormEvent| {
        let tag = evt.value();
        match i18n::set_language(&tag) {
            Ok(()) => {
                tracing::info!(tag = %tag, "language switched");
                local_lang.set(tag.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(tag.clone());
                }
                on_change.call(tag);
            }
            Err(err) => tracing::warn!(%err, tag = %tag, "language switch failed"),
        }
    };

    rsx! {
        if show_switcher {
            div { class: "navbar__locale",
                label { class: "visually-hidden", r#for: "locale-select", {t!("nav-language-label")} }
                select {
                    id: "locale-select",
                    value: "{current}",
                    oninput: on_input,
                    for code in langs() {
                        option {
                            key: "{code}",
                            value: "{code}",
                            selected: code == current,
                            {i18n::language_label(&code)}
                        }
                    }
                }
            }
        }
    }
}
