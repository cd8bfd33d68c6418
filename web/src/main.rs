use dioxus::prelude::*;

use ui::i18n;
use ui::views::Home as HomePage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:locale")]
    LocalizedHome { locale: String },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

// `dioxus::launch` installs the tracing subscriber.
fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_hook(|| tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting landing page"));
    i18n::init();

    // Global reactive language code; shared components subscribe to it and the
    // language switcher updates it.
    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Switching language moves to the locale-prefixed route so the URL can be shared.
fn go_to_locale(tag: String) {
    navigator().push(Route::LocalizedHome { locale: tag });
}

#[component]
fn Home() -> Element {
    let path = use_route::<Route>().to_string();

    rsx! {
        HomePage { path, on_language_change: go_to_locale }
    }
}

/// `/:locale` selects the language named by the path. Unknown tags fall back
/// to the default bundle; the global signal always reflects what was loaded.
#[component]
fn LocalizedHome(locale: String) -> Element {
    let mut lang_code = use_context::<Signal<String>>();
    let path = use_route::<Route>().to_string();

    use_effect(use_reactive((&locale,), move |(locale,)| {
        if let Err(err) = i18n::set_language(&locale) {
            tracing::warn!(%err, locale = %locale, "cannot load requested locale");
        }
        let active = i18n::current_language();
        if *lang_code.peek() != active {
            lang_code.set(active);
        }
    }));

    rsx! {
        HomePage { path, on_language_change: go_to_locale }
    }
}
