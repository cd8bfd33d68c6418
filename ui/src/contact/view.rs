use dioxus::prelude::*;

use crate::i18n::use_lang_marker;
use crate::t;

use super::form::{ContactField, ContactFormState, FieldErrors, FormFieldValues};
use super::schema::ContactSchema;

const CONTACT_CSS: Asset = asset!("/assets/styling/contact.css");

fn input_class(errors: &FieldErrors, field: ContactField) -> &'static str {
    if errors.contains(field) {
        "contact__input contact__input--invalid"
    } else {
        "contact__input"
    }
}

#[component]
pub fn ContactSection() -> Element {
    let lang_marker = use_lang_marker();

    let mut form = use_signal(ContactFormState::default);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut values = FormFieldValues::new(name(), email(), message());
        let schema = ContactSchema::localized();
        form.with_mut(|f| f.submit_and_clear(&mut values, &schema));
        name.set(values.name);
        email.set(values.email);
        message.set(values.message);
    };

    let on_send_another = move |_: MouseEvent| form.with_mut(|f| f.reset());

    let submitted = form.read().is_submitted();
    let errors = form.read().errors.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: CONTACT_CSS }

        section { id: "contact", class: "contact",
            div { style: "display:none", "{lang_marker}" }
            div { class: "contact__inner",
                div { class: "contact__header",
                    h2 { class: "contact__title", {t!("contact-title")} }
                    p { class: "contact__description", {t!("contact-description")} }
                }

                div { class: "contact__card",
                    if submitted {
                        div { class: "contact__success", role: "status",
                            div { class: "contact__success-icon",
                                svg {
                                    fill: "none",
                                    stroke: "currentColor",
                                    view_box: "0 0 24 24",
                                    path {
                                        stroke_linecap: "round",
                                        stroke_linejoin: "round",
                                        stroke_width: "2",
                                        d: "M5 13l4 4L19 7",
                                    }
                                }
                            }
                            h3 { class: "contact__success-title", {t!("contact-success-title")} }
                            p { class: "contact__success-message", {t!("contact-success-message")} }
                            button {
                                class: "button button--ghost",
                                r#type: "button",
                                onclick: on_send_another,
                                {t!("contact-success-button")}
                            }
                        }
                    } else {
                        form { class: "contact__form", novalidate: true, onsubmit: on_submit,
                            div { class: "contact__row",
                                div { class: "contact__field",
                                    label { r#for: "name",
                                        {t!("contact-form-name")}
                                        span { class: "contact__required", " *" }
                                    }
                                    input {
                                        id: "name",
                                        name: "name",
                                        class: input_class(&errors, ContactField::Name),
                                        placeholder: t!("contact-form-name-placeholder"),
                                        aria_invalid: errors.contains(ContactField::Name).to_string(),
                                        value: "{name}",
                                        oninput: move |evt| name.set(evt.value()),
                                    }
                                    if let Some(hint) = errors.get(ContactField::Name) {
                                        p { class: "contact__error", "{hint}" }
                                    }
                                }
                                div { class: "contact__field",
                                    label { r#for: "email",
                                        {t!("contact-form-email")}
                                        span { class: "contact__required", " *" }
                                    }
                                    input {
                                        id: "email",
                                        name: "email",
                                        r#type: "email",
                                        class: input_class(&errors, ContactField::Email),
                                        placeholder: t!("contact-form-email-placeholder"),
                                        aria_invalid: errors.contains(ContactField::Email).to_string(),
                                        value: "{email}",
                                        oninput: move |evt| email.set(evt.value()),
                                    }
                                    if let Some(hint) = errors.get(ContactField::Email) {
                                        p { class: "contact__error", "{hint}" }
                                    }
                                }
                            }
                            div { class: "contact__field",
                                label { r#for: "message",
                                    {t!("contact-form-message")}
                                    span { class: "contact__required", " *" }
                                }
                                textarea {
                                    id: "message",
                                    name: "message",
                                    rows: "5",
                                    class: input_class(&errors, ContactField::Message),
                                    placeholder: t!("contact-form-message-placeholder"),
                                    aria_invalid: errors.contains(ContactField::Message).to_string(),
                                    value: "{message}",
                                    oninput: move |evt| message.set(evt.value()),
                                }
                                if let Some(hint) = errors.get(ContactField::Message) {
                                    p { class: "contact__error", "{hint}" }
                                }
                            }
                            div { class: "contact__footer",
                                p { class: "contact__legend",
                                    span { class: "contact__required", "*" }
                                    " "
                                    {t!("contact-form-required-fields")}
                                }
                                button { class: "button button--primary", r#type: "submit",
                                    {t!("contact-form-submit")}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
