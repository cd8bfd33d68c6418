//! Shared UI crate for the landing site: components, the contact form and
//! localization. Platform crates only add routing and global resources.

pub mod contact;
pub mod i18n;
pub mod views;

pub mod components {
    // Fixed header with in-page anchors (components/navbar.rs)
    mod navbar;
    pub use navbar::{anchor_href, Navbar, SECTIONS};

    mod language_switcher;
    pub use language_switcher::LanguageSwitcher;

    mod about;
    pub use about::AboutSection;
}

mod hero;
pub use hero::Hero;
