//! Page rendering.
//!
//! The page is a tree of dioxus components rendered to a string with
//! `dioxus::ssr`. The output is a pure function of [`UiState`] and the
//! static tables in [`content`](crate::page::content) and
//! [`i18n`](crate::i18n). Interactive controls are links to the same page
//! carrying the next state in the query string.

use dioxus::prelude::*;
use url::form_urlencoded;

use crate::i18n::{keys, Dictionary, Language};
use crate::page::content::{
    field_kind, field_placeholder, FieldKind, Icon, Section, SocialLink, ABOUT_PARAGRAPHS,
    CONTACT_FIELDS, FOOTER_SOCIAL_LINKS, OWNER_NAME, PROFILE_LINKS, PROJECTS, SEND_MESSAGE,
    SITE_TITLE,
};
use crate::page::state::UiState;

const LIGHT_BACKGROUND: &str = "bg-gradient-to-br from-indigo-900 via-purple-900 to-pink-900";
const DARK_BACKGROUND: &str = "bg-gray-900";

const TAILWIND_SCRIPT: &str = "https://cdn.tailwindcss.com";
const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css";

const THEME_BUTTON_CLASS: &str = "text-2xl transition-transform duration-300 ease-in-out transform focus:outline-none hover:rotate-180";
const LANGUAGE_BUTTON_CLASS: &str = "text-lg transition-transform duration-300 ease-in-out transform focus:outline-none hover:scale-110";
const MENU_BUTTON_CLASS: &str = "text-2xl transition-transform duration-300 ease-in-out transform md:hidden focus:outline-none hover:rotate-180";
const SECTION_HEADING_CLASS: &str =
    "mb-16 text-6xl font-bold text-center text-pink-300 animate-fadeInUp";
const FOOTER_HEADING_CLASS: &str = "mb-6 text-2xl font-bold text-pink-300";
const FOOTER_COLUMN_CLASS: &str = "text-center md:text-left";
const FIELD_CLASS: &str = "w-full p-5 text-xl transition-all duration-300 bg-gradient-to-r from-indigo-900 to-purple-900 rounded-xl focus:outline-none focus:ring-2 focus:ring-pink-400";
const PROJECT_CARD_CLASS: &str = "block p-10 transition-all duration-300 transform shadow-2xl cursor-pointer bg-gradient-to-br from-indigo-800 to-purple-800 rounded-3xl hover:shadow-pink-500/50 hover:scale-105 animate-fadeInUp";
const VIEW_PROJECT_CLASS: &str = "inline-block px-6 py-3 font-bold text-white transition duration-300 ease-in-out transform bg-blue-600 rounded-lg hover:bg-blue-700 hover:scale-105";
const SUBMIT_CLASS: &str = "w-full px-10 py-5 text-2xl font-bold text-white transition-all duration-300 transform bg-gradient-to-r from-blue-600 to-pink-600 rounded-xl hover:from-blue-500 hover:to-pink-500 hover:scale-105 animate-fadeInUp animation-delay-600";
const NEWSLETTER_INPUT_CLASS: &str = "p-3 transition-all duration-300 rounded-lg bg-gradient-to-r from-indigo-900 to-purple-900 focus:outline-none focus:ring-2 focus:ring-pink-400";

const DESKTOP_NAV_LINK_CLASS: &str =
    "text-lg tracking-wider uppercase transition-colors duration-300 hover:text-pink-300";
const MOBILE_NAV_LINK_CLASS: &str =
    "block px-6 py-3 tracking-wide uppercase transition-colors duration-300 hover:bg-purple-700";
const FOOTER_NAV_LINK_CLASS: &str = "transition-colors duration-300 hover:text-pink-300";

/// Top-level background classes for the current theme.
pub fn background_class(state: &UiState) -> &'static str {
    if state.dark_mode {
        DARK_BACKGROUND
    } else {
        LIGHT_BACKGROUND
    }
}

/// Query string encoding the rendered part of `state`.
pub fn state_query(state: &UiState) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("lang", state.language.code())
        .append_pair("dark", bool_str(state.dark_mode))
        .append_pair("menu", bool_str(state.menu_open))
        .finish()
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Link to the page rendered with `state` after applying `change`.
fn link_after(state: &UiState, change: impl FnOnce(&mut UiState)) -> String {
    let mut next = state.clone();
    change(&mut next);
    format!("?{}", state_query(&next))
}

fn icon_class(icon: Icon) -> &'static str {
    match icon {
        Icon::LinkedIn => "fa-brands fa-linkedin",
        Icon::GitHub => "fa-brands fa-github",
        Icon::PenSquare => "fa-solid fa-pen-to-square",
        Icon::Facebook => "fa-brands fa-facebook",
        Icon::Twitter => "fa-brands fa-twitter",
        Icon::Instagram => "fa-brands fa-instagram",
    }
}

/// Render the complete document for `state`.
pub fn render_page(state: &UiState) -> String {
    let mut dom = VirtualDom::new_with_props(
        Page,
        PageProps {
            state: state.clone(),
        },
    );
    dom.rebuild_in_place();

    format!(
        "<!DOCTYPE html><html lang=\"{lang}\"><head>\
         <meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{SITE_TITLE}</title>\
         <script src=\"{TAILWIND_SCRIPT}\"></script>\
         <link rel=\"stylesheet\" href=\"{FONT_AWESOME_CSS}\">\
         </head><body>{body}</body></html>",
        lang = state.language.code(),
        body = dioxus::ssr::render(&dom),
    )
}

#[component]
fn Page(state: UiState) -> Element {
    let root_class = format!(
        "{} text-white min-h-screen font-sans",
        background_class(&state)
    );
    let language = state.language;

    rsx! {
        div { class: root_class,
            Header { state: state.clone() }
            main { class: "pt-24",
                Hero { language: language }
                About { language: language }
                Projects { language: language }
                Contact { language: language }
            }
            Footer { language: language }
        }
    }
}

#[component]
fn Glyph(class: &'static str) -> Element {
    rsx! {
        i { class: class, "aria-hidden": "true" }
    }
}

#[component]
fn SectionLink(section: Section, language: Language, class: &'static str) -> Element {
    let href = format!("#{}", section.id());
    let label = Dictionary::for_language(language).text(section.id());

    rsx! {
        li {
            a { href: href, class: class, "{label}" }
        }
    }
}

#[component]
fn SectionLinks(language: Language, class: &'static str) -> Element {
    rsx! {
        for (index, section) in Section::ALL.into_iter().enumerate() {
            SectionLink { key: "{index}", section: section, language: language, class: class }
        }
    }
}

#[component]
fn Toggles(state: UiState) -> Element {
    let theme_href = link_after(&state, UiState::toggle_dark_mode);
    let theme_icon = if state.dark_mode {
        "fa-solid fa-sun"
    } else {
        "fa-solid fa-moon"
    };
    let language_href = link_after(&state, UiState::toggle_language);
    let caption = state.language.switch_caption();

    rsx! {
        a {
            href: theme_href,
            class: THEME_BUTTON_CLASS,
            "role": "button",
            "data-action": "toggle-dark-mode",
            Glyph { class: theme_icon }
        }
        a {
            href: language_href,
            class: LANGUAGE_BUTTON_CLASS,
            "role": "button",
            "data-action": "toggle-language",
            "{caption}"
        }
    }
}

#[component]
fn Header(state: UiState) -> Element {
    let language = state.language;
    let menu_href = link_after(&state, UiState::toggle_menu);
    let menu_icon = if state.menu_open {
        "fa-solid fa-xmark"
    } else {
        "fa-solid fa-bars"
    };

    rsx! {
        header { class: "fixed z-10 w-full px-8 py-6 transition-all duration-300 ease-in-out bg-black bg-opacity-30 backdrop-blur-lg",
            div { class: "container flex items-center justify-between mx-auto",
                h1 { class: "text-4xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-pink-500 animate-pulse",
                    "{SITE_TITLE}"
                }
                nav { class: "items-center hidden space-x-10 md:flex",
                    ul { class: "flex space-x-10",
                        SectionLinks { language: language, class: DESKTOP_NAV_LINK_CLASS }
                    }
                    Toggles { state: state.clone() }
                }
                a {
                    href: menu_href,
                    class: MENU_BUTTON_CLASS,
                    "role": "button",
                    "data-action": "toggle-menu",
                    Glyph { class: menu_icon }
                }
            }
            if state.menu_open {
                nav { id: "mobile-menu", class: "mt-6 md:hidden animate-fadeDown",
                    ul { class: "flex flex-col space-y-4",
                        SectionLinks { language: language, class: MOBILE_NAV_LINK_CLASS }
                    }
                    div { class: "flex justify-between mt-6",
                        Toggles { state: state.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn SocialIcon(link: SocialLink, new_tab: bool) -> Element {
    let label = link.icon.label();
    let glyph = icon_class(link.icon);

    if new_tab {
        rsx! {
            a {
                href: link.href,
                class: link.class,
                "aria-label": label,
                target: "_blank",
                rel: "noopener noreferrer",
                Glyph { class: glyph }
            }
        }
    } else {
        rsx! {
            a { href: link.href, class: link.class, "aria-label": label,
                Glyph { class: glyph }
            }
        }
    }
}

#[component]
fn Hero(language: Language) -> Element {
    let welcome = Dictionary::for_language(language).text(keys::WELCOME);

    rsx! {
        section { id: Section::Home.id(), class: "flex items-center justify-center min-h-screen px-8 parallax",
            div { class: "text-center",
                h2 { class: "mb-8 font-bold text-7xl md:text-9xl animate-float animate-glow",
                    "{welcome}"
                }
                p { class: "text-3xl italic md:text-5xl animate-fadeIn animation-delay-300",
                    "{OWNER_NAME}"
                }
                div { class: "flex justify-center mt-12 space-x-8",
                    for (index, link) in PROFILE_LINKS.into_iter().enumerate() {
                        SocialIcon { key: "{index}", link: link, new_tab: true }
                    }
                }
            }
        }
    }
}

#[component]
fn About(language: Language) -> Element {
    let heading = Dictionary::for_language(language).text(keys::ABOUT);
    let [first, second] = ABOUT_PARAGRAPHS;

    rsx! {
        section { id: Section::About.id(), class: "py-32 bg-black bg-opacity-30",
            div { class: "container px-8 mx-auto",
                h2 { class: SECTION_HEADING_CLASS, "{heading}" }
                div { class: "max-w-5xl p-12 mx-auto shadow-2xl bg-gradient-to-br from-indigo-900 to-purple-900 rounded-3xl",
                    p { class: "mb-8 text-2xl leading-relaxed animate-fadeInUp animation-delay-150",
                        "{first}"
                    }
                    p { class: "text-2xl leading-relaxed animate-fadeInUp animation-delay-300",
                        "{second}"
                    }
                }
            }
        }
    }
}

/// One project card; the whole card is a full-page link to the project route.
#[component]
fn ProjectCard(index: usize, language: Language) -> Element {
    let project = PROJECTS[index];
    let delay = format!("animation-delay: {}ms", index * 150);
    let title = project.title;
    let summary = project.summary();
    let view = Dictionary::for_language(language).text(keys::VIEW_PROJECT);

    rsx! {
        a { href: project.url, class: PROJECT_CARD_CLASS, style: delay,
            h3 { class: "mb-6 text-3xl font-bold text-blue-300", "{title}" }
            p { class: "mb-6 text-xl", "{summary}" }
            span { class: VIEW_PROJECT_CLASS, "{view}" }
        }
    }
}

#[component]
fn Projects(language: Language) -> Element {
    let heading = Dictionary::for_language(language).text(keys::PROJECTS);

    rsx! {
        section { id: Section::Projects.id(), class: "py-32",
            div { class: "container px-8 mx-auto",
                h2 { class: SECTION_HEADING_CLASS, "{heading}" }
                div { class: "grid grid-cols-1 gap-12 md:grid-cols-3",
                    for index in 0..PROJECTS.len() {
                        ProjectCard { key: "{index}", index: index, language: language }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactField(index: usize) -> Element {
    let field = CONTACT_FIELDS[index];
    let delay = format!("animation-delay: {}ms", index * 150);
    let placeholder = field_placeholder(field);

    let control = match field_kind(field) {
        FieldKind::TextArea => rsx! {
            textarea { name: field, placeholder: placeholder, rows: "5", class: FIELD_CLASS }
        },
        kind => {
            let input_type = if kind == FieldKind::Email { "email" } else { "text" };
            rsx! {
                input { r#type: input_type, name: field, placeholder: placeholder, class: FIELD_CLASS }
            }
        }
    };

    rsx! {
        div { class: "mb-10 animate-fadeInUp", style: delay, {control} }
    }
}

#[component]
fn Contact(language: Language) -> Element {
    let heading = Dictionary::for_language(language).text(keys::CONTACT);

    rsx! {
        section { id: Section::Contact.id(), class: "py-32 bg-black bg-opacity-30",
            div { class: "container px-8 mx-auto",
                h2 { class: SECTION_HEADING_CLASS, "{heading}" }
                form { class: "max-w-3xl mx-auto",
                    for index in 0..CONTACT_FIELDS.len() {
                        ContactField { key: "{index}", index: index }
                    }
                    button { r#type: "submit", class: SUBMIT_CLASS, "{SEND_MESSAGE}" }
                }
            }
        }
    }
}

#[component]
fn Footer(language: Language) -> Element {
    let dict = Dictionary::for_language(language);
    let quick_links = dict.text(keys::QUICK_LINKS);
    let social_media = dict.text(keys::SOCIAL_MEDIA);
    let subscribe = dict.text(keys::SUBSCRIBE);
    let subscribe_button = dict.text(keys::SUBSCRIBE_BUTTON);
    let contact_info = dict.text(keys::CONTACT_INFO);
    let address = dict.text(keys::ADDRESS);
    let phone = dict.text(keys::PHONE);
    let email = dict.text(keys::EMAIL);
    let copyright = dict.text(keys::COPYRIGHT);

    rsx! {
        footer { class: "py-20 bg-black bg-opacity-70",
            div { class: "container px-8 mx-auto",
                div { class: "grid grid-cols-1 gap-16 md:grid-cols-4",
                    div { class: FOOTER_COLUMN_CLASS,
                        h3 { class: FOOTER_HEADING_CLASS, "{quick_links}" }
                        ul { class: "space-y-4",
                            SectionLinks { language: language, class: FOOTER_NAV_LINK_CLASS }
                        }
                    }
                    div { class: FOOTER_COLUMN_CLASS,
                        h3 { class: FOOTER_HEADING_CLASS, "{social_media}" }
                        div { class: "flex justify-center space-x-6 md:justify-start",
                            for (index, link) in FOOTER_SOCIAL_LINKS.into_iter().enumerate() {
                                SocialIcon { key: "{index}", link: link, new_tab: false }
                            }
                        }
                    }
                    div { class: FOOTER_COLUMN_CLASS,
                        h3 { class: FOOTER_HEADING_CLASS, "{subscribe}" }
                        form { class: "flex flex-col space-y-4",
                            input {
                                r#type: "email",
                                name: "email",
                                placeholder: "Your Email",
                                class: NEWSLETTER_INPUT_CLASS,
                            }
                            button {
                                r#type: "submit",
                                class: "px-6 py-3 text-white transition-all duration-300 bg-pink-600 rounded-lg hover:bg-pink-500",
                                "{subscribe_button}"
                            }
                        }
                    }
                    div { class: FOOTER_COLUMN_CLASS,
                        h3 { class: FOOTER_HEADING_CLASS, "{contact_info}" }
                        p { class: "mb-2", "{address}" }
                        p { class: "mb-2", "{phone}" }
                        p { "{email}" }
                    }
                }
                div { class: "mt-16 text-center",
                    p { class: "text-sm", "{copyright}" }
                }
            }
        }
    }
}
