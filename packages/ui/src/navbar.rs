use dioxus::prelude::*;

use crate::{ActivityLogToggle, PANELS_CSS};

/// Top bar holding the page links, with the activity log toggle on the right.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: PANELS_CSS }
        div {
            class: "navbar",
            nav {
                class: "navbar-links",
                {children}
            }
            ActivityLogToggle {}
        }
    }
}
