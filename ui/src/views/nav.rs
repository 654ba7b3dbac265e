#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::state::{View, CURRENT_VIEW, SITE_CONFIG};

#[component]
pub fn NavBar() -> Element {
    let current = CURRENT_VIEW.read().clone();
    let site_name = SITE_CONFIG.read().site_name.clone();

    let home_class = if current == View::Home {
        "nav-link active"
    } else {
        "nav-link"
    };
    let about_class = if current == View::About {
        "nav-link active"
    } else {
        "nav-link"
    };

    rsx! {
        header { class: "app-header",
            h1 { class: "app-title", "{site_name}" }

            nav { class: "nav-links",
                button {
                    class: "{home_class}",
                    onclick: move |_| {
                        *CURRENT_VIEW.write() = View::Home;
                    },
                    "Home"
                }
                button {
                    class: "{about_class}",
                    onclick: move |_| {
                        *CURRENT_VIEW.write() = View::About;
                    },
                    "About"
                }
            }
        }
    }
}
