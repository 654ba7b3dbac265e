#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::state::SITE_CONFIG;

#[component]
pub fn AboutView() -> Element {
    let site = SITE_CONFIG.read().clone();

    rsx! {
        section { class: "about",
            h2 { "About {site.site_name}" }
            p {
                "A small notebook of walks, birds and weather. Each page keeps its title, "
                "description and sharing preview in step with what is on screen."
            }
            p { class: "site-url", "{site.base_url}" }
        }
    }
}
