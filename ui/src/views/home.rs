#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::metadata::article_summary;
use crate::state::{View, ARTICLES, CURRENT_VIEW};

#[component]
pub fn HomeView() -> Element {
    let items: Vec<Element> = ARTICLES
        .read()
        .iter()
        .map(|a| {
            let slug = a.slug.clone();
            let summary = article_summary(a);
            rsx! {
                li { key: "{a.slug}", class: "article-item",
                    button {
                        class: "article-link",
                        onclick: move |_| {
                            *CURRENT_VIEW.write() = View::Article(slug.clone());
                        },
                        "{a.title}"
                    }
                    p { class: "article-summary", "{summary}" }
                }
            }
        })
        .collect();

    rsx! {
        section { class: "home",
            ul { class: "article-list",
                {items.into_iter()}
            }
        }
    }
}
