#![allow(non_snake_case)]

use dioxus::prelude::*;

use meta_sync_demo::metadata;
use meta_sync_demo::state::{View, CURRENT_VIEW};
use meta_sync_demo::views::about::AboutView;
use meta_sync_demo::views::article::ArticleView;
use meta_sync_demo::views::home::HomeView;
use meta_sync_demo::views::nav::NavBar;

fn main() {
    dioxus::logger::initialize_default();
    launch(App);
}

#[component]
fn App() -> Element {
    // Re-runs whenever CURRENT_VIEW changes.
    use_effect(|| {
        let view = CURRENT_VIEW.read().clone();
        metadata::sync_view(&view);
    });

    let view = CURRENT_VIEW.read().clone();

    rsx! {
        div { class: "app-shell",
            NavBar {}

            main { class: "content",
                {match view {
                    View::Home => rsx! { HomeView {} },
                    View::Article(slug) => rsx! { ArticleView { slug } },
                    View::About => rsx! { AboutView {} },
                }}
            }
        }
    }
}
