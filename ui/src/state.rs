use dioxus::prelude::*;
use meta_sync_common::delta::RichTextDocument;
use serde_json::json;

// --- Data types ---

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Article(String),
    About,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    pub body: RichTextDocument,
}

/// Site-wide settings used to build per-view metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub site_name: String,
    pub base_url: String,
    pub default_image: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Field Notes".into(),
            base_url: "https://notes.example.com".into(),
            default_image: "/assets/cover.png".into(),
        }
    }
}

// --- Global signals ---

/// View currently on screen
pub static CURRENT_VIEW: GlobalSignal<View> = Global::new(View::default);

pub static SITE_CONFIG: GlobalSignal<SiteConfig> = Global::new(SiteConfig::default);

/// Published articles, in listing order
pub static ARTICLES: GlobalSignal<Vec<Article>> = Global::new(sample_articles);

fn sample_articles() -> Vec<Article> {
    vec![
        Article {
            slug: "tide-pools".into(),
            title: "Tide Pools at Dawn".into(),
            image: Some("/assets/tide-pools.jpg".into()),
            image_alt: Some("Anemones in a shallow rock pool".into()),
            body: RichTextDocument::from(json!({
                "ops": [
                    { "insert": "Tide Pools at Dawn" },
                    { "insert": "\n", "attributes": { "header": 1 } },
                    { "insert": { "image": "/assets/tide-pools.jpg" } },
                    { "insert": "The low tide leaves behind a world in miniature. " },
                    { "insert": "Anemones close up as the light comes in", "attributes": { "italic": true } },
                    { "insert": ", and the crabs retreat under the kelp.\n" },
                    { "insert": "Bring boots with a good grip; the rocks stay slick until noon.\n" }
                ]
            })),
        },
        Article {
            slug: "winter-birds".into(),
            title: "Counting Winter Birds".into(),
            image: None,
            image_alt: None,
            body: RichTextDocument::from(json!({
                "ops": [
                    { "insert": "A feeder, a notebook and an hour of patience.\n" },
                    { "insert": "Juncos arrive first, then chickadees, then the nuthatch that scolds everyone.\n" }
                ]
            })),
        },
    ]
}
