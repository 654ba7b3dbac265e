use dioxus::prelude::*;
use meta_sync_common::description::extract_description;
use meta_sync_common::fields::MetadataFields;
use meta_sync_common::update::update_metadata;

use crate::head::WebHead;
use crate::state::{Article, SiteConfig, View, ARTICLES, SITE_CONFIG};

/// Push the metadata for `view` into the live document head.
pub fn sync_view(view: &View) {
    let site = SITE_CONFIG.read().clone();
    let fields = fields_for_view(view, &site, &ARTICLES.read());

    match WebHead::from_window() {
        Some(mut head) => {
            update_metadata(&mut head, &fields);
            tracing::info!("Metadata synced for {:?}", view);
        }
        None => tracing::warn!("No document head available, skipping metadata sync"),
    }
}

/// Plain-text summary of an article body, without the leading separator.
pub fn article_summary(article: &Article) -> String {
    extract_description(&article.body).trim().to_string()
}

/// Metadata a view should publish.
pub fn fields_for_view(view: &View, site: &SiteConfig, articles: &[Article]) -> MetadataFields {
    match view {
        View::Home => MetadataFields {
            title: Some(site.site_name.clone()),
            description: Some(format!("Notes and sketches from {}", site.site_name)),
            url: Some(format!("{}/", site.base_url)),
            image: Some(site.default_image.clone()),
            canonical: Some(format!("{}/", site.base_url)),
            ..Default::default()
        },
        View::Article(slug) => match articles.iter().find(|a| &a.slug == slug) {
            Some(article) => MetadataFields {
                title: Some(format!("{} | {}", article.title, site.site_name)),
                description: Some(article_summary(article)),
                url: Some(format!("{}/articles/{}", site.base_url, article.slug)),
                image: Some(
                    article
                        .image
                        .clone()
                        .unwrap_or_else(|| site.default_image.clone()),
                ),
                image_alt: article.image_alt.clone(),
                canonical: Some(format!("{}/articles/{}", site.base_url, article.slug)),
            },
            None => MetadataFields {
                title: Some(format!("Not found | {}", site.site_name)),
                description: Some(format!("No such note on {}", site.site_name)),
                image: Some(site.default_image.clone()),
                ..Default::default()
            },
        },
        // No canonical: the about page is served under several paths.
        View::About => MetadataFields {
            title: Some(format!("About | {}", site.site_name)),
            description: Some(format!(
                "Who writes {} and what the notes are about",
                site.site_name
            )),
            url: Some(format!("{}/about", site.base_url)),
            image: Some(site.default_image.clone()),
            ..Default::default()
        },
    }
}
