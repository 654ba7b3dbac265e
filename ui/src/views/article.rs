#![allow(non_snake_case)]

use dioxus::prelude::*;
use meta_sync_common::delta::{Insert, RichTextDocument};

use crate::state::{View, ARTICLES, CURRENT_VIEW};

/// A rendered unit of an article body.
#[derive(Debug, PartialEq)]
pub enum Block {
    Text(String),
    Image(String),
}

#[component]
pub fn ArticleView(slug: String) -> Element {
    let article = ARTICLES.read().iter().find(|a| a.slug == slug).cloned();

    let article = match article {
        Some(a) => a,
        None => {
            return rsx! {
                section { class: "not-found",
                    h2 { "Article not found" }
                    button {
                        class: "back-link",
                        onclick: move |_| {
                            *CURRENT_VIEW.write() = View::Home;
                        },
                        "Back to all notes"
                    }
                }
            };
        }
    };

    let nodes = blocks(&article.body)
        .into_iter()
        .enumerate()
        .map(|(i, block)| match block {
            Block::Text(text) => rsx! { p { key: "{i}", "{text}" } },
            Block::Image(src) => rsx! { img { key: "{i}", class: "article-image", src: "{src}" } },
        });

    rsx! {
        article { class: "article",
            {nodes}
        }
    }
}

/// Split a delta into paragraphs and image embeds, in order.
pub fn blocks(doc: &RichTextDocument) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current = String::new();

    for op in doc.ops.iter().flatten() {
        match &op.insert {
            Some(Insert::Text(text)) => {
                let mut lines = text.split('\n');
                if let Some(first) = lines.next() {
                    current.push_str(first);
                }
                for line in lines {
                    flush(&mut blocks, &mut current);
                    current.push_str(line);
                }
            }
            Some(Insert::Embed(value)) => {
                if let Some(src) = value.get("image").and_then(|v| v.as_str()) {
                    flush(&mut blocks, &mut current);
                    blocks.push(Block::Image(src.to_string()));
                }
            }
            None => {}
        }
    }
    flush(&mut blocks, &mut current);
    blocks
}

fn flush(blocks: &mut Vec<Block>, current: &mut String) {
    let text = current.trim();
    if !text.is_empty() {
        blocks.push(Block::Text(text.to_string()));
    }
    current.clear();
}
