use meta_sync_common::delta::{Operation, RichTextDocument};
use meta_sync_common::head::MemoryHead;

#[allow(dead_code)]
pub const PAGE_URL: &str = "https://example.com/current";

/// A head that has been through a previous navigation.
#[allow(dead_code)]
pub const PUBLISHED_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Old Title</title>
  <meta name="description" content="Old description">
  <meta property="og:title" content="Old Title">
  <meta property="og:description" content="Old description">
  <meta property='og:image' content='/assets/old.png'>
  <link rel="stylesheet" href="/main.css">
  <link rel="canonical" href="https://example.com/old">
</head>
<body><header><meta name="ignored" content="body"></header></body>
</html>"#;

#[allow(dead_code)]
pub fn empty_head() -> MemoryHead {
    MemoryHead::new(PAGE_URL)
}

/// Build a delta whose ops are all text inserts.
#[allow(dead_code)]
pub fn text_delta(parts: &[&str]) -> RichTextDocument {
    RichTextDocument::from_ops(parts.iter().map(|p| Operation::text(*p)))
}
