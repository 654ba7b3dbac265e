use crate::fields::MetadataFields;
use crate::head::{DocumentHead, MetaKey, Upsert};

pub const OG_TITLE: &str = "og:title";
pub const OG_DESCRIPTION: &str = "og:description";
pub const OG_IMAGE: &str = "og:image";
pub const OG_IMAGE_ALT: &str = "og:image:alt";
pub const OG_URL: &str = "og:url";
pub const DESCRIPTION: &str = "description";

/// Bring the head in line with `fields`.
///
/// Title, description and image are written only when given. `og:image:alt`
/// and `og:url` are written on every call, the latter resolved from
/// `canonical`, then `url`, then the head's current address. Any existing
/// canonical link is dropped and re-created only when `canonical` is given.
/// An empty `description` removes `name="description"` but leaves
/// `og:description` in place.
///
/// Empty strings count as absent for every field except `description`.
pub fn update_metadata<H: DocumentHead + ?Sized>(head: &mut H, fields: &MetadataFields) {
    if let Some(title) = present(&fields.title) {
        head.set_title(title);
        set_meta(head, &MetaKey::property(OG_TITLE), Some(title));
    }

    match fields.description.as_deref() {
        Some("") => {
            if head.remove_meta(&MetaKey::name(DESCRIPTION)) {
                tracing::debug!("Removed description meta");
            }
        }
        Some(description) => {
            set_meta(head, &MetaKey::name(DESCRIPTION), Some(description));
            set_meta(head, &MetaKey::property(OG_DESCRIPTION), Some(description));
        }
        None => {}
    }

    if let Some(image) = present(&fields.image) {
        set_meta(head, &MetaKey::property(OG_IMAGE), Some(image));
    }

    set_meta(
        head,
        &MetaKey::property(OG_IMAGE_ALT),
        present(&fields.image_alt),
    );

    let url = match present(&fields.canonical).or_else(|| present(&fields.url)) {
        Some(url) => url.to_string(),
        None => head.current_url(),
    };
    set_meta(head, &MetaKey::property(OG_URL), Some(&url));

    if head.remove_canonical() {
        tracing::debug!("Removed canonical link");
    }
    if let Some(canonical) = present(&fields.canonical) {
        head.append_canonical(canonical);
        tracing::debug!("Canonical link set to {}", canonical);
    }
}

/// Keyed upsert of a single meta element. A missing value writes an empty
/// content attribute.
pub fn set_meta<H: DocumentHead + ?Sized>(
    head: &mut H,
    key: &MetaKey,
    content: Option<&str>,
) -> Option<Upsert> {
    let content = content.unwrap_or("");
    let outcome = head.upsert_meta(key, content);
    match outcome {
        Some(Upsert::Created) => tracing::debug!("Created meta {} = {:?}", key, content),
        Some(Upsert::Updated) => tracing::debug!("Updated meta {} = {:?}", key, content),
        None => tracing::warn!("Head rejected write of meta {}", key),
    }
    outcome
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
