//! Page metadata synchronization for browser documents.
//!
//! Keeps a document head's title, description, Open Graph tags and canonical
//! link in step with a [`fields::MetadataFields`] record, and condenses a
//! Quill-style rich-text delta into a short plain-text description. The head
//! itself is abstracted behind [`head::DocumentHead`] so the same update logic
//! drives a live DOM, an in-memory model, or a parsed HTML page.

pub mod delta;
pub mod description;
pub mod fields;
pub mod head;
pub mod markup;
pub mod update;
