use std::fmt;

/// Attribute that identifies a `<meta>` element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetaAttr {
    Name,
    Property,
}

impl MetaAttr {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaAttr::Name => "name",
            MetaAttr::Property => "property",
        }
    }

    /// Case-insensitive lookup of an attribute name.
    pub fn parse(attr: &str) -> Option<Self> {
        if attr.eq_ignore_ascii_case("name") {
            Some(MetaAttr::Name)
        } else if attr.eq_ignore_ascii_case("property") {
            Some(MetaAttr::Property)
        } else {
            None
        }
    }
}

/// Identity of a meta element, e.g. `property="og:title"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MetaKey {
    pub attr: MetaAttr,
    pub value: String,
}

impl MetaKey {
    pub fn name(value: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Name,
            value: value.into(),
        }
    }

    pub fn property(value: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Property,
            value: value.into(),
        }
    }

    /// CSS selector matching this element, for `querySelector`.
    pub fn selector(&self) -> String {
        format!("meta[{}=\"{}\"]", self.attr.as_str(), self.value.replace('"', "\\\""))
    }
}

impl fmt::Display for MetaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.attr.as_str(), self.value)
    }
}

/// What a keyed upsert did to the head.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Upsert {
    Created,
    Updated,
}

/// Mutable view of a document's `<head>` plus the ambient page state the
/// updater reads (title and current address).
///
/// The head is owned by the hosting page; implementations only mutate it.
pub trait DocumentHead {
    /// Content of the first meta element matching `key`.
    fn find_meta(&self, key: &MetaKey) -> Option<String>;

    /// Set the content of the first meta element matching `key`, appending a
    /// new element when none exists. Returns `None` if the head rejected the
    /// write.
    fn upsert_meta(&mut self, key: &MetaKey, content: &str) -> Option<Upsert>;

    /// Remove the first meta element matching `key`. Returns whether one was removed.
    fn remove_meta(&mut self, key: &MetaKey) -> bool;

    fn title(&self) -> String;

    fn set_title(&mut self, title: &str);

    /// Address of the page currently displayed.
    fn current_url(&self) -> String;

    /// `href` of the canonical link, if one exists.
    fn canonical(&self) -> Option<String>;

    /// Remove the canonical link. Returns whether one was removed.
    fn remove_canonical(&mut self) -> bool;

    /// Append a new `<link rel="canonical">` pointing at `href`.
    fn append_canonical(&mut self, href: &str);
}

/// An element held by [`MemoryHead`], in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeadElement {
    Meta { key: MetaKey, content: String },
    Canonical { href: String },
}

/// In-memory document head.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryHead {
    title: String,
    current_url: String,
    elements: Vec<HeadElement>,
}

impl MemoryHead {
    pub fn new(current_url: impl Into<String>) -> Self {
        Self {
            current_url: current_url.into(),
            ..Self::default()
        }
    }

    pub fn elements(&self) -> &[HeadElement] {
        &self.elements
    }

    /// Append an element as-is, without deduplication. Used when loading a
    /// head that already exists.
    pub fn push(&mut self, element: HeadElement) {
        self.elements.push(element);
    }

    pub fn set_current_url(&mut self, url: impl Into<String>) {
        self.current_url = url.into();
    }

    /// Iterate over meta elements as `(key, content)` pairs.
    pub fn metas(&self) -> impl Iterator<Item = (&MetaKey, &str)> {
        self.elements.iter().filter_map(|el| match el {
            HeadElement::Meta { key, content } => Some((key, content.as_str())),
            HeadElement::Canonical { .. } => None,
        })
    }

    pub fn meta_count(&self, key: &MetaKey) -> usize {
        self.metas().filter(|(k, _)| *k == key).count()
    }

    pub fn canonical_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|el| matches!(el, HeadElement::Canonical { .. }))
            .count()
    }

    fn meta_position(&self, key: &MetaKey) -> Option<usize> {
        self.elements
            .iter()
            .position(|el| matches!(el, HeadElement::Meta { key: k, .. } if k == key))
    }
}

impl DocumentHead for MemoryHead {
    fn find_meta(&self, key: &MetaKey) -> Option<String> {
        self.metas()
            .find(|(k, _)| *k == key)
            .map(|(_, content)| content.to_string())
    }

    fn upsert_meta(&mut self, key: &MetaKey, content: &str) -> Option<Upsert> {
        if let Some(idx) = self.meta_position(key) {
            if let HeadElement::Meta { content: existing, .. } = &mut self.elements[idx] {
                *existing = content.to_string();
            }
            return Some(Upsert::Updated);
        }
        self.elements.push(HeadElement::Meta {
            key: key.clone(),
            content: content.to_string(),
        });
        Some(Upsert::Created)
    }

    fn remove_meta(&mut self, key: &MetaKey) -> bool {
        match self.meta_position(key) {
            Some(idx) => {
                self.elements.remove(idx);
                true
            }
            None => false,
        }
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn current_url(&self) -> String {
        self.current_url.clone()
    }

    fn canonical(&self) -> Option<String> {
        self.elements.iter().find_map(|el| match el {
            HeadElement::Canonical { href } => Some(href.clone()),
            HeadElement::Meta { .. } => None,
        })
    }

    fn remove_canonical(&mut self) -> bool {
        let idx = self
            .elements
            .iter()
            .position(|el| matches!(el, HeadElement::Canonical { .. }));
        match idx {
            Some(idx) => {
                self.elements.remove(idx);
                true
            }
            None => false,
        }
    }

    fn append_canonical(&mut self, href: &str) {
        self.elements.push(HeadElement::Canonical {
            href: href.to_string(),
        });
    }
}
