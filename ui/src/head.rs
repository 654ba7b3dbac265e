use meta_sync_common::head::{DocumentHead, MetaKey, Upsert};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlHeadElement};

const CANONICAL_SELECTOR: &str = "link[rel=\"canonical\"]";

/// [`DocumentHead`] backed by the live page `<head>`.
///
/// DOM calls that throw are logged and skipped; the update carries on with
/// the remaining elements.
pub struct WebHead {
    document: Document,
    head: HtmlHeadElement,
}

impl WebHead {
    /// Bind to the current window's document. `None` outside a browser page
    /// or when the document has no `<head>`.
    pub fn from_window() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let head = document.head()?;
        Some(Self { document, head })
    }

    fn query_head(&self, selector: &str) -> Option<Element> {
        match self.head.query_selector(selector) {
            Ok(el) => el,
            Err(e) => {
                log_js_error("querySelector", &e);
                None
            }
        }
    }

    fn create(&self, tag: &str, attrs: &[(&str, &str)]) -> Option<Element> {
        let el = match self.document.create_element(tag) {
            Ok(el) => el,
            Err(e) => {
                log_js_error("createElement", &e);
                return None;
            }
        };
        for (name, value) in attrs {
            if let Err(e) = el.set_attribute(name, value) {
                log_js_error("setAttribute", &e);
            }
        }
        if let Err(e) = self.head.append_child(&el) {
            log_js_error("appendChild", &e);
            return None;
        }
        Some(el)
    }
}

impl DocumentHead for WebHead {
    fn find_meta(&self, key: &MetaKey) -> Option<String> {
        self.query_head(&key.selector())?.get_attribute("content")
    }

    fn upsert_meta(&mut self, key: &MetaKey, content: &str) -> Option<Upsert> {
        let (el, outcome) = match self.query_head(&key.selector()) {
            Some(el) => (el, Upsert::Updated),
            None => (
                self.create("meta", &[(key.attr.as_str(), key.value.as_str())])?,
                Upsert::Created,
            ),
        };
        match el.set_attribute("content", content) {
            Ok(()) => Some(outcome),
            Err(e) => {
                log_js_error("setAttribute", &e);
                None
            }
        }
    }

    fn remove_meta(&mut self, key: &MetaKey) -> bool {
        match self.query_head(&key.selector()) {
            Some(el) => {
                el.remove();
                true
            }
            None => false,
        }
    }

    fn title(&self) -> String {
        self.document.title()
    }

    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn current_url(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }

    fn canonical(&self) -> Option<String> {
        self.document
            .query_selector(CANONICAL_SELECTOR)
            .ok()
            .flatten()?
            .get_attribute("href")
    }

    fn remove_canonical(&mut self) -> bool {
        match self.document.query_selector(CANONICAL_SELECTOR) {
            Ok(Some(el)) => {
                el.remove();
                true
            }
            Ok(None) => false,
            Err(e) => {
                log_js_error("querySelector", &e);
                false
            }
        }
    }

    fn append_canonical(&mut self, href: &str) {
        self.create("link", &[("rel", "canonical"), ("href", href)]);
    }
}

fn log_js_error(op: &str, e: &JsValue) {
    tracing::warn!("{} failed on document head: {:?}", op, e);
}
