use crate::head::{DocumentHead, HeadElement, MemoryHead, MetaAttr, MetaKey};

/// Elements whose content is raw text rather than markup.
const RAW_TEXT_TAGS: &[&str] = &["script", "style", "title", "textarea", "noscript"];

/// Load the `<title>`, keyed `<meta>` elements and canonical links of an HTML
/// page into a [`MemoryHead`].
///
/// Only the `<head>` section is scanned (the whole input when there is
/// none). Comments and the bodies of `<script>`/`<style>` are skipped. Meta
/// elements without `name` or `property` and all other tags are ignored.
/// Duplicates are kept in document order; the first `<title>` wins.
pub fn parse_head(html: &str, current_url: &str) -> MemoryHead {
    let section = head_section(html);

    let mut head = MemoryHead::new(current_url);
    let mut title_seen = false;

    for tag in start_tags(section) {
        match tag.name.as_str() {
            "title" if !title_seen => {
                title_seen = true;
                let title = unescape(tag.text.as_deref().unwrap_or_default().trim());
                if !title.is_empty() {
                    head.set_title(&title);
                }
            }
            "meta" => {
                let key = tag.attrs.iter().find_map(|(name, value)| {
                    MetaAttr::parse(name).map(|attr| MetaKey {
                        attr,
                        value: value.clone(),
                    })
                });
                if let Some(key) = key {
                    let content = tag.attr("content").unwrap_or_default().to_string();
                    head.push(HeadElement::Meta { key, content });
                }
            }
            "link" => {
                let is_canonical = tag
                    .attr("rel")
                    .is_some_and(|rel| rel.eq_ignore_ascii_case("canonical"));
                if is_canonical {
                    let href = tag.attr("href").unwrap_or_default().to_string();
                    head.push(HeadElement::Canonical { href });
                }
            }
            _ => {}
        }
    }
    head
}

/// Serialize a head back to HTML, one element per line.
pub fn render_head(head: &MemoryHead) -> String {
    let mut out = String::new();
    let title = head.title();
    if !title.is_empty() {
        out.push_str(&format!("<title>{}</title>\n", escape(&title)));
    }
    for element in head.elements() {
        match element {
            HeadElement::Meta { key, content } => out.push_str(&format!(
                "<meta {}=\"{}\" content=\"{}\">\n",
                key.attr.as_str(),
                escape(&key.value),
                escape(content)
            )),
            HeadElement::Canonical { href } => out.push_str(&format!(
                "<link rel=\"canonical\" href=\"{}\">\n",
                escape(href)
            )),
        }
    }
    out
}

struct StartTag {
    name: String,
    attrs: Vec<(String, String)>,
    /// Raw content of a raw-text element such as `<title>`.
    text: Option<String>,
}

impl StartTag {
    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Slice between `<head ...>` and `</head>` (or end of input).
fn head_section(html: &str) -> &str {
    let lower = html.to_ascii_lowercase();
    let start = match lower.find("<head") {
        Some(idx) => idx,
        None => return html,
    };
    // Skip `<header>` and friends.
    if lower[start + 5..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric())
    {
        return html;
    }
    let content_start = match lower[start..].find('>') {
        Some(rel) => start + rel + 1,
        None => return html,
    };
    let end = lower[content_start..]
        .find("</head>")
        .map_or(html.len(), |rel| content_start + rel);
    &html[content_start..end]
}

/// Every start tag in `html`, with lowercased tag and attribute names.
/// Comments, doctypes, end tags and the content of raw-text elements are
/// skipped.
fn start_tags(html: &str) -> Vec<StartTag> {
    let bytes = html.as_bytes();
    let lower = html.to_ascii_lowercase();
    let mut tags = Vec::new();
    let mut pos = 0;

    while let Some(rel) = html[pos..].find('<') {
        let name_start = pos + rel + 1;
        if html[name_start..].starts_with("!--") {
            let body = name_start + 3;
            pos = lower[body..]
                .find("-->")
                .map_or(html.len(), |rel| body + rel + 3);
            continue;
        }

        let name_len = bytes[name_start..]
            .iter()
            .take_while(|b| b.is_ascii_alphanumeric())
            .count();
        if name_len == 0 {
            pos = name_start;
            continue;
        }
        let name_end = name_start + name_len;
        let name = lower[name_start..name_end].to_string();
        let (attrs, next) = parse_attributes(html, name_end);
        pos = next;

        let mut text = None;
        if RAW_TEXT_TAGS.contains(&name.as_str()) {
            let close = format!("</{}", name);
            let end = lower[pos..].find(&close).map_or(html.len(), |rel| pos + rel);
            text = Some(html[pos..end].to_string());
            pos = end;
        }
        tags.push(StartTag { name, attrs, text });
    }
    tags
}

/// Parse attributes from `pos` up to the closing `>`. Returns the attributes
/// and the offset just past the tag.
fn parse_attributes(html: &str, mut pos: usize) -> (Vec<(String, String)>, usize) {
    let bytes = html.as_bytes();
    let len = bytes.len();
    let mut attrs = Vec::new();

    loop {
        while pos < len && (bytes[pos].is_ascii_whitespace() || bytes[pos] == b'/') {
            pos += 1;
        }
        if pos >= len {
            return (attrs, len);
        }
        if bytes[pos] == b'>' {
            return (attrs, pos + 1);
        }

        let name_start = pos;
        while pos < len
            && !bytes[pos].is_ascii_whitespace()
            && !matches!(bytes[pos], b'=' | b'>' | b'/')
        {
            pos += 1;
        }
        let name = html[name_start..pos].to_ascii_lowercase();

        while pos < len && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }

        let mut value = String::new();
        if pos < len && bytes[pos] == b'=' {
            pos += 1;
            while pos < len && bytes[pos].is_ascii_whitespace() {
                pos += 1;
            }
            match bytes.get(pos) {
                Some(&quote) if quote == b'"' || quote == b'\'' => {
                    let value_start = pos + 1;
                    let value_end = html[value_start..]
                        .find(quote as char)
                        .map_or(len, |rel| value_start + rel);
                    value = unescape(&html[value_start..value_end]);
                    pos = (value_end + 1).min(len);
                }
                _ => {
                    let value_start = pos;
                    while pos < len && !bytes[pos].is_ascii_whitespace() && bytes[pos] != b'>' {
                        pos += 1;
                    }
                    value = unescape(&html[value_start..pos]);
                }
            }
        }

        if !name.is_empty() {
            attrs.push((name, value));
        }
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Decode character references: the common named ones plus decimal and
/// hex numeric references. Anything unrecognised is kept as written.
fn unescape(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail
            .find(';')
            .filter(|&end| end <= 10)
            .and_then(|end| decode_reference(&tail[1..end]).map(|c| (c, end)));
        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_reference(reference: &str) -> Option<char> {
    match reference {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let number = reference.strip_prefix('#')?;
            let code = match number.strip_prefix(|c: char| c == 'x' || c == 'X') {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}
