use crate::delta::RichTextDocument;

/// Length at which description accumulation stops.
pub const DESCRIPTION_LIMIT: usize = 120;

/// Build a plain-text description from a rich-text delta.
///
/// Each non-empty text insert other than a bare `"\n"` is appended with a
/// single leading space. Accumulation stops once the result reaches
/// [`DESCRIPTION_LIMIT`]; the limit is checked before each append, so the
/// final chunk may run past it.
pub fn extract_description(doc: &RichTextDocument) -> String {
    extract_description_with_limit(doc, DESCRIPTION_LIMIT)
}

/// Same as [`extract_description`] with a caller-chosen limit.
///
/// Length is counted in UTF-16 code units so the cut-off matches what a
/// browser reports for the same text.
pub fn extract_description_with_limit(doc: &RichTextDocument, limit: usize) -> String {
    let mut description = String::new();
    let ops = match doc.ops.as_deref() {
        Some(ops) => ops,
        None => return description,
    };

    let mut length = 0;
    for text in ops.iter().filter_map(|op| op.as_text()) {
        if length >= limit {
            break;
        }
        if text.is_empty() || text == "\n" {
            continue;
        }
        description.push(' ');
        description.push_str(text);
        length += 1 + text.encode_utf16().count();
    }
    description
}
