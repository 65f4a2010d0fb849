/// Escapes a value for use as element text or as an attribute value.
///
/// Every value a fragment writes into a document goes through here. The five
/// characters with meaning in markup are replaced by their entities, so a value
/// can never open a tag, close an attribute or start an entity of its own.
pub fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
