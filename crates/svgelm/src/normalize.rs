//! Attribute name normalization

/// Rewrite a hyphen-case markup attribute name into lowerCamelCase, the
/// convention Elm attribute functions use: `fill-rule` becomes `fillRule`.
/// Values are never touched, only names; names without hyphens pass through
/// unchanged, which also makes the rule idempotent.
pub fn camel_case(name: &str) -> String {
    if !name.contains('-') {
        return name.to_string();
    }

    let mut segments = name.split('-');
    let mut result = String::with_capacity(name.len());

    if let Some(first) = segments.next() {
        result.push_str(&first.to_lowercase());
    }

    for segment in segments {
        let mut chars = segment.chars();
        if let Some(head) = chars.next() {
            result.extend(head.to_uppercase());
            result.push_str(chars.as_str());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphenated_name() {
        assert_eq!(camel_case("fill-rule"), "fillRule");
        assert_eq!(camel_case("stroke-line-cap"), "strokeLineCap");
    }

    #[test]
    fn test_plain_name_unchanged() {
        assert_eq!(camel_case("d"), "d");
        assert_eq!(camel_case("viewBox"), "viewBox");
    }

    #[test]
    fn test_first_segment_lowercased() {
        assert_eq!(camel_case("Fill-rule"), "fillRule");
    }

    #[test]
    fn test_idempotent() {
        let once = camel_case("stroke-width");
        assert_eq!(camel_case(&once), once);
    }

    #[test]
    fn test_trailing_hyphen() {
        assert_eq!(camel_case("data-"), "data");
    }
}
