//! URL-encoded form handling. Plain scans over the body text: a malformed
//! body can only ever yield empty or odd-looking values, never an error.

/// Reverse percent-encoding and `+` → space. A `%` that is not followed by
/// two hex digits passes through literally.
pub fn url_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit() =>
            {
                let hi = (bytes[i + 1] as char).to_digit(16).unwrap_or(0) as u8;
                let lo = (bytes[i + 2] as char).to_digit(16).unwrap_or(0) as u8;
                out.push(hi << 4 | lo);
                i += 3;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Extract a named field from an `application/x-www-form-urlencoded` body:
/// the first `name=` occurrence, up to the next `&` or end of input,
/// decoded. `None` when the name never appears; an explicitly empty value
/// comes back as `Some("")`.
pub fn field(body: &str, name: &str) -> Option<String> {
    let needle = format!("{name}=");
    let start = body.find(&needle)? + needle.len();
    let rest = &body[start..];
    let end = rest.find('&').unwrap_or(rest.len());
    Some(url_decode(&rest[..end]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_percent_escapes_and_plus() {
        assert_eq!(url_decode("hello+world"), "hello world");
        assert_eq!(url_decode("a%20b%26c"), "a b&c");
        assert_eq!(url_decode("100%25"), "100%");
    }

    #[test]
    fn passes_plain_text_through() {
        assert_eq!(url_decode("unchanged-text_1.2"), "unchanged-text_1.2");
    }

    #[test]
    fn malformed_escapes_keep_the_percent() {
        assert_eq!(url_decode("50%"), "50%");
        assert_eq!(url_decode("%4"), "%4");
        assert_eq!(url_decode("%zz"), "%zz");
        assert_eq!(url_decode("%4!done"), "%4!done");
    }

    #[test]
    fn decode_reverses_the_encoded_subset() {
        // what a form encoder would escape
        let original = "due date: 2026-03-01 & more?";
        let encoded = "due+date%3A+2026-03-01+%26+more%3F";
        assert_eq!(url_decode(encoded), original);
    }

    #[test]
    fn extracts_named_fields() {
        assert_eq!(field("a=1&b=2", "b").as_deref(), Some("2"));
        assert_eq!(field("a=1&b=2", "a").as_deref(), Some("1"));
        assert_eq!(field("a=1", "missing"), None);
    }

    #[test]
    fn empty_value_is_present_but_empty() {
        assert_eq!(field("title=&id=3", "title").as_deref(), Some(""));
        assert_eq!(field("title=", "title").as_deref(), Some(""));
    }

    #[test]
    fn last_field_runs_to_end_of_body() {
        assert_eq!(
            field("title=hi&description=a+b", "description").as_deref(),
            Some("a b")
        );
    }

    #[test]
    fn value_is_decoded() {
        assert_eq!(
            field("username=sam%40home", "username").as_deref(),
            Some("sam@home")
        );
    }
}
