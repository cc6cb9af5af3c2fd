/// One parsed HTTP request. Header lines are kept verbatim, in arrival
/// order, so later lookups (Cookie, Content-Length) see exactly what came
/// off the wire.
pub struct HttpRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<String>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Parse a fully buffered request. Returns `None` when the request line
    /// is unusable (missing method or path, non-UTF-8 header section, or no
    /// header terminator) so the caller can answer 400 instead of guessing.
    pub fn parse(raw_data: &[u8]) -> Option<Self> {
        let header_end = Self::find_header_end(raw_data)?;
        let header_str = std::str::from_utf8(&raw_data[..header_end]).ok()?;

        let mut lines = header_str.split("\r\n");

        let first_line = lines.next()?;
        let mut parts = first_line.split_whitespace();
        let method = parts.next()?.to_string();
        let path = parts.next()?.to_string();

        let mut headers = Vec::new();
        for line in lines {
            if line.is_empty() {
                break;
            }
            headers.push(line.to_string());
        }

        let content_length = Self::content_length(&headers);
        // Never trust Content-Length beyond what was actually buffered; a
        // short body is the data actually received.
        let available = raw_data.len() - header_end;
        let body_len = content_length.min(available);
        let body = raw_data[header_end..header_end + body_len].to_vec();

        Some(HttpRequest {
            method,
            path,
            headers,
            body,
        })
    }

    /// True once the buffer holds the whole header section plus at least
    /// `Content-Length` body bytes. Drives the reactor's read loop.
    pub fn is_complete(buf: &[u8]) -> bool {
        if let Some(header_end) = Self::find_header_end(buf) {
            let header_str = match std::str::from_utf8(&buf[..header_end]) {
                Ok(s) => s,
                Err(_) => return true, // let parse() reject it
            };
            let lines: Vec<String> = header_str
                .split("\r\n")
                .skip(1)
                .take_while(|l| !l.is_empty())
                .map(|l| l.to_string())
                .collect();
            let content_length = Self::content_length(&lines);
            return buf.len() - header_end >= content_length;
        }
        false
    }

    fn find_header_end(buf: &[u8]) -> Option<usize> {
        buf.windows(4)
            .position(|w| w == b"\r\n\r\n")
            .map(|pos| pos + 4)
    }

    /// `Content-Length` located by case-sensitive prefix match, value taken
    /// as the leading integer after the colon. Absent or non-numeric means
    /// no body.
    fn content_length(headers: &[String]) -> usize {
        for line in headers {
            if let Some(value) = line.strip_prefix("Content-Length:") {
                let digits: String = value
                    .trim_start()
                    .chars()
                    .take_while(|c| c.is_ascii_digit())
                    .collect();
                return digits.parse().unwrap_or(0);
            }
        }
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_request_line_headers_and_body() {
        let raw = b"POST /login HTTP/1.1\r\nHost: localhost\r\nContent-Length: 14\r\n\r\nusername=alice";
        let req = HttpRequest::parse(raw).unwrap();
        assert_eq!(req.method, "POST");
        assert_eq!(req.path, "/login");
        assert_eq!(
            req.headers,
            vec!["Host: localhost".to_string(), "Content-Length: 14".to_string()]
        );
        assert_eq!(req.body, b"username=alice");
    }

    #[test]
    fn missing_content_length_means_empty_body() {
        let raw = b"GET / HTTP/1.1\r\nHost: x\r\n\r\nstray bytes";
        let req = HttpRequest::parse(raw).unwrap();
        assert!(req.body.is_empty());
    }

    #[test]
    fn garbage_content_length_means_empty_body() {
        let raw = b"POST /add HTTP/1.1\r\nContent-Length: banana\r\n\r\ntitle=x";
        let req = HttpRequest::parse(raw).unwrap();
        assert!(req.body.is_empty());
    }

    #[test]
    fn content_length_match_is_case_sensitive() {
        let raw = b"POST /add HTTP/1.1\r\ncontent-length: 7\r\n\r\ntitle=x";
        let req = HttpRequest::parse(raw).unwrap();
        assert!(req.body.is_empty());
    }

    #[test]
    fn body_is_clamped_to_buffered_bytes() {
        let raw = b"POST /add HTTP/1.1\r\nContent-Length: 9999\r\n\r\nshort";
        let req = HttpRequest::parse(raw).unwrap();
        assert_eq!(req.body, b"short");
    }

    #[test]
    fn leading_integer_wins_over_trailing_junk() {
        let raw = b"POST /add HTTP/1.1\r\nContent-Length: 4 extra\r\n\r\nabcdef";
        let req = HttpRequest::parse(raw).unwrap();
        assert_eq!(req.body, b"abcd");
    }

    #[test]
    fn bare_request_line_is_malformed() {
        assert!(HttpRequest::parse(b"GET\r\n\r\n").is_none());
        assert!(HttpRequest::parse(b"\r\n\r\n").is_none());
    }

    #[test]
    fn unterminated_headers_are_malformed() {
        assert!(HttpRequest::parse(b"GET / HTTP/1.1\r\nHost: x\r\n").is_none());
    }

    #[test]
    fn completeness_tracks_content_length() {
        let full = b"POST /login HTTP/1.1\r\nContent-Length: 14\r\n\r\nusername=alice";
        assert!(HttpRequest::is_complete(full));
        // header not finished yet
        assert!(!HttpRequest::is_complete(&full[..20]));
        // header done, body still in flight
        assert!(!HttpRequest::is_complete(&full[..full.len() - 5]));
    }

    #[test]
    fn bodyless_request_is_complete_at_header_end() {
        assert!(HttpRequest::is_complete(b"GET / HTTP/1.1\r\nHost: x\r\n\r\n"));
    }
}
