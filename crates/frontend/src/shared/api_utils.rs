//! URL helpers for frontend-backend communication

/// Base URL of the backend derived from the current window location.
///
/// Returns e.g. `http://localhost:8080`, or an empty string when there is no
/// window (native tests).
pub fn api_base(port: u16) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Join base, prefix and a relative path.
///
/// ```ignore
/// let url = build_url("http://localhost:8080", "/api", "itens");
/// assert_eq!(url, "http://localhost:8080/api/itens");
/// ```
pub fn build_url(base: &str, prefix: &str, path: &str) -> String {
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };
    format!("{}{}{}", base.trim_end_matches('/'), prefix, path)
}

/// Percent-encode one path segment (ids typed or stored as text)
pub fn encode_segment(value: impl ToString) -> String {
    urlencoding::encode(&value.to_string()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_adds_leading_slash() {
        assert_eq!(
            build_url("http://localhost:8080", "/api", "itens"),
            "http://localhost:8080/api/itens"
        );
        assert_eq!(
            build_url("http://localhost:8080/", "/api", "/auditoria"),
            "http://localhost:8080/api/auditoria"
        );
        assert_eq!(build_url("", "/api", ""), "/api/");
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment(42), "42");
        assert_eq!(encode_segment("a b/c"), "a%20b%2Fc");
    }
}
