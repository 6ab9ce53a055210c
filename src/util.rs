/// Give a URL an explicit scheme: empty stays empty, an existing
/// `http://`/`https://` prefix (any case) is left alone, anything else gets
/// `https://` prepended. Applying it twice is a no-op.
pub fn ensure_url_scheme(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    let lowered = input.to_ascii_lowercase();
    if lowered.starts_with("http://") || lowered.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{input}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stays_empty() {
        assert_eq!(ensure_url_scheme(""), "");
    }

    #[test]
    fn bare_host_gets_https() {
        assert_eq!(
            ensure_url_scheme("shopee.co.id/toko"),
            "https://shopee.co.id/toko"
        );
    }

    #[test]
    fn existing_scheme_is_kept() {
        assert_eq!(
            ensure_url_scheme("http://tiktok.com/@store"),
            "http://tiktok.com/@store"
        );
        assert_eq!(
            ensure_url_scheme("HTTPS://tiktok.com/@store"),
            "HTTPS://tiktok.com/@store"
        );
    }

    #[test]
    fn idempotent() {
        for input in ["", "example.com", "https://example.com", "HTTP://x.y"] {
            let once = ensure_url_scheme(input);
            assert_eq!(ensure_url_scheme(&once), once);
        }
    }
}
