#[cfg(test)]
mod tests {
    use super::super::error::FetchError;
    use super::super::fetcher::*;
    use super::super::page_key::PageKeyGenerator;
    use crate::config::BrowseOptions;
    use std::time::Duration;

    const URL: &str = "https://api.test/artworks/?page=1";

    #[test]
    fn test_parse_page_with_pagination() {
        let body = br#"{
            "pagination": {"total": 3, "limit": 2, "offset": 0, "total_pages": 2, "current_page": 1},
            "data": [
                {"id": 1, "image_id": "i1", "title": "Nighthawks", "artist_title": "Edward Hopper"},
                {"id": 2, "image_id": null, "title": "Untitled", "artist_title": null}
            ],
            "info": {"license_text": "..."}
        }"#;

        let page = parse_page(URL, body).unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id, "1");
        assert_eq!(page.items[0].attribution, "Edward Hopper");
        assert!(!page.items[1].has_image());
        let pagination = page.pagination.unwrap();
        assert_eq!(pagination.total_pages, Some(2));
        assert!(!pagination.is_last_page());
    }

    #[test]
    fn test_parse_page_without_pagination() {
        let page = parse_page(URL, br#"{"data": []}"#).unwrap();

        assert!(page.items.is_empty());
        assert!(page.pagination.is_none());
    }

    #[test]
    fn test_malformed_pagination_is_ignored() {
        let page = parse_page(URL, br#"{"data": [], "pagination": "nope"}"#).unwrap();
        assert!(page.pagination.is_none());
    }

    #[test]
    fn test_parse_errors() {
        let cases: [(&[u8], &str); 5] = [
            (b"<html>", "invalid JSON"),
            (b"[1, 2]", "not a JSON object"),
            (br#"{"results": []}"#, "missing `data`"),
            (br#"{"data": {"id": 1}}"#, "not an array"),
            (br#"{"data": [{"title": "no id"}]}"#, "malformed artwork"),
        ];

        for (body, expected) in cases {
            match parse_page(URL, body) {
                Err(FetchError::Parse { url, reason }) => {
                    assert_eq!(url, URL);
                    assert!(reason.contains(expected), "{reason} should mention {expected}");
                }
                other => panic!("expected parse error for {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_http_fetcher_reports_transport_error() {
        // Port 1 is never listening on loopback in test environments
        let keys = PageKeyGenerator::new("http://127.0.0.1:1/api/v1").unwrap();
        let options = BrowseOptions {
            request_timeout: Duration::from_secs(2),
            ..BrowseOptions::default()
        };
        let fetcher = HttpFetcher::new(&options).unwrap();

        let err = fetcher.fetch(&keys.key("", 0)).unwrap_err();

        assert!(matches!(err, FetchError::Transport { .. }));
        assert!(err.url().starts_with("http://127.0.0.1:1/api/v1/artworks/"));
    }

    #[test]
    fn test_static_fetcher_records_calls() {
        use super::super::fetcher::fakes::StaticFetcher;

        let keys = PageKeyGenerator::new("https://api.test").unwrap();
        let fetcher = StaticFetcher::new().with_page(
            "monet",
            0,
            Err(FetchError::transport("u", "boom")),
        );

        assert!(fetcher.fetch(&keys.key("monet", 0)).is_err());
        assert!(fetcher.fetch(&keys.key("monet", 1)).unwrap().items.is_empty());
        assert_eq!(fetcher.call_count(), 2);
    }
}
