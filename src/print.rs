//! Non-interactive mode: drive the loader to completion and print the
//! displayable items.

use crate::browse::{FetchResponse, PaginatedLoader};
use crate::catalog::{FetchResult, PageFetcher, PageKeyGenerator};
use crate::schemas::Artwork;
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    #[value(name = "jsonl")]
    JsonL,
}

/// Everything the loader produced for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct Collected {
    pub query: String,
    pub items: Vec<Artwork>,
    pub fetched_count: usize,
    pub pages: usize,
    pub exhausted: bool,
}

#[derive(Serialize)]
struct ArtworkRecord<'a> {
    #[serde(flatten)]
    artwork: &'a Artwork,
    image_url: Option<String>,
}

/// Load up to `max_pages` pages of `query`, one request at a time.
///
/// Stops early when the result set is exhausted. The first failed page
/// aborts with its error.
pub fn collect_pages(
    fetcher: &dyn PageFetcher,
    keys: PageKeyGenerator,
    query: &str,
    max_pages: usize,
) -> FetchResult<Collected> {
    let mut loader = PaginatedLoader::with_query(keys, query.to_string());
    let mut next = loader.start();

    while let Some(request) = next {
        let result = fetcher.fetch(&request.key);
        loader.on_fetch_settled(FetchResponse::new(request, result));
        if let Some(err) = loader.error() {
            return Err(err.clone());
        }
        if loader.page_count() >= max_pages {
            break;
        }
        next = loader.load_more();
    }

    Ok(Collected {
        query: query.to_string(),
        items: loader.flattened_results().cloned().collect(),
        fetched_count: loader.raw_count(),
        pages: loader.page_count(),
        exhausted: loader.is_exhausted(),
    })
}

pub fn write_results<W: Write>(
    out: &mut W,
    collected: &Collected,
    format: OutputFormat,
    iiif_base: &str,
) -> Result<()> {
    let records: Vec<ArtworkRecord> = collected
        .items
        .iter()
        .map(|artwork| ArtworkRecord {
            artwork,
            image_url: artwork.image_url(iiif_base),
        })
        .collect();

    match format {
        OutputFormat::Text => {
            if collected.fetched_count == 0 {
                writeln!(out, "No artworks found.")?;
                return Ok(());
            }
            for record in &records {
                let title = if record.artwork.title.is_empty() {
                    "Untitled"
                } else {
                    record.artwork.title.as_str()
                };
                write!(out, "[{}] {title}", record.artwork.id)?;
                if !record.artwork.attribution.is_empty() {
                    write!(out, " - {}", record.artwork.attribution)?;
                }
                writeln!(out)?;
                if let Some(url) = &record.image_url {
                    writeln!(out, "    {url}")?;
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "query": collected.query,
                "results": records,
                "shown_count": records.len(),
                "fetched_count": collected.fetched_count,
                "pages": collected.pages,
                "exhausted": collected.exhausted,
            });
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)?;
        }
        OutputFormat::JsonL => {
            for record in &records {
                serde_json::to_writer(&mut *out, record)?;
                writeln!(out)?;
            }
            // Write metadata as last line
            let metadata = serde_json::json!({
                "_metadata": {
                    "query": collected.query,
                    "shown_count": records.len(),
                    "fetched_count": collected.fetched_count,
                    "pages": collected.pages,
                    "exhausted": collected.exhausted,
                }
            });
            serde_json::to_writer(&mut *out, &metadata)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fetcher::fakes::StaticFetcher;
    use crate::catalog::{FetchError, FetchedPage};
    use crate::schemas::Pagination;

    const IIIF: &str = "https://www.artic.edu/iiif/2";

    fn keys() -> PageKeyGenerator {
        PageKeyGenerator::new("https://api.artic.edu/api/v1").unwrap()
    }

    fn artwork(id: &str, image: bool) -> Artwork {
        Artwork {
            id: id.to_string(),
            image_id: image.then(|| format!("img-{id}")),
            title: format!("Title {id}"),
            attribution: "Edward Hopper".to_string(),
            category_titles: None,
            category_ids: None,
        }
    }

    fn page(items: Vec<Artwork>) -> FetchedPage {
        FetchedPage::new(items)
    }

    #[test]
    fn test_collect_stops_at_page_limit() {
        let fetcher = StaticFetcher::new()
            .with_page("hopper", 0, Ok(page(vec![artwork("1", true), artwork("2", false)])))
            .with_page("hopper", 1, Ok(page(vec![artwork("3", true)])))
            .with_page("hopper", 2, Ok(page(vec![artwork("4", true)])));

        let collected = collect_pages(&fetcher, keys(), "hopper", 2).unwrap();

        assert_eq!(collected.pages, 2);
        assert_eq!(collected.fetched_count, 3);
        let ids: Vec<_> = collected.items.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(fetcher.call_count(), 2);
    }

    #[test]
    fn test_collect_stops_when_exhausted() {
        let mut last = page(vec![artwork("1", true)]);
        last.pagination = Some(Pagination {
            total_pages: Some(1),
            current_page: Some(1),
            ..Default::default()
        });
        let fetcher = StaticFetcher::new().with_page("", 0, Ok(last));

        let collected = collect_pages(&fetcher, keys(), "", 5).unwrap();

        assert!(collected.exhausted);
        assert_eq!(collected.pages, 1);
        assert_eq!(fetcher.call_count(), 1);
    }

    #[test]
    fn test_collect_propagates_errors() {
        let error = FetchError::transport("https://api.artic.edu/api/v1/artworks/", "timed out");
        let fetcher = StaticFetcher::new()
            .with_page("", 0, Ok(page(vec![artwork("1", true)])))
            .with_page("", 1, Err(error.clone()));

        assert_eq!(collect_pages(&fetcher, keys(), "", 3), Err(error));
    }

    fn collected(items: Vec<Artwork>) -> Collected {
        Collected {
            query: "hopper".to_string(),
            fetched_count: items.len(),
            items,
            pages: 1,
            exhausted: false,
        }
    }

    #[test]
    fn test_write_text() {
        let mut out = Vec::new();
        write_results(&mut out, &collected(vec![artwork("9", true)]), OutputFormat::Text, IIIF)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "[9] Title 9 - Edward Hopper\n    https://www.artic.edu/iiif/2/img-9/full/843,/0/default.jpg\n"
        );
    }

    #[test]
    fn test_write_text_no_results() {
        let mut out = Vec::new();
        write_results(&mut out, &collected(Vec::new()), OutputFormat::Text, IIIF).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "No artworks found.\n");
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_results(&mut out, &collected(vec![artwork("9", true)]), OutputFormat::Json, IIIF)
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["query"], "hopper");
        assert_eq!(value["shown_count"], 1);
        assert_eq!(value["results"][0]["id"], "9");
        assert_eq!(value["results"][0]["artist_title"], "Edward Hopper");
        assert_eq!(
            value["results"][0]["image_url"],
            "https://www.artic.edu/iiif/2/img-9/full/843,/0/default.jpg"
        );
    }

    #[test]
    fn test_write_jsonl_ends_with_metadata() {
        let mut out = Vec::new();
        let items = vec![artwork("1", true), artwork("2", true)];
        write_results(&mut out, &collected(items), OutputFormat::JsonL, IIIF).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        let last: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
        assert_eq!(last["_metadata"]["shown_count"], 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["id"], "1");
    }
}
