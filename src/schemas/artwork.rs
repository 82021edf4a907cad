use serde::{Deserialize, Deserializer, Serialize};

/// Fields requested from the catalog for every page.
pub const ARTWORK_FIELDS: &str = "id,image_id,title,artist_title,category_titles,category_ids";

/// Width segment of the IIIF image request used for previews.
pub const IIIF_PREVIEW_SIZE: &str = "843,";

// One catalog entry as returned in the `data` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, rename = "artist_title", deserialize_with = "null_as_empty")]
    pub attribution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_titles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<String>>,
}

/// A category label paired with the id at the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category<'a> {
    pub id: Option<&'a str>,
    pub title: &'a str,
}

impl Artwork {
    pub fn has_image(&self) -> bool {
        self.image_id.as_deref().is_some_and(|id| !id.is_empty())
    }

    /// Categories in wire order. Titles drive the iteration; a missing id at
    /// the same index yields `None` rather than shifting the pairing.
    pub fn categories(&self) -> impl Iterator<Item = Category<'_>> {
        let ids = self.category_ids.as_deref().unwrap_or_default();
        self.category_titles
            .as_deref()
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(move |(i, title)| Category {
                id: ids.get(i).map(String::as_str),
                title,
            })
    }

    pub fn image_url(&self, iiif_base: &str) -> Option<String> {
        if !self.has_image() {
            return None;
        }
        self.image_id
            .as_deref()
            .map(|image_id| image_url(iiif_base, image_id))
    }
}

pub fn image_url(iiif_base: &str, image_id: &str) -> String {
    format!(
        "{}/{image_id}/full/{IIIF_PREVIEW_SIZE}/0/default.jpg",
        iiif_base.trim_end_matches('/')
    )
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
    #[serde(default)]
    pub current_page: Option<u64>,
}

impl Pagination {
    /// True when the server reports this page as the final one.
    pub fn is_last_page(&self) -> bool {
        match (self.current_page, self.total_pages) {
            (Some(current), Some(total)) => current >= total,
            _ => false,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

// The API sends numeric ids; keep them as strings so ids from other
// deployments (or fixtures) that use text compare the same way.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_and_null_fields() {
        let artwork: Artwork = serde_json::from_str(
            r#"{"id": 27992, "image_id": null, "title": null, "artist_title": null}"#,
        )
        .unwrap();

        assert_eq!(artwork.id, "27992");
        assert_eq!(artwork.title, "");
        assert_eq!(artwork.attribution, "");
        assert!(!artwork.has_image());
        assert_eq!(artwork.categories().count(), 0);
    }

    #[test]
    fn test_categories_stay_aligned() {
        let artwork: Artwork = serde_json::from_str(
            r#"{
                "id": "a1",
                "image_id": "img",
                "title": "A Sunday on La Grande Jatte",
                "artist_title": "Georges Seurat",
                "category_titles": ["Painting", "Impressionism", "Essentials"],
                "category_ids": ["PC-1", "PC-2"]
            }"#,
        )
        .unwrap();

        let categories: Vec<_> = artwork.categories().collect();
        assert_eq!(categories.len(), 3);
        assert_eq!(categories[0], Category { id: Some("PC-1"), title: "Painting" });
        assert_eq!(categories[1], Category { id: Some("PC-2"), title: "Impressionism" });
        assert_eq!(categories[2], Category { id: None, title: "Essentials" });
    }

    #[test]
    fn test_image_url_template() {
        assert_eq!(
            image_url("https://www.artic.edu/iiif/2/", "abc-123"),
            "https://www.artic.edu/iiif/2/abc-123/full/843,/0/default.jpg"
        );
    }

    #[test]
    fn test_empty_image_id_is_not_displayable() {
        let artwork: Artwork =
            serde_json::from_str(r#"{"id": 1, "image_id": "", "title": "x"}"#).unwrap();
        assert!(!artwork.has_image());
        assert_eq!(artwork.image_url("https://iiif"), None);
    }

    #[test]
    fn test_pagination_last_page() {
        let last = Pagination {
            total_pages: Some(3),
            current_page: Some(3),
            ..Default::default()
        };
        let middle = Pagination {
            total_pages: Some(3),
            current_page: Some(2),
            ..Default::default()
        };
        assert!(last.is_last_page());
        assert!(!middle.is_last_page());
        assert!(!Pagination::default().is_last_page());
    }
}
