//! Wire types for the `volumes` search endpoint.
//!
//! Every field the app reads is named here with its optionality spelled out.
//! Anything else in the payload (`kind`, `saleInfo`, ...) is ignored.

use serde::Deserialize;

/// Top-level response body. Only lives for one mapping call.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Absent or `null` when the query matched nothing.
    pub items: Option<Vec<BookRecord>>,
    pub total_items: Option<u64>,
}

/// One page of mapped results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    pub records: Vec<BookRecord>,
    /// Server-side match count, when the response carried one.
    pub total_items: Option<u64>,
}

/// One book entry, keyed by the provider-assigned id.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    pub id: String,
    pub volume_info: VolumeInfo,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: String,
    pub authors: Option<Vec<String>>,
    pub published_date: Option<String>,
    pub page_count: Option<u32>,
    pub publisher: Option<String>,
    pub image_links: Option<ImageLinks>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ImageLinks {
    /// Usually served over plain `http://`.
    pub thumbnail: String,
}

impl ImageLinks {
    /// Returns the thumbnail URL with an `http://` scheme upgraded to `https://`.
    /// Other schemes are returned unchanged.
    pub fn secure_thumbnail(&self) -> String {
        match self.thumbnail.strip_prefix("http://") {
            Some(rest) => format!("https://{rest}"),
            None => self.thumbnail.clone(),
        }
    }
}

impl BookRecord {
    pub fn title(&self) -> &str {
        &self.volume_info.title
    }

    /// Authors joined with ", ", or `None` when the field was absent.
    pub fn authors_line(&self) -> Option<String> {
        self.volume_info
            .authors
            .as_ref()
            .map(|authors| authors.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(url: &str) -> ImageLinks {
        ImageLinks {
            thumbnail: url.to_string(),
        }
    }

    #[test]
    fn test_secure_thumbnail_upgrades_http() {
        assert_eq!(
            links("http://books.google.com/x.jpg").secure_thumbnail(),
            "https://books.google.com/x.jpg"
        );
    }

    #[test]
    fn test_secure_thumbnail_leaves_https_alone() {
        assert_eq!(
            links("https://books.google.com/x.jpg").secure_thumbnail(),
            "https://books.google.com/x.jpg"
        );
    }

    #[test]
    fn test_authors_line() {
        let record = BookRecord {
            id: "A1".to_string(),
            volume_info: VolumeInfo {
                title: "Good Omens".to_string(),
                authors: Some(vec!["Terry Pratchett".to_string(), "Neil Gaiman".to_string()]),
                published_date: None,
                page_count: None,
                publisher: None,
                image_links: None,
            },
        };
        assert_eq!(record.title(), "Good Omens");
        assert_eq!(
            record.authors_line().as_deref(),
            Some("Terry Pratchett, Neil Gaiman")
        );
    }
}
