//! Result type definitions

use super::format::{format_total, Plural};
use serde::{Deserialize, Serialize};

/// Icon tag shown next to a hit
///
/// Closed vocabulary: unrecognized content types collapse to `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Icon {
    #[serde(rename = "article")]
    Article,
    #[serde(rename = "audio")]
    Audio,
    #[serde(rename = "book")]
    Book,
    #[serde(rename = "book_chapter")]
    BookChapter,
    #[serde(rename = "guide")]
    Guide,
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "journal")]
    Journal,
    #[serde(rename = "microform")]
    Microform,
    #[serde(rename = "Online resource")]
    OnlineResourceSpaced,
    #[serde(rename = "Online")]
    Online,
    #[serde(rename = "Online_resource")]
    OnlineResource,
    #[serde(rename = "reference_entry")]
    ReferenceEntry,
    #[serde(rename = "Research Guides")]
    ResearchGuides,
    #[serde(rename = "score")]
    Score,
    #[serde(rename = "video")]
    Video,
    #[serde(rename = "website")]
    Website,
    #[default]
    #[serde(rename = "other")]
    Other,
}

impl Icon {
    /// Classify an upstream content type
    pub fn classify(content_type: Option<&str>) -> Self {
        match content_type {
            Some("article") => Self::Article,
            Some("audio") => Self::Audio,
            Some("book") => Self::Book,
            Some("book_chapter") => Self::BookChapter,
            Some("guide") => Self::Guide,
            Some("image") => Self::Image,
            Some("journal") => Self::Journal,
            Some("microform") => Self::Microform,
            Some("Online resource") => Self::OnlineResourceSpaced,
            Some("Online") => Self::Online,
            Some("Online_resource") => Self::OnlineResource,
            Some("reference_entry") => Self::ReferenceEntry,
            Some("Research Guides") => Self::ResearchGuides,
            Some("score") => Self::Score,
            Some("video") => Self::Video,
            Some("website") => Self::Website,
            _ => Self::Other,
        }
    }

    /// Wire name of the icon
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Audio => "audio",
            Self::Book => "book",
            Self::BookChapter => "book_chapter",
            Self::Guide => "guide",
            Self::Image => "image",
            Self::Journal => "journal",
            Self::Microform => "microform",
            Self::OnlineResourceSpaced => "Online resource",
            Self::Online => "Online",
            Self::OnlineResource => "Online_resource",
            Self::ReferenceEntry => "reference_entry",
            Self::ResearchGuides => "Research Guides",
            Self::Score => "score",
            Self::Video => "video",
            Self::Website => "website",
            Self::Other => "other",
        }
    }
}

/// Raw fields a silo hands over when adding a hit
#[derive(Debug, Clone, Default)]
pub struct HitFields {
    pub link: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
    pub date: Option<String>,
    pub creator: Option<String>,
    pub image: Option<String>,
    pub content_type: Option<String>,
    pub context: Option<String>,
}

/// One normalized search result
///
/// Absent fields serialize as `null` so every backend yields the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub link: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
    pub date: Option<String>,
    pub creator: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub context: Option<String>,
    pub icon: Icon,
}

impl From<HitFields> for Hit {
    fn from(fields: HitFields) -> Self {
        let icon = Icon::classify(fields.content_type.as_deref());
        Self {
            link: fields.link,
            title: fields.title,
            text: fields.text,
            date: fields.date,
            creator: fields.creator,
            image: fields.image,
            content_type: fields.content_type,
            context: fields.context,
            icon,
        }
    }
}

/// The envelope a silo fills during one search
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// Which backend produced the result
    pub source: String,
    /// Original search string
    pub query: String,
    /// Link to the backend's own full results page
    pub full: String,
    /// Total reported upstream (not the number of hits)
    pub total: u64,
    /// Human-facing category label
    pub top_label: String,
    hits: Vec<Hit>,
}

impl SearchResult {
    pub fn new(source: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_top_label(mut self, label: impl Into<String>) -> Self {
        self.top_label = label.into();
        self
    }

    pub fn with_full(mut self, full: impl Into<String>) -> Self {
        self.full = full.into();
        self
    }

    /// Append a hit, classifying its icon
    pub fn add_hit(&mut self, fields: HitFields) {
        self.hits.push(Hit::from(fields));
    }

    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }

    pub fn plural(&self) -> Plural {
        Plural::for_count(self.total)
    }

    pub fn format_total(&self) -> String {
        format_total(self.total)
    }

    /// Output contract sent back to the caller
    pub fn into_data(self) -> ResultData {
        let total = self.format_total();
        let plural = self.plural();
        ResultData {
            source: self.source,
            query: self.query,
            full: self.full,
            total,
            plural,
            top_label: self.top_label,
            hits: self.hits,
        }
    }
}

/// Serialized form of a [`SearchResult`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultData {
    pub source: String,
    pub query: String,
    pub full: String,
    pub total: String,
    pub plural: Plural,
    #[serde(rename = "topLabel")]
    pub top_label: String,
    pub hits: Vec<Hit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALLOWED: [&str; 16] = [
        "article",
        "audio",
        "book",
        "book_chapter",
        "guide",
        "image",
        "journal",
        "microform",
        "Online resource",
        "Online",
        "Online_resource",
        "reference_entry",
        "Research Guides",
        "score",
        "video",
        "website",
    ];

    #[test]
    fn test_icon_passes_through_allowed_types() {
        for content_type in ALLOWED {
            assert_eq!(Icon::classify(Some(content_type)).as_str(), content_type);
        }
    }

    #[test]
    fn test_icon_collapses_unknown_types() {
        assert_eq!(Icon::classify(None), Icon::Other);
        assert_eq!(Icon::classify(Some("")), Icon::Other);
        assert_eq!(Icon::classify(Some("dissertation")), Icon::Other);
        assert_eq!(Icon::classify(Some("Article")), Icon::Other);
        assert_eq!(Icon::classify(Some("sebsite")), Icon::Other);
    }

    #[test]
    fn test_icon_serializes_as_wire_name() {
        for content_type in ALLOWED {
            let icon = Icon::classify(Some(content_type));
            assert_eq!(
                serde_json::to_value(icon).unwrap(),
                serde_json::json!(content_type)
            );
        }
        assert_eq!(
            serde_json::to_value(Icon::Other).unwrap(),
            serde_json::json!("other")
        );
    }

    #[test]
    fn test_add_hit_keeps_absent_fields_as_null() {
        let mut result = SearchResult::new("libguides", "french");
        result.add_hit(HitFields {
            title: Some("French".to_string()),
            content_type: Some("guide".to_string()),
            ..Default::default()
        });

        let json = serde_json::to_value(&result.hits()[0]).unwrap();
        assert_eq!(json["title"], "French");
        assert_eq!(json["type"], "guide");
        assert_eq!(json["icon"], "guide");
        assert!(json["date"].is_null());
        assert!(json["creator"].is_null());
        assert!(json.as_object().unwrap().contains_key("image"));
    }

    #[test]
    fn test_serialize_envelope() {
        let mut result = SearchResult::new("primo", "rust")
            .with_top_label("Articles & More")
            .with_full("https://example.org/search");
        result.total = 12345;
        result.add_hit(HitFields {
            content_type: Some("dissertation".to_string()),
            ..Default::default()
        });

        let json = serde_json::to_value(result.into_data()).unwrap();
        assert_eq!(json["source"], "primo");
        assert_eq!(json["query"], "rust");
        assert_eq!(json["full"], "https://example.org/search");
        assert_eq!(json["total"], "12,345");
        assert_eq!(json["topLabel"], "Articles & More");
        assert_eq!(json["plural"]["suffix"], "s");
        assert_eq!(json["plural"]["determiner"], "All ");
        assert_eq!(json["hits"][0]["type"], "dissertation");
        assert_eq!(json["hits"][0]["icon"], "other");
    }
}
