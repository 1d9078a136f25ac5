//! LibGuides research guides silo
//!
//! Uses the LibApps guides API. The API returns every guide matching the
//! search terms, including unpublished and internal ones, so filtering
//! happens here.

use super::traits::*;
use crate::config::{Secrets, UpstreamSettings};
use crate::error::Result;
use crate::results::{HitFields, SearchResult};
use serde::Deserialize;
use std::sync::Arc;

/// Guide types never shown to patrons
const EXCLUDED_TYPES: [&str; 3] = ["Internal Guide", "Course Guide", "Template Guide"];

/// A guide record as returned by the API
#[derive(Debug, Deserialize)]
struct Guide {
    name: Option<String>,
    url: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    status_label: Option<String>,
    #[serde(default)]
    type_label: Option<String>,
}

impl Guide {
    fn is_visible(&self) -> bool {
        self.status_label.as_deref() == Some("Published")
            && self
                .type_label
                .as_deref()
                .map_or(true, |t| !EXCLUDED_TYPES.contains(&t))
    }
}

/// Research guides silo
pub struct LibGuides {
    api_url: String,
    full_url: String,
    secrets: Arc<Secrets>,
}

impl LibGuides {
    pub fn new(upstream: &UpstreamSettings, secrets: Arc<Secrets>) -> Self {
        Self {
            api_url: upstream.libguides_api_url.clone(),
            full_url: upstream.libguides_full_url.clone(),
            secrets,
        }
    }

    /// Link to the guides site's own search page
    fn full_results_url(&self, query: &str) -> String {
        self.full_url.replace("{query}", &urlencoding::encode(query))
    }
}

impl Silo for LibGuides {
    fn name(&self) -> &str {
        "libguides"
    }

    fn top_label(&self) -> &str {
        "Research Guides"
    }

    fn request(&self, params: &RequestParams) -> Result<SiloRequest> {
        let key = self.secrets.require("libguides_key")?;
        let site_id = self.secrets.require("libguides_siteid")?;

        Ok(SiloRequest::get(&self.api_url)
            .param("key", key)
            .param("site_id", site_id)
            .param("sort_by", "relevance")
            .param("search_terms", params.query.as_str()))
    }

    fn response(&self, params: &RequestParams, response: SiloResponse) -> Result<SearchResult> {
        let guides: Vec<Guide> = response.json()?;

        let mut result = SearchResult::new(self.name(), params.query.as_str())
            .with_top_label(self.top_label())
            .with_full(self.full_results_url(&params.query));

        // Counts every record the API sent back, visible or not
        result.total = guides.len() as u64;

        for guide in guides.into_iter().filter(Guide::is_visible) {
            if result.hit_count() >= params.limit {
                break;
            }

            result.add_hit(HitFields {
                link: guide.url,
                title: guide.name,
                text: guide.description.filter(|d| !d.is_empty()),
                content_type: Some("guide".to_string()),
                ..Default::default()
            });
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayError;
    use crate::results::Icon;
    use serde_json::json;

    fn silo() -> LibGuides {
        let secrets = Secrets::from_map([("libguides_key", "k"), ("libguides_siteid", "99")]);
        LibGuides::new(&UpstreamSettings::default(), Arc::new(secrets))
    }

    fn guide(i: usize, status: &str, kind: &str) -> serde_json::Value {
        json!({
            "id": i,
            "name": format!("Guide {}", i),
            "url": format!("https://guides.example.org/{}", i),
            "description": if i % 2 == 0 { format!("About {}", i) } else { String::new() },
            "status_label": status,
            "type_label": kind,
        })
    }

    fn ok(body: serde_json::Value) -> SiloResponse {
        SiloResponse {
            status: 200,
            text: body.to_string(),
            url: "http://lgapi.libapps.com/1.1/guides".to_string(),
        }
    }

    #[test]
    fn test_libguides_request() {
        let params = RequestParams::new("french", 5).unwrap();
        let request = silo().request(&params).unwrap();

        assert!(request.url.contains("lgapi.libapps.com"));
        assert_eq!(request.get_param("key"), Some("k"));
        assert_eq!(request.get_param("site_id"), Some("99"));
        assert_eq!(request.get_param("sort_by"), Some("relevance"));
        assert_eq!(request.get_param("search_terms"), Some("french"));
    }

    #[test]
    fn test_libguides_request_missing_secret() {
        let silo = LibGuides::new(
            &UpstreamSettings::default(),
            Arc::new(Secrets::from_map([("libguides_key", "k")])),
        );
        let params = RequestParams::new("french", 5).unwrap();
        assert!(matches!(
            silo.request(&params),
            Err(GatewayError::Config(_))
        ));
    }

    #[test]
    fn test_full_url_escapes_query() {
        assert_eq!(
            silo().full_results_url("french & spanish"),
            "http://guides.ou.edu/srch.php?q=french%20%26%20spanish&t=0"
        );
    }

    #[test]
    fn test_filtering_and_raw_total() {
        let mut records = Vec::new();
        for i in 0..3 {
            records.push(guide(i, "Unpublished", "General Purpose Guide"));
        }
        records.push(guide(3, "Published", "Internal Guide"));
        records.push(guide(4, "Published", "Course Guide"));
        records.push(guide(5, "Published", "Template Guide"));
        for i in 6..11 {
            records.push(guide(i, "Published", "Subject Guide"));
        }

        let params = RequestParams::new("french", 10).unwrap();
        let result = silo().response(&params, ok(json!(records))).unwrap();

        assert_eq!(result.total, 11);
        assert_eq!(result.hit_count(), 5);
        let titles: Vec<_> = result
            .hits()
            .iter()
            .map(|h| h.title.clone().unwrap())
            .collect();
        assert_eq!(
            titles,
            vec!["Guide 6", "Guide 7", "Guide 8", "Guide 9", "Guide 10"]
        );
        for hit in result.hits() {
            assert_eq!(hit.content_type.as_deref(), Some("guide"));
            assert_eq!(hit.icon, Icon::Guide);
            assert!(hit.date.is_none());
            assert!(hit.creator.is_none());
        }
    }

    #[test]
    fn test_limit_truncates_hits() {
        let records: Vec<_> = (0..8).map(|i| guide(i, "Published", "Subject Guide")).collect();
        let params = RequestParams::new("french", 3).unwrap();
        let result = silo().response(&params, ok(json!(records))).unwrap();

        assert_eq!(result.hit_count(), 3);
        assert_eq!(result.total, 8);
    }

    #[test]
    fn test_empty_description_is_absent() {
        let records = vec![
            guide(1, "Published", "Subject Guide"),
            guide(2, "Published", "Subject Guide"),
        ];
        let params = RequestParams::new("french", 5).unwrap();
        let result = silo().response(&params, ok(json!(records))).unwrap();

        assert!(result.hits()[0].text.is_none());
        assert_eq!(result.hits()[1].text.as_deref(), Some("About 2"));
    }

    #[test]
    fn test_envelope_fields() {
        let params = RequestParams::new("french", 5).unwrap();
        let result = silo().response(&params, ok(json!([]))).unwrap();

        assert_eq!(result.source, "libguides");
        assert_eq!(result.top_label, "Research Guides");
        assert_eq!(result.query, "french");
        assert_eq!(result.total, 0);
        assert_eq!(result.full, "http://guides.ou.edu/srch.php?q=french&t=0");
    }

    #[test]
    fn test_each_excluded_type_is_skipped() {
        for kind in EXCLUDED_TYPES {
            let records = vec![guide(1, "Published", kind)];
            let params = RequestParams::new("french", 5).unwrap();
            let result = silo().response(&params, ok(json!(records))).unwrap();

            assert_eq!(result.total, 1, "{}", kind);
            assert_eq!(result.hit_count(), 0, "{}", kind);
        }
    }

    #[test]
    fn test_null_labels_are_skipped_not_fatal() {
        let body = json!([
            {
                "name": "Draft",
                "url": "https://guides.example.org/0",
                "status_label": null,
                "type_label": null
            },
            guide(1, "Published", "Subject Guide"),
            guide(2, "Published", "Template Guide"),
            {
                "name": "Unlabeled",
                "url": "https://guides.example.org/3",
                "status_label": "Published"
            },
        ]);
        let params = RequestParams::new("french", 5).unwrap();
        let result = silo().response(&params, ok(body)).unwrap();

        assert_eq!(result.total, 4);
        let titles: Vec<_> = result.hits().iter().map(|h| h.title.as_deref()).collect();
        assert_eq!(titles, vec![Some("Guide 1"), Some("Unlabeled")]);
    }

    #[test]
    fn test_non_array_body_is_upstream_error() {
        let params = RequestParams::new("french", 5).unwrap();
        let body = json!({ "error": "invalid key" });
        assert!(matches!(
            silo().response(&params, ok(body)),
            Err(GatewayError::Upstream(_))
        ));
    }
}
