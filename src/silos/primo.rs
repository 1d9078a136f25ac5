//! Primo discovery silo
//!
//! One adapter serves several catalogue views. Each [`PrimoVariant`] pins a
//! label, a facet restriction, and optionally a search scope.

use super::traits::*;
use crate::config::{Secrets, UpstreamSettings};
use crate::error::{GatewayError, Result};
use crate::results::{HitFields, SearchResult};
use serde::Deserialize;
use std::sync::Arc;

const DEFAULT_SCOPE: &str = "default_scope";
const DEFAULT_TAB: &str = "default_tab";

const NO_TITLE: &str = "No title information available.";
const NO_DATE: &str = "No published date information available.";
const NO_CREATOR: &str = "No creator information available.";

/// Named configuration of the Primo silo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimoVariant {
    Articles,
    Books,
    ShareOk,
    Collection,
}

/// Facet clause pinned by a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Include(&'static str),
    Exclude(&'static str),
}

impl Facet {
    /// API form, sent as `qInclude` or `qExclude`
    fn api_param(&self) -> (&'static str, String) {
        match self {
            Self::Include(value) => ("qInclude", format!("facet_rtype,exact,{}", value)),
            Self::Exclude(value) => ("qExclude", format!("facet_rtype,exact,{}", value)),
        }
    }

    /// Search page form, appended to the full results link
    fn url_fragment(&self) -> String {
        match self {
            Self::Include(value) => format!("&facet=rtype,include,{}", value),
            Self::Exclude(value) => format!("&facet=rtype,exclude,{},lk", value),
        }
    }
}

/// Static description of a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantDescriptor {
    pub label: &'static str,
    pub source: &'static str,
    pub facet: Option<Facet>,
    pub scope: Option<&'static str>,
}

impl PrimoVariant {
    pub fn descriptor(&self) -> VariantDescriptor {
        match self {
            Self::Articles => VariantDescriptor {
                label: "Articles & More",
                source: "primo",
                facet: Some(Facet::Exclude("books")),
                scope: None,
            },
            Self::Books => VariantDescriptor {
                label: "Book",
                source: "primobooks",
                facet: Some(Facet::Include("books")),
                scope: None,
            },
            Self::ShareOk => VariantDescriptor {
                label: "SHAREOK Articles",
                source: "primoshareok",
                facet: None,
                scope: Some("ou_dspace"),
            },
            Self::Collection => VariantDescriptor {
                label: "Special Collection",
                source: "collection",
                facet: Some(Facet::Include("special_collections")),
                scope: None,
            },
        }
    }

    /// Scope sent upstream and in the full results link
    pub fn scope(&self) -> &'static str {
        self.descriptor().scope.unwrap_or(DEFAULT_SCOPE)
    }
}

/// A field Primo sends either as a bare string or as a list
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn first(&self) -> Option<String> {
        match self {
            Self::One(value) => Some(value.clone()),
            Self::Many(values) => values.first().cloned(),
        }
    }

    fn joined(&self) -> String {
        match self {
            Self::One(value) => value.clone(),
            Self::Many(values) => join_values(values),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    info: Option<SearchInfo>,
    docs: Option<Vec<Doc>>,
}

#[derive(Debug, Deserialize)]
struct SearchInfo {
    total: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct Doc {
    #[serde(default)]
    context: Option<String>,
    #[serde(default, rename = "pnxId")]
    pnx_id: Option<String>,
    pnx: Pnx,
}

#[derive(Debug, Default, Deserialize)]
struct Pnx {
    #[serde(default)]
    display: PnxDisplay,
    #[serde(default)]
    control: PnxControl,
}

#[derive(Debug, Default, Deserialize)]
struct PnxDisplay {
    title: Option<OneOrMany>,
    creator: Option<OneOrMany>,
    creationdate: Option<OneOrMany>,
    #[serde(rename = "type")]
    content_type: Option<OneOrMany>,
}

#[derive(Debug, Default, Deserialize)]
struct PnxControl {
    recordid: Option<OneOrMany>,
}

impl Doc {
    fn id(&self) -> Option<String> {
        self.pnx_id
            .clone()
            .or_else(|| self.pnx.control.recordid.as_ref().and_then(OneOrMany::first))
    }
}

/// Primo discovery silo
pub struct Primo {
    variant: PrimoVariant,
    api_url: String,
    secrets: Arc<Secrets>,
}

impl Primo {
    pub fn new(variant: PrimoVariant, upstream: &UpstreamSettings, secrets: Arc<Secrets>) -> Self {
        Self {
            variant,
            api_url: upstream.primo_api_url.clone(),
            secrets,
        }
    }

    /// Link to the discovery UI's own search page
    fn full_results_url(&self, query: &str, host: &str, vid: &str) -> String {
        let facet = self
            .variant
            .descriptor()
            .facet
            .map(|f| f.url_fragment())
            .unwrap_or_default();

        format!(
            "https://{}/primo-explore/search?query=any,contains,{}&tab={}&search_scope={}&vid={}&sortby=rank{}",
            host,
            urlencoding::encode(query),
            DEFAULT_TAB,
            self.variant.scope(),
            vid,
            facet
        )
    }

    /// Deep link to one record
    fn full_display_url(host: &str, id: &str, vid: &str, context: &str) -> String {
        format!(
            "https://{}/primo-explore/fulldisplay?docid={}&context={}&vid={}",
            host,
            urlencoding::encode(id),
            urlencoding::encode(context),
            vid
        )
    }
}

impl Silo for Primo {
    fn name(&self) -> &str {
        self.variant.descriptor().source
    }

    fn top_label(&self) -> &str {
        self.variant.descriptor().label
    }

    fn request(&self, params: &RequestParams) -> Result<SiloRequest> {
        let key = self.secrets.require("primo_key")?;
        let vid = self.secrets.require("primo_vid")?;

        let mut request = SiloRequest::get(&self.api_url)
            .param("q", format!("any,contains,{}", params.query));

        if let Some(facet) = self.variant.descriptor().facet {
            let (name, value) = facet.api_param();
            request = request.param(name, value);
        }

        Ok(request
            .param("limit", params.limit.to_string())
            .param("apikey", key)
            .param("vid", vid)
            .param("tab", DEFAULT_TAB)
            .param("scope", self.variant.scope())
            .param("addfields", "pnxId")
            .param("view", "full"))
    }

    fn response(&self, params: &RequestParams, response: SiloResponse) -> Result<SearchResult> {
        let host = self.secrets.require("primo_host")?;
        let vid = self.secrets.require("primo_vid")?;

        let body: SearchResponse = response.json()?;
        let total = body
            .info
            .and_then(|info| info.total)
            .ok_or_else(|| GatewayError::upstream("Primo response is missing info.total"))?;
        let docs = body
            .docs
            .ok_or_else(|| GatewayError::upstream("Primo response is missing docs"))?;

        let mut result = SearchResult::new(self.name(), params.query.as_str())
            .with_top_label(self.top_label())
            .with_full(self.full_results_url(&params.query, host, vid));
        result.total = total;

        for doc in docs {
            if result.hit_count() >= params.limit {
                break;
            }

            let link = doc.id().map(|id| {
                Self::full_display_url(host, &id, vid, doc.context.as_deref().unwrap_or_default())
            });
            let display = &doc.pnx.display;

            result.add_hit(HitFields {
                link,
                title: Some(
                    display
                        .title
                        .as_ref()
                        .and_then(OneOrMany::first)
                        .unwrap_or_else(|| NO_TITLE.to_string()),
                ),
                text: None,
                date: Some(
                    display
                        .creationdate
                        .as_ref()
                        .and_then(OneOrMany::first)
                        .unwrap_or_else(|| NO_DATE.to_string()),
                ),
                creator: Some(
                    display
                        .creator
                        .as_ref()
                        .map(OneOrMany::joined)
                        .unwrap_or_else(|| NO_CREATOR.to_string()),
                ),
                image: None,
                content_type: display.content_type.as_ref().and_then(OneOrMany::first),
                context: doc.context.clone(),
            });
        }

        Ok(result)
    }
}
