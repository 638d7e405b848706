//! Payload Data Model
//!
//! Types for the startup payload and the section derivation that maps it to
//! displayable link lists.

use serde::{Deserialize, Serialize};

/// The signed-in user shown in the sidebar and header
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub name: String,
    pub avatar: String,
}

/// A model reference from the Hugging Face listings
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ModelRef {
    pub id: String,
}

/// A news story; the link may live in either `url` or `story_url`
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct NewsItem {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub story_url: Option<String>,
}

/// A trending repository
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RepoRef {
    pub full_name: String,
    pub html_url: String,
}

/// A resolved display item: title plus link URL
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Link {
    pub title: String,
    pub url: String,
}

/// The full startup payload injected into the page before load.
///
/// Field names follow the camelCase keys of the injected JSON. The payload is
/// decoded once at boot and never mutated.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Payload {
    pub user: User,
    #[serde(rename = "llmModels")]
    pub llm_models: Vec<ModelRef>,
    #[serde(rename = "embeddingModels")]
    pub embedding_models: Vec<ModelRef>,
    #[serde(rename = "genaiNews")]
    pub genai_news: Vec<NewsItem>,
    #[serde(rename = "aiNews")]
    pub ai_news: Vec<NewsItem>,
    pub repos: Vec<RepoRef>,
    pub papers: Vec<Link>,
    pub videos: Vec<Link>,
}

/// A titled, ordered list of links rendered as one content section
#[derive(Clone, Debug, PartialEq)]
pub struct SectionData {
    pub title: String,
    pub items: Vec<Link>,
}

impl NewsItem {
    /// Link for display: `url` wins over `story_url`.
    pub fn resolved_url(&self) -> String {
        self.url
            .clone()
            .or_else(|| self.story_url.clone())
            .unwrap_or_default()
    }
}

/// Hugging Face page for a model id
pub fn model_url(id: &str) -> String {
    format!("https://huggingface.co/{}", id)
}

fn model_links(models: &[ModelRef]) -> Vec<Link> {
    models
        .iter()
        .map(|m| Link {
            title: m.id.clone(),
            url: model_url(&m.id),
        })
        .collect()
}

fn news_links(news: &[NewsItem]) -> Vec<Link> {
    news.iter()
        .map(|n| Link {
            title: n.title.clone(),
            url: n.resolved_url(),
        })
        .collect()
}

/// Derive the seven fixed content sections from the payload.
///
/// Direct field mapping only: no sorting, filtering, deduplication, or
/// limiting beyond whatever the payload already carries. An empty source list
/// yields an empty section.
pub fn build_sections(payload: &Payload) -> Vec<SectionData> {
    vec![
        SectionData {
            title: "Top LLM Models".to_string(),
            items: model_links(&payload.llm_models),
        },
        SectionData {
            title: "Top Embedding Models".to_string(),
            items: model_links(&payload.embedding_models),
        },
        SectionData {
            title: "Top 5 GenAI News".to_string(),
            items: news_links(&payload.genai_news),
        },
        SectionData {
            title: "Top 5 AI News".to_string(),
            items: news_links(&payload.ai_news),
        },
        SectionData {
            title: "Trending GitHub Repos".to_string(),
            items: payload
                .repos
                .iter()
                .map(|r| Link {
                    title: r.full_name.clone(),
                    url: r.html_url.clone(),
                })
                .collect(),
        },
        SectionData {
            title: "Latest Research Papers".to_string(),
            items: payload.papers.clone(),
        },
        SectionData {
            title: "Popular AI Videos".to_string(),
            items: payload.videos.clone(),
        },
    ]
}
