use serde::{Deserialize, Serialize};

/// A source document backing an assistant answer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceCitation {
    pub title: Option<String>,
    pub url: Option<String>,
    pub excerpt: Option<String>,
    pub score: Option<f64>,
}

impl SourceCitation {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Answer to one submitted message
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssistantReply {
    pub answer: String,
    /// In the order the backend returned them
    pub citations: Vec<SourceCitation>,
}

impl AssistantReply {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            citations: Vec::new(),
        }
    }

    pub fn with_citation(mut self, citation: SourceCitation) -> Self {
        self.citations.push(citation);
        self
    }
}
