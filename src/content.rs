use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

const EMBEDDED_CONTENT: &str = include_str!("../assets/content.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content document is not valid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question id {0} appears more than once")]
    DuplicateQuestionId(u32),
    #[error("question {id} offers {count} option(s), at least two are required")]
    TooFewOptions { id: u32, count: usize },
    #[error("messaging link has no phone number")]
    MissingPhone,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Identity {
    pub expert_name: String,
    pub profession: String,
    pub location: String,
    pub instagram_handle: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MessagingLink {
    pub base_url: String,
    pub phone: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Links {
    pub messaging: MessagingLink,
    pub instagram_url: String,
    #[serde(default)]
    pub map_embed_url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Images {
    pub hero: String,
    #[serde(default)]
    pub video: String,
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub harmony_grid: Vec<String>,
    #[serde(default)]
    pub testimonials: Vec<String>,
}

/// Everything the page shows that isn't behavior: copy, links, quiz questions and media.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SiteContent {
    pub identity: Identity,
    pub links: Links,
    #[serde(default)]
    pub summary_greeting: String,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
    pub images: Images,
}

impl SiteContent {
    /// Parses the content document bundled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.id) {
                return Err(ContentError::DuplicateQuestionId(question.id));
            }
            if question.options.len() < 2 {
                return Err(ContentError::TooFewOptions {
                    id: question.id,
                    count: question.options.len(),
                });
            }
        }
        if self.links.messaging.phone.trim().is_empty() {
            return Err(ContentError::MissingPhone);
        }
        Ok(())
    }
}
