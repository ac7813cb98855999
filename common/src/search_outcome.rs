//! Result records and the classified response of one search submission.

use serde::{Deserialize, Serialize};

use crate::search_const::NOT_AVAILABLE;


/// One result record as returned by the documents endpoint. Every consumed
/// field is optional; the API omits fields freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Document {
    pub title: Option<String>,
    pub publication_date: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub html_url: Option<String>,
    pub pdf_url: Option<String>,
}

fn or_not_available(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(NOT_AVAILABLE)
}

impl Document {
    pub fn title_display(&self) -> &str {
        or_not_available(&self.title)
    }

    pub fn publication_date_display(&self) -> &str {
        or_not_available(&self.publication_date)
    }

    pub fn abstract_display(&self) -> &str {
        or_not_available(&self.abstract_text)
    }

    pub fn html_url_display(&self) -> &str {
        or_not_available(&self.html_url)
    }

    pub fn pdf_url_display(&self) -> &str {
        or_not_available(&self.pdf_url)
    }
}


/// What one HTTP exchange with the documents endpoint produced. All three
/// variants are rendered inline; none of them is a transport failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// 200 with a `results` array.
    Results { documents: Vec<Document> },
    /// 200 without a `results` key. Rendered as a warning, zero cards.
    MissingResultsKey,
    /// Any non-200 status, surfaced verbatim.
    ApiError { status_code: u16, body: String },
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_display_the_sentinel() {
        let document = Document {
            title: Some("T1".to_string()),
            publication_date: Some("2024-01-01".to_string()),
            ..Default::default()
        };
        assert_eq!(document.title_display(), "T1");
        assert_eq!(document.publication_date_display(), "2024-01-01");
        assert_eq!(document.abstract_display(), "N/A");
        assert_eq!(document.html_url_display(), "N/A");
        assert_eq!(document.pdf_url_display(), "N/A");
    }
}
