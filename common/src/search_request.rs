//! The per-submission search request and its query-string projection.

use serde::{Deserialize, Serialize};

use crate::field_toggle::FieldToggle;
use crate::search_const::ORDER_RELEVANCE;


/// Federal Register site section. The form offers a single fixed option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Section {
    #[default]
    HealthAndPublicWelfare,
}

impl Section {
    pub const ALL: [Section; 1] = [Section::HealthAndPublicWelfare];

    pub fn api_value(&self) -> &'static str {
        match self {
            Section::HealthAndPublicWelfare => "Health-and-public-welfare",
        }
    }
}

/// Document topic. The form offers a single fixed option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Topic {
    #[default]
    HealthCare,
}

impl Topic {
    pub const ALL: [Topic; 1] = [Topic::HealthCare];

    pub fn api_value(&self) -> &'static str {
        match self {
            Topic::HealthCare => "health-care",
        }
    }
}

/// CFR title number. The form offers a single fixed option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CfrTitle {
    #[default]
    Title20,
}

impl CfrTitle {
    pub const ALL: [CfrTitle; 1] = [CfrTitle::Title20];

    pub fn api_value(&self) -> &'static str {
        match self {
            CfrTitle::Title20 => "20",
        }
    }
}

/// The API's significant-document flag, sent as "1" or "0".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Significance {
    #[default]
    Significant,
    NotSignificant,
}

impl Significance {
    pub const ALL: [Significance; 2] = [Significance::Significant, Significance::NotSignificant];

    pub fn api_value(&self) -> &'static str {
        match self {
            Significance::Significant => "1",
            Significance::NotSignificant => "0",
        }
    }
}

/// Publication date window in ISO `YYYY-MM-DD` form, as produced by the date
/// input widgets. Start <= end is not checked anywhere; the API receives
/// whatever window the user picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl Default for DateRange {
    fn default() -> Self {
        Self {
            start: "2024-08-30".to_string(),
            end: "2024-09-28".to_string(),
        }
    }
}


/// Everything one form submission carries. Built once per submit, passed by
/// value through the route, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub term: FieldToggle<String>,
    pub section: FieldToggle<Section>,
    pub topic: FieldToggle<Topic>,
    pub cfr_title: FieldToggle<CfrTitle>,
    pub cfr_part: FieldToggle<u32>,
    pub significant: FieldToggle<Significance>,
    pub publication_date_range: FieldToggle<DateRange>,
    pub effective_date_year: FieldToggle<u32>,
    pub publication_year: FieldToggle<u32>,
    pub per_page: u32,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            term: FieldToggle::on("Hipaa".to_string()),
            section: FieldToggle::on(Section::default()),
            topic: FieldToggle::on(Topic::default()),
            cfr_title: FieldToggle::on(CfrTitle::default()),
            cfr_part: FieldToggle::on(14),
            significant: FieldToggle::on(Significance::default()),
            publication_date_range: FieldToggle::on(DateRange::default()),
            effective_date_year: FieldToggle::on(2024),
            publication_year: FieldToggle::on(2024),
            per_page: 1,
        }
    }
}

impl SearchRequest {
    /// Project the enabled toggles into the flat key/value list sent as the
    /// query string. `per_page` and `order` are always present; every toggle
    /// maps to one distinct key except the date range, which maps to two.
    /// Percent-encoding is left to the HTTP client.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("per_page", self.per_page.to_string()),
            ("order", ORDER_RELEVANCE.to_string()),
        ];
        if let Some(term) = self.term.as_enabled() {
            params.push(("conditions[term]", term.clone()));
        }
        if let Some(section) = self.section.as_enabled() {
            params.push(("conditions[sections][]", section.api_value().to_string()));
        }
        if let Some(topic) = self.topic.as_enabled() {
            params.push(("conditions[topics][]", topic.api_value().to_string()));
        }
        if let Some(cfr_title) = self.cfr_title.as_enabled() {
            params.push(("conditions[cfr][title]", cfr_title.api_value().to_string()));
        }
        if let Some(cfr_part) = self.cfr_part.as_enabled() {
            params.push(("conditions[cfr][part]", cfr_part.to_string()));
        }
        if let Some(significant) = self.significant.as_enabled() {
            params.push(("conditions[significant]", significant.api_value().to_string()));
        }
        if let Some(range) = self.publication_date_range.as_enabled() {
            params.push(("conditions[publication_date][gte]", range.start.clone()));
            params.push(("conditions[publication_date][lte]", range.end.clone()));
        }
        if let Some(year) = self.effective_date_year.as_enabled() {
            params.push(("conditions[effective_date][year]", year.to_string()));
        }
        if let Some(year) = self.publication_year.as_enabled() {
            params.push(("conditions[publication_date][year]", year.to_string()));
        }
        params
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_const::clamp_per_page;

    fn keys(request: &SearchRequest) -> Vec<&'static str> {
        request.query_params().into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn all_toggles_enabled_yields_every_key() {
        let request = SearchRequest::default();
        assert_eq!(
            keys(&request),
            vec![
                "per_page",
                "order",
                "conditions[term]",
                "conditions[sections][]",
                "conditions[topics][]",
                "conditions[cfr][title]",
                "conditions[cfr][part]",
                "conditions[significant]",
                "conditions[publication_date][gte]",
                "conditions[publication_date][lte]",
                "conditions[effective_date][year]",
                "conditions[publication_date][year]",
            ]
        );
    }

    #[test]
    fn all_toggles_disabled_yields_only_fixed_keys() {
        let mut request = SearchRequest::default();
        request.term.enabled = false;
        request.section.enabled = false;
        request.topic.enabled = false;
        request.cfr_title.enabled = false;
        request.cfr_part.enabled = false;
        request.significant.enabled = false;
        request.publication_date_range.enabled = false;
        request.effective_date_year.enabled = false;
        request.publication_year.enabled = false;

        let params = request.query_params();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0], ("per_page", "1".to_string()));
        assert_eq!(params[1], ("order", "relevance".to_string()));
    }

    #[test]
    fn disabling_one_toggle_does_not_touch_the_others() {
        let mut request = SearchRequest::default();
        request.cfr_part.enabled = false;

        let with_cfr_part = keys(&SearchRequest::default());
        let without_cfr_part = keys(&request);

        assert!(!without_cfr_part.contains(&"conditions[cfr][part]"));
        let expected: Vec<&'static str> = with_cfr_part
            .into_iter()
            .filter(|k| *k != "conditions[cfr][part]")
            .collect();
        assert_eq!(without_cfr_part, expected);
    }

    #[test]
    fn date_range_contributes_exactly_two_keys() {
        let mut request = SearchRequest::default();
        request.publication_date_range = FieldToggle::on(DateRange {
            start: "2023-01-01".to_string(),
            end: "2023-12-31".to_string(),
        });

        let params = request.query_params();
        let range_params: Vec<_> = params
            .iter()
            .filter(|(k, _)| k.starts_with("conditions[publication_date]["))
            .collect();
        assert_eq!(
            range_params,
            vec![
                &("conditions[publication_date][gte]", "2023-01-01".to_string()),
                &("conditions[publication_date][lte]", "2023-12-31".to_string()),
            ]
        );

        request.publication_date_range.enabled = false;
        let params = request.query_params();
        assert!(
            !params
                .iter()
                .any(|(k, _)| k.starts_with("conditions[publication_date][")
                    && k.ends_with("te]"))
        );
    }

    #[test]
    fn enabled_values_are_sent_verbatim() {
        let mut request = SearchRequest::default();
        request.term = FieldToggle::on("privacy rule".to_string());
        request.per_page = 25;

        let params = request.query_params();
        assert!(params.contains(&("per_page", "25".to_string())));
        assert!(params.contains(&("conditions[term]", "privacy rule".to_string())));
        assert!(params.contains(&("conditions[significant]", "1".to_string())));
        assert!(params.contains(&(
            "conditions[sections][]",
            "Health-and-public-welfare".to_string()
        )));
        assert!(params.contains(&("conditions[topics][]", "health-care".to_string())));
        assert!(params.contains(&("conditions[cfr][title]", "20".to_string())));
    }

    #[test]
    fn per_page_widget_clamps_out_of_range_input() {
        assert_eq!(clamp_per_page(0), 1);
        assert_eq!(clamp_per_page(1), 1);
        assert_eq!(clamp_per_page(500), 500);
        assert_eq!(clamp_per_page(1000), 1000);
        assert_eq!(clamp_per_page(1001), 1000);
    }
}
