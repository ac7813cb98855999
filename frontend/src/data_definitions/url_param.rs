//! Route segment wrapper for structured values.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use serde::{Deserialize, Serialize};


/// Carries a serde value through one path segment as url-safe base64 over
/// CBOR. The router only needs Display and FromStr on segment types.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl<T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serialized = Vec::new();
        if ciborium::into_writer(self, &mut serialized).is_ok() {
            write!(f, "{}", URL_SAFE.encode(serialized))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum UrlParamParseError {
    Base64(base64::DecodeError),
    Cbor(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for UrlParamParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64(err) => write!(f, "Failed to decode base64: {}", err),
            Self::Cbor(err) => write!(f, "Failed to deserialize: {}", err),
        }
    }
}

impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = UrlParamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = URL_SAFE
            .decode(s.as_bytes())
            .map_err(UrlParamParseError::Base64)?;
        let parsed = ciborium::from_reader(std::io::Cursor::new(decoded))
            .map_err(UrlParamParseError::Cbor)?;
        Ok(parsed)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::search_request::SearchRequest;

    #[test]
    fn search_request_survives_the_segment_codec() {
        let mut request = SearchRequest::default();
        request.term.value = "privacy / rule?".to_string();
        request.publication_year.enabled = false;

        let segment = UrlParam::from(request.clone()).to_string();
        assert!(!segment.contains('/'));
        let parsed: UrlParam<SearchRequest> = segment.parse().unwrap();
        assert_eq!(parsed.0, request);
    }

    #[test]
    fn garbage_segments_are_rejected() {
        assert!("%%%not-base64%%%".parse::<UrlParam<SearchRequest>>().is_err());
    }
}
