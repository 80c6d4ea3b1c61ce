//! Request construction
//!
//! A `SearchQuery` holds the parameters gathered by the builder and renders
//! them as a form-encoded query string appended to the endpoint path.

use crate::constants::api::{
    ENDPOINT_REVERSE, ENDPOINT_REVERSE_CSV, ENDPOINT_SEARCH, ENDPOINT_SEARCH_CSV,
};
use crate::constants::postcode::WIDTH;
use crate::coord::Coordinates;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use url::Url;

/// API endpoint selected by a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endpoint {
    /// Free text to coordinates
    #[default]
    Search,
    /// Coordinates to nearest address
    Reverse,
    /// Batch forward geocoding (CSV upload)
    SearchCsv,
    /// Batch reverse geocoding (CSV upload)
    ReverseCsv,
}

impl Endpoint {
    /// Path relative to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Self::Search => ENDPOINT_SEARCH,
            Self::Reverse => ENDPOINT_REVERSE,
            Self::SearchCsv => ENDPOINT_SEARCH_CSV,
            Self::ReverseCsv => ENDPOINT_REVERSE_CSV,
        }
    }
}

/// Result type filter (`type` parameter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    /// Address with a house number
    HouseNumber,
    /// Street
    Street,
    /// Named place (lieu-dit)
    Locality,
    /// Town or city
    Municipality,
}

impl ResultType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HouseNumber => "housenumber",
            Self::Street => "street",
            Self::Locality => "locality",
            Self::Municipality => "municipality",
        }
    }
}

impl std::fmt::Display for ResultType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResultType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "housenumber" | "house_number" | "house-number" => Ok(Self::HouseNumber),
            "street" => Ok(Self::Street),
            "locality" => Ok(Self::Locality),
            "municipality" => Ok(Self::Municipality),
            _ => Err(format!("Unknown result type: {}", s)),
        }
    }
}

/// Parameters of a single geocoding request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub endpoint: Endpoint,
    /// Free-text query (`q`)
    pub q: Option<String>,
    /// Point for reverse search (`lon`, `lat`)
    pub point: Option<Coordinates>,
    pub limit: Option<u32>,
    pub postcode: Option<String>,
    pub citycode: Option<String>,
    pub autocomplete: Option<bool>,
    pub kind: Option<ResultType>,
}

impl SearchQuery {
    /// Query parameters in request order.
    ///
    /// Empty values are dropped. `limit` falls back to `default_limit` and a
    /// limit of zero is left out entirely.
    pub fn params(&self, default_limit: u32) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if self.endpoint == Endpoint::Reverse {
            if let Some(point) = self.point {
                params.push(("lon", point.lng.to_string()));
                params.push(("lat", point.lat.to_string()));
            }
        }

        let limit = self.limit.unwrap_or(default_limit);
        let candidates = [
            ("q", self.q.clone()),
            ("limit", (limit > 0).then(|| limit.to_string())),
            ("postcode", self.postcode.clone()),
            ("citycode", self.citycode.clone()),
            (
                "autocomplete",
                self.autocomplete
                    .map(|on| (if on { "1" } else { "0" }).to_string()),
            ),
            ("type", self.kind.map(|k| k.as_str().to_string())),
        ];

        params.extend(
            candidates
                .into_iter()
                .filter_map(|(key, value)| value.filter(|v| !v.is_empty()).map(|v| (key, v))),
        );

        params
    }

    /// Full request URL: `base` + endpoint path + query string
    pub fn build_url(&self, base: &Url, default_limit: u32) -> Result<Url> {
        let mut url = base.join(self.endpoint.path())?;
        let params = self.params(default_limit);
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }
}

/// Left-pad a postal code with zeros to five characters
///
/// Longer input is returned unchanged.
pub fn pad_postcode(code: impl Display) -> String {
    format!("{:0>width$}", code.to_string(), width = WIDTH)
}

/// Parse a base URL, making sure it ends with `/` so endpoint paths join
/// underneath it
pub fn parse_base_url(base: &str) -> Result<Url> {
    if base.ends_with('/') {
        Ok(Url::parse(base)?)
    } else {
        Ok(Url::parse(&format!("{}/", base))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::api::BASE_URL;

    fn base() -> Url {
        parse_base_url(BASE_URL).unwrap()
    }

    #[test]
    fn test_pad_postcode() {
        assert_eq!(pad_postcode("750"), "00750");
        assert_eq!(pad_postcode(750), "00750");
        assert_eq!(pad_postcode(75001), "75001");
        assert_eq!(pad_postcode("1000"), "01000");
        assert_eq!(pad_postcode("123456"), "123456");
    }

    #[test]
    fn test_forward_query_string() {
        let query = SearchQuery {
            q: Some("8 bd du port".to_string()),
            limit: Some(1),
            postcode: Some(pad_postcode(80000)),
            ..Default::default()
        };

        let url = query.build_url(&base(), 1).unwrap();
        assert_eq!(url.path(), "/search/");
        assert_eq!(url.query(), Some("q=8+bd+du+port&limit=1&postcode=80000"));
    }

    #[test]
    fn test_default_limit() {
        let query = SearchQuery {
            q: Some("paris".to_string()),
            ..Default::default()
        };
        assert_eq!(
            query.build_url(&base(), 1).unwrap().as_str(),
            "https://api-adresse.data.gouv.fr/search/?q=paris&limit=1"
        );
    }

    #[test]
    fn test_empty_values_dropped() {
        let query = SearchQuery {
            q: Some(String::new()),
            limit: Some(0),
            citycode: Some(String::new()),
            ..Default::default()
        };
        assert!(query.params(1).is_empty());
        assert_eq!(
            query.build_url(&base(), 1).unwrap().as_str(),
            "https://api-adresse.data.gouv.fr/search/"
        );
    }

    #[test]
    fn test_full_parameter_order() {
        let query = SearchQuery {
            q: Some("rue de la paix".to_string()),
            limit: Some(5),
            postcode: Some("75002".to_string()),
            citycode: Some("75102".to_string()),
            autocomplete: Some(false),
            kind: Some(ResultType::HouseNumber),
            ..Default::default()
        };
        let keys: Vec<_> = query.params(1).into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            ["q", "limit", "postcode", "citycode", "autocomplete", "type"]
        );
        assert_eq!(
            query.build_url(&base(), 1).unwrap().query(),
            Some("q=rue+de+la+paix&limit=5&postcode=75002&citycode=75102&autocomplete=0&type=housenumber")
        );
    }

    #[test]
    fn test_reverse_query_string() {
        let query = SearchQuery {
            endpoint: Endpoint::Reverse,
            point: Some(Coordinates::new(49.9, 2.3)),
            ..Default::default()
        };
        let url = query.build_url(&base(), 1).unwrap();
        assert_eq!(url.path(), "/reverse/");
        assert_eq!(url.query(), Some("lon=2.3&lat=49.9&limit=1"));
    }

    #[test]
    fn test_reverse_zero_point() {
        let query = SearchQuery {
            endpoint: Endpoint::Reverse,
            point: Some(Coordinates::default()),
            ..Default::default()
        };
        assert_eq!(
            query.build_url(&base(), 1).unwrap().query(),
            Some("lon=0&lat=0&limit=1")
        );
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Search.path(), "search/");
        assert_eq!(Endpoint::Reverse.path(), "reverse/");
        assert_eq!(Endpoint::SearchCsv.path(), "search/csv/");
        assert_eq!(Endpoint::ReverseCsv.path(), "reverse/csv/");
    }

    #[test]
    fn test_parse_base_url_adds_slash() {
        let url = parse_base_url("http://127.0.0.1:8080/api").unwrap();
        assert_eq!(
            url.join("search/").unwrap().as_str(),
            "http://127.0.0.1:8080/api/search/"
        );
    }

    #[test]
    fn test_result_type_from_str() {
        assert_eq!("street".parse::<ResultType>(), Ok(ResultType::Street));
        assert_eq!("HouseNumber".parse::<ResultType>(), Ok(ResultType::HouseNumber));
        assert!("city".parse::<ResultType>().is_err());
        assert_eq!(ResultType::Municipality.to_string(), "municipality");
    }
}
