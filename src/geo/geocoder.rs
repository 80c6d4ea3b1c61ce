//! Address API client
//!
//! `Geocoder` is a per-request builder. Configuration calls consume and
//! return the builder; terminal readers (`coordinates`, `position`,
//! `location`, `properties`, `get`) send the request on first use and reuse
//! the decoded response afterwards. Any configuration change drops the cached
//! response.
//!
//! ```no_run
//! # async fn demo() -> adresse_geocoder::Result<()> {
//! use adresse_geocoder::Geocoder;
//!
//! let mut geocoder = Geocoder::new()?.search("8 bd du port").postcode(80000).limit(1);
//! let location = geocoder.location(0).await?;
//! println!("{}", location.address);
//! # Ok(())
//! # }
//! ```

use crate::config::Config;
use crate::constants::api::BASE_URL;
use crate::coord::{CoordinateValue, Coordinates};
use crate::error::{Error, Result};
use crate::geo::location::Location;
use crate::geo::position::Position;
use crate::geo::query::{pad_postcode, parse_base_url, Endpoint, ResultType, SearchQuery};
use crate::geo::response::FeatureCollection;
use serde_json::{Map, Value};
use std::fmt::Display;
use std::time::Duration;
use tracing::{debug, error, warn};
use url::Url;

/// Per-request behaviour
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    /// Raise errors on missing data instead of returning `None`
    pub strict: bool,
    /// Used in place of reverse-search input that is not a number
    pub fallback: Coordinates,
    /// Caller identity attached to failure logs
    pub user_id: Option<String>,
    /// Limit sent when none was set
    pub default_limit: u32,
}

impl Default for RequestOptions {
    fn default() -> Self {
        let defaults = crate::config::DefaultsConfig::default();
        Self {
            strict: defaults.strict,
            fallback: defaults.fallback(),
            user_id: None,
            default_limit: defaults.limit,
        }
    }
}

/// Fluent client for one geocoding request
#[derive(Debug, Clone)]
pub struct Geocoder {
    client: reqwest::Client,
    base_url: Url,
    query: SearchQuery,
    options: RequestOptions,
    csv_columns: Vec<String>,
    response: Option<FeatureCollection>,
}

impl Geocoder {
    /// Client for the public API with default settings
    pub fn new() -> Result<Self> {
        Self::from_config(&Config::default())
    }

    /// Client built from a loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.api.user_agent.clone())
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .build()?;

        let mut geocoder = Self::with_client(client, &config.api.base_url)?;
        geocoder.options = RequestOptions {
            strict: config.defaults.strict,
            fallback: config.defaults.fallback(),
            user_id: None,
            default_limit: config.defaults.limit,
        };
        Ok(geocoder)
    }

    /// Client using an existing HTTP client and base URL
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
            query: SearchQuery::default(),
            options: RequestOptions::default(),
            csv_columns: Vec::new(),
            response: None,
        })
    }

    /// Whether this client targets the public API
    pub fn is_public_api(&self) -> bool {
        self.base_url.as_str() == BASE_URL
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    /// Exact URL the next request goes to
    pub fn url(&self) -> Result<Url> {
        self.query.build_url(&self.base_url, self.options.default_limit)
    }

    fn changed(mut self) -> Self {
        self.response = None;
        self
    }

    // ---- configuration ----

    /// Free-text address query
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.query.q = Some(query.into());
        self.changed()
    }

    /// Switch to reverse search around a point.
    ///
    /// When either value is not a finite number, strict mode fails with
    /// [`Error::InvalidCoordinates`]; otherwise both are silently replaced by
    /// the fallback coordinates (`(0, 0)` unless configured). Set
    /// [`strict`](Self::strict) before calling this.
    pub fn reverse(mut self, lat: impl CoordinateValue, lng: impl CoordinateValue) -> Result<Self> {
        let point = match (lat.degrees(), lng.degrees()) {
            (Some(lat), Some(lng)) => Coordinates::new(lat, lng),
            _ if self.options.strict => {
                return Err(Error::InvalidCoordinates(
                    "latitude and longitude must be numbers".to_string(),
                ));
            }
            _ => {
                let fallback = self.options.fallback;
                warn!(
                    fallback_lat = fallback.lat,
                    fallback_lng = fallback.lng,
                    "invalid reverse-search coordinates, using fallback"
                );
                fallback
            }
        };

        self.query.endpoint = Endpoint::Reverse;
        self.query.point = Some(point);
        Ok(self.changed())
    }

    /// Maximum number of results
    pub fn limit(mut self, limit: u32) -> Self {
        self.query.limit = Some(limit);
        self.changed()
    }

    /// Postal code filter, zero-padded to five characters
    pub fn postcode(mut self, postcode: impl Display) -> Self {
        self.query.postcode = Some(pad_postcode(postcode));
        self.changed()
    }

    /// INSEE city code filter
    pub fn citycode(mut self, citycode: impl Display) -> Self {
        self.query.citycode = Some(citycode.to_string());
        self.changed()
    }

    pub fn autocomplete(mut self, autocomplete: bool) -> Self {
        self.query.autocomplete = Some(autocomplete);
        self.changed()
    }

    /// Restrict results to one type
    pub fn kind(mut self, kind: ResultType) -> Self {
        self.query.kind = Some(kind);
        self.changed()
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    pub fn fallback_coordinates(mut self, fallback: Coordinates) -> Self {
        self.options.fallback = fallback;
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.options.user_id = Some(user_id.into());
        self
    }

    /// Column names sent with batch CSV requests
    pub fn csv_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.csv_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    // ---- terminal readers ----

    /// Send the request unless a response is already cached
    pub async fn send(&mut self) -> Result<&FeatureCollection> {
        let response = match self.response.take() {
            Some(response) => response,
            None => self.fetch().await?,
        };
        let response: &FeatureCollection = self.response.insert(response);
        Ok(response)
    }

    /// The full decoded response
    pub async fn get(&mut self) -> Result<&Value> {
        Ok(self.send().await?.raw())
    }

    pub async fn coordinates(&mut self, index: usize) -> Result<Option<Coordinates>> {
        let strict = self.options.strict;
        self.send().await?.coordinates(index, strict)
    }

    pub async fn position(&mut self, index: usize) -> Result<Option<Position>> {
        let strict = self.options.strict;
        self.send().await?.position(index, strict)
    }

    /// Fails on an empty result list whatever the strict setting
    pub async fn location(&mut self, index: usize) -> Result<Location> {
        self.send().await?.location(index)
    }

    pub async fn properties(&mut self, index: usize) -> Result<Option<&Map<String, Value>>> {
        let strict = self.options.strict;
        self.send().await?.properties(index, strict)
    }

    /// All complete results
    pub async fn positions(&mut self) -> Result<Vec<Position>> {
        let strict = self.options.strict;
        self.send().await?.positions(strict)
    }

    // ---- batch ----

    /// Geocode a CSV file of addresses; returns the enriched CSV
    pub async fn search_csv(&self, csv: impl Into<String>) -> Result<String> {
        self.post_csv(Endpoint::SearchCsv, csv.into()).await
    }

    /// Reverse-geocode a CSV file with `lat`/`lon` columns
    pub async fn reverse_csv(&self, csv: impl Into<String>) -> Result<String> {
        self.post_csv(Endpoint::ReverseCsv, csv.into()).await
    }

    // ---- transport ----

    async fn fetch(&self) -> Result<FeatureCollection> {
        let url = self.url()?;
        debug!(url = %url, "sending geocoding request");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.transport_failure(&url, e))?;
        let response = self.check_status(&url, response).await?;

        let raw: Value = response.json().await?;
        Ok(FeatureCollection::from_value(raw))
    }

    async fn post_csv(&self, endpoint: Endpoint, csv: String) -> Result<String> {
        let url = self.base_url.join(endpoint.path())?;

        let part = reqwest::multipart::Part::text(csv)
            .file_name("data.csv")
            .mime_str("text/csv")?;
        let mut form = reqwest::multipart::Form::new().part("data", part);
        for column in &self.csv_columns {
            form = form.text("columns", column.clone());
        }

        debug!(url = %url, columns = ?self.csv_columns, "sending batch geocoding request");

        let response = self
            .client
            .post(url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.transport_failure(&url, e))?;
        let response = self.check_status(&url, response).await?;

        Ok(response.text().await?)
    }

    async fn check_status(&self, url: &Url, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        error!(
            user_id = self.log_user(),
            query = %url,
            status = status.as_u16(),
            body = %body,
            "geocoding request failed"
        );

        Err(Error::GeocodingRequest {
            status: status.as_u16(),
            body,
        })
    }

    fn transport_failure(&self, url: &Url, err: reqwest::Error) -> Error {
        error!(
            user_id = self.log_user(),
            query = %url,
            error = %err,
            "geocoding request failed"
        );
        Error::Http(err)
    }

    fn log_user(&self) -> &str {
        self.options.user_id.as_deref().unwrap_or("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_targets_public_api() {
        let geocoder = Geocoder::new().unwrap();
        assert!(geocoder.is_public_api());
        assert_eq!(geocoder.options(), &RequestOptions::default());
    }

    #[test]
    fn test_forward_search_url() {
        let geocoder = Geocoder::new()
            .unwrap()
            .search("8 bd du port")
            .postcode(80000)
            .limit(1);

        let url = geocoder.url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://api-adresse.data.gouv.fr/search/?q=8+bd+du+port&limit=1&postcode=80000"
        );
    }

    #[test]
    fn test_postcode_padding() {
        let geocoder = Geocoder::new().unwrap().postcode("750");
        assert_eq!(geocoder.query().postcode.as_deref(), Some("00750"));

        let geocoder = Geocoder::new().unwrap().postcode(750);
        assert_eq!(geocoder.query().postcode.as_deref(), Some("00750"));
    }

    #[test]
    fn test_citycode_accepts_text() {
        let geocoder = Geocoder::new().unwrap().citycode("2A004");
        assert_eq!(geocoder.query().citycode.as_deref(), Some("2A004"));
    }

    #[test]
    fn test_reverse_sets_endpoint() {
        let geocoder = Geocoder::new().unwrap().reverse(49.9, 2.3).unwrap();

        assert_eq!(geocoder.query().endpoint, Endpoint::Reverse);
        assert_eq!(
            geocoder.url().unwrap().as_str(),
            "https://api-adresse.data.gouv.fr/reverse/?lon=2.3&lat=49.9&limit=1"
        );
    }

    #[test]
    fn test_reverse_invalid_lenient_uses_fallback() {
        let geocoder = Geocoder::new().unwrap().reverse("abc", 2.3).unwrap();
        assert_eq!(geocoder.query().point, Some(Coordinates::new(0.0, 0.0)));

        let geocoder = Geocoder::new()
            .unwrap()
            .fallback_coordinates(Coordinates::new(48.8566, 2.3522))
            .reverse(f64::NAN, 2.3)
            .unwrap();
        assert_eq!(geocoder.query().point, Some(Coordinates::new(48.8566, 2.3522)));
    }

    #[test]
    fn test_reverse_invalid_strict_fails() {
        let result = Geocoder::new().unwrap().strict(true).reverse("abc", 2.3);
        assert!(matches!(result, Err(Error::InvalidCoordinates(_))));
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.api.base_url = "http://localhost:9000".to_string();
        config.defaults.strict = true;
        config.defaults.limit = 5;

        let geocoder = Geocoder::from_config(&config).unwrap().search("paris");
        assert!(!geocoder.is_public_api());
        assert!(geocoder.options().strict);
        assert_eq!(
            geocoder.url().unwrap().as_str(),
            "http://localhost:9000/search/?q=paris&limit=5"
        );
    }

    #[test]
    fn test_from_config_invalid_base_url() {
        let mut config = Config::default();
        config.api.base_url = "not a url".to_string();
        assert!(matches!(Geocoder::from_config(&config), Err(Error::Url(_))));
    }
}
