use crate::domain::model::{Airport, Country, ReferenceList};
use crate::domain::ports::{ConfigProvider, ReferenceSource};
use crate::utils::error::{QuoteError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;

pub const COUNTRIES_UNAVAILABLE: &str = "تعذر تحميل قائمة الدول";

#[derive(Debug, Deserialize)]
struct CommonName {
    #[serde(default)]
    common: String,
}

/// Country record as served by the restcountries API (`fields=name,translations`).
#[derive(Debug, Deserialize)]
struct CountryRecord {
    name: CommonName,
    #[serde(default)]
    translations: HashMap<String, CommonName>,
}

impl From<CountryRecord> for Country {
    fn from(record: CountryRecord) -> Self {
        let local_name = record
            .translations
            .get("ara")
            .map(|t| t.common.trim().to_string())
            .unwrap_or_default();
        Country {
            local_name,
            english_name: record.name.common.trim().to_string(),
        }
    }
}

/// Airport feeds disagree on the code key; any of them may be present.
#[derive(Debug, Deserialize)]
struct AirportRecord {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    iata: Option<String>,
    #[serde(default)]
    iata_code: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    country: String,
}

impl AirportRecord {
    fn into_airport(self) -> Option<Airport> {
        let code = [self.code, self.iata, self.iata_code]
            .into_iter()
            .flatten()
            .map(|code| code.trim().to_uppercase())
            .find(|code| !code.is_empty())?;
        Some(Airport {
            code,
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            country: self.country.trim().to_string(),
        })
    }
}

pub struct HttpReferenceSource {
    client: Client,
    countries_endpoint: Option<String>,
    airports_endpoint: Option<String>,
}

impl HttpReferenceSource {
    pub fn new(countries_endpoint: Option<String>, airports_endpoint: Option<String>) -> Self {
        Self {
            client: Client::new(),
            countries_endpoint,
            airports_endpoint,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(
            config.countries_endpoint().map(str::to_string),
            config.airports_endpoint().map(str::to_string),
        )
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        tracing::debug!("Making reference request to: {}", endpoint);
        let response = self.client.get(endpoint).send().await?;
        tracing::debug!("Reference response status: {}", response.status());

        if !response.status().is_success() {
            return Err(QuoteError::ReferenceDataError {
                endpoint: endpoint.to_string(),
                message: format!("unexpected status {}", response.status()),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ReferenceSource for HttpReferenceSource {
    async fn fetch_countries(&self) -> Result<Vec<Country>> {
        let endpoint = self
            .countries_endpoint
            .as_deref()
            .ok_or_else(|| QuoteError::MissingConfigError {
                field: "reference.countries_endpoint".to_string(),
            })?;

        let records: Vec<CountryRecord> = self.get_json(endpoint).await?;
        let mut countries: Vec<Country> = records
            .into_iter()
            .map(Country::from)
            .filter(|c| !c.label().is_empty())
            .collect();
        countries.sort_by(|a, b| a.label().cmp(b.label()));

        Ok(countries)
    }

    async fn fetch_airports(&self) -> Result<Vec<Airport>> {
        let endpoint = self
            .airports_endpoint
            .as_deref()
            .ok_or_else(|| QuoteError::MissingConfigError {
                field: "reference.airports_endpoint".to_string(),
            })?;

        let records: Vec<AirportRecord> = self.get_json(endpoint).await?;
        Ok(records.into_iter().filter_map(AirportRecord::into_airport).collect())
    }
}

/// Airports offered when the airport lookup is not configured or fails.
pub fn fallback_airports() -> Vec<Airport> {
    [
        ("RUH", "King Khalid International Airport", "Riyadh", "Saudi Arabia"),
        ("JED", "King Abdulaziz International Airport", "Jeddah", "Saudi Arabia"),
        ("DMM", "King Fahd International Airport", "Dammam", "Saudi Arabia"),
        ("DXB", "Dubai International Airport", "Dubai", "United Arab Emirates"),
        ("DOH", "Hamad International Airport", "Doha", "Qatar"),
        ("KWI", "Kuwait International Airport", "Kuwait City", "Kuwait"),
        ("CAI", "Cairo International Airport", "Cairo", "Egypt"),
        ("IST", "Istanbul Airport", "Istanbul", "Turkey"),
        ("SVO", "Sheremetyevo International Airport", "Moscow", "Russia"),
        ("LED", "Pulkovo Airport", "Saint Petersburg", "Russia"),
        ("TBS", "Tbilisi International Airport", "Tbilisi", "Georgia"),
        ("GYD", "Heydar Aliyev International Airport", "Baku", "Azerbaijan"),
        ("KUL", "Kuala Lumpur International Airport", "Kuala Lumpur", "Malaysia"),
    ]
    .into_iter()
    .map(|(code, name, city, country)| Airport {
        code: code.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        country: country.to_string(),
    })
    .collect()
}

/// Both choice lists for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    pub countries: ReferenceList<Country>,
    pub airports: ReferenceList<Airport>,
}

impl ReferenceData {
    pub fn offline() -> Self {
        Self {
            countries: ReferenceList::Unavailable(COUNTRIES_UNAVAILABLE.to_string()),
            airports: ReferenceList::Fallback(fallback_airports()),
        }
    }
}

/// Fetches both lists concurrently. Failures are logged and replaced, never
/// returned.
pub async fn load_reference_data<R: ReferenceSource + ?Sized>(source: &R) -> ReferenceData {
    let (countries, airports) = tokio::join!(source.fetch_countries(), source.fetch_airports());

    let countries = match countries {
        Ok(list) if !list.is_empty() => {
            tracing::info!("Loaded {} countries", list.len());
            ReferenceList::Loaded(list)
        }
        Ok(_) => {
            tracing::warn!("Country lookup returned no records");
            ReferenceList::Unavailable(COUNTRIES_UNAVAILABLE.to_string())
        }
        Err(e) => {
            tracing::warn!("Country lookup failed: {}", e);
            ReferenceList::Unavailable(COUNTRIES_UNAVAILABLE.to_string())
        }
    };

    let airports = match airports {
        Ok(list) if !list.is_empty() => {
            tracing::info!("Loaded {} airports", list.len());
            ReferenceList::Loaded(list)
        }
        Ok(_) => {
            tracing::warn!("Airport lookup returned no records, using built-in list");
            ReferenceList::Fallback(fallback_airports())
        }
        Err(e) => {
            tracing::warn!("Airport lookup failed, using built-in list: {}", e);
            ReferenceList::Fallback(fallback_airports())
        }
    };

    ReferenceData {
        countries,
        airports,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    struct FailingSource;

    #[async_trait]
    impl ReferenceSource for FailingSource {
        async fn fetch_countries(&self) -> Result<Vec<Country>> {
            Err(QuoteError::ReferenceDataError {
                endpoint: "test".to_string(),
                message: "offline".to_string(),
            })
        }

        async fn fetch_airports(&self) -> Result<Vec<Airport>> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn test_failures_degrade_to_fallbacks() {
        let data = load_reference_data(&FailingSource).await;
        assert_eq!(data, ReferenceData::offline());
        assert_eq!(data.countries.unavailable_message(), Some(COUNTRIES_UNAVAILABLE));
        assert!(data.airports.items().iter().any(|a| a.code == "SVO"));
    }

    #[tokio::test]
    async fn test_fetch_countries_maps_arabic_names() {
        let server = MockServer::start();
        let mock_data = serde_json::json!([
            {"name": {"common": "Turkey"}, "translations": {"ara": {"common": "تركيا"}}},
            {"name": {"common": "Georgia"}, "translations": {"ara": {"common": "جورجيا"}}},
            {"name": {"common": "Atlantis"}}
        ]);

        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/all");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(mock_data);
        });

        let source = HttpReferenceSource::new(Some(server.url("/all")), None);
        let countries = source.fetch_countries().await.unwrap();

        api_mock.assert();
        assert_eq!(countries.len(), 3);
        assert_eq!(countries[0].label(), "Atlantis");
        assert_eq!(countries[1].label(), "تركيا");
        assert_eq!(countries[2].english_name, "Georgia");
    }

    #[tokio::test]
    async fn test_fetch_airports_accepts_iata_alias_and_skips_blank_codes() {
        let server = MockServer::start();
        let mock_data = serde_json::json!([
            {"iata": "svo", "name": "Sheremetyevo", "city": "Moscow", "country": "Russia"},
            {"code": "", "name": "Heliport", "city": "Nowhere", "country": "—"}
        ]);

        server.mock(|when, then| {
            when.method(GET).path("/airports");
            then.status(200).json_body(mock_data);
        });

        let source = HttpReferenceSource::new(None, Some(server.url("/airports")));
        let airports = source.fetch_airports().await.unwrap();

        assert_eq!(airports.len(), 1);
        assert_eq!(airports[0].code, "SVO");
        assert_eq!(airports[0].label(), "SVO - Moscow (Sheremetyevo)");
    }

    #[tokio::test]
    async fn test_fetch_airports_tolerates_records_with_several_code_keys() {
        let server = MockServer::start();
        let mock_data = serde_json::json!([
            {"code": "", "iata": "led", "iata_code": "LED", "name": "Pulkovo", "city": "Saint Petersburg", "country": "Russia"},
            {"code": "VKO", "iata": "vko", "name": "Vnukovo", "city": "Moscow", "country": "Russia"}
        ]);

        server.mock(|when, then| {
            when.method(GET).path("/airports");
            then.status(200).json_body(mock_data);
        });

        let source = HttpReferenceSource::new(None, Some(server.url("/airports")));
        let airports = source.fetch_airports().await.unwrap();

        assert_eq!(airports.len(), 2);
        assert_eq!(airports[0].code, "LED");
        assert_eq!(airports[1].code, "VKO");
    }

    #[tokio::test]
    async fn test_server_error_is_reported() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/all");
            then.status(500);
        });

        let source = HttpReferenceSource::new(Some(server.url("/all")), None);
        let err = source.fetch_countries().await.unwrap_err();
        assert!(matches!(err, QuoteError::ReferenceDataError { .. }));

        assert!(matches!(
            source.fetch_airports().await,
            Err(QuoteError::MissingConfigError { .. })
        ));
    }
}
