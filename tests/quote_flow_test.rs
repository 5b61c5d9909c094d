use anyhow::Result;
use chrono::NaiveDate;
use httpmock::prelude::*;
use travel_quote::config::cli::read_events_file;
use travel_quote::core::ConfigProvider;
use travel_quote::domain::model::ReferenceList;
use travel_quote::utils::validation::Validate;
use travel_quote::{
    load_reference_data, HttpReferenceSource, LocalStorage, QuoteSession, TomlConfig,
};
use tempfile::TempDir;

fn quote_events() -> &'static str {
    r#"[
        {"type": "set_field", "field": "quote_no", "value": "Q-2024-015"},
        {"type": "set_field", "field": "client_name", "value": "عبدالله"},
        {"type": "set_field", "field": "adults", "value": "2"},
        {"type": "set_field", "field": "children", "value": "1"},
        {"type": "set_field", "field": "departure_date", "value": "2024-01-10"},
        {"type": "set_field", "field": "return_date", "value": "2024-01-15"},
        {"type": "set_destinations", "labels": ["روسيا"]},
        {"type": "update_hotel", "index": 0, "field": "price", "value": "100"},
        {"type": "set_included", "area": "flight", "included": true},
        {"type": "set_detail", "field": "flight_price", "value": "200"},
        {"type": "set_detail", "field": "outbound_from", "value": "الرياض"},
        {"type": "set_detail", "field": "outbound_to", "value": "موسكو"},
        {"type": "set_field", "field": "discount", "value": "50"},
        {"type": "set_field", "field": "tax_percent", "value": "10"}
    ]"#
}

#[tokio::test]
async fn test_end_to_end_quote_with_reference_lookups() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("quotes");

    let server = MockServer::start();
    let countries_mock = server.mock(|when, then| {
        when.method(GET).path("/countries");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"name": {"common": "Russia"}, "translations": {"ara": {"common": "روسيا"}}}
            ]));
    });
    let airports_mock = server.mock(|when, then| {
        when.method(GET).path("/airports");
        then.status(200).json_body(serde_json::json!([
            {"code": "SVO", "name": "Sheremetyevo", "city": "Moscow", "country": "Russia"}
        ]));
    });

    let config = TomlConfig::from_toml_str(&format!(
        r#"
[company]
name = "رحلات الشرق"
email = "info@example.com"

[defaults]
currency = "SAR"

[reference]
countries_endpoint = "{}"
airports_endpoint = "{}"

[output]
path = "{}"
"#,
        server.url("/countries"),
        server.url("/airports"),
        output_path.to_str().unwrap().replace('\\', "/")
    ))?;
    config.validate()?;

    let reference = load_reference_data(&HttpReferenceSource::from_config(&config)).await;
    countries_mock.assert();
    airports_mock.assert();
    assert!(matches!(reference.countries, ReferenceList::Loaded(_)));
    assert_eq!(reference.airports.items()[0].code, "SVO");

    let events_path = temp_dir.path().join("events.json");
    std::fs::write(&events_path, quote_events())?;
    let events = read_events_file(&events_path).await?;

    let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let mut session = QuoteSession::start(config.initial_form(), today);
    let preview = session.dispatch_all(events);

    assert_eq!(preview.duration, "05 ليالي / 06 أيام");
    assert_eq!(preview.amounts.subtotal, "300.00");
    assert_eq!(preview.amounts.grand, "275.00");
    assert_eq!(preview.currency, "SAR");
    assert_eq!(preview.quote_date, "2024-01-02");

    let storage = LocalStorage::new(config.output_path().to_string());
    let location = session.export(&storage).await?;
    assert!(location.ends_with("Q-2024-015.txt"));

    let document = std::fs::read_to_string(output_path.join("Q-2024-015.txt"))?;
    assert!(document.starts_with("رحلات الشرق\ninfo@example.com\n"));
    assert!(document.contains("العميل: عبدالله"));
    assert!(document.contains("الوجهات: روسيا"));
    assert!(document.contains("من الرياض إلى موسكو"));
    assert!(document.contains("الإجمالي: 275.00 SAR"));

    Ok(())
}

#[tokio::test]
async fn test_failed_lookups_do_not_block_the_quote() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let server = MockServer::start();
    let countries_mock = server.mock(|when, then| {
        when.method(GET).path("/countries");
        then.status(503);
    });
    let airports_mock = server.mock(|when, then| {
        when.method(GET).path("/airports");
        then.status(200).body("not json");
    });

    let source = HttpReferenceSource::new(
        Some(server.url("/countries")),
        Some(server.url("/airports")),
    );
    let reference = load_reference_data(&source).await;

    countries_mock.assert();
    airports_mock.assert();
    assert!(reference.countries.unavailable_message().is_some());
    assert!(matches!(reference.airports, ReferenceList::Fallback(_)));
    assert!(!reference.airports.items().is_empty());

    let mut session = QuoteSession::new(TomlConfig::default().initial_form());
    session.dispatch_all(serde_json::from_str::<Vec<_>>(quote_events())?);

    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    session.export(&storage).await?;
    assert!(temp_dir.path().join("Q-2024-015.txt").exists());

    Ok(())
}

#[tokio::test]
async fn test_quote_without_number_uses_default_file_name() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let session = QuoteSession::start(
        TomlConfig::default().initial_form(),
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    );

    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    session.export(&storage).await?;

    let document = std::fs::read_to_string(temp_dir.path().join("عرض-سعر.txt"))?;
    assert!(document.contains("عرض سعر رقم: —"));
    assert!(document.contains("موسكو | فندق اكوامارين"));

    Ok(())
}
