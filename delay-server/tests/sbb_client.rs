//! Integration tests for the station board client (wiremock-based)

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use delay_server::domain::{ProductFilter, StationId};
use delay_server::sbb::{BoardQuery, SbbClient, SbbConfig, SbbError, ScheduleProvider, parse_journeys};

const BOARD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<St name="Luzern" evaId="8505000">
<Journey fpTime="14:04" fpDate="18.10.26" delay="+ 2" platform="7" targetLoc="Bern" dirnr="8507000" prod="IR 2530#IR" />
<Journey fpTime="14:1
<Journey fpTime="14:35" fpDate="18.10.26" delay="-" platform="6" targetLoc="Bern" dirnr="8507000" prod="IR 2532#IR" />
</St>
"#;

fn client_for(server: &MockServer) -> SbbClient {
    SbbClient::new(SbbConfig::new().with_base_url(server.uri()).with_timeout(5)).unwrap()
}

fn query() -> BoardQuery {
    BoardQuery::departures(
        StationId::resolve("Luzern").unwrap(),
        Some(StationId::resolve("Bern").unwrap()),
        ProductFilter::encode("IS").unwrap(),
    )
}

#[tokio::test]
async fn station_board_sends_fixed_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bin/stboard.exe/dn"))
        .and(query_param("productsFilter", "1100010000"))
        .and(query_param("boardType", "dep"))
        .and(query_param("start", "1"))
        .and(query_param("maxJourneys", "10"))
        .and(query_param("disableEquivs", "1"))
        .and(query_param("L", "vs_java3"))
        .and(query_param("timeOffset", "0"))
        .and(query_param("input", "8505000"))
        .and(query_param("dirInput", "8507000"))
        .respond_with(ResponseTemplate::new(200).set_body_string(BOARD))
        .expect(1)
        .mount(&server)
        .await;

    let body = client_for(&server).station_board(&query()).await.unwrap();
    let journeys = parse_journeys(&body);

    assert_eq!(journeys.len(), 2);
    assert_eq!(journeys[0].line.as_deref(), Some("IR 2530"));
    assert_eq!(journeys[0].delay_mins, Some(2));
    assert_eq!(journeys[1].line.as_deref(), Some("IR 2532"));
}

#[tokio::test]
async fn error_status_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bin/stboard.exe/dn"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client_for(&server).station_board(&query()).await.unwrap_err();
    match err {
        SbbError::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn unreachable_board_is_http_error() {
    let client = SbbClient::new(
        SbbConfig::new()
            .with_base_url("http://127.0.0.1:1")
            .with_timeout(2),
    )
    .unwrap();

    let err = client.station_board(&query()).await.unwrap_err();
    assert!(matches!(err, SbbError::Http(_)));
}
