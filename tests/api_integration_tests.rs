use serde_json::json;
use stadium_finder::data_fetcher::api::create_http_client_with_timeout;
use stadium_finder::{AppError, Config, fetch_league_teams, load_league_teams};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
    Config {
        api_base_url: server.uri(),
        api_key: "test-key".to_string(),
        ..Config::default()
    }
}

#[tokio::test]
async fn test_league_is_requested_by_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test-key/search_all_teams.php"))
        .and(query_param("l", "Spanish La Liga"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "teams": [{"strTeam": "Getafe", "strStadium": "Coliseum"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_http_client_with_timeout(5).unwrap();
    let teams = load_league_teams(&client, &config_for(&server), "Spanish La Liga")
        .await
        .unwrap();

    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].name(), "Getafe");
    assert!(teams[0].has_known_location());
}

#[tokio::test]
async fn test_unknown_league_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"teams": null})))
        .mount(&server)
        .await;

    let client = create_http_client_with_timeout(5).unwrap();
    let records = fetch_league_teams(&client, &config_for(&server), "Nowhere League")
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_rate_limit_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_http_client_with_timeout(5).unwrap();
    let result = load_league_teams(&client, &config_for(&server), "Spanish La Liga").await;
    assert!(matches!(result, Err(AppError::ApiRateLimit { .. })));
}
