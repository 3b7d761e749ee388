use std::sync::{Arc, Mutex};

use henrikval_api::{
    HenrikApiClient, HenrikApiError, MatchApi, MmrHistoryApi, PremierApi, Region,
    diagnostics::{CallEvent, DiagnosticSink},
};
use httpmock::{Mock, prelude::*};

const API_KEY: &str = "foo-bar-api";
const PUUID: &str = "fe067f25-57a5-4f95-81f1-06d96b2290be";
const MATCH_ID: &str = "696848f3-f16f-45bf-af13-e2192f81a600";

const MMR_HISTORY_PATH: &str =
    "/valorant/v1/by-puuid/mmr-history/eu/fe067f25-57a5-4f95-81f1-06d96b2290be";
const MATCH_PATH: &str = "/valorant/v4/match/eu/696848f3-f16f-45bf-af13-e2192f81a600";
const PREMIER_PATH: &str = "/valorant/v1/premier/GoodGame/gg";

const MMR_HISTORY_FIXTURE: &str = include_str!("fixtures/mmr_history_v1.json");
const MATCH_FIXTURE: &str = include_str!("fixtures/match_v4.json");
const PREMIER_FIXTURE: &str = include_str!("fixtures/premier_team_v1.json");

/// Sink keeping a short label per event.
#[derive(Debug, Default)]
struct RecordingSink(Mutex<Vec<String>>);

impl RecordingSink {
    fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, event: &CallEvent<'_>) {
        let label = match event {
            CallEvent::Started { .. } => "started".to_string(),
            CallEvent::Found { .. } => "found".to_string(),
            CallEvent::Rejected { status, .. } => format!("rejected {}", status.as_u16()),
            CallEvent::Failed { .. } => "failed".to_string(),
        };
        self.0.lock().unwrap().push(label);
    }
}

fn client_for(server: &MockServer) -> HenrikApiClient {
    HenrikApiClient::new(API_KEY)
        .unwrap()
        .with_base_url(server.base_url())
}

/// Serve `body` with `status` on `path`, only for requests carrying the API key.
async fn serve<'a>(server: &'a MockServer, path: &str, status: u16, body: &str) -> Mock<'a> {
    server
        .mock_async(|when, then| {
            when.method(GET).path(path).header("authorization", API_KEY);
            then.status(status)
                .header("content-type", "application/json")
                .body(body);
        })
        .await
}

mod mmr_history {
    use super::*;

    #[tokio::test]
    async fn ok_returns_history() {
        let server = MockServer::start_async().await;
        let mock = serve(&server, MMR_HISTORY_PATH, 200, MMR_HISTORY_FIXTURE).await;
        let client = client_for(&server);

        let res = client.find_mmr_history_v1(Region::Eu, PUUID).await;

        mock.assert_async().await;
        let history = res.expect("history should be present");
        assert_eq!(history.name, "Henrik3");
        assert_eq!(history.tag, "EUW3");
        assert_eq!(history.data.len(), 1);
        assert_eq!(
            history.data[0].match_id,
            "e5a3301c-c8e5-43bc-be94-a5c0d5275fd4"
        );
        assert_eq!(history.data[0].current_tier_patched, "Gold 1");
        assert_eq!(history.data[0].mmr_change_to_last_game, -14);
        assert_eq!(history.riot_id(), "Henrik3#EUW3");
        assert_eq!(
            history.latest().map(|e| e.match_id.as_str()),
            Some("e5a3301c-c8e5-43bc-be94-a5c0d5275fd4")
        );
    }

    #[tokio::test]
    async fn bad_request_is_absent() {
        let server = MockServer::start_async().await;
        let mock = serve(&server, MMR_HISTORY_PATH, 400, "").await;
        let client = client_for(&server);

        let res = client.get_mmr_history_v1(Region::Eu, PUUID).await;

        mock.assert_async().await;
        assert_eq!(
            res.as_ref().err().and_then(HenrikApiError::status),
            Some(reqwest::StatusCode::BAD_REQUEST)
        );
        assert!(client.find_mmr_history_v1(Region::Eu, PUUID).await.is_none());
    }

    #[tokio::test]
    async fn redirect_is_absent_even_with_a_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path(MMR_HISTORY_PATH);
                then.status(302)
                    .header("Location", "/elsewhere")
                    .body(MMR_HISTORY_FIXTURE);
            })
            .await;
        let client = client_for(&server);

        let res = client.find_mmr_history_v1(Region::Eu, PUUID).await;

        mock.assert_async().await;
        assert!(res.is_none());
    }

    #[tokio::test]
    async fn empty_body_is_absent() {
        let server = MockServer::start_async().await;
        let mock = serve(&server, MMR_HISTORY_PATH, 200, "").await;
        let client = client_for(&server);

        let res = client.get_mmr_history_v1(Region::Eu, PUUID).await;

        mock.assert_async().await;
        assert!(matches!(res, Err(HenrikApiError::EmptyBody)));
    }

    #[tokio::test]
    async fn wrong_shape_is_absent() {
        let server = MockServer::start_async().await;
        let mock = serve(&server, MMR_HISTORY_PATH, 200, MATCH_FIXTURE).await;
        let client = client_for(&server);

        let res = client.get_mmr_history_v1(Region::Eu, PUUID).await;

        mock.assert_async().await;
        assert!(matches!(res, Err(HenrikApiError::Serde(_))));
        assert!(client.find_mmr_history_v1(Region::Eu, PUUID).await.is_none());
    }
}

mod match_v4 {
    use super::*;

    #[tokio::test]
    async fn ok_returns_match() {
        let server = MockServer::start_async().await;
        let mock = serve(&server, MATCH_PATH, 200, MATCH_FIXTURE).await;
        let client = client_for(&server);

        let res = client.find_match_v4(Region::Eu, MATCH_ID).await;

        mock.assert_async().await;
        let game = res.expect("match should be present").data;
        assert_eq!(game.metadata.match_id, MATCH_ID);
        assert_eq!(game.players.len(), 10);
        assert_eq!(game.team_players("Red").count(), 5);
        assert_eq!(
            game.winning_team().map(|t| t.team_id.as_str()),
            Some("Red")
        );
        assert_eq!(game.metadata.to_formatted_match_duration(), "34:25");
    }

    #[tokio::test]
    async fn bad_request_is_absent() {
        let server = MockServer::start_async().await;
        let mock = serve(&server, MATCH_PATH, 400, "").await;
        let client = client_for(&server);

        let res = client.find_match_v4(Region::Eu, MATCH_ID).await;

        mock.assert_async().await;
        assert!(res.is_none());
    }

    #[tokio::test]
    async fn redirect_is_absent() {
        let server = MockServer::start_async().await;
        let mock = serve(&server, MATCH_PATH, 302, MATCH_FIXTURE).await;
        let client = client_for(&server);

        let res = client.get_match_v4(Region::Eu, MATCH_ID).await;

        mock.assert_async().await;
        assert!(matches!(res, Err(HenrikApiError::Status(s)) if s.as_u16() == 302));
    }

    #[tokio::test]
    async fn empty_body_is_absent() {
        let server = MockServer::start_async().await;
        let mock = serve(&server, MATCH_PATH, 200, "").await;
        let client = client_for(&server);

        let res = client.get_match_v4(Region::Eu, MATCH_ID).await;

        mock.assert_async().await;
        assert!(matches!(res, Err(HenrikApiError::EmptyBody)));
    }

    #[tokio::test]
    async fn wrong_shape_is_absent() {
        let server = MockServer::start_async().await;
        let mock = serve(&server, MATCH_PATH, 200, MMR_HISTORY_FIXTURE).await;
        let client = client_for(&server);

        let res = client.get_match_v4(Region::Eu, MATCH_ID).await;

        mock.assert_async().await;
        assert!(matches!(res, Err(HenrikApiError::Serde(_))));
    }
}

mod premier {
    use super::*;

    #[tokio::test]
    async fn ok_returns_team() {
        let server = MockServer::start_async().await;
        let mock = serve(&server, PREMIER_PATH, 200, PREMIER_FIXTURE).await;
        let client = client_for(&server);

        let res = client.find_premier_team_v1("GoodGame", "gg").await;

        mock.assert_async().await;
        let team = res.expect("team should be present").data;
        assert_eq!(team.id, "58df4050-7792-40e4-94f9-204279ed9c6d");
        assert_eq!(team.name, "GoodGame");
        assert_eq!(team.tag, "gg");
        assert_eq!(team.member.len(), 2);
    }

    #[tokio::test]
    async fn bad_request_is_absent() {
        let server = MockServer::start_async().await;
        let mock = serve(&server, PREMIER_PATH, 400, "").await;
        let client = client_for(&server);

        let res = client.find_premier_team_v1("GoodGame", "gg").await;

        mock.assert_async().await;
        assert!(res.is_none());
    }

    #[tokio::test]
    async fn redirect_is_absent() {
        let server = MockServer::start_async().await;
        let mock = serve(&server, PREMIER_PATH, 302, PREMIER_FIXTURE).await;
        let client = client_for(&server);

        let res = client.find_premier_team_v1("GoodGame", "gg").await;

        mock.assert_async().await;
        assert!(res.is_none());
    }

    #[tokio::test]
    async fn empty_body_is_absent() {
        let server = MockServer::start_async().await;
        let mock = serve(&server, PREMIER_PATH, 200, "null").await;
        let client = client_for(&server);

        let res = client.get_premier_team_v1("GoodGame", "gg").await;

        mock.assert_async().await;
        assert!(matches!(res, Err(HenrikApiError::EmptyBody)));
    }

    #[tokio::test]
    async fn wrong_shape_is_absent() {
        let server = MockServer::start_async().await;
        let mock = serve(&server, PREMIER_PATH, 200, MMR_HISTORY_FIXTURE).await;
        let client = client_for(&server);

        let res = client.get_premier_team_v1("GoodGame", "gg").await;

        mock.assert_async().await;
        assert!(matches!(res, Err(HenrikApiError::Serde(_))));
        assert!(client.find_premier_team_v1("GoodGame", "gg").await.is_none());
    }

    #[tokio::test]
    async fn team_name_is_percent_encoded() {
        let server = MockServer::start_async().await;
        let mock = serve(
            &server,
            "/valorant/v1/premier/Good%20Game/gg",
            200,
            PREMIER_FIXTURE,
        )
        .await;
        let client = client_for(&server);

        let res = client.find_premier_team_v1("Good Game", "gg").await;

        mock.assert_async().await;
        assert!(res.is_some());
    }
}

mod transport {
    use super::*;

    #[tokio::test]
    async fn unreachable_host_is_absent() {
        let client = HenrikApiClient::new(API_KEY)
            .unwrap()
            .with_base_url("http://127.0.0.1:1");

        assert!(client.find_mmr_history_v1(Region::Eu, PUUID).await.is_none());
        assert!(client.find_match_v4(Region::Eu, MATCH_ID).await.is_none());
        assert!(
            client
                .find_premier_team_v1("GoodGame", "gg")
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn malformed_url_is_absent() {
        let client = HenrikApiClient::new(API_KEY)
            .unwrap()
            .with_base_url("ht!tp://invalid-url");

        let res = client.get_match_v4(Region::Eu, MATCH_ID).await;

        assert!(matches!(res, Err(HenrikApiError::Reqwest(_))));
    }

    #[tokio::test]
    async fn missing_key_header_is_not_matched() {
        let server = MockServer::start_async().await;
        let mock = serve(&server, PREMIER_PATH, 200, PREMIER_FIXTURE).await;
        let client = HenrikApiClient::new("another-key")
            .unwrap()
            .with_base_url(server.base_url());

        let res = client.find_premier_team_v1("GoodGame", "gg").await;

        assert_eq!(mock.hits_async().await, 0);
        assert!(res.is_none());
    }
}

mod diagnostics {
    use super::*;

    fn recording_client(server: &MockServer) -> (HenrikApiClient, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let client = client_for(server).with_diagnostics(sink.clone());
        (client, sink)
    }

    #[tokio::test]
    async fn success_records_started_then_found() {
        let server = MockServer::start_async().await;
        serve(&server, PREMIER_PATH, 200, PREMIER_FIXTURE).await;
        let (client, sink) = recording_client(&server);

        client.find_premier_team_v1("GoodGame", "gg").await;

        assert_eq!(sink.events(), vec!["started", "found"]);
        let metrics = client.metrics().snapshot();
        assert_eq!((metrics.total, metrics.succeeded, metrics.failed), (1, 1, 0));
    }

    #[tokio::test]
    async fn rejection_records_status() {
        let server = MockServer::start_async().await;
        serve(&server, MMR_HISTORY_PATH, 400, "").await;
        let (client, sink) = recording_client(&server);

        client.find_mmr_history_v1(Region::Eu, PUUID).await;

        assert_eq!(sink.events(), vec!["started", "rejected 400"]);
        assert_eq!(client.metrics().snapshot().failed, 1);
    }

    #[tokio::test]
    async fn transport_error_records_failure() {
        let sink = Arc::new(RecordingSink::default());
        let client = HenrikApiClient::new(API_KEY)
            .unwrap()
            .with_base_url("http://127.0.0.1:1")
            .with_diagnostics(sink.clone());

        client.find_match_v4(Region::Eu, MATCH_ID).await;

        assert_eq!(sink.events(), vec!["started", "failed"]);
    }
}

mod live {
    use std::env;

    use super::*;

    fn live_client() -> HenrikApiClient {
        dotenvy::dotenv().ok();
        let key = env::var("HENRIK_API_KEY").expect("HENRIK_API_KEY not set");
        HenrikApiClient::new(key).unwrap()
    }

    #[tokio::test]
    #[ignore = "API Key required"]
    async fn get_mmr_history_v1_works() {
        let history = live_client()
            .get_mmr_history_v1(Region::Eu, PUUID)
            .await
            .unwrap();

        assert!(!history.name.is_empty());
    }

    #[tokio::test]
    #[ignore = "API Key required"]
    async fn get_premier_team_v1_works() {
        let team = live_client()
            .get_premier_team_v1("GoodGame", "gg")
            .await
            .unwrap();

        assert_eq!(team.data.tag.to_lowercase(), "gg");
    }
}
