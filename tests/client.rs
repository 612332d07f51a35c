use clash_api::{ClashError, Client, QueryParams, Transport};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
struct Recorded {
    url: String,
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
    timeout: Duration,
}

enum Reply {
    Body(String),
    Timeout,
}

/// Records every request and answers with a canned reply.
#[derive(Clone)]
struct Recorder {
    reply: Arc<Reply>,
    calls: Arc<Mutex<Vec<Recorded>>>,
}

impl Recorder {
    fn replying(body: &str) -> Self {
        Recorder {
            reply: Arc::new(Reply::Body(body.to_string())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn timing_out() -> Self {
        Recorder {
            reply: Arc::new(Reply::Timeout),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().unwrap().clone()
    }

    fn last(&self) -> Recorded {
        self.calls().pop().expect("no request was made")
    }
}

impl Transport for Recorder {
    fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        query: &[(String, String)],
        timeout: Duration,
    ) -> Result<Vec<u8>, ClashError> {
        self.calls.lock().unwrap().push(Recorded {
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            query: query.to_vec(),
            timeout,
        });

        match &*self.reply {
            Reply::Body(body) => Ok(body.clone().into_bytes()),
            Reply::Timeout => Err(ClashError::NetworkError("operation timed out".to_string())),
        }
    }
}

const BASE: &str = "https://api.clashofclans.com/v1";

type Call = fn(&Client<Recorder>, &QueryParams) -> Result<Value, ClashError>;

fn m(call: Call, path: &'static str) -> (Call, &'static str) {
    (call, path)
}

/// Every facade method with a tag-bearing argument, plus the path it must hit.
fn all_methods() -> Vec<(Call, &'static str)> {
    vec![
        m(|c, q| c.clans(q), "/clans"),
        m(|c, q| c.clan_information("#2ABC", q), "/clans/%232ABC"),
        m(|c, q| c.clan_members("#2ABC", q), "/clans/%232ABC/members"),
        m(|c, q| c.clan_war_log("#2ABC", q), "/clans/%232ABC/warlog"),
        m(|c, q| c.clan_current_war("#2ABC", q), "/clans/%232ABC/currentwar"),
        m(
            |c, q| c.clan_league_group("#2ABC", q),
            "/clans/%232ABC/currentwar/leaguegroup",
        ),
        m(|c, q| c.war_league("#8Y0Q", q), "/clanwarleagues/wars/%238Y0Q"),
        m(|c, q| c.player("#9UQ", q), "/players/%239UQ"),
        m(|c, q| c.leagues(q), "/leagues"),
        m(|c, q| c.league_information("29000022", q), "/leagues/29000022"),
        m(|c, q| c.league_seasons("29000022", q), "/leagues/29000022/seasons"),
        m(
            |c, q| c.league_season_rankings("29000022", "2019-06", q),
            "/leagues/29000022/seasons/2019-06",
        ),
        m(|c, q| c.locations(q), "/locations"),
        m(|c, q| c.location_information("32000006", q), "/locations/32000006"),
        m(
            |c, q| c.location_clan_rankings("32000006", q),
            "/locations/32000006/rankings/clans",
        ),
        m(
            |c, q| c.location_player_rankings("32000006", q),
            "/locations/32000006/rankings/players",
        ),
        m(
            |c, q| c.location_clan_versus_rankings("32000006", q),
            "/locations/32000006/rankings/clans-versus",
        ),
        m(
            |c, q| c.location_player_versus_rankings("32000006", q),
            "/locations/32000006/rankings/players-versus",
        ),
    ]
}

#[test]
fn every_method_hits_its_path() {
    let transport = Recorder::replying("{}");
    let client = Client::with_transport("tok", 20, transport.clone());

    for (call, path) in all_methods() {
        call(&client, &QueryParams::new()).unwrap();
        let request = transport.last();
        assert_eq!(request.url, format!("{}{}", BASE, path));
        assert!(!request.url.contains('#'), "literal # in {}", request.url);
    }

    assert_eq!(transport.calls().len(), 18);
}

#[test]
fn clan_tag_is_percent_encoded() {
    let transport = Recorder::replying("{}");
    let client = Client::with_transport("tok", 20, transport.clone());

    client.clan_information("#2ABC", &QueryParams::new()).unwrap();
    assert_eq!(transport.last().url, format!("{}/clans/%232ABC", BASE));
}

#[test]
fn season_rankings_path_is_unchanged_for_plain_ids() {
    let transport = Recorder::replying("{}");
    let client = Client::with_transport("tok", 20, transport.clone());

    client
        .league_season_rankings("L1", "S1", &QueryParams::new())
        .unwrap();
    assert_eq!(transport.last().url, format!("{}/leagues/L1/seasons/S1", BASE));
}

#[test]
fn slash_inside_an_identifier_is_encoded() {
    let transport = Recorder::replying("{}");
    let client = Client::with_transport("tok", 20, transport.clone());

    client.player("#AB/CD", &QueryParams::new()).unwrap();
    assert_eq!(transport.last().url, format!("{}/players/%23AB%2FCD", BASE));
}

#[test]
fn sends_bearer_and_accept_headers() {
    let transport = Recorder::replying("{}");
    let client = Client::with_transport("my.jwt.token", 20, transport.clone());

    client.leagues(&QueryParams::new()).unwrap();
    assert_eq!(
        transport.last().headers,
        vec![
            ("authorization".to_string(), "Bearer my.jwt.token".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ]
    );
}

#[test]
fn query_params_are_forwarded_exactly() {
    let transport = Recorder::replying("{}");
    let client = Client::with_transport("tok", 20, transport.clone());

    let query = QueryParams::new()
        .with("name", "Clash Heroes")
        .with("minMembers", 10)
        .with("limit", 5);
    client.clans(&query).unwrap();

    let mut sent = transport.last().query;
    sent.sort();
    assert_eq!(
        sent,
        vec![
            ("limit".to_string(), "5".to_string()),
            ("minMembers".to_string(), "10".to_string()),
            ("name".to_string(), "Clash Heroes".to_string()),
        ]
    );
}

#[test]
fn no_query_params_are_injected() {
    let transport = Recorder::replying("{}");
    let client = Client::with_transport("tok", 20, transport.clone());

    for (call, _) in all_methods() {
        call(&client, &QueryParams::new()).unwrap();
        assert!(transport.last().query.is_empty());
    }
}

#[test]
fn construction_timeout_applies_to_every_call() {
    let transport = Recorder::replying("{}");
    let client = Client::with_transport("tok", 7, transport.clone());

    for (call, _) in all_methods() {
        call(&client, &QueryParams::new()).unwrap();
    }

    let calls = transport.calls();
    assert_eq!(calls.len(), 18);
    assert!(calls.iter().all(|c| c.timeout == Duration::from_secs(7)));
}

#[test]
fn responses_pass_through_unchanged() {
    let body = r##"{"tag":"#2ABC","name":"Reddit Dragons","memberList":[{"tag":"#9UQ","trophies":5021}],"isWarLogPublic":true}"##;
    let expected: Value = serde_json::from_str(body).unwrap();
    let client = Client::with_transport("tok", 20, Recorder::replying(body));

    for (call, _) in all_methods() {
        assert_eq!(call(&client, &QueryParams::new()).unwrap(), expected);
    }
}

#[test]
fn remote_error_objects_are_returned_as_values() {
    let body = r#"{"reason":"notFound","message":"Not found"}"#;
    let client = Client::with_transport("tok", 20, Recorder::replying(body));

    let value = client.player("#NOPE", &QueryParams::new()).unwrap();
    assert_eq!(value, json!({"reason": "notFound", "message": "Not found"}));
}

#[test]
fn timeouts_surface_as_network_errors() {
    let client = Client::with_transport("tok", 1, Recorder::timing_out());

    for (call, path) in all_methods() {
        match call(&client, &QueryParams::new()) {
            Err(ClashError::NetworkError(_)) => {}
            other => panic!("{} returned {:?}", path, other),
        }
    }
}

#[test]
fn invalid_json_is_a_decode_error() {
    let client = Client::with_transport("tok", 20, Recorder::replying("Service Unavailable"));

    let err = client.locations(&QueryParams::new()).unwrap_err();
    assert!(matches!(err, ClashError::DecodeError(_)));
}

#[test]
fn client_can_be_shared_across_threads() {
    let transport = Recorder::replying(r#"{"items":[]}"#);
    let client = Arc::new(Client::with_transport("tok", 20, transport.clone()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let client = Arc::clone(&client);
            thread::spawn(move || {
                client
                    .location_information(&format!("3200000{}", i), &QueryParams::new())
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), json!({"items": []}));
    }
    assert_eq!(transport.calls().len(), 4);
}
