use httpmock::prelude::*;
use oauth1_consumer::{
    AuthorizedToken, Consumer, ConsumerConfig, Error, UnauthorizedToken, OAUTH_TOKEN_KEY,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn consumer(server: &MockServer) -> Consumer {
    let config = ConsumerConfig::new("dpf43f3p2l4k3l03", "kd94hf93k423kf44")
        .request_token_url(server.url("/oauth/request_token"))
        .authorize_token_url(server.url("/oauth/authorize"))
        .access_token_url(server.url("/oauth/access_token"));

    Consumer::new(config).with_clock(|| 137_131_200i64).with_nonce_generator(|| 4_572_616i64)
}

#[test]
fn three_legged_flow_over_http() {
    init_tracing();

    let server = MockServer::start();
    let request_token_mock = server.mock(|when, then| {
        when.method(GET).path("/oauth/request_token").header_exists("authorization");
        then.status(200)
            .body("oauth_token=T1&oauth_token_secret=S1&oauth_callback_confirmed=true");
    });
    let access_token_mock = server.mock(|when, then| {
        when.method(GET).path("/oauth/access_token").header_exists("authorization");
        then.status(200).body("oauth_token=A1&oauth_token_secret=AS1");
    });
    let resource_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/photos")
            .query_param("file", "vacation.jpg")
            .header_exists("authorization");
        then.status(200).body("photo-bytes");
    });
    let consumer = consumer(&server);

    let request_token = consumer.get_request_token().expect("request token");
    assert_eq!(request_token, UnauthorizedToken::new("T1", "S1"));

    let authorize_url = consumer.token_authorization_url(&request_token);
    assert_eq!(authorize_url, format!("{}?{}=T1", server.url("/oauth/authorize"), OAUTH_TOKEN_KEY));

    let access_token =
        consumer.authorize_token(&request_token, "hfdp7dh39dks9884").expect("access token");
    assert_eq!(access_token, AuthorizedToken::new("A1", "AS1"));

    let resp = consumer
        .get(&server.url("/photos"), &[("file", "vacation.jpg")], &access_token)
        .expect("resource");
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.body().as_slice(), b"photo-bytes");

    request_token_mock.assert();
    access_token_mock.assert();
    resource_mock.assert();
}

#[test]
fn resource_status_is_not_interpreted() {
    init_tracing();

    let server = MockServer::start();
    let resource_mock = server.mock(|when, then| {
        when.method(GET).path("/private");
        then.status(401).body("oauth_problem=token_rejected");
    });
    let consumer = consumer(&server);

    let resp = consumer
        .get(&server.url("/private"), &[] as &[(&str, &str)], &AuthorizedToken::new("A1", "AS1"))
        .expect("a response, whatever its status");
    assert_eq!(resp.status(), 401);
    resource_mock.assert();
}

#[test]
fn rejected_request_token_reports_missing_field() {
    init_tracing();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/oauth/request_token");
        then.status(401).body("oauth_problem=signature_invalid");
    });
    let consumer = consumer(&server);

    match consumer.get_request_token() {
        Err(Error::TokenReader(e)) => assert_eq!(e.missing_field(), Some(OAUTH_TOKEN_KEY)),
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn unreachable_endpoint_is_a_transport_error() {
    init_tracing();

    let config = ConsumerConfig::new("key", "secret")
        .request_token_url("http://127.0.0.1:9/oauth/request_token");
    let consumer = Consumer::new(config);

    let err = consumer.get_request_token().unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "unexpected error: {}", err);
}
