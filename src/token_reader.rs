use std::collections::HashMap;

use serde::Deserialize;

use crate::{Response, TokenReaderError, TokenReaderResult, OAUTH_TOKEN_KEY, OAUTH_TOKEN_SECRET_KEY};

/// Represents response of token acquisition.
#[derive(Deserialize, Debug)]
pub struct TokenResponse {
    /// OAuth Token
    pub oauth_token: String,
    /// OAuth Token Secret
    pub oauth_token_secret: String,
    /// Other contents
    #[serde(flatten)]
    pub remain: HashMap<String, String>,
}

/// Add parse_oauth_token feature to the transport's response.
// this trait is sealed
pub trait TokenReader: private::Sealed {
    fn parse_oauth_token(self) -> TokenReaderResult<TokenResponse>;
}

impl TokenReader for Response {
    fn parse_oauth_token(self) -> TokenReaderResult<TokenResponse> {
        let text = String::from_utf8(self.into_body())?;
        read_oauth_token(text)
    }
}

/// Reads an `application/x-www-form-urlencoded` token response.
///
/// Only the first occurrence of a repeated key is kept.
pub fn read_oauth_token(text: String) -> TokenReaderResult<TokenResponse> {
    let mut destructured: HashMap<String, String> = HashMap::new();
    for (key, value) in url::form_urlencoded::parse(text.as_bytes()) {
        destructured
            .entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    let oauth_token = destructured.remove(OAUTH_TOKEN_KEY);
    let oauth_token_secret = destructured.remove(OAUTH_TOKEN_SECRET_KEY);
    match (oauth_token, oauth_token_secret) {
        (Some(t), Some(s)) => Ok(TokenResponse {
            oauth_token: t,
            oauth_token_secret: s,
            remain: destructured,
        }),
        (None, _) => Err(TokenReaderError::MissingField(OAUTH_TOKEN_KEY, text)),
        (_, _) => Err(TokenReaderError::MissingField(
            OAUTH_TOKEN_SECRET_KEY,
            text,
        )),
    }
}

mod private {
    use crate::Response;

    pub trait Sealed {}
    impl Sealed for Response {}
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn parse_response_typical() {
        let resp_str_sample = "oauth_token=Z6eEdO8MOmk394WozF5oKyuAv855l4Mlqo7hhlSLik&oauth_token_secret=Kd75W4OQfb2oJTV0vzGzeXftVAwgMnEK9MumzYcM&oauth_callback_confirmed=true";
        for parsed in &[
            read_oauth_token(resp_str_sample.to_string()).unwrap(),
            serde_urlencoded::from_str::<TokenResponse>(resp_str_sample).unwrap(),
        ] {
            assert_eq!(
                parsed.oauth_token,
                "Z6eEdO8MOmk394WozF5oKyuAv855l4Mlqo7hhlSLik"
            );
            assert_eq!(
                parsed.oauth_token_secret,
                "Kd75W4OQfb2oJTV0vzGzeXftVAwgMnEK9MumzYcM"
            );
            assert_eq!(parsed.remain.len(), 1);
            let oauth_callback_confirmed = parsed.remain.get("oauth_callback_confirmed").unwrap();
            assert_eq!(oauth_callback_confirmed, "true");
        }
    }

    #[test]
    fn parse_response_decodes_values() {
        let parsed = read_oauth_token("oauth_token=a%2Bb&oauth_token_secret=c+d".to_string()).unwrap();
        assert_eq!(parsed.oauth_token, "a+b");
        assert_eq!(parsed.oauth_token_secret, "c d");
    }

    #[test]
    fn parse_response_first_value_wins() {
        let parsed =
            read_oauth_token("oauth_token=T1&oauth_token=T2&oauth_token_secret=S1".to_string())
                .unwrap();
        assert_eq!(parsed.oauth_token, "T1");
        assert_eq!(parsed.oauth_token_secret, "S1");
    }

    #[test]
    fn parse_minimal() {
        let resp_str_sample = "oauth_token&oauth_token_secret";
        let parsed = read_oauth_token(resp_str_sample.to_string()).unwrap();
        assert_eq!(parsed.oauth_token, "");
        assert_eq!(parsed.oauth_token_secret, "");
        assert_eq!(parsed.remain.len(), 0);
    }

    #[test]
    fn parse_token_notfound() {
        let resp_str_sample = "oauth_token_secret=";
        let parsed = read_oauth_token(resp_str_sample.to_string());
        if let Err(TokenReaderError::MissingField(key, resp_str)) = parsed {
            assert_eq!(key, OAUTH_TOKEN_KEY);
            assert_eq!(resp_str, resp_str_sample)
        } else {
            panic!("expected a missing field error")
        }
    }

    #[test]
    fn parse_token_secret_notfound() {
        let resp_str_sample = "oauth_token=T1";
        let parsed = read_oauth_token(resp_str_sample.to_string());
        if let Err(TokenReaderError::MissingField(key, resp_str)) = parsed {
            assert_eq!(key, OAUTH_TOKEN_SECRET_KEY);
            assert_eq!(resp_str, resp_str_sample)
        } else {
            panic!("expected a missing field error")
        }
    }

    #[test]
    fn parse_from_response_body() {
        let resp = http::Response::builder()
            .status(200)
            .body(b"oauth_token=T1&oauth_token_secret=S1".to_vec())
            .unwrap();
        let parsed = resp.parse_oauth_token().unwrap();
        assert_eq!(parsed.oauth_token, "T1");
        assert_eq!(parsed.oauth_token_secret, "S1");
    }

    #[test]
    fn non_utf8_body_is_rejected() {
        let resp = http::Response::builder()
            .body(vec![0xff, 0xfe, 0x3d])
            .unwrap();
        let err = resp.parse_oauth_token().unwrap_err();
        assert!(matches!(err, TokenReaderError::NotUtf8(_)));
        assert_eq!(err.missing_field(), None);
    }
}
