use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Callback value telling the provider to show the verifier to the user.
pub const OUT_OF_BAND_CALLBACK: &str = "oob";

fn default_callback_url() -> String {
    OUT_OF_BAND_CALLBACK.to_string()
}

/// Static configuration of a [`Consumer`](crate::Consumer).
///
/// Usually deserialized from the application's own configuration file:
///
/// ```toml
/// consumer_key = "dpf43f3p2l4k3l03"
/// consumer_secret = "kd94hf93k423kf44"
/// request_token_url = "https://photos.example.net/request_token"
/// authorize_token_url = "https://photos.example.net/authorize"
/// access_token_url = "https://photos.example.net/access_token"
/// callback_url = "http://printer.example.com/ready"
///
/// [additional_params]
/// realm = "photos"
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct ConsumerConfig {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub request_token_url: String,
    pub authorize_token_url: String,
    pub access_token_url: String,
    #[serde(default = "default_callback_url")]
    pub callback_url: String,
    /// Extra parameters sent and signed with every request.
    #[serde(default)]
    pub additional_params: BTreeMap<String, String>,
}

impl ConsumerConfig {
    pub fn new<TKey, TSecret>(consumer_key: TKey, consumer_secret: TSecret) -> Self
    where
        TKey: Into<String>,
        TSecret: Into<String>,
    {
        ConsumerConfig {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            request_token_url: String::new(),
            authorize_token_url: String::new(),
            access_token_url: String::new(),
            callback_url: default_callback_url(),
            additional_params: BTreeMap::new(),
        }
    }

    pub fn request_token_url<T: Into<String>>(self, url: T) -> Self {
        ConsumerConfig {
            request_token_url: url.into(),
            ..self
        }
    }

    pub fn authorize_token_url<T: Into<String>>(self, url: T) -> Self {
        ConsumerConfig {
            authorize_token_url: url.into(),
            ..self
        }
    }

    pub fn access_token_url<T: Into<String>>(self, url: T) -> Self {
        ConsumerConfig {
            access_token_url: url.into(),
            ..self
        }
    }

    pub fn callback_url<T: Into<String>>(self, url: T) -> Self {
        ConsumerConfig {
            callback_url: url.into(),
            ..self
        }
    }

    pub fn additional_param<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.additional_params.insert(key.into(), value.into());
        self
    }
}

impl fmt::Debug for ConsumerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsumerConfig")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("request_token_url", &self.request_token_url)
            .field("authorize_token_url", &self.authorize_token_url)
            .field("access_token_url", &self.access_token_url)
            .field("callback_url", &self.callback_url)
            .field("additional_params", &self.additional_params)
            .finish()
    }
}
