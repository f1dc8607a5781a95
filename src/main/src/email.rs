use log::*;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;

use crate::error::DeliveryError;
use crate::http::{self, HttpClient};
use crate::ports::Notifier;

// Reply from the email relay. Anything other than a missing/null/false
// `error` means the message was dropped.
#[derive(Clone, Debug, Deserialize)]
pub struct RelayResponse {
    #[serde(default)]
    pub error: Value,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, Value>,
}

impl RelayResponse {
    pub fn check(&self) -> Result<(), DeliveryError> {
        match &self.error {
            Value::Null | Value::Bool(false) => Ok(()),
            Value::String(message) if message.is_empty() => Ok(()),
            _ => {
                let mut payload = self.rest.clone();
                payload.insert("error".to_string(), self.error.clone());
                Err(DeliveryError::Rejected(Value::Object(payload).to_string()))
            }
        }
    }
}

pub struct EmailRelay {
    http: HttpClient,
    url: Url,
    key: String,
}

impl EmailRelay {
    pub fn new(http: HttpClient, url: Url, key: String) -> Self {
        EmailRelay { http, url, key }
    }

    pub fn message_url(&self, subject: &str, body: &str) -> Url {
        http::with_query(
            &self.url,
            &[("key", self.key.as_str()), ("subject", subject), ("text", body)],
        )
    }
}

impl Notifier for EmailRelay {
    fn notify(&mut self, subject: &str, body: &str) -> Result<(), DeliveryError> {
        let response: RelayResponse = self.http.get_json(self.message_url(subject, body))?;
        response.check()?;
        info!("Email sent!");
        Ok(())
    }
}
