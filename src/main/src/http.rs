use core::time::Duration;

use anyhow::Result;
use log::*;
use reqwest::blocking::Client;
use reqwest::Url;
use serde::de::DeserializeOwned;

// Blocking client shared by every adapter; one request at a time
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<HttpClient> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(HttpClient { client })
    }

    pub fn get(&self, url: Url) -> reqwest::Result<()> {
        debug!("GET {}", url.path());
        self.client.get(url).send()?.error_for_status()?;
        Ok(())
    }

    pub fn get_json<T: DeserializeOwned>(&self, url: Url) -> reqwest::Result<T> {
        debug!("GET {}", url.path());
        self.client.get(url).send()?.error_for_status()?.json()
    }
}

// Replace (not append) the given query parameters, keeping everything else
pub fn with_query(base: &Url, params: &[(&str, &str)]) -> Url {
    let kept: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| !params.iter().any(|(name, _)| name == key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut url = base.clone();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .extend_pairs(params);
    url
}
