use log::*;
use reqwest::Url;

use crate::error::DeliveryError;
use crate::http::{self, HttpClient};
use crate::ports::Actuator;

// OpenSprinkler manual station control. The configured URL carries the
// device password and station id; we only set the enable flag and timer.
pub struct OpenSprinkler {
    http: HttpClient,
    url: Url,
}

impl OpenSprinkler {
    pub fn new(http: HttpClient, url: Url) -> Self {
        OpenSprinkler { http, url }
    }
}

pub fn run_url(base: &Url, seconds: u32) -> Url {
    if seconds >= 1 {
        let seconds = seconds.to_string();
        http::with_query(base, &[("en", "1"), ("t", seconds.as_str())])
    } else {
        http::with_query(base, &[("en", "0")])
    }
}

impl Actuator for OpenSprinkler {
    fn set_run_duration(&mut self, seconds: u32) -> Result<(), DeliveryError> {
        if seconds >= 1 {
            info!("Running sprinkler for {}s", seconds);
        } else {
            info!("Stopping sprinkler");
        }
        self.http.get(run_url(&self.url, seconds))?;
        Ok(())
    }
}
