use log::*;
use reqwest::Url;
use serde::Deserialize;

use control::Temperature;

use crate::error::FetchError;
use crate::http::HttpClient;
use crate::ports::WeatherSource;

// Outdoor sensor suite (ISS); other structures are indoor or barometer data
const ISS_DATA_STRUCTURE: u8 = 1;

#[derive(Clone, Debug, Deserialize)]
pub struct Condition {
    pub data_structure_type: u8,
    // Most recent valid temperature in °F, only present for the ISS
    pub temp: Option<f32>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CurrentConditions {
    pub did: String,
    // Unix timestamp of the reading, in seconds
    pub ts: i64,
    pub conditions: Vec<Condition>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct WeatherlinkResponse {
    pub data: Option<CurrentConditions>,
}

impl WeatherlinkResponse {
    pub fn outdoor_temperature(&self) -> Result<Temperature, FetchError> {
        let data = self.data.as_ref().ok_or(FetchError::MissingConditions)?;
        let condition = data
            .conditions
            .iter()
            .find(|condition| condition.data_structure_type == ISS_DATA_STRUCTURE)
            .ok_or(FetchError::MissingConditions)?;

        match condition.temp {
            Some(temp) if temp.is_finite() => Ok(Temperature::new(temp)),
            other => Err(FetchError::InvalidTemperature(other)),
        }
    }
}

pub struct WeatherLink {
    http: HttpClient,
    url: Url,
}

impl WeatherLink {
    pub fn new(http: HttpClient, url: Url) -> Self {
        WeatherLink { http, url }
    }
}

impl WeatherSource for WeatherLink {
    fn fetch_temperature(&mut self) -> Result<Temperature, FetchError> {
        let response: WeatherlinkResponse = self.http.get_json(self.url.clone())?;
        if let Some(data) = &response.data {
            debug!("Conditions from {} at {}", data.did, data.ts);
        }
        response.outdoor_temperature()
    }
}
