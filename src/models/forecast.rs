use crate::error::{AgriWeatherError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One day of forecast input: reference evapotranspiration and rainfall in mm/day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub eto: f64,
    pub rain: f64,
}

impl ForecastDay {
    pub fn new(date: impl Into<String>, eto: f64, rain: f64) -> Self {
        Self {
            date: date.into(),
            eto,
            rain,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Forecast file as handed over by the weather provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub location: Option<ForecastLocation>,
    pub days: Vec<ForecastDay>,
}

impl Forecast {
    /// Load a forecast from YAML or JSON, chosen by file extension
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AgriWeatherError::NotFound(format!(
                "forecast file {:?}",
                path
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let forecast = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            _ => Self::from_yaml_str(&content)?,
        };

        tracing::info!(
            "Loaded {} forecast days from {}",
            forecast.days.len(),
            path.display()
        );
        Ok(forecast)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn first(&self) -> Option<&ForecastDay> {
        self.days.first()
    }
}
