use crate::error::{AgriWeatherError, Result};
use crate::export::ExportFormat;
use crate::logic::schedule::validate_efficiency;
use crate::models::{CropType, SoilProfile, SoilType, UserType};
use dialoguer::{Input, Select};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub farm: FarmConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub forecast: ForecastConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FarmConfig {
    pub name: String,
    pub crop: String,
    pub growth_stage: String,
    pub soil_type: Option<String>,
    /// Overrides the soil profile's system efficiency
    pub efficiency_percent: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub user_type: UserType,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ForecastConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExportConfig {
    #[serde(default)]
    pub format: ExportFormat,
    pub output_dir: Option<PathBuf>,
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(AgriWeatherError::Config(format!(
                "Config file not found at {:?}. Run `agriweather init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AgriWeatherError::Config(format!("Failed to read config: {}", e)))?;

        let config = Self::from_yaml_str(&config_str)?;
        tracing::info!("Loaded configuration from {}", config_path.display());
        Ok(config)
    }

    /// Parse YAML after `${VAR}` substitution
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AgriWeatherError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        let default_path = Self::default_config_path()?;
        Ok(default_path)
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/agriweather/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgriWeatherError::Config("Cannot determine config directory".into()))?
            .join("agriweather");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up AgriWeather!");
        println!();

        println!("Field");
        let name: String = Input::new()
            .with_prompt("  Field name")
            .default("North Orchard".into())
            .interact_text()
            .map_err(input_error)?;

        let crops: Vec<&str> = CropType::all().iter().map(|c| c.as_str()).collect();
        let crop_idx = Select::new()
            .with_prompt("  Crop")
            .items(&crops)
            .default(0)
            .interact()
            .map_err(input_error)?;
        let crop = CropType::all()[crop_idx];

        let profile = crate::logic::crop_profile(crop);
        let stages: Vec<&str> = profile.stages.iter().map(|s| s.label.as_str()).collect();
        let stage_idx = Select::new()
            .with_prompt("  Growth stage")
            .items(&stages)
            .default(0)
            .interact()
            .map_err(input_error)?;

        let soil_type: String = Input::new()
            .with_prompt("  Soil type (Clay, Loam, Sandy, Silt Loam, Clay Loam, Sandy Loam)")
            .default("Loam".into())
            .validate_with(|s: &String| {
                SoilType::from_str(s)
                    .map(|_| ())
                    .ok_or("unknown soil type")
            })
            .interact_text()
            .map_err(input_error)?;

        let efficiency: f64 = Input::new()
            .with_prompt("  Irrigation system efficiency (%)")
            .default(SoilProfile::default().efficiency_percent)
            .validate_with(|e: &f64| {
                if *e > 0.0 && *e <= 100.0 {
                    Ok(())
                } else {
                    Err("must be between 0 and 100")
                }
            })
            .interact_text()
            .map_err(input_error)?;

        println!();

        let users = [UserType::Farmer, UserType::Agronomist, UserType::Enterprise];
        let user_labels: Vec<&str> = users.iter().map(|u| u.as_str()).collect();
        let user_idx = Select::new()
            .with_prompt("Dashboard audience")
            .items(&user_labels)
            .default(0)
            .interact()
            .map_err(input_error)?;

        let forecast_path: String = Input::new()
            .with_prompt("Forecast file (leave blank to pass --forecast each run)")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(input_error)?;

        println!();

        let config = Config {
            farm: FarmConfig {
                name,
                crop: crop.as_str().to_string(),
                growth_stage: profile.stages[stage_idx].label.clone(),
                soil_type: Some(soil_type),
                efficiency_percent: Some(efficiency),
            },
            display: DisplayConfig {
                user_type: users[user_idx],
            },
            forecast: ForecastConfig {
                path: if forecast_path.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(forecast_path))
                },
            },
            export: ExportConfig::default(),
        };

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AgriWeatherError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# AgriWeather Configuration\n# Generated by `agriweather init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| AgriWeatherError::Config(format!("Bad substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            match std::env::var(var_name) {
                Ok(value) => result = result.replace(placeholder, &value),
                Err(_) => tracing::warn!("Config references unset variable {}", var_name),
            }
        }

        Ok(result)
    }

    /// Check crop, soil and efficiency before any calculation runs
    pub fn validate(&self) -> Result<()> {
        if CropType::from_str(&self.farm.crop).is_none() {
            return Err(AgriWeatherError::InvalidCrop(self.farm.crop.clone()));
        }
        if let Some(ref soil) = self.farm.soil_type {
            if SoilType::from_str(soil).is_none() {
                return Err(AgriWeatherError::Config(format!(
                    "Unknown soil type '{}'",
                    soil
                )));
            }
        }
        validate_efficiency(self.efficiency_percent())
    }

    /// Configured crop as its table label, so "maize" reaches lookups as "Corn"
    pub fn crop_label(&self) -> String {
        canonical_crop(&self.farm.crop)
    }

    pub fn soil_type(&self) -> SoilType {
        self.farm
            .soil_type
            .as_deref()
            .and_then(SoilType::from_str)
            .unwrap_or(SoilType::Loam)
    }

    pub fn soil_profile(&self) -> SoilProfile {
        let profile = SoilProfile::for_soil(self.soil_type());
        match self.farm.efficiency_percent {
            Some(eff) => profile.with_efficiency(eff),
            None => profile,
        }
    }

    pub fn efficiency_percent(&self) -> f64 {
        self.soil_profile().efficiency_percent
    }

    pub fn data_dir(data_dir_override: Option<&PathBuf>) -> Result<PathBuf> {
        // CLI override takes priority
        if let Some(dir) = data_dir_override {
            std::fs::create_dir_all(dir)?;
            return Ok(dir.clone());
        }

        if let Ok(dir) = std::env::var("AGRIWEATHER_DATA_DIR") {
            let p = PathBuf::from(dir);
            std::fs::create_dir_all(&p)?;
            return Ok(p);
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| AgriWeatherError::Config("Cannot determine data directory".into()))?
            .join("agriweather");

        std::fs::create_dir_all(&data_dir)?;
        Ok(data_dir)
    }

    /// Directory exports are written to when no explicit output path is given
    pub fn export_dir(&self, data_dir_override: Option<&PathBuf>) -> Result<PathBuf> {
        match self.export.output_dir {
            Some(ref dir) => {
                std::fs::create_dir_all(dir)?;
                Ok(dir.clone())
            }
            None => {
                let dir = Self::data_dir(data_dir_override)?.join("exports");
                std::fs::create_dir_all(&dir)?;
                Ok(dir)
            }
        }
    }
}

/// Table label for a user-typed crop name; unrecognised names pass through
pub fn canonical_crop(name: &str) -> String {
    match CropType::from_str(name) {
        Some(crop) => crop.as_str().to_string(),
        None => name.to_string(),
    }
}

fn input_error(e: dialoguer::Error) -> AgriWeatherError {
    AgriWeatherError::Config(format!("Input error: {}", e))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            farm: FarmConfig {
                name: "North Orchard".into(),
                crop: "Almonds".into(),
                growth_stage: "Mid-season (Flowering)".into(),
                soil_type: Some("Loam".into()),
                efficiency_percent: None,
            },
            display: DisplayConfig::default(),
            forecast: ForecastConfig::default(),
            export: ExportConfig::default(),
        }
    }
}
