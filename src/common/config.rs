// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::Error;
use serde::de::DeserializeOwned;
#[allow(deprecated)]
use std::env::home_dir;
use std::fs::read_to_string;

/// Configuration parameters for various features.
///
/// Each consumer declares its own `Deserialize` section struct and calls
/// `get()`, so the TOML file is parsed once per consumer rather than into
/// one shared schema.
#[derive(Debug)]
pub struct ReelConfig {
    toml: String,
}

impl ReelConfig {
    /// Creates a configuration builder.
    pub fn builder() -> ReelConfigBuilder {
        ReelConfigBuilder {
            result: Err(Error::String("config not set".to_string())),
        }
    }

    /// Returns configuration parameters.
    pub fn get<T: DeserializeOwned>(&self) -> Result<T, Error> {
        toml::from_str(&self.toml).map_err(|e: toml::de::Error| Error::String(format!("toml: {e}")))
    }
}

/// Builder returned by `ReelConfig::builder()`.
pub struct ReelConfigBuilder {
    result: Result<String, Error>,
}

impl ReelConfigBuilder {
    /// Finish the builder.
    pub fn build(self) -> Result<ReelConfig, Error> {
        self.result.map(|toml| ReelConfig { toml })
    }

    /// Read configuration from the named TOML file, looked up first in the
    /// home directory and then in the current directory.
    pub fn toml_file(mut self, file_name: &str) -> Self {
        #[allow(deprecated)]
        let home_path = home_dir()
            .and_then(|pathbuf| pathbuf.to_str().map(|path| format!("{path}/{file_name}")));
        let local_path = format!("./{file_name}");
        let paths: Vec<String> = home_path.into_iter().chain([local_path]).collect();
        self.result = paths
            .iter()
            .find_map(|path| read_to_string(path).ok())
            .ok_or_else(|| Error::String(format!("{file_name}: cannot read")));
        self
    }

    /// Use the specified TOML string as the configuration.
    pub fn toml_str(mut self, toml: &str) -> Self {
        self.result = Ok(toml.to_string());
        self
    }
}
