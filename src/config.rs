use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::GpioError;

/// Root of the kernel's sysfs GPIO class directory.
pub const SYSFS_GPIO_BASE: &str = "/sys/class/gpio";

#[derive(Debug, Hash, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    /// Token accepted by the `direction` attribute.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
        }
    }
}

#[derive(Debug, Hash, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Edge {
    None,
    Rising,
    Falling,
}

impl Edge {
    /// Token accepted by the `edge` attribute.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Edge::None => "none",
            Edge::Rising => "rising",
            Edge::Falling => "falling",
        }
    }
}

/// Declarative settings for one pin. Every field is optional and an absent
/// field leaves the matching attribute untouched.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PinConfiguration {
    pub name: Option<String>,
    pub direction: Option<Direction>,
    pub edge: Option<Edge>,
    pub active_low: Option<bool>,
}

impl PinConfiguration {
    pub fn builder() -> PinConfigurationBuilder {
        PinConfigurationBuilder::default()
    }
}

/// Fluent builder for [`PinConfiguration`]. Setters may be called in any
/// order and `build` may be called any number of times.
#[derive(Debug, Default, Clone)]
pub struct PinConfigurationBuilder {
    name: Option<String>,
    direction: Option<Direction>,
    edge: Option<Edge>,
    active_low: Option<bool>,
}

impl PinConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn direction(&mut self, direction: Direction) -> &mut Self {
        self.direction = Some(direction);
        self
    }

    pub fn edge(&mut self, edge: Edge) -> &mut Self {
        self.edge = Some(edge);
        self
    }

    pub fn active_low(&mut self, active_low: bool) -> &mut Self {
        self.active_low = Some(active_low);
        self
    }

    pub fn build(&self) -> PinConfiguration {
        PinConfiguration {
            name: self.name.clone(),
            direction: self.direction,
            edge: self.edge,
            active_low: self.active_low,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SysfsConfig {
    pub base_path: String,
}

impl Default for SysfsConfig {
    fn default() -> Self {
        Self {
            base_path: SYSFS_GPIO_BASE.to_string(),
        }
    }
}

/// Settings for the demo binary: where sysfs lives and which pin to drive.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    #[serde(default)]
    pub sysfs: SysfsConfig,
    pub pin: PinConfiguration,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sysfs: SysfsConfig::default(),
            pin: PinConfiguration::builder()
                .name("9")
                .direction(Direction::Out)
                .build(),
        }
    }
}

impl DemoConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, GpioError> {
        let contents = fs::read_to_string(&path)
            .map_err(|e| GpioError::Config(format!("Failed to read config: {e}")))?;
        serde_json::from_str(&contents)
            .map_err(|e| GpioError::Config(format!("Invalid config json: {e}")))
    }
}
