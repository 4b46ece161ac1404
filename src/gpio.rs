use log::{debug, warn};
use std::sync::Arc;

use crate::config::{Direction, Edge, PinConfiguration, SYSFS_GPIO_BASE};
use crate::error::GpioError;

/// Access to the attribute files of the GPIO class directory.
pub trait AttributeBackend: Send + Sync {
    /// Whether `path` exists and can be opened as a directory.
    fn dir_exists(&self, path: &str) -> bool;
    /// Full textual contents of the attribute at `path`.
    fn read_attr(&self, path: &str) -> Result<String, GpioError>;
    /// Replaces the contents of the attribute at `path`, flushed before return.
    fn write_attr(&self, path: &str, contents: &str) -> Result<(), GpioError>;
}

/// A single digital line that can be sampled and driven.
pub trait GpioLine {
    fn value(&self) -> bool;
    fn set_value(&self, value: bool);
}

/// A pin driven through its sysfs attribute directory.
///
/// Construction exports and configures the pin on a best-effort basis: every
/// configured attribute is written even if an earlier one failed, and any
/// failure leaves the line permanently degraded (see [`SysfsGpio::is_ok`]).
/// Dropping the line does not unexport the pin.
pub struct SysfsGpio<B: AttributeBackend + ?Sized> {
    backend: Arc<B>,
    base: String,
    path: String,
    healthy: bool,
}

impl<B: AttributeBackend + ?Sized> SysfsGpio<B> {
    pub fn new(backend: Arc<B>, config: &PinConfiguration) -> Self {
        Self::with_base(backend, SYSFS_GPIO_BASE, config)
    }

    pub fn with_base(backend: Arc<B>, base: &str, config: &PinConfiguration) -> Self {
        let base = base.trim_end_matches('/').to_string();
        let path = format!("{base}/gpio{}", config.name.as_deref().unwrap_or(""));

        let mut gpio = Self {
            backend,
            base,
            path,
            healthy: true,
        };

        // every step runs regardless of the others
        let steps = [
            gpio.export(),
            gpio.set_direction(config.direction),
            gpio.set_edge(config.edge),
            gpio.set_active_low(config.active_low),
        ];
        gpio.healthy = steps.iter().all(|ok| *ok);
        gpio
    }

    /// `false` once any export or configuration write has failed.
    pub fn is_ok(&self) -> bool {
        self.healthy
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Samples the line. Unreadable values read as low.
    pub fn value(&self) -> bool {
        self.try_value().unwrap_or(false)
    }

    pub fn try_value(&self) -> Result<bool, GpioError> {
        let content = self.backend.read_attr(&self.attr_path("value"))?;
        Ok(is_high(&content))
    }

    /// Drives the line. Write failures are discarded and do not affect
    /// [`SysfsGpio::is_ok`]; use [`SysfsGpio::try_set_value`] to observe them.
    pub fn set_value(&self, value: bool) {
        self.try_set_value(value).ok();
    }

    pub fn try_set_value(&self, value: bool) -> Result<(), GpioError> {
        self.backend.write_attr(&self.attr_path("value"), value_token(value))
    }

    /// Releases the pin by writing its export token to the `unexport` file.
    pub fn unexport(self) -> Result<(), GpioError> {
        let unexport = format!("{}/unexport", self.base);
        self.backend
            .write_attr(&unexport, &self.path)
            .map_err(|e| GpioError::Unexport(format!("{} ({e})", self.path)))
    }

    fn attr_path(&self, attribute: &str) -> String {
        format!("{}/{attribute}", self.path)
    }

    fn export(&self) -> bool {
        if self.backend.dir_exists(&self.path) {
            debug!("{} already exported", self.path);
            return true;
        }

        let export = format!("{}/export", self.base);
        match self.backend.write_attr(&export, &self.path) {
            Ok(()) => true,
            Err(e) => {
                warn!("{}", GpioError::Export(format!("{} ({e})", self.path)));
                false
            }
        }
    }

    fn set_direction(&self, direction: Option<Direction>) -> bool {
        match direction {
            Some(direction) => self.write_setting("direction", "direction", direction.as_attr()),
            None => true,
        }
    }

    fn set_edge(&self, edge: Option<Edge>) -> bool {
        match edge {
            Some(edge) => self.write_setting("edge", "edge", edge.as_attr()),
            None => true,
        }
    }

    // Writes `0` when active low and `1` otherwise, to the edge attribute.
    fn set_active_low(&self, active_low: Option<bool>) -> bool {
        match active_low {
            Some(active_low) => {
                let token = if active_low { "0" } else { "1" };
                self.write_setting("active_low", "edge", token)
            }
            None => true,
        }
    }

    fn write_setting(&self, attribute: &'static str, file: &str, token: &str) -> bool {
        match self.backend.write_attr(&self.attr_path(file), token) {
            Ok(()) => true,
            Err(e) => {
                let err = GpioError::Attribute {
                    attribute,
                    path: self.path.clone(),
                };
                warn!("{err} ({e})");
                false
            }
        }
    }
}

impl<B: AttributeBackend + ?Sized> GpioLine for SysfsGpio<B> {
    fn value(&self) -> bool {
        SysfsGpio::value(self)
    }

    fn set_value(&self, value: bool) {
        SysfsGpio::set_value(self, value)
    }
}

fn value_token(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// A value reads high only when its first token is exactly `1`.
fn is_high(content: &str) -> bool {
    content.split_whitespace().next() == Some("1")
}
