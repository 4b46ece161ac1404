mod backend;
mod config;
mod error;
mod gpio;

pub use config::{
    DemoConfig, Direction, Edge, PinConfiguration, PinConfigurationBuilder, SYSFS_GPIO_BASE,
    SysfsConfig,
};
pub use error::GpioError;
pub use gpio::{AttributeBackend, GpioLine, SysfsGpio};

#[cfg(feature = "hardware-gpio")]
pub use backend::SysfsBackend;
pub use backend::{AttrWrite, MockSysfsBackend};
