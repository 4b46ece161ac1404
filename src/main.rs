use log::{info, warn};
use std::sync::Arc;

use sysgpio::{DemoConfig, GpioLine, SysfsGpio};

#[cfg(feature = "hardware-gpio")]
use sysgpio::SysfsBackend;
#[cfg(not(feature = "hardware-gpio"))]
use sysgpio::MockSysfsBackend;

fn main() {
    env_logger::init();

    let config = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SYSGPIO_CONFIG").ok())
    {
        Some(path) => DemoConfig::load_from_file(&path)
            .unwrap_or_else(|e| panic!("Failed to load config: {e}")),
        None => DemoConfig::default(),
    };

    let backend = {
        #[cfg(feature = "hardware-gpio")]
        {
            Arc::new(SysfsBackend::new())
        }
        #[cfg(not(feature = "hardware-gpio"))]
        {
            Arc::new(MockSysfsBackend::default())
        }
    };

    let io = SysfsGpio::with_base(backend, &config.sysfs.base_path, &config.pin);
    info!("Configured {}", io.path());
    if !io.is_ok() {
        warn!("{} is only partially configured", io.path());
    }

    println!("is ok: {}", io.is_ok());
    toggle(&io);
}

fn toggle<L: GpioLine>(line: &L) {
    line.set_value(false);
    println!("value: {}", line.value());
    line.set_value(true);
    println!("value: {}", line.value());
}
