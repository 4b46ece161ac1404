use std::fs::{self, OpenOptions};
use std::io::Write;

use crate::error::GpioError;
use crate::gpio::AttributeBackend;

/// Backend that talks to the real attribute files exposed by the kernel.
#[derive(Debug, Default, Clone, Copy)]
pub struct SysfsBackend;

impl SysfsBackend {
    pub fn new() -> Self {
        Self
    }
}

impl AttributeBackend for SysfsBackend {
    fn dir_exists(&self, path: &str) -> bool {
        fs::read_dir(path).is_ok()
    }

    fn read_attr(&self, path: &str) -> Result<String, GpioError> {
        fs::read_to_string(path).map_err(|e| GpioError::Io(format!("read {path}: {e}")))
    }

    fn write_attr(&self, path: &str, contents: &str) -> Result<(), GpioError> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| GpioError::Io(format!("open {path}: {e}")))?;
        file.write_all(contents.as_bytes())
            .map_err(|e| GpioError::Io(format!("write {path}: {e}")))?;
        file.flush()
            .map_err(|e| GpioError::Io(format!("flush {path}: {e}")))
    }
}
