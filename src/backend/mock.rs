use parking_lot::{Mutex, RwLock};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::GpioError;
use crate::gpio::AttributeBackend;

/// In-memory stand-in for the sysfs attribute tree.
///
/// Every write attempt is recorded, including ones that were made to fail
/// with [`MockSysfsBackend::fail_writes_to`]. Writing to a path ending in
/// `/export` materializes the directory named by the written contents, and
/// `/unexport` removes it again.
#[derive(Default)]
pub struct MockSysfsBackend {
    attrs: RwLock<FxHashMap<String, String>>, // keyed by attribute path
    dirs: RwLock<FxHashSet<String>>,
    failing: RwLock<FxHashSet<String>>,
    failing_writes: RwLock<FxHashSet<(String, String)>>,
    writes: Mutex<Vec<AttrWrite>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrWrite {
    pub path: String,
    pub contents: String,
}

impl MockSysfsBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `path` as an already exported pin directory.
    pub fn add_dir(&self, path: impl Into<String>) {
        self.dirs.write().insert(path.into());
    }

    /// Makes every subsequent write to `path` fail.
    pub fn fail_writes_to(&self, path: impl Into<String>) {
        self.failing.write().insert(path.into());
    }

    /// Makes writes of exactly `contents` to `path` fail, leaving other
    /// writes to the same attribute untouched.
    pub fn fail_write_of(&self, path: impl Into<String>, contents: impl Into<String>) {
        self.failing_writes
            .write()
            .insert((path.into(), contents.into()));
    }

    pub fn set_attr(&self, path: impl Into<String>, contents: impl Into<String>) {
        self.attrs.write().insert(path.into(), contents.into());
    }

    pub fn attr(&self, path: &str) -> Option<String> {
        self.attrs.read().get(path).cloned()
    }

    pub fn writes(&self) -> Vec<AttrWrite> {
        self.writes.lock().clone()
    }

    /// Contents of every write attempted against `path`, oldest first.
    pub fn writes_to(&self, path: &str) -> Vec<String> {
        self.writes
            .lock()
            .iter()
            .filter(|w| w.path == path)
            .map(|w| w.contents.clone())
            .collect()
    }

    pub fn clear_writes(&self) {
        self.writes.lock().clear();
    }
}

impl AttributeBackend for MockSysfsBackend {
    fn dir_exists(&self, path: &str) -> bool {
        self.dirs.read().contains(path)
    }

    fn read_attr(&self, path: &str) -> Result<String, GpioError> {
        self.attrs
            .read()
            .get(path)
            .cloned()
            .ok_or_else(|| GpioError::Io(format!("read {path}: no such attribute")))
    }

    fn write_attr(&self, path: &str, contents: &str) -> Result<(), GpioError> {
        self.writes.lock().push(AttrWrite {
            path: path.to_string(),
            contents: contents.to_string(),
        });

        if self.failing.read().contains(path)
            || self
                .failing_writes
                .read()
                .contains(&(path.to_string(), contents.to_string()))
        {
            return Err(GpioError::Io(format!("write {path}: injected failure")));
        }

        if path.ends_with("/export") {
            self.dirs.write().insert(contents.to_string());
        } else if path.ends_with("/unexport") {
            self.dirs.write().remove(contents);
        }

        self.attrs
            .write()
            .insert(path.to_string(), contents.to_string());
        Ok(())
    }
}
