use std::collections::HashSet;
use std::fmt;
use std::slice;
use std::vec;

use crate::{AudioHost, HostError, OsStatus, Property, OBJECT_ID_SIZE, SYSTEM_OBJECT};

/// Host-assigned identifier of an audio device.
///
/// Only valid while the device stays connected, it may change on reconnect or reboot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId(pub u32);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for DeviceId {
    fn from(id: u32) -> Self {
        DeviceId(id)
    }
}

/// Human readable device label. Neither unique nor guaranteed non-empty.
pub type DeviceName = String;

/// One output device as seen at snapshot time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceEntry {
    pub id: DeviceId,
    pub name: DeviceName,
}

impl DeviceEntry {
    pub fn new(id: u32, name: impl Into<DeviceName>) -> Self {
        DeviceEntry {
            id: DeviceId(id),
            name: name.into(),
        }
    }
}

/// Output devices observed at one query instant, in host enumeration order.
///
/// Never contains the same `DeviceId` twice. Names may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceSnapshot {
    entries: Vec<DeviceEntry>,
}

impl DeviceSnapshot {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, DeviceEntry> {
        self.entries.iter()
    }

    pub fn ids(&self) -> Vec<DeviceId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    /// Look up an entry by id.
    pub fn get(&self, id: DeviceId) -> Option<&DeviceEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// First entry, in snapshot order, whose name is exactly `name`.
    /// Later devices sharing the same name are never returned.
    pub fn find_by_name(&self, name: &str) -> Option<&DeviceEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }
}

impl FromIterator<DeviceEntry> for DeviceSnapshot {
    /// Collect entries, dropping any whose id was already seen.
    fn from_iter<I: IntoIterator<Item = DeviceEntry>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let entries = iter
            .into_iter()
            .filter(|entry| seen.insert(entry.id))
            .collect();
        DeviceSnapshot { entries }
    }
}

impl IntoIterator for DeviceSnapshot {
    type Item = DeviceEntry;
    type IntoIter = vec::IntoIter<DeviceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a DeviceSnapshot {
    type Item = &'a DeviceEntry;
    type IntoIter = slice::Iter<'a, DeviceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Which enumerated devices make it into a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFilter {
    /// Only devices exposing at least one output stream.
    #[default]
    OutputCapable,
    /// Every device the host enumerates, input-only ones included.
    All,
}

/// Settings for a `Catalog`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub filter: OutputFilter,
    /// Label used when the host cannot name a device.
    pub unnamed_label: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            filter: OutputFilter::OutputCapable,
            unnamed_label: "Unknown Device".to_owned(),
        }
    }
}

impl CatalogConfig {
    pub fn with_filter(mut self, filter: OutputFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_unnamed_label(mut self, label: &str) -> Self {
        self.unnamed_label = label.to_owned();
        self
    }
}

/// Builds `DeviceSnapshot`s from the host.
///
/// Holds no state besides its configuration, each call queries the host again.
pub struct Catalog<H: AudioHost> {
    host: H,
    config: CatalogConfig,
}

impl<H: AudioHost> Catalog<H> {
    pub fn new(host: H) -> Self {
        Self::with_config(host, CatalogConfig::default())
    }

    pub fn with_config(host: H, config: CatalogConfig) -> Self {
        Catalog { host, config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Take a snapshot of the output devices currently known to the host.
    ///
    /// Never fails. If the device list cannot be sized or fetched the
    /// failure is logged and the snapshot is empty.
    pub fn list_output_devices(&self) -> DeviceSnapshot {
        let ids = match self.device_ids() {
            Ok(ids) => ids,
            Err(err) => {
                warn!("{}, returning an empty device list", err);
                return DeviceSnapshot::default();
            }
        };
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(ids.len());
        for id in ids {
            if !seen.insert(id) {
                debug!("host listed device {} twice, skipping", id);
                continue;
            }
            if self.config.filter == OutputFilter::OutputCapable && !self.is_output(id) {
                continue;
            }
            let name = self.resolve_name(id);
            entries.push(DeviceEntry { id, name });
        }
        debug!("snapshot holds {} output devices", entries.len());
        DeviceSnapshot { entries }
    }

    /// Best-effort device name. Falls back to the configured placeholder.
    pub fn resolve_name(&self, id: DeviceId) -> DeviceName {
        match self.try_resolve_name(id) {
            Ok(name) => name,
            Err(err) => {
                warn!("{}", err);
                self.config.unnamed_label.clone()
            }
        }
    }

    /// Device name straight from the host, failures included.
    pub fn try_resolve_name(&self, id: DeviceId) -> Result<DeviceName, HostError> {
        let name = self
            .host
            .read_string(id.0, Property::DeviceName)
            .map_err(|status| HostError::NameResolutionFailed { device: id, status })?;
        trace!("device {} is named {:?}", id, name);
        Ok(name)
    }

    /// Number of output streams of a device. Zero means it cannot play audio.
    pub fn output_stream_count(&self, id: DeviceId) -> Result<u32, HostError> {
        let size = self
            .host
            .data_size(id.0, Property::OutputStreams)
            .map_err(|status| HostError::HostQueryFailed {
                property: Property::OutputStreams,
                status,
            })?;
        Ok(size / OBJECT_ID_SIZE)
    }

    fn is_output(&self, id: DeviceId) -> bool {
        match self.output_stream_count(id) {
            Ok(0) => {
                trace!("device {} has no output streams", id);
                false
            }
            Ok(_) => true,
            Err(err) => {
                warn!("{}, leaving device {} out", err, id);
                false
            }
        }
    }

    fn device_ids(&self) -> Result<Vec<DeviceId>, HostError> {
        let query_failed = |status: OsStatus| HostError::HostQueryFailed {
            property: Property::ListDevices,
            status,
        };
        let size = self
            .host
            .data_size(SYSTEM_OBJECT, Property::ListDevices)
            .map_err(query_failed)?;
        let count = size / OBJECT_ID_SIZE;
        debug!("host reports {} audio devices", count);
        let ids = self
            .host
            .read_ids(SYSTEM_OBJECT, Property::ListDevices, count * OBJECT_ID_SIZE)
            .map_err(query_failed)?;
        Ok(ids.into_iter().map(DeviceId).collect())
    }
}
