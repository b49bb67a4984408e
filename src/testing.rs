//! Synthetic host used by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::{AudioHost, AudioObjectId, OsStatus, Property, OBJECT_ID_SIZE, SYSTEM_OBJECT};

#[derive(Debug, Clone)]
pub struct MockDevice {
    pub id: AudioObjectId,
    pub name: String,
    pub output_streams: u32,
}

impl MockDevice {
    pub fn output(id: AudioObjectId, name: &str) -> Self {
        MockDevice {
            id,
            name: name.to_owned(),
            output_streams: 1,
        }
    }

    pub fn input(id: AudioObjectId, name: &str) -> Self {
        MockDevice {
            id,
            name: name.to_owned(),
            output_streams: 0,
        }
    }
}

#[derive(Default)]
pub struct MockHost {
    devices: RefCell<Vec<MockDevice>>,
    default_output: Cell<Option<AudioObjectId>>,
    writes: RefCell<Vec<AudioObjectId>>,
    sizing_failure: Cell<Option<OsStatus>>,
    fetch_failure: Cell<Option<OsStatus>>,
    write_failure: Cell<Option<OsStatus>>,
    unplugged_after_sizing: RefCell<Vec<AudioObjectId>>,
    name_failures: RefCell<HashMap<AudioObjectId, OsStatus>>,
    stream_failures: RefCell<HashMap<AudioObjectId, OsStatus>>,
}

impl MockHost {
    pub fn new(devices: Vec<MockDevice>) -> Self {
        MockHost {
            devices: RefCell::new(devices),
            ..Default::default()
        }
    }

    pub fn with_default_output(self, id: AudioObjectId) -> Self {
        self.default_output.set(Some(id));
        self
    }

    pub fn default_output(&self) -> Option<AudioObjectId> {
        self.default_output.get()
    }

    /// Every value passed to a default output write, accepted or not.
    pub fn writes(&self) -> Vec<AudioObjectId> {
        self.writes.borrow().clone()
    }

    pub fn fail_sizing(&self, status: OsStatus) {
        self.sizing_failure.set(Some(status));
    }

    pub fn fail_fetch(&self, status: OsStatus) {
        self.fetch_failure.set(Some(status));
    }

    pub fn fail_writes(&self, status: OsStatus) {
        self.write_failure.set(Some(status));
    }

    pub fn fail_name(&self, id: AudioObjectId, status: OsStatus) {
        self.name_failures.borrow_mut().insert(id, status);
    }

    pub fn fail_streams(&self, id: AudioObjectId, status: OsStatus) {
        self.stream_failures.borrow_mut().insert(id, status);
    }

    /// Device is still counted by the sizing call but gone from the fetched list.
    pub fn unplug_after_sizing(&self, id: AudioObjectId) {
        self.unplugged_after_sizing.borrow_mut().push(id);
    }

    /// Device disappears from the host entirely.
    pub fn unplug(&self, id: AudioObjectId) {
        self.devices.borrow_mut().retain(|device| device.id != id);
    }

    fn device(&self, id: AudioObjectId) -> Result<MockDevice, OsStatus> {
        self.devices
            .borrow()
            .iter()
            .find(|device| device.id == id)
            .cloned()
            .ok_or(OsStatus::BAD_OBJECT)
    }
}

impl AudioHost for MockHost {
    fn data_size(&self, object: AudioObjectId, property: Property) -> Result<u32, OsStatus> {
        match (object, property) {
            (SYSTEM_OBJECT, Property::ListDevices) => {
                if let Some(status) = self.sizing_failure.get() {
                    return Err(status);
                }
                Ok(self.devices.borrow().len() as u32 * OBJECT_ID_SIZE)
            }
            (SYSTEM_OBJECT, Property::DefaultOutputDevice) => Ok(OBJECT_ID_SIZE),
            (id, Property::OutputStreams) => {
                if let Some(status) = self.stream_failures.borrow().get(&id) {
                    return Err(*status);
                }
                Ok(self.device(id)?.output_streams * OBJECT_ID_SIZE)
            }
            _ => Err(OsStatus::UNKNOWN_PROPERTY),
        }
    }

    fn read_ids(
        &self,
        object: AudioObjectId,
        property: Property,
        byte_size: u32,
    ) -> Result<Vec<AudioObjectId>, OsStatus> {
        let capacity = (byte_size / OBJECT_ID_SIZE) as usize;
        match (object, property) {
            (SYSTEM_OBJECT, Property::ListDevices) => {
                if let Some(status) = self.fetch_failure.get() {
                    return Err(status);
                }
                let unplugged = self.unplugged_after_sizing.borrow();
                Ok(self
                    .devices
                    .borrow()
                    .iter()
                    .map(|device| device.id)
                    .filter(|id| !unplugged.contains(id))
                    .take(capacity)
                    .collect())
            }
            (SYSTEM_OBJECT, Property::DefaultOutputDevice) => self
                .default_output
                .get()
                .map(|id| vec![id])
                .ok_or(OsStatus::UNKNOWN_PROPERTY),
            _ => Err(OsStatus::UNKNOWN_PROPERTY),
        }
    }

    fn read_string(&self, object: AudioObjectId, property: Property) -> Result<String, OsStatus> {
        if property != Property::DeviceName {
            return Err(OsStatus::UNKNOWN_PROPERTY);
        }
        if let Some(status) = self.name_failures.borrow().get(&object) {
            return Err(*status);
        }
        Ok(self.device(object)?.name)
    }

    fn write_id(
        &self,
        object: AudioObjectId,
        property: Property,
        value: AudioObjectId,
    ) -> Result<(), OsStatus> {
        if (object, property) != (SYSTEM_OBJECT, Property::DefaultOutputDevice) {
            return Err(OsStatus::UNKNOWN_PROPERTY);
        }
        self.writes.borrow_mut().push(value);
        if let Some(status) = self.write_failure.get() {
            return Err(status);
        }
        let device = self.device(value).map_err(|_| OsStatus::BAD_DEVICE)?;
        if device.output_streams == 0 {
            return Err(OsStatus::ILLEGAL_OPERATION);
        }
        self.default_output.set(Some(value));
        Ok(())
    }
}
