use crate::{AudioHost, DeviceId, DeviceSnapshot, HostError, Property, SelectionError, SYSTEM_OBJECT};

/// Switches the system default output device.
///
/// Stateless between calls. Each call is one synchronous host transaction
/// that either applies completely or not at all.
pub struct Selector<H: AudioHost> {
    host: H,
}

impl<H: AudioHost> Selector<H> {
    pub fn new(host: H) -> Self {
        Selector { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Make `target` the system default output.
    ///
    /// The id is not checked against any snapshot. A stale id is rejected
    /// by the host and reported as `SelectionError::HostRejected`.
    pub fn set_default_output(&self, target: DeviceId) -> Result<(), SelectionError> {
        match self
            .host
            .write_id(SYSTEM_OBJECT, Property::DefaultOutputDevice, target.0)
        {
            Ok(()) => {
                debug!("default output is now device {}", target);
                Ok(())
            }
            Err(status) => {
                warn!(
                    "host rejected device {} as default output, status {}",
                    target, status
                );
                Err(SelectionError::HostRejected(status))
            }
        }
    }

    /// Switch to the first device in `snapshot` named exactly `name`.
    ///
    /// Devices sharing a name with an earlier entry can not be reached this
    /// way, prefer `set_default_output` with an id where possible.
    pub fn select_by_name(
        &self,
        name: &str,
        snapshot: &DeviceSnapshot,
    ) -> Result<DeviceId, SelectionError> {
        let entry = snapshot
            .find_by_name(name)
            .ok_or_else(|| SelectionError::NameNotFound(name.to_owned()))?;
        trace!("name {:?} resolves to device {}", name, entry.id);
        self.set_default_output(entry.id)?;
        Ok(entry.id)
    }

    /// The device currently set as system default output.
    pub fn default_output(&self) -> Result<DeviceId, HostError> {
        let id = self
            .host
            .read_id(SYSTEM_OBJECT, Property::DefaultOutputDevice)
            .map_err(|status| HostError::HostQueryFailed {
                property: Property::DefaultOutputDevice,
                status,
            })?;
        Ok(DeviceId(id))
    }
}
