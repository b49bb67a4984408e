use std::fmt;

use crate::{DeviceId, Property};

/// Status code returned by every host property call. Zero denotes success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OsStatus(pub i32);

impl OsStatus {
    pub const NO_ERROR: OsStatus = OsStatus(0);

    /// `kAudioHardwareBadObjectError` ('!obj')
    pub const BAD_OBJECT: OsStatus = OsStatus(0x216f_626a);
    /// `kAudioHardwareUnknownPropertyError` ('who?')
    pub const UNKNOWN_PROPERTY: OsStatus = OsStatus(0x77686f3f);
    /// `kAudioHardwareIllegalOperationError` ('nope')
    pub const ILLEGAL_OPERATION: OsStatus = OsStatus(0x6e6f7065);
    /// `kAudioHardwareBadDeviceError` ('!dev')
    pub const BAD_DEVICE: OsStatus = OsStatus(0x2164_6576);

    pub fn is_ok(self) -> bool {
        self.0 == 0
    }

    /// Turn a raw status into a `Result`, treating zero as success.
    pub fn check(self) -> Result<(), OsStatus> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for OsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // CoreAudio statuses are usually four printable characters packed big-endian.
        let bytes = self.0.to_be_bytes();
        if bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
            let code: String = bytes.iter().map(|b| *b as char).collect();
            write!(f, "'{}' ({})", code, self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A failed call into the host audio subsystem.
///
/// The catalog never hands these to its callers. They are logged and
/// absorbed into an empty snapshot or a placeholder name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("Query of {property:?} failed with status {status}")]
    HostQueryFailed { property: Property, status: OsStatus },
    #[error("Could not resolve the name of device {device}, status {status}")]
    NameResolutionFailed { device: DeviceId, status: OsStatus },
}

impl HostError {
    pub fn status(&self) -> OsStatus {
        match self {
            HostError::HostQueryFailed { status, .. } => *status,
            HostError::NameResolutionFailed { status, .. } => *status,
        }
    }
}

/// Reasons a default output switch did not take effect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Unable to find output device with name: {0}")]
    NameNotFound(String),
    #[error("Host rejected the default output change, status {0}")]
    HostRejected(OsStatus),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_displays_fourcc() {
        assert_eq!(OsStatus::BAD_OBJECT.to_string(), "'!obj' (560947818)");
        assert_eq!(OsStatus(-50).to_string(), "-50");
        assert_eq!(OsStatus(0).to_string(), "0");
    }

    #[test]
    fn check_maps_zero_to_ok() {
        assert_eq!(OsStatus::NO_ERROR.check(), Ok(()));
        assert_eq!(OsStatus(-1).check(), Err(OsStatus(-1)));
    }
}
