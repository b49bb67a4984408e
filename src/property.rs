/// Identifier of any object known to the host audio subsystem.
pub type AudioObjectId = u32;

/// The host's system object, owner of all global hardware properties.
pub const SYSTEM_OBJECT: AudioObjectId = 1;

const fn fourcc(code: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*code)
}

// Values from AudioHardware.h / AudioHardwareBase.h.
pub const SCOPE_GLOBAL: u32 = fourcc(b"glob");
pub const SCOPE_OUTPUT: u32 = fourcc(b"outp");
pub const ELEMENT_MAIN: u32 = 0;

pub const SELECTOR_DEVICES: u32 = fourcc(b"dev#");
pub const SELECTOR_DEVICE_NAME_CFSTRING: u32 = fourcc(b"lnam");
pub const SELECTOR_DEFAULT_OUTPUT_DEVICE: u32 = fourcc(b"dOut");
pub const SELECTOR_STREAMS: u32 = fourcc(b"stm#");

/// Address of a host property: which selector, in which scope, on which element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyAddress {
    pub selector: u32,
    pub scope: u32,
    pub element: u32,
}

/// The closed set of host properties this crate reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Ids of every audio device the host knows about. Read from the system object.
    ListDevices,
    /// Human readable device name, as a string. Read from a device.
    DeviceName,
    /// Id of the system default output device. Read and written on the system object.
    DefaultOutputDevice,
    /// Ids of the output streams of a device. Read from a device.
    OutputStreams,
}

impl Property {
    pub fn address(&self) -> PropertyAddress {
        let (selector, scope) = match self {
            Property::ListDevices => (SELECTOR_DEVICES, SCOPE_GLOBAL),
            Property::DeviceName => (SELECTOR_DEVICE_NAME_CFSTRING, SCOPE_GLOBAL),
            Property::DefaultOutputDevice => (SELECTOR_DEFAULT_OUTPUT_DEVICE, SCOPE_GLOBAL),
            Property::OutputStreams => (SELECTOR_STREAMS, SCOPE_OUTPUT),
        };
        PropertyAddress {
            selector,
            scope,
            element: ELEMENT_MAIN,
        }
    }
}
