use crate::{AudioObjectId, OsStatus, Property};

/// Size in bytes of one object id slot in a host property payload.
pub const OBJECT_ID_SIZE: u32 = std::mem::size_of::<AudioObjectId>() as u32;

/// The property-query/set protocol of the host audio subsystem.
///
/// Every call addresses one `Property` on one object and either returns a
/// byte count (sizing call), a typed payload (value call), or applies a
/// single write. A non-zero status is returned as `Err`.
pub trait AudioHost {
    /// Size in bytes of the current value of a property.
    fn data_size(&self, object: AudioObjectId, property: Property) -> Result<u32, OsStatus>;

    /// Read a property holding an array of object ids into a buffer of
    /// `byte_size` bytes. The returned vector holds only the slots the host filled.
    fn read_ids(
        &self,
        object: AudioObjectId,
        property: Property,
        byte_size: u32,
    ) -> Result<Vec<AudioObjectId>, OsStatus>;

    /// Read a string-typed property, converted to UTF-8.
    fn read_string(&self, object: AudioObjectId, property: Property) -> Result<String, OsStatus>;

    /// Write a property holding a single object id.
    fn write_id(
        &self,
        object: AudioObjectId,
        property: Property,
        value: AudioObjectId,
    ) -> Result<(), OsStatus>;

    /// Read a property holding a single object id.
    fn read_id(&self, object: AudioObjectId, property: Property) -> Result<AudioObjectId, OsStatus> {
        let ids = self.read_ids(object, property, OBJECT_ID_SIZE)?;
        ids.first().copied().ok_or(OsStatus::UNKNOWN_PROPERTY)
    }
}

impl<H: AudioHost + ?Sized> AudioHost for &H {
    fn data_size(&self, object: AudioObjectId, property: Property) -> Result<u32, OsStatus> {
        (**self).data_size(object, property)
    }

    fn read_ids(
        &self,
        object: AudioObjectId,
        property: Property,
        byte_size: u32,
    ) -> Result<Vec<AudioObjectId>, OsStatus> {
        (**self).read_ids(object, property, byte_size)
    }

    fn read_string(&self, object: AudioObjectId, property: Property) -> Result<String, OsStatus> {
        (**self).read_string(object, property)
    }

    fn write_id(
        &self,
        object: AudioObjectId,
        property: Property,
        value: AudioObjectId,
    ) -> Result<(), OsStatus> {
        (**self).write_id(object, property, value)
    }

    fn read_id(&self, object: AudioObjectId, property: Property) -> Result<AudioObjectId, OsStatus> {
        (**self).read_id(object, property)
    }
}
