use std::ffi::c_void;
use std::mem;
use std::os::raw::c_char;
use std::ptr;

use core_foundation_sys::base::{CFIndex, CFRelease, CFTypeRef};
use core_foundation_sys::string::{
    kCFStringEncodingUTF8, CFStringGetCString, CFStringGetLength,
    CFStringGetMaximumSizeForEncoding, CFStringRef,
};
use coreaudio::sys::{
    AudioObjectGetPropertyData, AudioObjectGetPropertyDataSize, AudioObjectPropertyAddress,
    AudioObjectSetPropertyData,
};

use crate::{AudioHost, AudioObjectId, OsStatus, Property, OBJECT_ID_SIZE};

fn hal_address(property: Property) -> AudioObjectPropertyAddress {
    let address = property.address();
    AudioObjectPropertyAddress {
        mSelector: address.selector,
        mScope: address.scope,
        mElement: address.element,
    }
}

/// The CoreAudio hardware abstraction layer of the running macOS system.
///
/// Stateless, every call goes straight to the HAL.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoreAudioHost;

impl CoreAudioHost {
    pub fn new() -> Self {
        CoreAudioHost
    }
}

impl AudioHost for CoreAudioHost {
    fn data_size(&self, object: AudioObjectId, property: Property) -> Result<u32, OsStatus> {
        let address = hal_address(property);
        let mut size: u32 = 0;
        let status = unsafe {
            AudioObjectGetPropertyDataSize(object, &address, 0, ptr::null(), &mut size)
        };
        OsStatus(status).check()?;
        trace!("size of {:?} on object {}: {} bytes", property, object, size);
        Ok(size)
    }

    fn read_ids(
        &self,
        object: AudioObjectId,
        property: Property,
        byte_size: u32,
    ) -> Result<Vec<AudioObjectId>, OsStatus> {
        let address = hal_address(property);
        let capacity = (byte_size / OBJECT_ID_SIZE) as usize;
        if capacity == 0 {
            return Ok(Vec::new());
        }
        let mut ids: Vec<AudioObjectId> = vec![0; capacity];
        let mut size = (capacity as u32) * OBJECT_ID_SIZE;
        let status = unsafe {
            AudioObjectGetPropertyData(
                object,
                &address,
                0,
                ptr::null(),
                &mut size,
                ids.as_mut_ptr() as *mut c_void,
            )
        };
        OsStatus(status).check()?;
        // The host may shrink the list if a device went away after the sizing call.
        ids.truncate((size / OBJECT_ID_SIZE) as usize);
        Ok(ids)
    }

    fn read_string(&self, object: AudioObjectId, property: Property) -> Result<String, OsStatus> {
        let address = hal_address(property);
        let mut string: CFStringRef = ptr::null();
        let mut size = mem::size_of::<CFStringRef>() as u32;
        let status = unsafe {
            AudioObjectGetPropertyData(
                object,
                &address,
                0,
                ptr::null(),
                &mut size,
                &mut string as *mut CFStringRef as *mut c_void,
            )
        };
        OsStatus(status).check()?;
        if string.is_null() {
            return Err(OsStatus::UNKNOWN_PROPERTY);
        }
        let converted = unsafe { cfstring_to_string(string) };
        unsafe { CFRelease(string as CFTypeRef) };
        converted
    }

    fn write_id(
        &self,
        object: AudioObjectId,
        property: Property,
        value: AudioObjectId,
    ) -> Result<(), OsStatus> {
        let address = hal_address(property);
        let status = unsafe {
            AudioObjectSetPropertyData(
                object,
                &address,
                0,
                ptr::null(),
                OBJECT_ID_SIZE,
                &value as *const AudioObjectId as *const c_void,
            )
        };
        OsStatus(status).check()
    }
}

/// Copy the contents of a CFString into an owned UTF-8 string.
///
/// # Safety
/// `string` must be a valid, non-null CFStringRef.
unsafe fn cfstring_to_string(string: CFStringRef) -> Result<String, OsStatus> {
    let length: CFIndex = CFStringGetLength(string);
    let capacity = CFStringGetMaximumSizeForEncoding(length, kCFStringEncodingUTF8) + 1;
    let mut buffer: Vec<u8> = vec![0; capacity as usize];
    let copied = CFStringGetCString(
        string,
        buffer.as_mut_ptr() as *mut c_char,
        capacity,
        kCFStringEncodingUTF8,
    );
    if copied == 0 {
        return Err(OsStatus::ILLEGAL_OPERATION);
    }
    let end = buffer.iter().position(|b| *b == 0).unwrap_or(buffer.len());
    buffer.truncate(end);
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
