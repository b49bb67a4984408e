//! # Audio output switching for Rust
//!
//! The aim of this crate is to list the audio output devices of the host and
//! make one of them the system-wide default output.
//!
//! The presented API is all safe Rust. It talks to the host through the
//! `AudioHost` trait, a small property-query/set protocol modelled on the
//! CoreAudio hardware abstraction layer. On macOS `CoreAudioHost` implements
//! it using the [coreaudio-rs](https://crates.io/crates/coreaudio-rs) bindings.
//!
//! ## Supported functionality
//!
//! - Point-in-time snapshots of the output-capable devices, with names
//! - Switching the default output device by id
//! - Switching by device name, for callers that only kept the label
//! - Reading back the current default output device
//!
//! Catalog queries never fail: host errors are logged and give an empty
//! snapshot or a placeholder name. Switching reports every host rejection.
//!
//! ## Included demos
//!
//! | Demo      | Description                                                      |
//! | --------- | ---------------------------------------------------------------- |
//! | `devices` | Lists the output devices and marks the current default.          |
//! | `switch`  | Makes a device, given by id or by name, the default output.      |

mod catalog;
mod errors;
#[cfg(target_os = "macos")]
mod hal;
mod host;
mod property;
mod selector;
#[cfg(test)]
mod testing;

pub use catalog::*;
pub use errors::*;
#[cfg(target_os = "macos")]
pub use hal::*;
pub use host::*;
pub use property::*;
pub use selector::*;

#[macro_use]
extern crate log;
