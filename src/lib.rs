//! Decoder and [`embedded-hal`] driver for the MAX31855 cold-junction
//! compensated thermocouple-to-digital converter.
//!
//! The converter answers every read with one 32-bit frame holding the
//! thermocouple (hot junction) temperature, the internal reference (cold
//! junction) temperature and a set of fault bits. Decoding that frame is a
//! pure function:
//!
//! ```
//! use max31855::{FaultKind, RawFrame, ThermocoupleReading};
//!
//! let reading = ThermocoupleReading::from_frame(RawFrame(0x0190_1900));
//! assert_eq!(reading.fault_kind(), FaultKind::None);
//! assert_eq!(reading.hot_junction_c(), Some(25.0));
//!
//! // open thermocouple: the fault is reported, temperatures are withheld
//! let reading = ThermocoupleReading::from_frame(RawFrame(0x0190_1901));
//! assert_eq!(reading.fault_kind(), FaultKind::OpenCircuit);
//! assert_eq!(reading.hot_junction_c(), None);
//! ```
//!
//! Acquiring the frame is left to a [`FrameSource`]. [`Max31855`] implements it
//! for a blocking SPI bus plus chip-select pin, [`Max31855FullDuplex`] for
//! word-at-a-time peripherals. Configure the bus with [`MODE`] and at most
//! [`MAX_SPI_FREQUENCY_HZ`].
//!
//! [`embedded-hal`]: https://github.com/rust-embedded/embedded-hal

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod convert;
pub mod display;
pub mod fault;
pub mod frame;
mod max31855;
mod reading;

pub use convert::Temperatures;
pub use display::{render, Unit};
pub use fault::{classify, FaultKind, FaultStatus};
pub use frame::{decode, sign_extend, DecodedFields, RawFrame};
pub use max31855::*;
pub use reading::ThermocoupleReading;
