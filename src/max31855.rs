use embedded_hal as hal;
use hal::digital::v2::OutputPin;
use hal::spi::{Mode, MODE_0};

use crate::fault::FaultStatus;
use crate::frame::RawFrame;
use crate::reading::ThermocoupleReading;

/// SPI mode the MAX31855 shifts data out in (CPOL = 0, CPHA = 0).
pub const MODE: Mode = MODE_0;
/// Maximum SCK frequency from the datasheet.
pub const MAX_SPI_FREQUENCY_HZ: u32 = 5_000_000;
/// Typical conversion period. Reading faster returns the previous result.
pub const CONVERSION_TIME_MS: u32 = 100;

const FRAME_BYTES: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<SpiE, CsE> {
    Spi(SpiE),
    ChipSelect(CsE),
}

/// Error of [`FrameSource::read_raw`]: either the bus failed or the frame
/// it returned is faulted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadError<E> {
    Bus(E),
    Fault(FaultStatus),
}

impl<E> From<E> for ReadError<E> {
    fn from(err: E) -> Self {
        ReadError::Bus(err)
    }
}

/// Anything that can hand over one 32-bit frame per call.
///
/// Every read goes to the bus again. Nothing is cached between calls, so the
/// caller is responsible for not sampling faster than [`CONVERSION_TIME_MS`].
pub trait FrameSource {
    type Error;

    /// Runs one 4-byte exchange and packs the result, first byte in bits 31:24.
    fn acquire_frame(&mut self) -> Result<RawFrame, Self::Error>;

    /// Acquires and decodes one frame.
    fn read(&mut self) -> Result<ThermocoupleReading, Self::Error> {
        let reading = ThermocoupleReading::from_frame(self.acquire_frame()?);
        if reading.fault().is_fault() {
            warn!(
                "thermocouple fault {:?} in frame {:#x}",
                reading.fault(),
                reading.raw_frame().bits()
            );
        }
        Ok(reading)
    }

    /// Acquires one frame and returns it only if it carries no fault.
    fn read_raw(&mut self) -> Result<RawFrame, ReadError<Self::Error>> {
        let reading = self.read()?;
        if reading.is_valid() {
            Ok(reading.raw_frame())
        } else {
            Err(ReadError::Fault(reading.fault()))
        }
    }

    fn read_temp_c(&mut self) -> Result<Option<f32>, Self::Error> {
        Ok(self.read()?.hot_junction_c())
    }

    fn read_temp_f(&mut self) -> Result<Option<f32>, Self::Error> {
        Ok(self.read()?.hot_junction_f())
    }

    fn read_internal_c(&mut self) -> Result<Option<f32>, Self::Error> {
        Ok(self.read()?.cold_junction_c())
    }

    fn read_internal_f(&mut self) -> Result<Option<f32>, Self::Error> {
        Ok(self.read()?.cold_junction_f())
    }
}

/// MAX31855 on a blocking SPI bus with a dedicated chip-select pin.
pub struct Max31855<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> Max31855<SPI, CS>
    where SPI: hal::blocking::spi::Transfer<u8>,
          CS: OutputPin {

    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> FrameSource for Max31855<SPI, CS>
    where SPI: hal::blocking::spi::Transfer<u8>,
          CS: OutputPin {

    type Error = Error<SPI::Error, CS::Error>;

    fn acquire_frame(&mut self) -> Result<RawFrame, Self::Error> {
        let mut buf = [0u8; FRAME_BYTES];
        self.cs.set_low().map_err(Error::ChipSelect)?;
        let transfer = self.spi.transfer(&mut buf).map(|_| ()).map_err(Error::Spi);
        // deselect even when the transfer failed
        let deselect = self.cs.set_high().map_err(Error::ChipSelect);
        transfer?;
        deselect?;

        let frame = RawFrame::from_be_bytes(buf);
        trace!("max31855 frame {:#x}", frame.bits());
        Ok(frame)
    }
}

/// MAX31855 on a non-blocking, word-at-a-time SPI peripheral.
pub struct Max31855FullDuplex<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> Max31855FullDuplex<SPI, CS>
    where SPI: hal::spi::FullDuplex<u8>,
          CS: OutputPin {

    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }

    fn exchange(&mut self, buf: &mut [u8; FRAME_BYTES]) -> Result<(), SPI::Error> {
        for byte in buf.iter_mut() {
            nb::block!(self.spi.send(0x00))?;
            *byte = nb::block!(self.spi.read())?;
        }
        Ok(())
    }
}

impl<SPI, CS> FrameSource for Max31855FullDuplex<SPI, CS>
    where SPI: hal::spi::FullDuplex<u8>,
          CS: OutputPin {

    type Error = Error<SPI::Error, CS::Error>;

    fn acquire_frame(&mut self) -> Result<RawFrame, Self::Error> {
        let mut buf = [0u8; FRAME_BYTES];
        self.cs.set_low().map_err(Error::ChipSelect)?;
        let exchange = self.exchange(&mut buf).map_err(Error::Spi);
        let deselect = self.cs.set_high().map_err(Error::ChipSelect);
        exchange?;
        deselect?;

        let frame = RawFrame::from_be_bytes(buf);
        trace!("max31855 frame {:#x}", frame.bits());
        Ok(frame)
    }
}
