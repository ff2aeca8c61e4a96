//! Text rendering for character displays and serial consoles.
//!
//! Temperatures are printed from the fixed-point counts in the frame, so no
//! float formatting is pulled in and the printed digits are exact.

use heapless::String;
use ufmt::{uDisplay, uWrite, uwrite, Formatter};

use crate::convert::{cold_counts_to_deci_milli_f, hot_counts_to_centi_f};
use crate::fault::{FaultKind, FaultStatus};
use crate::frame::DecodedFields;
use crate::reading::ThermocoupleReading;

/// Room for the longest line [`render`] produces.
pub const LINE_CAPACITY: usize = 32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Unit {
    #[default]
    Celsius,
    Fahrenheit,
}

/// A temperature stored as `value / 10^decimals` degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Temperature {
    value: i32,
    decimals: u8,
    unit: Unit,
}

impl Temperature {
    /// Hot junction, 2 decimals.
    pub const fn hot_junction(fields: &DecodedFields, unit: Unit) -> Self {
        let counts = fields.hot_junction_counts();
        let value = match unit {
            Unit::Celsius => counts * 25,
            Unit::Fahrenheit => hot_counts_to_centi_f(counts),
        };
        Self { value, decimals: 2, unit }
    }

    /// Cold junction, 4 decimals.
    pub const fn cold_junction(fields: &DecodedFields, unit: Unit) -> Self {
        let counts = fields.cold_junction_counts();
        let value = match unit {
            Unit::Celsius => counts * 625,
            Unit::Fahrenheit => cold_counts_to_deci_milli_f(counts),
        };
        Self { value, decimals: 4, unit }
    }

    pub const fn unit(&self) -> Unit {
        self.unit
    }
}

impl uDisplay for Temperature {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
        where W: uWrite + ?Sized {
        let scale = 10u32.pow(self.decimals as u32);
        let magnitude = self.value.unsigned_abs();
        if self.value < 0 {
            f.write_char('-')?;
        }
        uwrite!(f, "{}.", magnitude / scale)?;

        let frac = magnitude % scale;
        let mut place = scale / 10;
        while place > 1 && frac < place {
            f.write_char('0')?;
            place /= 10;
        }
        uwrite!(f, "{}", frac)?;

        match self.unit {
            Unit::Celsius => f.write_char('C'),
            Unit::Fahrenheit => f.write_char('F'),
        }
    }
}

impl uDisplay for FaultKind {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
        where W: uWrite + ?Sized {
        f.write_str(match self {
            FaultKind::None => "OK",
            FaultKind::OpenCircuit => "OPEN",
            FaultKind::ShortToGround => "SHORT GND",
            FaultKind::ShortToVcc => "SHORT VCC",
            FaultKind::ReservedBitViolation => "BAD FRAME",
            FaultKind::UnclassifiedFault => "FAULT",
        })
    }
}

impl uDisplay for FaultStatus {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
        where W: uWrite + ?Sized {
        uwrite!(f, "{}", self.kind)?;
        if self.general_fault && self.kind != FaultKind::UnclassifiedFault {
            f.write_str(" (F)")?;
        }
        Ok(())
    }
}

/// A reading shown in a chosen unit.
#[derive(Clone, Copy, Debug)]
pub struct ReadingLine<'a> {
    reading: &'a ThermocoupleReading,
    unit: Unit,
}

impl<'a> ReadingLine<'a> {
    pub fn new(reading: &'a ThermocoupleReading, unit: Unit) -> Self {
        Self { reading, unit }
    }
}

impl uDisplay for ReadingLine<'_> {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
        where W: uWrite + ?Sized {
        if !self.reading.is_valid() {
            return uwrite!(f, "ERR:{}", self.reading.fault());
        }
        let fields = self.reading.fields();
        uwrite!(
            f,
            "TC:{} CJ:{}",
            Temperature::hot_junction(fields, self.unit),
            Temperature::cold_junction(fields, self.unit)
        )
    }
}

impl uDisplay for ThermocoupleReading {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
        where W: uWrite + ?Sized {
        uwrite!(f, "{}", ReadingLine::new(self, Unit::Celsius))
    }
}

/// Renders a reading into a fixed-capacity string. `None` if it does not fit.
pub fn render<const N: usize>(reading: &ThermocoupleReading, unit: Unit) -> Option<String<N>> {
    let mut sbuf = String::<N>::new();
    uwrite!(sbuf, "{}", ReadingLine::new(reading, unit)).ok()?;
    Some(sbuf)
}
