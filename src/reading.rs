use crate::convert::{self, Temperatures};
use crate::fault::{self, FaultKind, FaultStatus};
use crate::frame::{self, DecodedFields, RawFrame};

/// Result of one sampling cycle. Built fresh from a single frame and never
/// updated afterwards.
///
/// Temperatures are only handed out when the frame carries no fault; use
/// [`unchecked_temperatures`](Self::unchecked_temperatures) to get at the
/// values computed from a faulted frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThermocoupleReading {
    raw_frame: RawFrame,
    fields: DecodedFields,
    fault: FaultStatus,
    temperatures: Temperatures,
}

impl ThermocoupleReading {
    pub fn from_frame(raw_frame: RawFrame) -> Self {
        let fields = frame::decode(raw_frame);
        Self {
            raw_frame,
            fields,
            fault: fault::classify(&fields),
            temperatures: convert::convert(&fields),
        }
    }

    pub fn raw_frame(&self) -> RawFrame {
        self.raw_frame
    }

    pub fn fields(&self) -> &DecodedFields {
        &self.fields
    }

    pub fn fault(&self) -> FaultStatus {
        self.fault
    }

    pub fn fault_kind(&self) -> FaultKind {
        self.fault.kind
    }

    /// `true` when the temperatures of this reading can be trusted.
    pub fn is_valid(&self) -> bool {
        !self.fault.is_fault()
    }

    /// All four temperatures, or `None` if the frame is faulted.
    pub fn temperatures(&self) -> Option<Temperatures> {
        self.is_valid().then_some(self.temperatures)
    }

    /// Temperatures as computed from the frame, regardless of faults.
    pub fn unchecked_temperatures(&self) -> Temperatures {
        self.temperatures
    }

    pub fn hot_junction_c(&self) -> Option<f32> {
        self.temperatures().map(|t| t.hot_c)
    }

    pub fn hot_junction_f(&self) -> Option<f32> {
        self.temperatures().map(|t| t.hot_f)
    }

    pub fn cold_junction_c(&self) -> Option<f32> {
        self.temperatures().map(|t| t.cold_c)
    }

    pub fn cold_junction_f(&self) -> Option<f32> {
        self.temperatures().map(|t| t.cold_f)
    }
}

impl From<RawFrame> for ThermocoupleReading {
    fn from(raw_frame: RawFrame) -> Self {
        Self::from_frame(raw_frame)
    }
}
