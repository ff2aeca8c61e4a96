use crate::frame::DecodedFields;

/// The single fault category assigned to a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultKind {
    #[default]
    None,
    /// Thermocouple not connected (bit 0).
    OpenCircuit,
    /// Thermocouple shorted to GND (bit 1).
    ShortToGround,
    /// Thermocouple shorted to VCC (bit 2).
    ShortToVcc,
    /// Bit 17 or bit 3 read as one. Points at a corrupted transfer, a bus timing
    /// problem or a device that is not a MAX31855, rather than at the wiring.
    ReservedBitViolation,
    /// Bit 16 set without any of the specific fault bits.
    UnclassifiedFault,
}

impl FaultKind {
    pub const fn is_fault(self) -> bool {
        !matches!(self, FaultKind::None)
    }

    /// Wiring faults persist until the thermocouple is physically fixed.
    pub const fn is_wiring_fault(self) -> bool {
        matches!(
            self,
            FaultKind::OpenCircuit | FaultKind::ShortToGround | FaultKind::ShortToVcc
        )
    }
}

/// Fault classification of one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaultStatus {
    pub kind: FaultKind,
    /// Bit 16 exactly as read, independent of `kind`.
    pub general_fault: bool,
}

impl FaultStatus {
    pub const NONE: FaultStatus = FaultStatus {
        kind: FaultKind::None,
        general_fault: false,
    };

    pub const fn is_fault(&self) -> bool {
        self.kind.is_fault()
    }
}

/// Assigns a fault category. The first matching rule wins:
/// open circuit, short to GND, short to VCC, reserved bits, bare bit 16.
pub const fn classify(fields: &DecodedFields) -> FaultStatus {
    let kind = if fields.open_circuit {
        FaultKind::OpenCircuit
    } else if fields.short_to_ground {
        FaultKind::ShortToGround
    } else if fields.short_to_vcc {
        FaultKind::ShortToVcc
    } else if fields.reserved_bits_set() {
        FaultKind::ReservedBitViolation
    } else if fields.general_fault {
        FaultKind::UnclassifiedFault
    } else {
        FaultKind::None
    };

    FaultStatus {
        kind,
        general_fault: fields.general_fault,
    }
}
