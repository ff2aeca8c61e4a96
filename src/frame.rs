//! Bit-level layout of the 32-bit MAX31855 response.
//!
//! ```text
//!  31            18  17  16  15        4   3   2    1    0
//! +----------------+---+---+-----------+---+---+----+----+
//! |  hot junction  | R | F |   cold    | R |SCV|SCG | OC |
//! |  14-bit signed |   |   |  12-bit   |   |   |    |    |
//! +----------------+---+---+-----------+---+---+----+----+
//! ```

const HOT_JUNCTION_SHIFT: u32 = 18;
pub(crate) const HOT_JUNCTION_BITS: u32 = 14;
const RESERVED_17_BIT: u32 = 17;
const FAULT_BIT: u32 = 16;
const COLD_JUNCTION_SHIFT: u32 = 4;
pub(crate) const COLD_JUNCTION_BITS: u32 = 12;
const RESERVED_3_BIT: u32 = 3;
const SHORT_TO_VCC_BIT: u32 = 2;
const SHORT_TO_GROUND_BIT: u32 = 1;
const OPEN_CIRCUIT_BIT: u32 = 0;

/// One 32-bit word exactly as shifted out of the converter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawFrame(pub u32);

impl RawFrame {
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Packs the four bytes in transfer order, first byte in bits 31:24.
    pub const fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    pub const fn decode(self) -> DecodedFields {
        decode(self)
    }

    const fn bit(self, n: u32) -> bool {
        (self.0 >> n) & 1 != 0
    }

    const fn field(self, shift: u32, width: u32) -> u16 {
        ((self.0 >> shift) & ((1 << width) - 1)) as u16
    }
}

impl From<u32> for RawFrame {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<RawFrame> for u32 {
    fn from(frame: RawFrame) -> Self {
        frame.0
    }
}

/// The sub-fields of a [`RawFrame`], before any interpretation.
///
/// The two temperature fields are kept unsigned; sign extension happens in
/// [`convert`](crate::convert) or through [`hot_junction_counts`](Self::hot_junction_counts).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecodedFields {
    /// Bits 31:18, unsigned.
    pub hot_junction_raw: u16,
    /// Bit 17, must read zero.
    pub reserved_bit17: bool,
    /// Bit 16, set whenever any of bits 2:0 is set.
    pub general_fault: bool,
    /// Bits 15:4, unsigned.
    pub cold_junction_raw: u16,
    /// Bit 3, must read zero.
    pub reserved_bit3: bool,
    pub short_to_vcc: bool,
    pub short_to_ground: bool,
    pub open_circuit: bool,
}

impl DecodedFields {
    /// Hot-junction temperature in 0.25 °C steps.
    pub const fn hot_junction_counts(&self) -> i32 {
        sign_extend(self.hot_junction_raw as u32, HOT_JUNCTION_BITS)
    }

    /// Cold-junction temperature in 0.0625 °C steps.
    pub const fn cold_junction_counts(&self) -> i32 {
        sign_extend(self.cold_junction_raw as u32, COLD_JUNCTION_BITS)
    }

    pub const fn reserved_bits_set(&self) -> bool {
        self.reserved_bit17 || self.reserved_bit3
    }
}

/// Splits a frame into its fields. Total: every word decodes, reserved bits
/// that should be zero are reported as data.
pub const fn decode(frame: RawFrame) -> DecodedFields {
    DecodedFields {
        hot_junction_raw: frame.field(HOT_JUNCTION_SHIFT, HOT_JUNCTION_BITS),
        reserved_bit17: frame.bit(RESERVED_17_BIT),
        general_fault: frame.bit(FAULT_BIT),
        cold_junction_raw: frame.field(COLD_JUNCTION_SHIFT, COLD_JUNCTION_BITS),
        reserved_bit3: frame.bit(RESERVED_3_BIT),
        short_to_vcc: frame.bit(SHORT_TO_VCC_BIT),
        short_to_ground: frame.bit(SHORT_TO_GROUND_BIT),
        open_circuit: frame.bit(OPEN_CIRCUIT_BIT),
    }
}

/// Interprets the low `bits` bits of `value` as a two's-complement integer.
///
/// Anything above bit `bits - 1` is ignored. `bits` must be in `1..=32`.
pub const fn sign_extend(value: u32, bits: u32) -> i32 {
    debug_assert!(bits >= 1 && bits <= 32);
    let unused = 32 - bits;
    ((value << unused) as i32) >> unused
}
