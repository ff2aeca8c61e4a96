use crate::frame::DecodedFields;

/// °C per hot-junction count (2 fractional bits).
pub const HOT_JUNCTION_RESOLUTION: f32 = 0.25;
/// °C per cold-junction count (4 fractional bits).
pub const COLD_JUNCTION_RESOLUTION: f32 = 0.0625;

/// Both junction temperatures of one frame, computed whether or not the frame
/// is faulted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Temperatures {
    pub hot_c: f32,
    pub hot_f: f32,
    pub cold_c: f32,
    pub cold_f: f32,
}

pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn hot_junction_celsius(fields: &DecodedFields) -> f32 {
    fields.hot_junction_counts() as f32 * HOT_JUNCTION_RESOLUTION
}

pub fn cold_junction_celsius(fields: &DecodedFields) -> f32 {
    fields.cold_junction_counts() as f32 * COLD_JUNCTION_RESOLUTION
}

pub fn convert(fields: &DecodedFields) -> Temperatures {
    let hot_c = hot_junction_celsius(fields);
    let cold_c = cold_junction_celsius(fields);
    Temperatures {
        hot_c,
        hot_f: celsius_to_fahrenheit(hot_c),
        cold_c,
        cold_f: celsius_to_fahrenheit(cold_c),
    }
}

// Integer-only forms for consumers without an FPU. Both are exact.

/// Hot-junction counts to hundredths of a degree Fahrenheit.
pub const fn hot_counts_to_centi_f(counts: i32) -> i32 {
    counts * 45 + 3200
}

/// Cold-junction counts to ten-thousandths of a degree Fahrenheit.
pub const fn cold_counts_to_deci_milli_f(counts: i32) -> i32 {
    counts * 1125 + 320_000
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{decode, RawFrame, COLD_JUNCTION_BITS, HOT_JUNCTION_BITS};

    fn hot_field(raw: u32) -> DecodedFields {
        DecodedFields {
            hot_junction_raw: raw as u16,
            ..Default::default()
        }
    }

    fn cold_field(raw: u32) -> DecodedFields {
        DecodedFields {
            cold_junction_raw: raw as u16,
            ..Default::default()
        }
    }

    fn assert_close(actual: f32, expected: f32) {
        let tolerance = 1e-4 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "{} != {}",
            actual,
            expected
        );
    }

    #[test]
    fn hot_junction_covers_signed_range() {
        for u in 0..(1u32 << HOT_JUNCTION_BITS) {
            let c = hot_junction_celsius(&hot_field(u));
            if u < 8192 {
                assert_eq!(c, u as f32 * 0.25);
                assert!((0.0..=2047.75).contains(&c));
            } else {
                assert_eq!(c, (u as f32 - 16384.0) * 0.25);
                assert!((-2048.0..=-0.25).contains(&c));
            }
        }
        assert_eq!(hot_junction_celsius(&hot_field(8191)), 2047.75);
        assert_eq!(hot_junction_celsius(&hot_field(8192)), -2048.0);
        assert_eq!(hot_junction_celsius(&hot_field(16383)), -0.25);
    }

    #[test]
    fn cold_junction_covers_signed_range() {
        for u in 0..(1u32 << COLD_JUNCTION_BITS) {
            let c = cold_junction_celsius(&cold_field(u));
            if u < 2048 {
                assert_eq!(c, u as f32 * 0.0625);
                assert!((0.0..=127.9375).contains(&c));
            } else {
                assert_eq!(c, (u as f32 - 4096.0) * 0.0625);
                assert!((-128.0..=-0.0625).contains(&c));
            }
        }
        assert_eq!(cold_junction_celsius(&cold_field(2047)), 127.9375);
        assert_eq!(cold_junction_celsius(&cold_field(2048)), -128.0);
        assert_eq!(cold_junction_celsius(&cold_field(4095)), -0.0625);
    }

    #[test]
    fn quarter_degree_fractions() {
        assert_eq!(hot_junction_celsius(&hot_field(0b100)), 1.0);
        assert_eq!(hot_junction_celsius(&hot_field(0b101)), 1.25);
        assert_eq!(hot_junction_celsius(&hot_field(0b110)), 1.5);
        assert_eq!(hot_junction_celsius(&hot_field(0b111)), 1.75);
    }

    #[test]
    fn fahrenheit_follows_formula() {
        assert_close(celsius_to_fahrenheit(0.0), 32.0);
        assert_close(celsius_to_fahrenheit(100.0), 212.0);
        assert_close(celsius_to_fahrenheit(-40.0), -40.0);
        assert_close(celsius_to_fahrenheit(2047.75), 3717.95);
        for c in [-2048.0f32, -128.0, -0.0625, 0.25, 25.0, 127.9375, 1000.5] {
            assert_close(celsius_to_fahrenheit(c), c * 1.8 + 32.0);
        }
    }

    #[test]
    fn convert_runs_on_faulted_frames() {
        // open circuit, but the numeric fields are still decoded
        let temps = convert(&decode(RawFrame(0x0190_1901)));
        assert_eq!(temps.hot_c, 25.0);
        assert_eq!(temps.cold_c, 25.0);
        assert_close(temps.hot_f, 77.0);
        assert_close(temps.cold_f, 77.0);
    }

    #[test]
    fn integer_fahrenheit_matches_float() {
        for counts in [-8192, -100, -1, 0, 1, 100, 8191] {
            let c = counts as f32 * HOT_JUNCTION_RESOLUTION;
            assert_close(
                hot_counts_to_centi_f(counts) as f32 / 100.0,
                celsius_to_fahrenheit(c),
            );
        }
        for counts in [-2048, -1, 0, 1, 400, 2047] {
            let c = counts as f32 * COLD_JUNCTION_RESOLUTION;
            assert_close(
                cold_counts_to_deci_milli_f(counts) as f32 / 10_000.0,
                celsius_to_fahrenheit(c),
            );
        }
    }
}
