//! Wire-format field conversions for the mesh Time model.
//!
//! Offset-change announcements arrive over the mesh in biased fixed-point fields rather than
//! milliseconds: the timezone offset travels as a count of 15-minute units biased by `0x40`, the
//! TAI-UTC delta as a 15-bit count of seconds biased by `0xFF`, subseconds in 1/256-second
//! units, and clock uncertainty in 10-millisecond units. This module converts those fields
//! to and from the millisecond values the rest of the crate works in. Message framing and
//! opcodes stay with the transport layer.
//!
//! Encoders return `None` when a value is not representable in its field (out of range, or not
//! a multiple of the field's granularity); decoders are total.
//!
//! # Examples
//!
//! ```
//! # use taitime::time::MS_PER_HOUR;
//! # use taitime::wire;
//! // A UTC+2 zone offset occupies eight 15-minute units above the zero point
//! assert_eq!(wire::zone_offset_to_wire(2 * MS_PER_HOUR), Some(0x48));
//! assert_eq!(wire::zone_offset_from_wire(0x48), 2 * MS_PER_HOUR);
//!
//! // A TAI-UTC delta of -5 seconds
//! assert_eq!(wire::utc_delta_to_wire(-5_000), Some(0xFA));
//! assert_eq!(wire::utc_delta_from_wire(0xFA), -5_000);
//! ```

use crate::time::{MS_PER_MIN, MS_PER_SEC};

/// Wire value representing a zone offset of zero; zone offsets are biased by this.
pub const ZONE_OFFSET_ZERO: u8 = 0x40;
/// Granularity of the wire zone offset field: 15 minutes.
pub const ZONE_OFFSET_STEP: i64 = 15 * MS_PER_MIN;
/// Wire value representing a TAI-UTC delta of zero; deltas are biased by this.
pub const UTC_DELTA_ZERO: u16 = 0xFF;
/// Largest raw value of the 15-bit TAI-UTC delta field.
pub const UTC_DELTA_MAX: u16 = 0x7FFF;
/// Granularity of the wire uncertainty field: 10 milliseconds.
pub const UNCERTAINTY_STEP: i64 = 10;

/// Encode a zone offset in milliseconds as a biased count of 15-minute units.
///
/// Returns `None` if `offset` is not a whole number of 15-minute units or falls outside the
/// encodable range of -16:00 to +47:45.
///
/// # Examples
///
/// ```
/// # use taitime::time::MS_PER_HOUR;
/// # use taitime::wire::zone_offset_to_wire;
/// assert_eq!(zone_offset_to_wire(0), Some(0x40));
/// assert_eq!(zone_offset_to_wire(-MS_PER_HOUR), Some(0x3C));
/// assert_eq!(zone_offset_to_wire(1), None);
/// assert_eq!(zone_offset_to_wire(-17 * MS_PER_HOUR), None);
/// ```
pub const fn zone_offset_to_wire(offset: i64) -> Option<u8> {
	if offset % ZONE_OFFSET_STEP != 0 {
		return None;
	}
	let raw = offset / ZONE_OFFSET_STEP + ZONE_OFFSET_ZERO as i64;
	if raw < 0 || raw > u8::MAX as i64 {
		return None;
	}
	Some(raw as u8)
}

/// Decode a biased 15-minute-unit zone offset field to milliseconds.
///
/// # Examples
///
/// ```
/// # use taitime::time::MS_PER_MIN;
/// # use taitime::wire::zone_offset_from_wire;
/// assert_eq!(zone_offset_from_wire(0x40), 0);
/// assert_eq!(zone_offset_from_wire(0x41), 15 * MS_PER_MIN);
/// assert_eq!(zone_offset_from_wire(0x00), -64 * 15 * MS_PER_MIN);
/// ```
pub const fn zone_offset_from_wire(raw: u8) -> i64 {
	(raw as i64 - ZONE_OFFSET_ZERO as i64) * ZONE_OFFSET_STEP
}

/// Encode a TAI-UTC delta in milliseconds as a biased 15-bit count of seconds.
///
/// Returns `None` if `delta` is not a whole number of seconds or falls outside the encodable
/// range of -255 to +32512 seconds.
///
/// # Examples
///
/// ```
/// # use taitime::wire::utc_delta_to_wire;
/// assert_eq!(utc_delta_to_wire(0), Some(0xFF));
/// assert_eq!(utc_delta_to_wire(-5_000), Some(0xFA));
/// assert_eq!(utc_delta_to_wire(500), None);
/// assert_eq!(utc_delta_to_wire(-256_000), None);
/// ```
pub const fn utc_delta_to_wire(delta: i64) -> Option<u16> {
	if delta % MS_PER_SEC != 0 {
		return None;
	}
	let raw = delta / MS_PER_SEC + UTC_DELTA_ZERO as i64;
	if raw < 0 || raw > UTC_DELTA_MAX as i64 {
		return None;
	}
	Some(raw as u16)
}

/// Decode a biased 15-bit TAI-UTC delta field to milliseconds.
///
/// Bits above the field width are ignored.
///
/// # Examples
///
/// ```
/// # use taitime::wire::utc_delta_from_wire;
/// assert_eq!(utc_delta_from_wire(0xFF), 0);
/// assert_eq!(utc_delta_from_wire(0x100), 1_000);
/// assert_eq!(utc_delta_from_wire(0x0000), -255_000);
/// ```
pub const fn utc_delta_from_wire(raw: u16) -> i64 {
	((raw & UTC_DELTA_MAX) as i64 - UTC_DELTA_ZERO as i64) * MS_PER_SEC
}

/// Encode milliseconds within a second as a 1/256-second subsecond field.
///
/// Returns `None` unless `ms` is in [0, 999]. The conversion floors, matching the model's
/// integer arithmetic.
///
/// # Examples
///
/// ```
/// # use taitime::wire::subsecond_to_wire;
/// assert_eq!(subsecond_to_wire(0), Some(0));
/// assert_eq!(subsecond_to_wire(500), Some(128));
/// assert_eq!(subsecond_to_wire(999), Some(255));
/// assert_eq!(subsecond_to_wire(1000), None);
/// ```
pub const fn subsecond_to_wire(ms: i64) -> Option<u8> {
	if ms < 0 || ms >= MS_PER_SEC {
		return None;
	}
	Some((ms * 256 / MS_PER_SEC) as u8)
}

/// Decode a 1/256-second subsecond field to milliseconds, flooring.
///
/// # Examples
///
/// ```
/// # use taitime::wire::subsecond_from_wire;
/// assert_eq!(subsecond_from_wire(0), 0);
/// assert_eq!(subsecond_from_wire(128), 500);
/// assert_eq!(subsecond_from_wire(255), 996);
/// ```
pub const fn subsecond_from_wire(raw: u8) -> i64 {
	raw as i64 * MS_PER_SEC / 256
}

/// Encode a clock uncertainty in milliseconds as a count of 10-millisecond units.
///
/// Returns `None` if `ms` is negative, not a multiple of 10, or above the encodable maximum of
/// 2550 ms.
///
/// # Examples
///
/// ```
/// # use taitime::wire::uncertainty_to_wire;
/// assert_eq!(uncertainty_to_wire(40), Some(4));
/// assert_eq!(uncertainty_to_wire(2550), Some(255));
/// assert_eq!(uncertainty_to_wire(45), None);
/// assert_eq!(uncertainty_to_wire(2560), None);
/// ```
pub const fn uncertainty_to_wire(ms: i64) -> Option<u8> {
	if ms < 0 || ms % UNCERTAINTY_STEP != 0 {
		return None;
	}
	let raw = ms / UNCERTAINTY_STEP;
	if raw > u8::MAX as i64 {
		return None;
	}
	Some(raw as u8)
}

/// Decode a 10-millisecond-unit uncertainty field to milliseconds.
pub const fn uncertainty_from_wire(raw: u8) -> i64 {
	raw as i64 * UNCERTAINTY_STEP
}
