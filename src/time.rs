//! Conversions between TAI uptime and calendar time.
//!
//! The TAI uptime scale used throughout this crate counts milliseconds from
//! 2000-01-01T00:00:00 TAI, the epoch the mesh Time model synchronizes on. This module provides
//! the calendar arithmetic for that scale: leap years, month lengths, and conversions between
//! uptime values and broken-down calendar time ([`TaiTime`]). Because TAI has no leap seconds,
//! every conversion here is plain integer arithmetic and completely thread safe; UTC and
//! timezone adjustments live in [`sched`](crate::sched).
//!
//! # Examples
//!
//! ```
//! # use taitime::time::{TaiTime, Weekday};
//! let date = TaiTime::new(10_000_000_000).unwrap();
//! assert_eq!(date, TaiTime {
//! 	sec: 40,
//! 	min: 46,
//! 	hour: 17,
//! 	day: 25,
//! 	mon: 3,
//! 	year: 2000,
//! 	wday: Weekday::Tuesday,
//! 	yday: 115
//! });
//! ```

use core::{error, fmt};
#[cfg(feature = "now")]
use core::mem::MaybeUninit;
#[cfg(feature = "now")]
use libc::{timespec, clock_gettime, CLOCK_REALTIME};

/// Milliseconds per second.
pub const MS_PER_SEC: i64 = 1000;
/// Milliseconds per minute.
pub const MS_PER_MIN: i64 = 60 * MS_PER_SEC;
/// Milliseconds per hour.
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MIN;
/// Milliseconds per day.
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
/// Days in a non-leap year.
pub const DAYS_PER_YEAR: i64 = 365;
/// Days in a leap year.
pub const DAYS_PER_LEAP_YEAR: i64 = DAYS_PER_YEAR + 1;
/// First year on the TAI uptime scale; uptime zero is January 1 of this year.
pub const TAI_START_YEAR: u16 = 2000;
/// Unix timestamp (in seconds) of the TAI epoch, 2000-01-01T00:00:00.
///
/// Only used for interop with absolute-time sources ([`now`] and differential tests); the
/// engine itself never works in 1970-epoch time.
pub const UNIX_AT_TAI_EPOCH: i64 = 946684800;
/// Weekday index of the TAI epoch: 2000-01-01 was a Saturday.
const TAI_START_WDAY: i64 = 6;

/// Days per month in a non-leap year.
const MONTH_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
/// Days per month in a leap year.
const MONTH_DAYS_LEAP: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Check whether a given `year` is a leap year.
///
/// `year` must be the absolute Gregorian calendar year (i.e. 2024).
///
/// # Examples
///
/// ```
/// # use taitime::time::is_leap_year;
/// assert_eq!(is_leap_year(2000), true);
/// assert_eq!(is_leap_year(2004), true);
/// assert_eq!(is_leap_year(2023), false);
/// assert_eq!(is_leap_year(2100), false);
/// assert_eq!(is_leap_year(2400), true);
/// ```
#[inline(always)]
pub const fn is_leap_year(year: u16) -> bool {
	year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// The number of days in a given `year`: 365, or 366 for leap years.
///
/// # Examples
///
/// ```
/// # use taitime::time::days_in_year;
/// assert_eq!(days_in_year(2000), 366);
/// assert_eq!(days_in_year(2001), 365);
/// ```
#[inline(always)]
pub const fn days_in_year(year: u16) -> i64 {
	if is_leap_year(year) { DAYS_PER_LEAP_YEAR } else { DAYS_PER_YEAR }
}

/// The lengths of the twelve months of a given `year`, January first.
///
/// # Examples
///
/// ```
/// # use taitime::time::month_lengths;
/// assert_eq!(month_lengths(2000)[1], 29);
/// assert_eq!(month_lengths(2001)[1], 28);
/// assert_eq!(month_lengths(2001)[11], 31);
/// ```
#[inline(always)]
pub const fn month_lengths(year: u16) -> [u8; 12] {
	if is_leap_year(year) { MONTH_DAYS_LEAP } else { MONTH_DAYS }
}

/// Day of the week.
///
/// The discriminants follow `struct tm`: `0` = Sunday through `6` = Saturday.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weekday {
	Sunday,
	Monday,
	Tuesday,
	Wednesday,
	Thursday,
	Friday,
	Saturday
}

impl Weekday {
	/// Get the weekday for an index, `0` = Sunday through `6` = Saturday. Indexes wrap modulo 7.
	///
	/// # Examples
	///
	/// ```
	/// # use taitime::time::Weekday;
	/// assert_eq!(Weekday::from_index(0), Weekday::Sunday);
	/// assert_eq!(Weekday::from_index(6), Weekday::Saturday);
	/// assert_eq!(Weekday::from_index(7), Weekday::Sunday);
	/// ```
	pub const fn from_index(index: u8) -> Weekday {
		match index % 7 {
			0 => Weekday::Sunday,
			1 => Weekday::Monday,
			2 => Weekday::Tuesday,
			3 => Weekday::Wednesday,
			4 => Weekday::Thursday,
			5 => Weekday::Friday,
			_ => Weekday::Saturday
		}
	}

	/// The `struct tm`-style index of this weekday, `0` = Sunday through `6` = Saturday.
	#[inline(always)]
	pub const fn index(self) -> u8 {
		self as u8
	}

	/// The English name of this weekday.
	///
	/// Localized day names are a display concern; embedders with other locales should map
	/// [`Weekday::index`] through their own table.
	pub const fn name(self) -> &'static str {
		match self {
			Weekday::Sunday => "Sunday",
			Weekday::Monday => "Monday",
			Weekday::Tuesday => "Tuesday",
			Weekday::Wednesday => "Wednesday",
			Weekday::Thursday => "Thursday",
			Weekday::Friday => "Friday",
			Weekday::Saturday => "Saturday"
		}
	}
}

impl fmt::Display for Weekday {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Get the weekday for a given TAI uptime.
///
/// Works for any `uptime`, using floored division so negative values stay consistent with the
/// epoch anchor.
///
/// # Examples
///
/// ```
/// # use taitime::time::{weekday_from_uptime, Weekday, MS_PER_DAY};
/// assert_eq!(weekday_from_uptime(0), Weekday::Saturday);
/// assert_eq!(weekday_from_uptime(MS_PER_DAY), Weekday::Sunday);
/// assert_eq!(weekday_from_uptime(-1), Weekday::Friday);
/// ```
pub const fn weekday_from_uptime(uptime: i64) -> Weekday {
	Weekday::from_index(((TAI_START_WDAY + uptime.div_euclid(MS_PER_DAY)).rem_euclid(7)) as u8)
}

/// Get the TAI uptime for 00:00:00 on January 1 of a given year.
///
/// Whole-year durations are accumulated leap-aware from [`TAI_START_YEAR`] up to (excluding)
/// `year`. Years before 2000 contribute nothing.
fn ms_from_year(year: u16) -> i64 {
	let mut uptime = 0;
	let mut y = year;
	while y > TAI_START_YEAR {
		y -= 1;
		uptime += days_in_year(y) * MS_PER_DAY;
	}
	uptime
}

/// Convert calendar fields to TAI uptime.
///
/// `year` must be the absolute Gregorian calendar year (2000 or later) and `yday` the
/// zero-based day of that year. This conversion is permissive: out-of-range fields are not
/// rejected and simply produce a well-defined uptime outside the range the fields suggest
/// (e.g. `yday = 366` in a non-leap year lands on January 1 of the next year). Use
/// [`tai_from_calendar_checked`] when the fields come from an untrusted source.
///
/// # Examples
///
/// ```
/// # use taitime::time::tai_from_calendar;
/// assert_eq!(tai_from_calendar(2000, 0, 0, 0, 0), 0);
/// assert_eq!(tai_from_calendar(2000, 115, 17, 46, 40), 10_000_000_000);
/// assert_eq!(tai_from_calendar(2001, 0, 0, 0, 0), 31_622_400_000);
/// ```
pub fn tai_from_calendar(year: u16, yday: u16, hour: u8, min: u8, sec: u8) -> i64 {
	ms_from_year(year)
		+ yday as i64 * MS_PER_DAY
		+ hour as i64 * MS_PER_HOUR
		+ min as i64 * MS_PER_MIN
		+ sec as i64 * MS_PER_SEC
}

/// Error type for out-of-range calendar fields.
#[derive(Debug, PartialEq)]
pub enum FieldError {
	/// The year is before the TAI epoch year (2000).
	YearOutOfRange,
	/// The day of year is not in [0, 364] (or [0, 365] for leap years).
	DayOfYearOutOfRange,
	/// The hour is not in [0, 23].
	HoursOutOfRange,
	/// The minutes are not in [0, 59].
	MinutesOutOfRange,
	/// The seconds are not in [0, 59].
	SecondsOutOfRange
}

impl fmt::Display for FieldError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FieldError::YearOutOfRange => write!(f, "Year out of range"),
			FieldError::DayOfYearOutOfRange => write!(f, "Day of year out of range"),
			FieldError::HoursOutOfRange => write!(f, "Hours out of range"),
			FieldError::MinutesOutOfRange => write!(f, "Minutes out of range"),
			FieldError::SecondsOutOfRange => write!(f, "Seconds out of range"),
		}
	}
}

impl error::Error for FieldError {}

/// Convert calendar fields to TAI uptime, validating every field.
///
/// The validating counterpart to [`tai_from_calendar`]. Rejects years before 2000, days of year
/// at or beyond that year's length, and out-of-range time-of-day fields instead of silently
/// computing a misleading uptime.
///
/// # Errors
///
/// Returns [`FieldError`] naming the first out-of-range field.
///
/// # Examples
///
/// ```
/// # use taitime::time::{tai_from_calendar_checked, FieldError};
/// assert_eq!(tai_from_calendar_checked(2000, 115, 17, 46, 40), Ok(10_000_000_000));
/// assert_eq!(tai_from_calendar_checked(1999, 0, 0, 0, 0), Err(FieldError::YearOutOfRange));
/// assert_eq!(tai_from_calendar_checked(2001, 365, 0, 0, 0), Err(FieldError::DayOfYearOutOfRange));
/// assert_eq!(tai_from_calendar_checked(2000, 365, 0, 0, 0), Ok(31_536_000_000));
/// ```
pub fn tai_from_calendar_checked(
	year: u16,
	yday: u16,
	hour: u8,
	min: u8,
	sec: u8
) -> Result<i64, FieldError> {
	if year < TAI_START_YEAR {
		return Err(FieldError::YearOutOfRange);
	}
	if yday as i64 >= days_in_year(year) {
		return Err(FieldError::DayOfYearOutOfRange);
	}
	if hour > 23 {
		return Err(FieldError::HoursOutOfRange);
	}
	if min > 59 {
		return Err(FieldError::MinutesOutOfRange);
	}
	if sec > 59 {
		return Err(FieldError::SecondsOutOfRange);
	}
	Ok(tai_from_calendar(year, yday, hour, min, sec))
}

/// Broken-down TAI calendar time, the mesh-model analogue of `struct tm`.
///
/// Key differences to C's `struct tm`:
/// - `year` is the absolute Gregorian calendar year, not an offset from 1900.
/// - Only years from 2000 onward are representable.
///
/// `mon` and `yday` are zero-based like their `struct tm` counterparts; `day` is one-based.
///
/// # Examples
///
/// ```
/// # use taitime::time::{TaiTime, Weekday};
/// let date = TaiTime::new(10_000_000_000).unwrap();
/// assert_eq!(date, TaiTime {
/// 	sec: 40,
/// 	min: 46,
/// 	hour: 17,
/// 	day: 25,
/// 	mon: 3,
/// 	year: 2000,
/// 	wday: Weekday::Tuesday,
/// 	yday: 115
/// });
/// ```
#[derive(Clone, Copy)]
#[derive(Debug, PartialEq)]
pub struct TaiTime {
	/// Seconds, ranged [0, 59]
	pub sec: u8,
	/// Minutes, ranged [0, 59]
	pub min: u8,
	/// Hours, ranged [0, 23]
	pub hour: u8,
	/// Day of the month, ranged [1, 31]
	pub day: u8,
	/// Month of the year, ranged [0, 11]
	pub mon: u8,
	/// Absolute Gregorian calendar year, 2000 or later
	pub year: u16,
	/// Day of the week
	pub wday: Weekday,
	/// Day of the year, ranged [0, 365]
	pub yday: u16
}

impl TaiTime {
	/// Convert a TAI uptime into broken-down calendar time.
	///
	/// The year is found by consuming whole leap-aware year lengths starting at 2000, then the
	/// month by consuming the leap-aware month lengths. Time-of-day fields are floored
	/// division/modulo of the original uptime so no rounding compounds across fields.
	///
	/// Only non-negative uptimes represent dates on this scale; negative inputs return `None`.
	/// Saturates at year 65535 rather than overflowing.
	///
	/// # Examples
	///
	/// ```
	/// # use taitime::time::{TaiTime, Weekday, MS_PER_DAY};
	/// // One leap year plus Jan-Apr of the next: May 2, 2001.
	/// let date = TaiTime::new((366 + 121) * MS_PER_DAY).unwrap();
	/// assert_eq!(date.year, 2001);
	/// assert_eq!(date.mon, 4);
	/// assert_eq!(date.day, 2);
	/// assert_eq!(date.wday, Weekday::Wednesday);
	///
	/// assert_eq!(TaiTime::new(-1), None);
	/// ```
	pub fn new(uptime: i64) -> Option<TaiTime> {
		if uptime < 0 {
			return None;
		}

		let mut days = uptime / MS_PER_DAY;
		let mut year = TAI_START_YEAR;
		loop {
			let len = days_in_year(year);
			if days < len || year == u16::MAX {
				break;
			}
			days -= len;
			year += 1;
		}
		let yday = days as u16;

		let mut mon = 0u8;
		for len in month_lengths(year) {
			if days < len as i64 {
				break;
			}
			days -= len as i64;
			mon += 1;
		}

		Some(TaiTime {
			sec: ((uptime % MS_PER_MIN) / MS_PER_SEC) as u8,
			min: ((uptime % MS_PER_HOUR) / MS_PER_MIN) as u8,
			hour: ((uptime % MS_PER_DAY) / MS_PER_HOUR) as u8,
			day: (days + 1) as u8,
			mon,
			year,
			wday: weekday_from_uptime(uptime),
			yday
		})
	}

	/// Convert back to TAI uptime.
	///
	/// Inverse of [`TaiTime::new`] up to second resolution: for any whole-second uptime `x >= 0`,
	/// `TaiTime::new(x).unwrap().uptime() == x`.
	///
	/// # Examples
	///
	/// ```
	/// # use taitime::time::TaiTime;
	/// let date = TaiTime::new(10_000_000_000).unwrap();
	/// assert_eq!(date.uptime(), 10_000_000_000);
	/// ```
	pub fn uptime(&self) -> i64 {
		tai_from_calendar(self.year, self.yday, self.hour, self.min, self.sec)
	}

	/// Check whether this date falls in a leap year.
	#[inline(always)]
	pub const fn is_leap_year(&self) -> bool {
		is_leap_year(self.year)
	}
}

/// Get the current TAI uptime from the host realtime clock.
///
/// Reads `CLOCK_REALTIME` and rebases it from the Unix epoch to the TAI epoch
/// ([`UNIX_AT_TAI_EPOCH`]). Host clocks track UTC rather than TAI, so the result is only as
/// accurate as the embedding system's UTC delta handling; feed it through
/// [`sched::LocalTime`](crate::sched::LocalTime) if leap-offset correction matters.
///
/// Returns `None` if `libc::clock_gettime` fails. Hosts with clocks set before 2000 produce
/// negative values, which [`TaiTime::new`] rejects.
///
/// This function is thread safe.
///
/// # Examples
///
/// ```
/// # use taitime::time::now;
/// let uptime = now().expect("Failed to get current time");
/// assert!(uptime > 0);
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "now")))]
#[cfg(feature = "now")]
pub fn now() -> Option<i64> {
	let mut time = MaybeUninit::<timespec>::uninit();
	// Safety:
	// - clock_gettime does not read time, only writes
	// - if clock_gettime returns zero, time is successfully initialized
	let time = unsafe {
		match clock_gettime(CLOCK_REALTIME, time.as_mut_ptr()) {
			0 => time.assume_init(),
			_ => return None
		}
	};
	Some((time.tv_sec as i64 - UNIX_AT_TAI_EPOCH) * MS_PER_SEC + time.tv_nsec as i64 / 1_000_000)
}

#[cfg(test)]
mod tests {
	use super::*;
	use core::mem::MaybeUninit;
	use libc::{time_t, tm};

	// Get the libc version of UTC calendar time
	fn utc_time(time: time_t) -> tm {
		unsafe {
			let mut utc = MaybeUninit::<tm>::uninit();
			libc::gmtime_r(&time, utc.as_mut_ptr());
			utc.assume_init()
		}
	}

	fn compare_dates(uptime: i64) {
		let d1 = utc_time((uptime / MS_PER_SEC + UNIX_AT_TAI_EPOCH) as time_t);
		let d2 = TaiTime::new(uptime).unwrap();
		assert_eq!(d1.tm_sec, d2.sec as i32, "uptime: {}, sec: {} vs. {}", uptime, d1.tm_sec, d2.sec);
		assert_eq!(d1.tm_min, d2.min as i32, "uptime: {}, min: {} vs. {}", uptime, d1.tm_min, d2.min);
		assert_eq!(d1.tm_hour, d2.hour as i32, "uptime: {}, hour: {} vs. {}", uptime, d1.tm_hour, d2.hour);
		assert_eq!(d1.tm_mday, d2.day as i32, "uptime: {}, mday: {} vs. {}", uptime, d1.tm_mday, d2.day);
		assert_eq!(d1.tm_mon, d2.mon as i32, "uptime: {}, mon: {} vs. {}", uptime, d1.tm_mon, d2.mon);
		assert_eq!(d1.tm_year + 1900, d2.year as i32, "uptime: {}, year: {} vs. {}", uptime, d1.tm_year + 1900, d2.year);
		assert_eq!(d1.tm_wday, d2.wday.index() as i32, "uptime: {}, wday: {} vs. {}", uptime, d1.tm_wday, d2.wday);
		assert_eq!(d1.tm_yday, d2.yday as i32, "uptime: {}, yday: {} vs. {}", uptime, d1.tm_yday, d2.yday);
	}

	#[test]
	fn is_leap_year_test() {
		assert_eq!(is_leap_year(2000), true);
		assert_eq!(is_leap_year(2004), true);
		assert_eq!(is_leap_year(2020), true);
		assert_eq!(is_leap_year(2023), false);
		assert_eq!(is_leap_year(2100), false);
		assert_eq!(is_leap_year(2200), false);
		assert_eq!(is_leap_year(2400), true);

		// Make sure extreme inputs cannot panic
		is_leap_year(0);
		is_leap_year(u16::MAX);
	}

	#[test]
	fn month_lengths_test() {
		assert_eq!(month_lengths(2000), [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
		assert_eq!(month_lengths(2001), [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
		assert_eq!(month_lengths(2000).iter().map(|&d| d as i64).sum::<i64>(), days_in_year(2000));
		assert_eq!(month_lengths(2001).iter().map(|&d| d as i64).sum::<i64>(), days_in_year(2001));
	}

	#[test]
	fn tai_from_calendar_test() {
		assert_eq!(tai_from_calendar(2000, 0, 0, 0, 0), 0);
		assert_eq!(tai_from_calendar(2000, 1, 0, 0, 0), MS_PER_DAY);
		assert_eq!(tai_from_calendar(2000, 115, 17, 46, 40), 10_000_000_000);
		assert_eq!(tai_from_calendar(2001, 0, 0, 0, 0), DAYS_PER_LEAP_YEAR * MS_PER_DAY);
		assert_eq!(tai_from_calendar(2006, 162, 18, 1, 18), 203_450_478_000);

		// Permissive conversion: yday overflow rolls into the next year
		assert_eq!(tai_from_calendar(2001, 365, 0, 0, 0), tai_from_calendar(2002, 0, 0, 0, 0));

		// Make sure extreme inputs cannot panic
		tai_from_calendar(0, 0, 0, 0, 0);
		tai_from_calendar(u16::MAX, u16::MAX, u8::MAX, u8::MAX, u8::MAX);
	}

	#[test]
	fn tai_from_calendar_checked_test() {
		assert_eq!(tai_from_calendar_checked(2000, 115, 17, 46, 40), Ok(10_000_000_000));
		assert_eq!(tai_from_calendar_checked(2000, 365, 23, 59, 59), Ok(tai_from_calendar(2000, 365, 23, 59, 59)));
		assert_eq!(tai_from_calendar_checked(1999, 0, 0, 0, 0), Err(FieldError::YearOutOfRange));
		assert_eq!(tai_from_calendar_checked(2001, 365, 0, 0, 0), Err(FieldError::DayOfYearOutOfRange));
		assert_eq!(tai_from_calendar_checked(2000, 366, 0, 0, 0), Err(FieldError::DayOfYearOutOfRange));
		assert_eq!(tai_from_calendar_checked(2000, 0, 24, 0, 0), Err(FieldError::HoursOutOfRange));
		assert_eq!(tai_from_calendar_checked(2000, 0, 0, 60, 0), Err(FieldError::MinutesOutOfRange));
		assert_eq!(tai_from_calendar_checked(2000, 0, 0, 0, 60), Err(FieldError::SecondsOutOfRange));
	}

	#[test]
	fn date_test() {
		assert_eq!(TaiTime::new(-1), None);

		// Epoch
		let epoch = TaiTime::new(0).unwrap();
		assert_eq!(epoch.year, 2000);
		assert_eq!(epoch.yday, 0);
		assert_eq!(epoch.mon, 0);
		assert_eq!(epoch.day, 1);
		assert_eq!(epoch.wday, Weekday::Saturday);

		// One leap year plus Jan+Feb+Mar+Apr of the next: May 2, 2001
		let date = TaiTime::new((DAYS_PER_LEAP_YEAR + 121) * MS_PER_DAY).unwrap();
		assert_eq!(date.year, 2001);
		assert_eq!(date.yday, 121);
		assert_eq!(date.mon, 4);
		assert_eq!(date.day, 2);

		// Leap day and the year boundary around it
		let leap_day = TaiTime::new(59 * MS_PER_DAY).unwrap();
		assert_eq!((leap_day.year, leap_day.mon, leap_day.day), (2000, 1, 29));
		let last_ms = TaiTime::new(DAYS_PER_LEAP_YEAR * MS_PER_DAY - 1).unwrap();
		assert_eq!((last_ms.year, last_ms.mon, last_ms.day), (2000, 11, 31));
		assert_eq!((last_ms.hour, last_ms.min, last_ms.sec), (23, 59, 59));

		compare_dates(0);
		compare_dates(10_000_000_000);
		compare_dates(42_076_800_000);
		compare_dates(203_450_478_000);
		compare_dates(500_000_000_000_000);
		compare_dates(DAYS_PER_LEAP_YEAR * MS_PER_DAY - 1);
		compare_dates(DAYS_PER_LEAP_YEAR * MS_PER_DAY);
	}

	#[test]
	fn round_trip_test() {
		// Deterministic sweep over whole-second uptimes (the original prototype used a
		// randomized version of this check)
		let mut x: u64 = 0x9E3779B97F4A7C15;
		for _ in 0..1000 {
			x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
			let uptime = (x % 50_000_000_000_000) as i64;
			let uptime = uptime - uptime % MS_PER_SEC;
			let date = TaiTime::new(uptime).unwrap();
			assert_eq!(date.uptime(), uptime, "uptime: {}", uptime);
			assert!((date.yday as i64) < days_in_year(date.year), "uptime: {}", uptime);
		}
	}

	#[test]
	fn calendar_round_trip_test() {
		let mut x: u64 = 0xDEADBEEFCAFEF00D;
		for _ in 0..1000 {
			x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
			let year = 2000 + (x % 136) as u16;
			let yday = ((x >> 8) % days_in_year(year) as u64) as u16;
			let hour = ((x >> 24) % 24) as u8;
			let min = ((x >> 32) % 60) as u8;
			let sec = ((x >> 40) % 60) as u8;

			let date = TaiTime::new(tai_from_calendar(year, yday, hour, min, sec)).unwrap();
			assert_eq!(
				(date.year, date.yday, date.hour, date.min, date.sec),
				(year, yday, hour, min, sec)
			);
		}
	}

	#[test]
	fn weekday_test() {
		assert_eq!(weekday_from_uptime(0), Weekday::Saturday);
		assert_eq!(weekday_from_uptime(MS_PER_DAY - 1), Weekday::Saturday);
		assert_eq!(weekday_from_uptime(MS_PER_DAY), Weekday::Sunday);
		assert_eq!(weekday_from_uptime((DAYS_PER_LEAP_YEAR + 121) * MS_PER_DAY), Weekday::Wednesday);
		assert_eq!(weekday_from_uptime(-1), Weekday::Friday);

		assert_eq!(Weekday::from_index(3).name(), "Wednesday");
		for i in 0..7 {
			assert_eq!(Weekday::from_index(i).index(), i);
		}
	}

	#[cfg(feature = "now")]
	#[test]
	fn now_test() {
		let uptime = now().unwrap();
		// 2020-01-01 on the TAI uptime scale; any sane host clock is past this
		assert!(uptime > 631_152_000_000);
	}
}
