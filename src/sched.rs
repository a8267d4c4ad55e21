//! Scheduled offset changes and local time resolution.
//!
//! A mesh Time server tracks two additive offsets between its local wall-clock reading and TAI:
//! the local timezone offset and the TAI-UTC delta (accumulated leap seconds). Both can have one
//! pending step change announced ahead of its effective instant, e.g. a daylight savings switch
//! or a scheduled leap second. [`OffsetChange`] models one such pending change and [`LocalTime`]
//! holds the pair, converting local wall-clock readings into corrected TAI uptime with whichever
//! changes have already taken effect.
//!
//! Effective instants are expressed in the corrected TAI frame while the input is a raw local
//! reading, so whether a change "has occurred" depends on offsets that are themselves in
//! question. [`LocalTime::resolve`] settles this by fixing the evaluation order: the timezone
//! comparison is made on the initial correction, before the UTC step is layered on.
//! [`LocalTime::classify`] is the diagnostic counterpart that evaluates all four offset
//! combinations directly; the two agree wherever local time is unambiguous.
//!
//! # Examples
//!
//! ```
//! # use taitime::{LocalTime, OffsetChange, Regime, MS_PER_HOUR};
//! // Zone falls back from UTC+2 to UTC+1 ten hours in; a 1s leap offset
//! // takes effect at hour twenty.
//! let clock = LocalTime::new(
//! 	OffsetChange::new(10 * MS_PER_HOUR, 2 * MS_PER_HOUR, MS_PER_HOUR),
//! 	OffsetChange::new(20 * MS_PER_HOUR, 0, 1000)
//! );
//!
//! assert_eq!(clock.resolve(5 * MS_PER_HOUR), 3 * MS_PER_HOUR);
//! assert_eq!(clock.resolve(13 * MS_PER_HOUR), 12 * MS_PER_HOUR);
//! assert_eq!(clock.resolve(22 * MS_PER_HOUR), 21 * MS_PER_HOUR + 1000);
//!
//! assert_eq!(clock.classify(5 * MS_PER_HOUR), Some(Regime::Neither));
//! assert_eq!(clock.classify(13 * MS_PER_HOUR), Some(Regime::ZoneOnly));
//! assert_eq!(clock.classify(22 * MS_PER_HOUR), Some(Regime::Both));
//! ```

/// A scheduled step change in an additive time offset.
///
/// Represents one pending change to either the local timezone offset or the TAI-UTC delta:
/// `current` is in force before `timestamp`, `new` at and after it. Values are immutable once
/// constructed; when a new announcement supersedes this one, replace the whole value (it is
/// `Copy`, so a replacement is a single assignment). In a concurrent embedding that replacement
/// must be atomic with respect to in-flight [`LocalTime::resolve`] calls.
///
/// All fields are milliseconds of TAI uptime. Announcements arriving in mesh wire format are
/// converted with the [`wire`](crate::wire) module first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OffsetChange {
	/// TAI uptime at which the change takes effect, in the corrected frame
	pub timestamp: i64,
	/// Offset in force before `timestamp`
	pub current: i64,
	/// Offset in force at and after `timestamp`
	pub new: i64
}

impl OffsetChange {
	/// Create a change from `current` to `new` effective at `timestamp`.
	pub const fn new(timestamp: i64, current: i64, new: i64) -> OffsetChange {
		OffsetChange { timestamp, current, new }
	}

	/// A schedule with no pending change: `offset` is in force at every instant.
	///
	/// # Examples
	///
	/// ```
	/// # use taitime::OffsetChange;
	/// let fixed = OffsetChange::steady(7_200_000);
	/// assert_eq!(fixed.step(), 0);
	/// ```
	pub const fn steady(offset: i64) -> OffsetChange {
		OffsetChange { timestamp: 0, current: offset, new: offset }
	}

	/// The size of the step, `new - current`. Zero for a steady schedule.
	#[inline(always)]
	pub const fn step(&self) -> i64 {
		self.new.wrapping_sub(self.current)
	}
}

impl Default for OffsetChange {
	/// A steady schedule with offset zero.
	fn default() -> OffsetChange {
		OffsetChange::steady(0)
	}
}

/// Which of the two scheduled changes have taken effect at a given instant.
///
/// The four combinations of (UTC change occurred?, zone change occurred?). Each regime selects
/// one offset combination; see [`LocalTime::combination`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Regime {
	/// Neither change has occurred
	Neither,
	/// Only the UTC delta change has occurred
	UtcOnly,
	/// Only the timezone change has occurred
	ZoneOnly,
	/// Both changes have occurred
	Both
}

impl Regime {
	/// All four regimes, in [`LocalTime::classify`]'s evaluation order.
	pub const ALL: [Regime; 4] = [Regime::Neither, Regime::UtcOnly, Regime::ZoneOnly, Regime::Both];
}

/// Local wall-clock state: a timezone offset schedule and a TAI-UTC delta schedule.
///
/// Converts raw local wall-clock readings (on the TAI millisecond scale, e.g. from
/// [`tai_from_calendar`](crate::time::tai_from_calendar) over user-entered fields) into
/// corrected TAI uptime. Holds exactly one pending change per schedule; both schedules are
/// independent and may have different effective instants.
///
/// # Examples
///
/// ```
/// # use taitime::{LocalTime, OffsetChange, MS_PER_HOUR};
/// // UTC+2 with no pending changes and no accumulated leap offset
/// let clock = LocalTime::new(OffsetChange::steady(2 * MS_PER_HOUR), OffsetChange::steady(0));
/// assert_eq!(clock.resolve(9 * MS_PER_HOUR), 7 * MS_PER_HOUR);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct LocalTime {
	/// Timezone offset schedule
	zone: OffsetChange,
	/// TAI-UTC delta schedule
	utc: OffsetChange
}

impl LocalTime {
	/// Create a resolver from a timezone schedule and a UTC delta schedule.
	pub const fn new(zone: OffsetChange, utc: OffsetChange) -> LocalTime {
		LocalTime { zone, utc }
	}

	/// Replace the timezone offset schedule.
	///
	/// Supersedes the previous schedule wholesale. Callers embedding this in a concurrent
	/// system must make the replacement atomic with respect to concurrent [`resolve`] calls.
	///
	/// [`resolve`]: LocalTime::resolve
	pub fn set_zone_change(&mut self, change: OffsetChange) {
		self.zone = change;
	}

	/// Replace the TAI-UTC delta schedule. Same replacement semantics as
	/// [`set_zone_change`](LocalTime::set_zone_change).
	pub fn set_utc_change(&mut self, change: OffsetChange) {
		self.utc = change;
	}

	/// The timezone offset schedule currently held.
	pub const fn zone_change(&self) -> OffsetChange {
		self.zone
	}

	/// The TAI-UTC delta schedule currently held.
	pub const fn utc_change(&self) -> OffsetChange {
		self.utc
	}

	/// Convert a raw local wall-clock reading to corrected TAI uptime.
	///
	/// Undoes the timezone offset currently in force and applies the UTC delta currently in
	/// force, which lands the value in the corrected frame both schedules' timestamps are
	/// expressed in. Each step change whose effective instant has passed is then applied. The
	/// zone comparison must use the value from the initial correction, before the UTC step is
	/// layered on; both schedules are step functions of the same corrected frame and evaluating
	/// the second against a stale value misplaces readings near a boundary.
	///
	/// Total over the whole `i64` domain and never panics in release or debug: schedules are
	/// not validated, and arithmetic wraps on (astronomically distant) overflow.
	///
	/// # Examples
	///
	/// ```
	/// # use taitime::{LocalTime, OffsetChange, MS_PER_HOUR};
	/// let clock = LocalTime::new(
	/// 	OffsetChange::new(10 * MS_PER_HOUR, 2 * MS_PER_HOUR, MS_PER_HOUR),
	/// 	OffsetChange::new(20 * MS_PER_HOUR, 0, 1000)
	/// );
	/// // Before either boundary: only the in-force offsets apply
	/// assert_eq!(clock.resolve(5 * MS_PER_HOUR), 3 * MS_PER_HOUR);
	/// // Past both boundaries: zone step and leap step applied
	/// assert_eq!(clock.resolve(22 * MS_PER_HOUR), 21 * MS_PER_HOUR + 1000);
	/// ```
	pub fn resolve(&self, local_uptime: i64) -> i64 {
		let mut corrected = local_uptime
			.wrapping_sub(self.zone.current)
			.wrapping_add(self.utc.current);

		// Zone first, judged on the initial correction
		if corrected >= self.zone.timestamp {
			corrected = corrected.wrapping_sub(self.zone.step());
		}
		if corrected >= self.utc.timestamp {
			corrected = corrected.wrapping_add(self.utc.step());
		}
		corrected
	}

	/// The combined offset a given regime subtracts from a local reading.
	///
	/// `combination(r) = zone_offset(r) - utc_offset(r)`, picking each schedule's `current` or
	/// `new` according to `r`. The corrected candidate for regime `r` is
	/// `local_uptime - combination(r)`.
	pub const fn combination(&self, regime: Regime) -> i64 {
		match regime {
			Regime::Neither => self.zone.current.wrapping_sub(self.utc.current),
			Regime::UtcOnly => self.zone.current.wrapping_sub(self.utc.new),
			Regime::ZoneOnly => self.zone.new.wrapping_sub(self.utc.current),
			Regime::Both => self.zone.new.wrapping_sub(self.utc.new),
		}
	}

	/// Determine which regime a raw local reading falls into, if it is unambiguous.
	///
	/// Evaluates all four combinations directly: regime `r` matches when its corrected
	/// candidate `local_uptime - combination(r)` sits on the side of both schedules' effective
	/// instants that `r` asserts. For readings away from the step boundaries exactly one regime
	/// matches, and its candidate equals [`resolve`](LocalTime::resolve)'s result.
	///
	/// Within one step size of a boundary, local time is inherently ambiguous: a backward step
	/// repeats wall-clock readings (two regimes match) and a forward step skips readings (no
	/// regime matches). Both cases return `None`; `resolve` remains defined there and picks the
	/// post-change regime.
	///
	/// # Examples
	///
	/// ```
	/// # use taitime::{LocalTime, OffsetChange, Regime, MS_PER_HOUR};
	/// let clock = LocalTime::new(
	/// 	OffsetChange::new(10 * MS_PER_HOUR, 2 * MS_PER_HOUR, MS_PER_HOUR),
	/// 	OffsetChange::new(20 * MS_PER_HOUR, 0, 1000)
	/// );
	///
	/// let local = 13 * MS_PER_HOUR;
	/// let regime = clock.classify(local).unwrap();
	/// assert_eq!(regime, Regime::ZoneOnly);
	/// assert_eq!(local - clock.combination(regime), clock.resolve(local));
	/// ```
	pub fn classify(&self, local_uptime: i64) -> Option<Regime> {
		let mut found = None;
		for regime in Regime::ALL {
			let candidate = local_uptime.wrapping_sub(self.combination(regime));
			let utc_occurred = candidate >= self.utc.timestamp;
			let zone_occurred = candidate >= self.zone.timestamp;
			let matches = match regime {
				Regime::Neither => !utc_occurred && !zone_occurred,
				Regime::UtcOnly => utc_occurred && !zone_occurred,
				Regime::ZoneOnly => !utc_occurred && zone_occurred,
				Regime::Both => utc_occurred && zone_occurred,
			};
			if matches {
				if found.is_some() {
					return None;
				}
				found = Some(regime);
			}
		}
		found
	}
}
