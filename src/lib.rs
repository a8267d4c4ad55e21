//! TAI timestamp engine for a Bluetooth Mesh time synchronization model.
//!
//! Mesh Time servers share a common clock as a millisecond count from 2000-01-01T00:00:00 TAI.
//! This crate is the arithmetic core of such a model, divided into three halves: [`time`]
//! converts between that TAI uptime scale and calendar time (leap years, day of year, weekday),
//! with no understanding of offsets; [`sched`] applies scheduled timezone and TAI-UTC offset
//! changes to locally observed wall-clock readings; and [`wire`] converts the biased
//! fixed-point offset fields used on the mesh to and from milliseconds.
//!
//! The crate supports `no_std`; every operation is bounded integer arithmetic with no
//! allocation, blocking, or shared mutable state. Transport (how offset-change announcements
//! reach a node) and persistence of the current offsets belong to the embedding system. If the
//! `now` feature is enabled, the [`time`] module enables a helper to read the host realtime
//! clock on the TAI uptime scale ([`time::now`]).
//!
//! # Examples
//!
//! Converting a local wall-clock reading to TAI and back to calendar fields.
//! ```
//! # use taitime::{tai_from_calendar, TaiTime, Weekday, LocalTime, OffsetChange, MS_PER_HOUR};
//! // 2000-04-25 17:46:40 read off a local clock in a UTC+2 zone, with one
//! // second of accumulated TAI-UTC delta and no pending changes
//! let local = tai_from_calendar(2000, 115, 17, 46, 40);
//! let clock = LocalTime::new(
//! 	OffsetChange::steady(2 * MS_PER_HOUR),
//! 	OffsetChange::steady(1000)
//! );
//!
//! let tai = clock.resolve(local);
//! assert_eq!(tai, local - 2 * MS_PER_HOUR + 1000);
//!
//! let date = TaiTime::new(tai).unwrap();
//! assert_eq!((date.hour, date.min, date.sec), (15, 46, 41));
//! assert_eq!(date.wday, Weekday::Tuesday);
//! ```
//!
//! Applying a pending zone change delivered in mesh wire format.
//! ```
//! # use taitime::{LocalTime, OffsetChange, MS_PER_HOUR, MS_PER_DAY};
//! # use taitime::wire::zone_offset_from_wire;
//! let mut clock = LocalTime::default();
//! clock.set_zone_change(OffsetChange::new(
//! 	300 * MS_PER_DAY,
//! 	zone_offset_from_wire(0x48), // UTC+2 now...
//! 	zone_offset_from_wire(0x44)  // ...UTC+1 from day 300
//! ));
//! assert_eq!(clock.resolve(MS_PER_DAY), MS_PER_DAY - 2 * MS_PER_HOUR);
//! ```

#![no_std]
// only enables the `doc_cfg` feature when
// the `docsrs` configuration attribute is defined
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod time;
pub mod sched;
pub mod wire;

pub use time::*;
pub use sched::*;
