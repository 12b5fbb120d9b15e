//! Timestamp manipulation for UUID version 7
//!
//! This crate reads and writes the 48-bit `unix_ts_ms` field of UUIDv7
//! identifiers: it extracts the embedded millisecond timestamp, mints a fresh
//! UUIDv7 pinned to an arbitrary instant, and re-stamps the canonical text of
//! an existing UUIDv7 with fresh randomness while keeping its timestamp.
//!
//! ```rust
//! use std::time::SystemTime;
//! use uuid7_stamp::{uuid7_from_timestamp, uuid7_timestamp};
//!
//! let uuid = uuid7_from_timestamp(SystemTime::now())?;
//! println!("{}", uuid); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
//!
//! let ts = uuid7_timestamp(&uuid)?;
//! # Ok::<(), uuid7_stamp::Error>(())
//! ```
//!
//! # Field and bit layout
//!
//! This crate operates on identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        rand_a         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                          rand_b                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit `unix_ts_ms` field is the Unix timestamp in milliseconds,
//!   big-endian unsigned.
//! - The 4-bit `ver` field is set at `0111`.
//! - The 12-bit `rand_a` field carries the sub-millisecond remainder of the
//!   source instant (its fractional nanoseconds shifted right by eight bits).
//!   It is derived from the instant alone, not a counter, and provides no
//!   ordering guarantee between identifiers minted within the same
//!   millisecond.
//! - The 2-bit `var` field is set at `10`.
//! - The 62-bit `rand_b` field is filled with a cryptographically strong
//!   random number drawn anew for each identifier.
//!
//! Uniqueness of identifiers sharing a millisecond comes from the `rand_b`
//! entropy; this crate keeps no generator state between calls.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::Error;

mod id;
pub use id::{ParseError, Uuid, Variant};

pub mod stamp;
#[doc(inline)]
pub use stamp::{uuid7_from_timestamp, uuid7_restamp, uuid7_timestamp, V7Stamper};
