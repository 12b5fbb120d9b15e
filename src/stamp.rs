//! The UUIDv7 timestamp codec: extraction, stamping, and re-stamping.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::{rngs::OsRng, CryptoRng, RngCore};

use crate::{Error, Uuid};

const MAX_UINT48: u64 = (1 << 48) - 1;
const MAX_UINT12: u16 = (1 << 12) - 1;
const MAX_UINT62: u64 = (1 << 62) - 1;

const NANOS_PER_MILLI: i128 = 1_000_000;

/// Extracts the timestamp embedded in a UUIDv7.
///
/// The 48-bit `unix_ts_ms` field is read as milliseconds since the Unix
/// epoch. The sub-millisecond bits of the `rand_a` field are not consulted,
/// so the returned instant has millisecond precision. Succeeds for any
/// identifier whose version nibble is 7; fails with
/// [`Error::InvalidVersion`] otherwise.
///
/// # Examples
///
/// ```rust
/// use uuid7_stamp::{uuid7_timestamp, Uuid};
///
/// let uuid: Uuid = "017f22e2-79b0-7cc3-98c4-dc0c0c07398f".parse()?;
/// let ts = uuid7_timestamp(&uuid)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn uuid7_timestamp(uuid: &Uuid) -> Result<SystemTime, Error> {
    if uuid.version() != 7 {
        return Err(Error::InvalidVersion(uuid.version()));
    }
    // 48 bits of milliseconds always fits in a SystemTime
    Ok(UNIX_EPOCH + Duration::from_millis(uuid.unix_ts_ms()))
}

/// Creates a UUIDv7 pinned to the given instant, drawing randomness from the
/// operating system entropy source.
///
/// See [`V7Stamper::from_timestamp`] for the field semantics and error
/// behavior.
///
/// # Examples
///
/// ```rust
/// use std::time::SystemTime;
///
/// let uuid = uuid7_stamp::uuid7_from_timestamp(SystemTime::now())?;
/// assert_eq!(uuid.version(), 7);
/// # Ok::<(), uuid7_stamp::Error>(())
/// ```
pub fn uuid7_from_timestamp(ts: SystemTime) -> Result<Uuid, Error> {
    V7Stamper::new(OsRng).from_timestamp(ts)
}

/// Parses the canonical text of a UUIDv7 and returns a new UUIDv7 carrying
/// the same millisecond timestamp with fresh randomness, using the operating
/// system entropy source.
///
/// See [`V7Stamper::restamp_str`] for the stage-by-stage error behavior.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid7_stamp::uuid7_restamp("017f22e2-79b0-7cc3-98c4-dc0c0c07398f")?;
/// assert_eq!(uuid.unix_ts_ms(), 0x017f22e279b0);
/// # Ok::<(), uuid7_stamp::Error>(())
/// ```
pub fn uuid7_restamp(text: &str) -> Result<Uuid, Error> {
    V7Stamper::new(OsRng).restamp_str(text)
}

/// A UUIDv7 timestamp stamper that owns the cryptographically secure random
/// number generator filling the `rand_b` field.
///
/// A stamper is stateless apart from its random number generator: no counter
/// or clock is kept between calls, every produced identifier is independent,
/// and identifiers minted within the same millisecond are told apart by the
/// 62 random bits alone. The `CryptoRng` bound rules out plugging in a
/// non-cryptographic source.
///
/// # Examples
///
/// ```rust
/// use std::time::SystemTime;
/// use uuid7_stamp::V7Stamper;
///
/// let mut stamper = V7Stamper::new(rand::rngs::OsRng);
/// let uuid = stamper.from_timestamp(SystemTime::now())?;
/// println!("{}", uuid);
/// # Ok::<(), uuid7_stamp::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V7Stamper<R> {
    /// The cryptographically secure random number generator used by the
    /// stamper.
    rng: R,
}

impl<R: RngCore + CryptoRng> V7Stamper<R> {
    /// Creates a stamper instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Creates a UUIDv7 pinned to the given instant.
    ///
    /// The instant is floored to milliseconds for the 48-bit `unix_ts_ms`
    /// field; flooring runs through negative values for instants before the
    /// epoch. Millisecond values wider than 48 bits (reached around the year
    /// 10889) are truncated to the low 48 bits by an explicit mask, so such
    /// timestamps do not round-trip through [`uuid7_timestamp`].
    ///
    /// The 12-bit `rand_a` field receives the sub-millisecond remainder of
    /// the instant in nanoseconds, shifted right by eight bits. It is derived
    /// from the instant alone, so two calls with the same instant write the
    /// same `rand_a` value; it is not a counter and gives no ordering among
    /// identifiers of the same millisecond.
    ///
    /// The 62-bit `rand_b` field is drawn from the stamper's random number
    /// generator through its fallible path; a source failure surfaces as
    /// [`Error::EntropySource`] and is never masked by weaker randomness.
    pub fn from_timestamp(&mut self, ts: SystemTime) -> Result<Uuid, Error> {
        let (unix_ts_ms, rand_a) = split_unix_ts(ts);

        let mut payload = [0u8; 8];
        self.rng
            .try_fill_bytes(&mut payload)
            .map_err(Error::EntropySource)?;
        let rand_b = u64::from_be_bytes(payload) & MAX_UINT62;

        Ok(Uuid::from_fields_v7(unix_ts_ms, rand_a, rand_b))
    }

    /// Re-stamps the canonical text of a UUIDv7: the returned identifier
    /// carries the same millisecond timestamp as the input with entirely new
    /// `rand_a` and `rand_b` contents.
    ///
    /// Only version 7 input text is accepted, as the timestamp of other
    /// versions is not encoded in the `unix_ts_ms` position. Each stage fails
    /// with its own error kind: [`Error::MalformedInput`] from parsing,
    /// [`Error::InvalidVersion`] from the version check, and
    /// [`Error::EntropySource`] from drawing fresh randomness.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid7_stamp::{uuid7_timestamp, V7Stamper};
    ///
    /// let mut stamper = V7Stamper::new(rand::rngs::OsRng);
    /// let uuid = stamper.restamp_str("017f22e2-79b0-7cc3-98c4-dc0c0c07398f")?;
    /// let ts = uuid7_timestamp(&uuid)?;
    /// # Ok::<(), uuid7_stamp::Error>(())
    /// ```
    pub fn restamp_str(&mut self, text: &str) -> Result<Uuid, Error> {
        let source: Uuid = text.parse().map_err(Error::MalformedInput)?;
        let ts = uuid7_timestamp(&source)?;
        self.from_timestamp(ts)
    }
}

/// Splits an instant into the 48-bit `unix_ts_ms` field value and the 12-bit
/// sub-millisecond `rand_a` value.
fn split_unix_ts(ts: SystemTime) -> (u64, u16) {
    let nanos = match ts.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_nanos() as i128,
        Err(e) => -(e.duration().as_nanos() as i128),
    };
    let millis = nanos.div_euclid(NANOS_PER_MILLI);
    // the remainder is below 1_000_000, so dropping eight bits fits in 12
    let rand_a = ((nanos - millis * NANOS_PER_MILLI) >> 8) as u16;
    ((millis as u64) & MAX_UINT48, rand_a & MAX_UINT12)
}
