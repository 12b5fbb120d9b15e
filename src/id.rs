//! The UUID value type and its field-level primitives.

use std::{fmt, str};

/// Represents a Universally Unique IDentifier as a 16-byte big-endian array.
///
/// Bit packing and unpacking of the UUIDv7 fields is centralized here so that
/// the shift-and-mask arithmetic appears in one place: [`from_fields_v7`]
/// packs, and the [`unix_ts_ms`], [`version`], and [`variant`] accessors
/// unpack.
///
/// [`from_fields_v7`]: Uuid::from_fields_v7
/// [`unix_ts_ms`]: Uuid::unix_ts_ms
/// [`version`]: Uuid::version
/// [`variant`]: Uuid::variant
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Packs UUIDv7 field values into a UUID byte array, writing the version
    /// nibble (`0111`) and the variant bits (`10`) in the process.
    ///
    /// # Panics
    ///
    /// Panics if a field value exceeds its bit width.
    pub const fn from_fields_v7(unix_ts_ms: u64, rand_a: u16, rand_b: u64) -> Self {
        if unix_ts_ms >= 1 << 48 || rand_a >= 1 << 12 || rand_b >= 1 << 62 {
            panic!("invalid field value");
        }

        let bits = ((unix_ts_ms as u128) << 80)
            | (0x7u128 << 76)
            | ((rand_a as u128) << 64)
            | (0b10u128 << 62)
            | rand_b as u128;
        Self(bits.to_be_bytes())
    }

    /// Returns the 48-bit `unix_ts_ms` field value in milliseconds.
    ///
    /// This is a raw field read that does not check the version nibble; use
    /// [`uuid7_timestamp`](crate::uuid7_timestamp) for the checked extraction.
    pub const fn unix_ts_ms(&self) -> u64 {
        (u128::from_be_bytes(self.0) >> 80) as u64
    }

    /// Returns the 4-bit version field value.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns the 2-bit variant field value.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 5 {
            0..=3 => Variant::Var0,
            4 | 5 => Variant::Var10,
            6 => Variant::Var110,
            _ => Variant::Var111,
        }
    }
}

/// The reserved UUID variants, as read from the most significant bits of the
/// ninth byte.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
    /// Reserved for NCS backward compatibility (`0xx`)
    Var0,
    /// The RFC-compliant variant this crate writes (`10x`)
    Var10,
    /// Reserved for Microsoft backward compatibility (`110`)
    Var110,
    /// Reserved for future definition (`111`)
    Var111,
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = u128::from_be_bytes(self.0);
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            (bits >> 96) as u32,
            (bits >> 80) as u16,
            (bits >> 64) as u16,
            (bits >> 48) as u16,
            bits & ((1u128 << 48) - 1),
        )
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string
    /// representation. Hex digits may be in either case; hyphens must sit at
    /// the canonical positions.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let src = src.as_bytes();
        if src.len() != 36 {
            return Err(ParseError {});
        }

        let mut dst = [0u8; 16];
        let mut pos = 0;
        for (i, e) in dst.iter_mut().enumerate() {
            if i == 4 || i == 6 || i == 8 || i == 10 {
                if src[pos] != b'-' {
                    return Err(ParseError {});
                }
                pos += 1;
            }
            let hi = hex_digit(src[pos]).ok_or(ParseError {})?;
            let lo = hex_digit(src[pos + 1]).ok_or(ParseError {})?;
            *e = (hi << 4) | lo;
            pos += 2;
        }
        Ok(Self(dst))
    }
}

const fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid string representation")
    }
}

impl std::error::Error for ParseError {}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.to_string())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases: &[(&str, &[u8; 16])] = &[
                ("00000000-0000-0000-0000-000000000000", &[0u8; 16]),
                (
                    "017f22e2-79b0-7cc3-98c4-dc0c0c07398f",
                    &[
                        1, 127, 34, 226, 121, 176, 124, 195, 152, 196, 220, 12, 12, 7, 57, 143,
                    ],
                ),
                (
                    "ffffffff-ffff-7fff-bfff-ffffffffffff",
                    &[
                        255, 255, 255, 255, 255, 255, 127, 255, 191, 255, 255, 255, 255, 255, 255,
                        255,
                    ],
                ),
            ];

            for &(text, bytes) in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes.as_slice())]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Uuid, Variant};

    const MAX_UINT48: u64 = (1 << 48) - 1;
    const MAX_UINT12: u16 = (1 << 12) - 1;
    const MAX_UINT62: u64 = (1 << 62) - 1;

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [((u64, u16, u64), &'static str)] {
        &[
            ((0, 0, 0), "00000000-0000-7000-8000-000000000000"),
            ((MAX_UINT48, 0, 0), "ffffffff-ffff-7000-8000-000000000000"),
            ((0, MAX_UINT12, 0), "00000000-0000-7fff-8000-000000000000"),
            ((0, 0, MAX_UINT62), "00000000-0000-7000-bfff-ffffffffffff"),
            (
                (MAX_UINT48, MAX_UINT12, MAX_UINT62),
                "ffffffff-ffff-7fff-bfff-ffffffffffff",
            ),
            (
                (0x17f22e279b0, 0xcc3, 0x18c4dc0c0c07398f),
                "017f22e2-79b0-7cc3-98c4-dc0c0c07398f",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (fs, text) in prepare_cases() {
            let from_fields = Uuid::from_fields_v7(fs.0, fs.1, fs.2);
            assert_eq!(Ok(from_fields), text.parse());
            assert_eq!(Ok(from_fields), text.to_uppercase().parse());
            assert_eq!(&from_fields.to_string(), text);
        }
    }

    /// Unpacks the packed field values through the accessors
    #[test]
    fn unpacks_packed_field_values_through_accessors() {
        for (fs, _) in prepare_cases() {
            let e = Uuid::from_fields_v7(fs.0, fs.1, fs.2);
            assert_eq!(e.unix_ts_ms(), fs.0);
            assert_eq!(e.version(), 7);
            assert_eq!(e.variant(), Variant::Var10);
        }
    }

    /// Reads version and variant fields of foreign identifiers
    #[test]
    fn reads_version_and_variant_fields_of_foreign_identifiers() {
        let v4: Uuid = "2ca4b2ce-6c13-40d4-bccf-37d222820f6f".parse().unwrap();
        assert_eq!(v4.version(), 4);
        assert_eq!(v4.variant(), Variant::Var10);

        assert_eq!(Uuid::NIL.version(), 0);
        assert_eq!(Uuid::NIL.variant(), Variant::Var0);
        assert_eq!(Uuid::MAX.version(), 15);
        assert_eq!(Uuid::MAX.variant(), Variant::Var111);
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            "",
            " 0180a8f0-5b82-75b4-9fef-ecad657c30bb",
            "0180a8f0-5b84-7438-ab50-f0626f78002b ",
            " 0180a8f0-5b84-7438-ab50-f063bd5331af ",
            "+0180a8f0-5b84-7438-ab50-f06405d35edb",
            "-0180a8f0-5b84-7438-ab50-f06508df4c2d",
            "0180a8f05b847438ab50f068decfbfd7",
            "0180a8f0-5b847438-ab50-f06991838802",
            "{0180a8f0-5b84-7438-ab50-f06ac2e5e082}",
            "0180a8f0-5b84-74 8-ab50-f06bed27bdc7",
            "0180a8g0-5b84-7438-ab50-f06c91175b8a",
            "0180a8f0-5b84-7438-ab50_f06d3ea24429",
            "not-a-uuid",
        ];

        for e in cases {
            assert!(e.parse::<Uuid>().is_err());
        }
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            &Uuid::NIL.to_string(),
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            &Uuid::MAX.to_string(),
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (fs, _) in prepare_cases() {
            let e = Uuid::from_fields_v7(fs.0, fs.1, fs.2);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(Uuid::try_from(e.to_string()), Ok(e));
            assert_eq!(Uuid::try_from(e.to_string().to_uppercase()), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_bytes(), &<[u8; 16]>::from(e));
        }
    }
}
