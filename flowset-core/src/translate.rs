//! Translation of raw field bytes into typed values.
//!
//! [`value`] interprets a byte string according to the Information
//! Element type from the registry. Translation is best effort and
//! derived: the raw bytes remain the source of truth, and any length
//! that cannot be interpreted (below the type's minimum, or wider than
//! the declared integer width) yields `None` instead of an error.
//!
//! Integer fields honour IPFIX *reduced-size encoding* (RFC 7011
//! section 6.2): an unsigned element may arrive in 1, 2, 3, 4 or 8
//! bytes (zero-extended from the most significant byte), a signed
//! element in 1, 2, 4 or 8 bytes (sign-extended), and a float64 may be
//! carried as an IEEE 754 single and promoted.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use compact_str::CompactString;

use crate::ie::FieldType;

/// A translated field value.
///
/// Supports zero-copy translation: `Str` and `Bytes` reference the
/// datagram directly, while `OwnedString`/`OwnedBytes` appear only
/// after [`FieldValue::into_owned`] detaches a value from its datagram
/// (for example to store an option in the session).
#[derive(Debug, Clone)]
pub enum FieldValue<'a> {
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Bool(bool),
    /// 6-byte hardware address.
    Mac([u8; 6]),
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    /// Zero-copy string reference into the datagram.
    Str(&'a str),
    /// Zero-copy octet array reference into the datagram.
    Bytes(&'a [u8]),
    /// Owned string for values detached from their datagram.
    OwnedString(CompactString),
    /// Owned octet array for values detached from their datagram.
    OwnedBytes(Vec<u8>),
    /// Seconds-precision absolute timestamp.
    DateTimeSeconds(SystemTime),
    DateTimeMilliseconds(SystemTime),
    DateTimeMicroseconds(SystemTime),
    DateTimeNanoseconds(SystemTime),
}

/// A field value that owns all of its data, usable past the lifetime of
/// the datagram it was decoded from.
pub type OwnedFieldValue = FieldValue<'static>;

impl<'a> FieldValue<'a> {
    /// Widen any unsigned integer variant to u64.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            FieldValue::UInt8(v) => Some(u64::from(*v)),
            FieldValue::UInt16(v) => Some(u64::from(*v)),
            FieldValue::UInt32(v) => Some(u64::from(*v)),
            FieldValue::UInt64(v) => Some(*v),
            _ => None,
        }
    }

    /// Widen any signed integer variant to i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int8(v) => Some(i64::from(*v)),
            FieldValue::Int16(v) => Some(i64::from(*v)),
            FieldValue::Int32(v) => Some(i64::from(*v)),
            FieldValue::Int64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            FieldValue::OwnedString(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            FieldValue::Bytes(b) => Some(b),
            FieldValue::OwnedBytes(b) => Some(b.as_slice()),
            _ => None,
        }
    }

    /// Copy borrowed data into owned variants, detaching the value from
    /// the datagram buffer.
    pub fn into_owned(self) -> OwnedFieldValue {
        match self {
            FieldValue::UInt8(v) => FieldValue::UInt8(v),
            FieldValue::UInt16(v) => FieldValue::UInt16(v),
            FieldValue::UInt32(v) => FieldValue::UInt32(v),
            FieldValue::UInt64(v) => FieldValue::UInt64(v),
            FieldValue::Int8(v) => FieldValue::Int8(v),
            FieldValue::Int16(v) => FieldValue::Int16(v),
            FieldValue::Int32(v) => FieldValue::Int32(v),
            FieldValue::Int64(v) => FieldValue::Int64(v),
            FieldValue::Float32(v) => FieldValue::Float32(v),
            FieldValue::Float64(v) => FieldValue::Float64(v),
            FieldValue::Bool(v) => FieldValue::Bool(v),
            FieldValue::Mac(v) => FieldValue::Mac(v),
            FieldValue::Ipv4(v) => FieldValue::Ipv4(v),
            FieldValue::Ipv6(v) => FieldValue::Ipv6(v),
            FieldValue::Str(s) => FieldValue::OwnedString(CompactString::new(s)),
            FieldValue::Bytes(b) => FieldValue::OwnedBytes(b.to_vec()),
            FieldValue::OwnedString(s) => FieldValue::OwnedString(s),
            FieldValue::OwnedBytes(b) => FieldValue::OwnedBytes(b),
            FieldValue::DateTimeSeconds(t) => FieldValue::DateTimeSeconds(t),
            FieldValue::DateTimeMilliseconds(t) => FieldValue::DateTimeMilliseconds(t),
            FieldValue::DateTimeMicroseconds(t) => FieldValue::DateTimeMicroseconds(t),
            FieldValue::DateTimeNanoseconds(t) => FieldValue::DateTimeNanoseconds(t),
        }
    }
}

impl std::fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::UInt8(v) => write!(f, "{v}"),
            FieldValue::UInt16(v) => write!(f, "{v}"),
            FieldValue::UInt32(v) => write!(f, "{v}"),
            FieldValue::UInt64(v) => write!(f, "{v}"),
            FieldValue::Int8(v) => write!(f, "{v}"),
            FieldValue::Int16(v) => write!(f, "{v}"),
            FieldValue::Int32(v) => write!(f, "{v}"),
            FieldValue::Int64(v) => write!(f, "{v}"),
            FieldValue::Float32(v) => write!(f, "{v}"),
            FieldValue::Float64(v) => write!(f, "{v}"),
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Mac(m) => write!(
                f,
                "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
                m[0], m[1], m[2], m[3], m[4], m[5]
            ),
            FieldValue::Ipv4(addr) => write!(f, "{addr}"),
            FieldValue::Ipv6(addr) => write!(f, "{addr}"),
            FieldValue::Str(s) => write!(f, "{s}"),
            FieldValue::OwnedString(s) => write!(f, "{s}"),
            FieldValue::Bytes(b) => write!(f, "[{} bytes]", b.len()),
            FieldValue::OwnedBytes(b) => write!(f, "[{} bytes]", b.len()),
            FieldValue::DateTimeSeconds(t)
            | FieldValue::DateTimeMilliseconds(t)
            | FieldValue::DateTimeMicroseconds(t)
            | FieldValue::DateTimeNanoseconds(t) => match t.duration_since(UNIX_EPOCH) {
                Ok(d) => write!(f, "{}.{:09}", d.as_secs(), d.subsec_nanos()),
                Err(_) => write!(f, "<pre-epoch>"),
            },
        }
    }
}

// Manual PartialEq so that borrowed and owned strings/bytes compare
// equal across ownership.
impl<'a, 'b> PartialEq<FieldValue<'b>> for FieldValue<'a> {
    fn eq(&self, other: &FieldValue<'b>) -> bool {
        use FieldValue::*;
        match (self, other) {
            (UInt8(a), UInt8(b)) => a == b,
            (UInt16(a), UInt16(b)) => a == b,
            (UInt32(a), UInt32(b)) => a == b,
            (UInt64(a), UInt64(b)) => a == b,
            (Int8(a), Int8(b)) => a == b,
            (Int16(a), Int16(b)) => a == b,
            (Int32(a), Int32(b)) => a == b,
            (Int64(a), Int64(b)) => a == b,
            (Float32(a), Float32(b)) => a == b,
            (Float64(a), Float64(b)) => a == b,
            (Bool(a), Bool(b)) => a == b,
            (Mac(a), Mac(b)) => a == b,
            (Ipv4(a), Ipv4(b)) => a == b,
            (Ipv6(a), Ipv6(b)) => a == b,
            (Str(a), Str(b)) => a == b,
            (Str(a), OwnedString(b)) => *a == b.as_str(),
            (OwnedString(a), Str(b)) => a.as_str() == *b,
            (OwnedString(a), OwnedString(b)) => a == b,
            (Bytes(a), Bytes(b)) => a == b,
            (Bytes(a), OwnedBytes(b)) => *a == b.as_slice(),
            (OwnedBytes(a), Bytes(b)) => a.as_slice() == *b,
            (OwnedBytes(a), OwnedBytes(b)) => a == b,
            (DateTimeSeconds(a), DateTimeSeconds(b)) => a == b,
            (DateTimeMilliseconds(a), DateTimeMilliseconds(b)) => a == b,
            (DateTimeMicroseconds(a), DateTimeMicroseconds(b)) => a == b,
            (DateTimeNanoseconds(a), DateTimeNanoseconds(b)) => a == b,
            _ => false,
        }
    }
}

/// Reduced-size read of an unsigned integer. Accepts 1, 2, 3, 4 or 8
/// bytes, zero-extended; rejects widths above the element's declared
/// bit width and the unused 5/6/7-byte encodings.
fn reduced_unsigned(bytes: &[u8], max_bits: usize) -> Option<u64> {
    if bytes.len() * 8 > max_bits {
        return None;
    }
    match bytes.len() {
        1 => Some(u64::from(bytes[0])),
        2 => Some(u64::from(u16::from_be_bytes([bytes[0], bytes[1]]))),
        3 => Some(u64::from(bytes[0]) << 16 | u64::from(bytes[1]) << 8 | u64::from(bytes[2])),
        4 => Some(u64::from(u32::from_be_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3],
        ]))),
        8 => Some(u64::from_be_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ])),
        _ => None,
    }
}

/// Reduced-size read of a signed integer. Accepts 1, 2, 4 or 8 bytes,
/// sign-extended.
fn reduced_signed(bytes: &[u8], max_bits: usize) -> Option<i64> {
    if bytes.len() * 8 > max_bits {
        return None;
    }
    match bytes.len() {
        1 => Some(i64::from(bytes[0] as i8)),
        2 => Some(i64::from(i16::from_be_bytes([bytes[0], bytes[1]]))),
        4 => Some(i64::from(i32::from_be_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3],
        ]))),
        8 => Some(i64::from_be_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ])),
        _ => None,
    }
}

/// The minimum wire length a value of this type can be carried in.
fn min_length(ty: FieldType) -> usize {
    match ty {
        FieldType::Unsigned8
        | FieldType::Signed8
        | FieldType::Boolean
        | FieldType::Unsigned16
        | FieldType::Signed16
        | FieldType::Unsigned32
        | FieldType::Signed32
        | FieldType::Unsigned64
        | FieldType::Signed64 => 1,
        // Float64 may be reduced to an IEEE single.
        FieldType::Float32 | FieldType::Float64 | FieldType::DateTimeSeconds => 4,
        FieldType::DateTimeMilliseconds
        | FieldType::DateTimeMicroseconds
        | FieldType::DateTimeNanoseconds => 8,
        FieldType::MacAddress => 6,
        FieldType::Ipv4Address => 4,
        FieldType::Ipv6Address => 16,
        _ => 0,
    }
}

fn be_u32(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

fn be_u64(bytes: &[u8]) -> u64 {
    u64::from_be_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Translate a byte string into a typed value. Returns `None` when the
/// bytes cannot be interpreted as the given type; the caller keeps the
/// raw bytes either way. Translating the same input twice yields equal
/// values.
pub fn value(bytes: &[u8], ty: FieldType) -> Option<FieldValue<'_>> {
    if bytes.len() < min_length(ty) {
        // Field is too short (corrupt) - leave it uninterpreted.
        return None;
    }

    match ty {
        FieldType::Unsigned8 => (bytes.len() == 1).then(|| FieldValue::UInt8(bytes[0])),
        FieldType::Unsigned16 => reduced_unsigned(bytes, 16).map(|v| FieldValue::UInt16(v as u16)),
        FieldType::Unsigned32 => reduced_unsigned(bytes, 32).map(|v| FieldValue::UInt32(v as u32)),
        FieldType::Unsigned64 => reduced_unsigned(bytes, 64).map(FieldValue::UInt64),
        FieldType::Signed8 => (bytes.len() == 1).then(|| FieldValue::Int8(bytes[0] as i8)),
        FieldType::Signed16 => reduced_signed(bytes, 16).map(|v| FieldValue::Int16(v as i16)),
        FieldType::Signed32 => reduced_signed(bytes, 32).map(|v| FieldValue::Int32(v as i32)),
        FieldType::Signed64 => reduced_signed(bytes, 64).map(FieldValue::Int64),
        FieldType::Float32 => {
            (bytes.len() == 4).then(|| FieldValue::Float32(f32::from_bits(be_u32(bytes))))
        }
        FieldType::Float64 => match bytes.len() {
            4 => Some(FieldValue::Float64(f64::from(f32::from_bits(be_u32(bytes))))),
            8 => Some(FieldValue::Float64(f64::from_bits(be_u64(bytes)))),
            _ => None,
        },
        FieldType::Boolean => Some(FieldValue::Bool(bytes[0] == 1)),
        FieldType::MacAddress => {
            (bytes.len() == 6).then(|| FieldValue::Mac([bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]]))
        }
        FieldType::OctetArray | FieldType::Unknown => Some(FieldValue::Bytes(bytes)),
        FieldType::String => std::str::from_utf8(bytes).ok().map(FieldValue::Str),
        FieldType::Ipv4Address => (bytes.len() == 4)
            .then(|| FieldValue::Ipv4(Ipv4Addr::new(bytes[0], bytes[1], bytes[2], bytes[3]))),
        FieldType::Ipv6Address => {
            let octets: [u8; 16] = bytes.try_into().ok()?;
            Some(FieldValue::Ipv6(Ipv6Addr::from(octets)))
        }
        FieldType::DateTimeSeconds => (bytes.len() == 4).then(|| {
            FieldValue::DateTimeSeconds(UNIX_EPOCH + Duration::from_secs(u64::from(be_u32(bytes))))
        }),
        FieldType::DateTimeMilliseconds => (bytes.len() == 8).then(|| {
            FieldValue::DateTimeMilliseconds(UNIX_EPOCH + Duration::from_millis(be_u64(bytes)))
        }),
        FieldType::DateTimeMicroseconds => (bytes.len() == 8).then(|| {
            FieldValue::DateTimeMicroseconds(UNIX_EPOCH + Duration::from_micros(be_u64(bytes)))
        }),
        FieldType::DateTimeNanoseconds => (bytes.len() == 8).then(|| {
            FieldValue::DateTimeNanoseconds(UNIX_EPOCH + Duration::from_nanos(be_u64(bytes)))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_size_unsigned32() {
        // A u32 element carried in a single byte.
        assert_eq!(
            value(&[0xff], FieldType::Unsigned32),
            Some(FieldValue::UInt32(255))
        );
        // In two and three bytes, zero-extended from the MSB.
        assert_eq!(
            value(&[0x01, 0x00], FieldType::Unsigned32),
            Some(FieldValue::UInt32(256))
        );
        assert_eq!(
            value(&[0x01, 0x00, 0x00], FieldType::Unsigned32),
            Some(FieldValue::UInt32(65536))
        );
        // Full width.
        assert_eq!(
            value(&[0xde, 0xad, 0xbe, 0xef], FieldType::Unsigned32),
            Some(FieldValue::UInt32(0xdead_beef))
        );
        // Five bytes exceed the declared width: untranslated.
        assert_eq!(value(&[0, 0, 0, 0, 0xff], FieldType::Unsigned32), None);
    }

    #[test]
    fn test_reduced_size_zero_extension_property() {
        // Zero-padding on the MSB side must not change the value.
        let narrow = value(&[0x2a], FieldType::Unsigned64).unwrap();
        let wide = value(&[0, 0, 0, 0x2a], FieldType::Unsigned64).unwrap();
        let full = value(&[0, 0, 0, 0, 0, 0, 0, 0x2a], FieldType::Unsigned64).unwrap();
        assert_eq!(narrow, wide);
        assert_eq!(wide, full);
    }

    #[test]
    fn test_reduced_size_unsupported_widths() {
        // 5/6/7-byte encodings are not produced by exporters and are
        // left raw.
        assert_eq!(value(&[0; 5], FieldType::Unsigned64), None);
        assert_eq!(value(&[0; 7], FieldType::Unsigned64), None);
        // u16 cannot arrive in 3 bytes.
        assert_eq!(value(&[0; 3], FieldType::Unsigned16), None);
    }

    #[test]
    fn test_reduced_size_signed() {
        assert_eq!(
            value(&[0xff], FieldType::Signed32),
            Some(FieldValue::Int32(-1))
        );
        assert_eq!(
            value(&[0x80, 0x00], FieldType::Signed16),
            Some(FieldValue::Int16(i16::MIN))
        );
        // Signed integers have no 3-byte encoding.
        assert_eq!(value(&[0xff, 0xff, 0xff], FieldType::Signed32), None);
    }

    #[test]
    fn test_overwide_u8_left_raw() {
        assert_eq!(value(&[0x01, 0x02], FieldType::Unsigned8), None);
        assert_eq!(
            value(&[0x07], FieldType::Unsigned8),
            Some(FieldValue::UInt8(7))
        );
    }

    #[test]
    fn test_float64_promotion() {
        let single = 1.5f32.to_bits().to_be_bytes();
        assert_eq!(
            value(&single, FieldType::Float64),
            Some(FieldValue::Float64(1.5))
        );
        let double = 2.25f64.to_bits().to_be_bytes();
        assert_eq!(
            value(&double, FieldType::Float64),
            Some(FieldValue::Float64(2.25))
        );
        // Anything below the four-byte single is left raw.
        assert_eq!(value(&[0x3f, 0xc0], FieldType::Float64), None);
    }

    #[test]
    fn test_addresses_and_mac() {
        assert_eq!(
            value(&[188, 65, 126, 213], FieldType::Ipv4Address),
            Some(FieldValue::Ipv4(Ipv4Addr::new(188, 65, 126, 213)))
        );
        let v6 = [0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1];
        assert_eq!(
            value(&v6, FieldType::Ipv6Address),
            Some(FieldValue::Ipv6("2001:db8::1".parse().unwrap()))
        );
        let mac = [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff];
        assert_eq!(value(&mac, FieldType::MacAddress), Some(FieldValue::Mac(mac)));
        // Short address bytes are left uninterpreted.
        assert_eq!(value(&[1, 2, 3], FieldType::Ipv4Address), None);
    }

    #[test]
    fn test_boolean() {
        assert_eq!(value(&[1], FieldType::Boolean), Some(FieldValue::Bool(true)));
        assert_eq!(value(&[0], FieldType::Boolean), Some(FieldValue::Bool(false)));
        assert_eq!(value(&[2], FieldType::Boolean), Some(FieldValue::Bool(false)));
    }

    #[test]
    fn test_string_utf8() {
        assert_eq!(
            value(b"GigabitEthernet0/1", FieldType::String),
            Some(FieldValue::Str("GigabitEthernet0/1"))
        );
        // Invalid UTF-8 stays raw.
        assert_eq!(value(&[0xff, 0xfe], FieldType::String), None);
    }

    #[test]
    fn test_timestamps_preserve_unit() {
        let secs_bytes = 0x5b6d_081du32.to_be_bytes();
        let secs = value(&secs_bytes, FieldType::DateTimeSeconds).unwrap();
        assert_eq!(
            secs,
            FieldValue::DateTimeSeconds(UNIX_EPOCH + Duration::from_secs(0x5b6d_081d))
        );

        let ms_bytes = 1_534_265_373_123u64.to_be_bytes();
        let ms = value(&ms_bytes, FieldType::DateTimeMilliseconds);
        assert_eq!(
            ms.unwrap(),
            FieldValue::DateTimeMilliseconds(
                UNIX_EPOCH + Duration::from_millis(1_534_265_373_123)
            )
        );

        let ns_bytes = 123_456_789u64.to_be_bytes();
        let ns = value(&ns_bytes, FieldType::DateTimeNanoseconds).unwrap();
        assert_eq!(
            ns,
            FieldValue::DateTimeNanoseconds(UNIX_EPOCH + Duration::from_nanos(123_456_789))
        );
    }

    #[test]
    fn test_translation_is_idempotent() {
        let inputs: [(&[u8], FieldType); 4] = [
            (&[0x01, 0x02], FieldType::Unsigned16),
            (&[10, 0, 0, 1], FieldType::Ipv4Address),
            (b"lo0", FieldType::String),
            (&[0xde, 0xad], FieldType::OctetArray),
        ];
        for (bytes, ty) in inputs {
            assert_eq!(value(bytes, ty), value(bytes, ty));
        }
    }

    #[test]
    fn test_into_owned_preserves_equality() {
        let raw = b"sampler-1";
        let borrowed = value(raw, FieldType::String).unwrap();
        let owned = borrowed.clone().into_owned();
        assert_eq!(borrowed, owned);
        assert!(matches!(owned, FieldValue::OwnedString(_)));

        let bytes = value(&[1, 2, 3], FieldType::OctetArray).unwrap();
        assert_eq!(bytes.clone().into_owned(), bytes);
    }
}
