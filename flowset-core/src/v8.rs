//! NetFlow version 8, router-based aggregation.
//!
//! Only the 28-byte header is decoded; the header's aggregation scheme
//! selects one of more than a dozen record layouts, and the aggregated
//! records themselves are surfaced as raw payload for consumers that
//! want a specific scheme.

use crate::error::{Error, Result};
use crate::read::Reader;

pub const VERSION: u16 = 8;

/// The aggregation scheme announced in the v8 header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    RouterAs,
    RouterProtoPort,
    RouterSrcPrefix,
    RouterDstPrefix,
    RouterPrefix,
    DestOnly,
    SrcDst,
    FullFlow,
    TosAs,
    TosProtoPort,
    TosSrcPrefix,
    TosDstPrefix,
    TosPrefix,
    PrePortProtocol,
    Other(u8),
}

impl Aggregation {
    pub fn from_wire(scheme: u8) -> Self {
        match scheme {
            1 => Aggregation::RouterAs,
            2 => Aggregation::RouterProtoPort,
            3 => Aggregation::RouterSrcPrefix,
            4 => Aggregation::RouterDstPrefix,
            5 => Aggregation::RouterPrefix,
            6 => Aggregation::DestOnly,
            7 => Aggregation::SrcDst,
            8 => Aggregation::FullFlow,
            9 => Aggregation::TosAs,
            10 => Aggregation::TosProtoPort,
            11 => Aggregation::TosSrcPrefix,
            12 => Aggregation::TosDstPrefix,
            13 => Aggregation::TosPrefix,
            14 => Aggregation::PrePortProtocol,
            other => Aggregation::Other(other),
        }
    }

    pub fn wire(&self) -> u8 {
        match self {
            Aggregation::RouterAs => 1,
            Aggregation::RouterProtoPort => 2,
            Aggregation::RouterSrcPrefix => 3,
            Aggregation::RouterDstPrefix => 4,
            Aggregation::RouterPrefix => 5,
            Aggregation::DestOnly => 6,
            Aggregation::SrcDst => 7,
            Aggregation::FullFlow => 8,
            Aggregation::TosAs => 9,
            Aggregation::TosProtoPort => 10,
            Aggregation::TosSrcPrefix => 11,
            Aggregation::TosDstPrefix => 12,
            Aggregation::TosPrefix => 13,
            Aggregation::PrePortProtocol => 14,
            Aggregation::Other(other) => *other,
        }
    }
}

/// NetFlow v8 packet header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub version: u16,
    pub count: u16,
    pub sys_uptime: u32,
    pub unix_secs: u32,
    pub unix_nsecs: u32,
    pub flow_sequence: u32,
    pub engine_type: u8,
    pub engine_id: u8,
    /// Raw aggregation scheme byte; see [`Header::aggregation`].
    pub aggregation: u8,
    pub agg_version: u8,
    pub reserved: u32,
}

impl Header {
    pub const SIZE: usize = 28;

    pub(crate) fn read(r: &mut Reader<'_>) -> Result<Self> {
        let header = Self {
            version: r.u16()?,
            count: r.u16()?,
            sys_uptime: r.u32()?,
            unix_secs: r.u32()?,
            unix_nsecs: r.u32()?,
            flow_sequence: r.u32()?,
            engine_type: r.u8()?,
            engine_id: r.u8()?,
            aggregation: r.u8()?,
            agg_version: r.u8()?,
            reserved: r.u32()?,
        };
        if header.version != VERSION {
            return Err(Error::VersionMismatch {
                expected: VERSION,
                actual: header.version,
            });
        }
        Ok(header)
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[0..2].copy_from_slice(&self.version.to_be_bytes());
        out[2..4].copy_from_slice(&self.count.to_be_bytes());
        out[4..8].copy_from_slice(&self.sys_uptime.to_be_bytes());
        out[8..12].copy_from_slice(&self.unix_secs.to_be_bytes());
        out[12..16].copy_from_slice(&self.unix_nsecs.to_be_bytes());
        out[16..20].copy_from_slice(&self.flow_sequence.to_be_bytes());
        out[20] = self.engine_type;
        out[21] = self.engine_id;
        out[22] = self.aggregation;
        out[23] = self.agg_version;
        out[24..28].copy_from_slice(&self.reserved.to_be_bytes());
        out
    }

    pub fn aggregation(&self) -> Aggregation {
        Aggregation::from_wire(self.aggregation)
    }
}

/// A decoded NetFlow v8 packet: the parsed header and the untouched
/// aggregated-record payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet<'a> {
    pub header: Header,
    pub payload: &'a [u8],
}

pub fn read(data: &[u8]) -> Result<Packet<'_>> {
    let mut r = Reader::new(data);
    let header = Header::read(&mut r)?;
    Ok(Packet {
        header,
        payload: r.rest(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packet() -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&VERSION.to_be_bytes());
        data.extend_from_slice(&2u16.to_be_bytes());
        data.extend_from_slice(&9000u32.to_be_bytes());
        data.extend_from_slice(&1_534_265_373u32.to_be_bytes());
        data.extend_from_slice(&0u32.to_be_bytes());
        data.extend_from_slice(&42u32.to_be_bytes());
        data.push(1); // engine type
        data.push(0); // engine id
        data.push(9); // aggregation: ToS-AS
        data.push(2); // agg version
        data.extend_from_slice(&0u32.to_be_bytes());
        data.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]); // raw records
        data
    }

    #[test]
    fn test_header_and_raw_payload() {
        let data = packet();
        let p = read(&data).unwrap();

        assert_eq!(p.header.aggregation(), Aggregation::TosAs);
        assert_eq!(p.header.agg_version, 2);
        assert_eq!(p.payload, &[0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_header_round_trip() {
        let data = packet();
        let p = read(&data).unwrap();
        assert_eq!(p.header.to_bytes(), data[..Header::SIZE]);
    }

    #[test]
    fn test_aggregation_wire_round_trip() {
        for scheme in 1..=15u8 {
            assert_eq!(Aggregation::from_wire(scheme).wire(), scheme);
        }
    }

    #[test]
    fn test_short_header() {
        let data = packet();
        assert!(matches!(
            read(&data[..20]),
            Err(Error::ShortBuffer { .. })
        ));
    }
}
