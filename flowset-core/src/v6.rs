//! NetFlow version 6, a short-lived v5 extension with encapsulation
//! counters and a peer next-hop per flow.
//!
//! Same 24-byte header as v5; records grow to 52 bytes.

use crate::error::{Error, Result};
use crate::read::Reader;
use crate::v1;

pub const VERSION: u16 = 6;

/// NetFlow v6 packet header; the layout matches v5.
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
    pub sampling_interval: u16,
}

impl Header {
    pub const SIZE: usize = 24;

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
            sampling_interval: r.u16()?,
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
        out[22..24].copy_from_slice(&self.sampling_interval.to_be_bytes());
        out
    }
}

/// NetFlow v6 flow record (52 bytes on the wire).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowRecord {
    pub src_addr: u32,
    pub dst_addr: u32,
    pub next_hop: u32,
    pub input: u16,
    pub output: u16,
    pub packets: u32,
    pub octets: u32,
    pub first: u32,
    pub last: u32,
    pub src_port: u16,
    pub dst_port: u16,
    pub tcp_flags: u8,
    pub protocol: u8,
    pub tos: u8,
    pub src_as: u16,
    pub dst_as: u16,
    pub src_mask: u8,
    pub dst_mask: u8,
    /// Ingress encapsulation identifier.
    pub in_encaps: u8,
    /// Egress encapsulation identifier.
    pub out_encaps: u8,
    /// Next hop in the peer's address space.
    pub peer_next_hop: u32,
}

impl FlowRecord {
    pub const SIZE: usize = 52;

    pub(crate) fn read(r: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            src_addr: r.u32()?,
            dst_addr: r.u32()?,
            next_hop: r.u32()?,
            input: r.u16()?,
            output: r.u16()?,
            packets: r.u32()?,
            octets: r.u32()?,
            first: r.u32()?,
            last: r.u32()?,
            src_port: r.u16()?,
            dst_port: r.u16()?,
            tcp_flags: {
                r.skip(1)?; // pad
                r.u8()?
            },
            protocol: r.u8()?,
            tos: r.u8()?,
            src_as: r.u16()?,
            dst_as: r.u16()?,
            src_mask: r.u8()?,
            dst_mask: r.u8()?,
            in_encaps: r.u8()?,
            out_encaps: r.u8()?,
            peer_next_hop: r.u32()?,
        })
    }
}

/// A decoded NetFlow v6 packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    pub header: Header,
    pub records: Vec<FlowRecord>,
}

pub fn read(data: &[u8]) -> Result<Packet> {
    let mut r = Reader::new(data);
    let header = Header::read(&mut r)?;
    v1::check_count(VERSION, header.count)?;

    let mut records = Vec::with_capacity(usize::from(header.count));
    for _ in 0..header.count {
        records.push(FlowRecord::read(&mut r)?);
    }
    Ok(Packet { header, records })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packet() -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&VERSION.to_be_bytes());
        data.extend_from_slice(&1u16.to_be_bytes());
        data.extend_from_slice(&1000u32.to_be_bytes());
        data.extend_from_slice(&1_534_265_373u32.to_be_bytes());
        data.extend_from_slice(&0u32.to_be_bytes());
        data.extend_from_slice(&9u32.to_be_bytes());
        data.extend_from_slice(&[0, 0, 0, 0]); // engine type/id + sampling

        data.extend_from_slice(&[10, 1, 1, 1]);
        data.extend_from_slice(&[10, 2, 2, 2]);
        data.extend_from_slice(&[10, 0, 0, 1]);
        data.extend_from_slice(&1u16.to_be_bytes());
        data.extend_from_slice(&2u16.to_be_bytes());
        data.extend_from_slice(&5u32.to_be_bytes());
        data.extend_from_slice(&500u32.to_be_bytes());
        data.extend_from_slice(&10u32.to_be_bytes());
        data.extend_from_slice(&20u32.to_be_bytes());
        data.extend_from_slice(&1234u16.to_be_bytes());
        data.extend_from_slice(&53u16.to_be_bytes());
        data.extend_from_slice(&[0, 0x02, 17, 0]); // pad, flags, proto, tos
        data.extend_from_slice(&100u16.to_be_bytes());
        data.extend_from_slice(&200u16.to_be_bytes());
        data.extend_from_slice(&[8, 8]); // masks
        data.extend_from_slice(&[1, 2]); // encaps
        data.extend_from_slice(&[10, 9, 9, 9]); // peer next hop
        data
    }

    #[test]
    fn test_read_packet() {
        let p = read(&packet()).unwrap();
        assert_eq!(p.records.len(), 1);
        let rec = &p.records[0];
        assert_eq!(rec.protocol, 17);
        assert_eq!(rec.in_encaps, 1);
        assert_eq!(rec.out_encaps, 2);
        assert_eq!(rec.peer_next_hop, 0x0a090909);
    }

    #[test]
    fn test_header_round_trip() {
        let data = packet();
        let p = read(&data).unwrap();
        assert_eq!(p.header.to_bytes(), data[..Header::SIZE]);
    }

    #[test]
    fn test_truncated_record() {
        let mut data = packet();
        data.truncate(Header::SIZE + FlowRecord::SIZE - 4);
        assert!(matches!(read(&data), Err(Error::ShortBuffer { .. })));
    }
}
