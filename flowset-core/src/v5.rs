//! NetFlow version 5, the most widely deployed fixed-layout dialect.
//!
//! As specified at
//! <http://www.cisco.com/c/en/us/td/docs/net_mgmt/netflow_collection_engine/3-6/user/guide/format.html>:
//! a 24-byte header followed by `count` 48-byte flow records.

use crate::error::{Error, Result};
use crate::read::Reader;
use crate::v1;

pub const VERSION: u16 = 5;

/// NetFlow v5 packet header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub version: u16,
    pub count: u16,
    pub sys_uptime: u32,
    pub unix_secs: u32,
    pub unix_nsecs: u32,
    /// Total flows seen by the exporter, for loss detection.
    pub flow_sequence: u32,
    pub engine_type: u8,
    pub engine_id: u8,
    /// Two bits of sampling mode followed by a 14-bit interval.
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

    /// Re-encode the header exactly as it appeared on the wire.
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

    /// The sampling mode bits (top two bits of the sampling word).
    pub fn sampling_mode(&self) -> u8 {
        (self.sampling_interval >> 14) as u8
    }

    /// The packet sampling rate (bottom fourteen bits).
    pub fn sampling_rate(&self) -> u16 {
        self.sampling_interval & 0x3fff
    }
}

/// NetFlow v5 flow record (48 bytes on the wire).
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
    /// Source autonomous system number, origin or peer.
    pub src_as: u16,
    /// Destination autonomous system number, origin or peer.
    pub dst_as: u16,
    pub src_mask: u8,
    pub dst_mask: u8,
}

impl FlowRecord {
    pub const SIZE: usize = 48;

    pub(crate) fn read(r: &mut Reader<'_>) -> Result<Self> {
        let record = Self {
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
        };
        r.skip(2)?; // pad
        Ok(record)
    }
}

/// A decoded NetFlow v5 packet.
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

    fn sample_record(src: [u8; 4], dst: [u8; 4]) -> Vec<u8> {
        let mut rec = Vec::new();
        rec.extend_from_slice(&src);
        rec.extend_from_slice(&dst);
        rec.extend_from_slice(&[192, 0, 2, 1]); // next hop
        rec.extend_from_slice(&3u16.to_be_bytes()); // input
        rec.extend_from_slice(&4u16.to_be_bytes()); // output
        rec.extend_from_slice(&42u32.to_be_bytes()); // packets
        rec.extend_from_slice(&4200u32.to_be_bytes()); // octets
        rec.extend_from_slice(&100u32.to_be_bytes()); // first
        rec.extend_from_slice(&900u32.to_be_bytes()); // last
        rec.extend_from_slice(&443u16.to_be_bytes()); // src port
        rec.extend_from_slice(&50123u16.to_be_bytes()); // dst port
        rec.push(0); // pad
        rec.push(0x18); // tcp flags
        rec.push(6); // protocol
        rec.push(0); // tos
        rec.extend_from_slice(&64500u16.to_be_bytes()); // src as
        rec.extend_from_slice(&64501u16.to_be_bytes()); // dst as
        rec.push(24); // src mask
        rec.push(16); // dst mask
        rec.extend_from_slice(&[0, 0]); // pad
        assert_eq!(rec.len(), FlowRecord::SIZE);
        rec
    }

    fn packet(count: u16) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&VERSION.to_be_bytes());
        data.extend_from_slice(&count.to_be_bytes());
        data.extend_from_slice(&555_000u32.to_be_bytes()); // uptime
        data.extend_from_slice(&1_534_265_373u32.to_be_bytes()); // secs
        data.extend_from_slice(&0u32.to_be_bytes()); // nsecs
        data.extend_from_slice(&77u32.to_be_bytes()); // sequence
        data.push(0); // engine type
        data.push(1); // engine id
        // Random sampling (mode 1), 1 in 100.
        data.extend_from_slice(&(1u16 << 14 | 100).to_be_bytes());
        for i in 0..count as u8 {
            data.extend_from_slice(&sample_record([10, 0, 0, i], [172, 16, 0, i]));
        }
        data
    }

    #[test]
    fn test_read_two_flows() {
        let data = packet(2);
        let p = read(&data).unwrap();

        assert_eq!(p.header.flow_sequence, 77);
        assert_eq!(p.records.len(), 2);
        assert_eq!(p.records[1].src_addr, 0x0a000001);
        assert_eq!(p.records[0].src_as, 64500);
        assert_eq!(p.records[0].dst_mask, 16);
    }

    #[test]
    fn test_sampling_word_split() {
        let p = read(&packet(1)).unwrap();
        assert_eq!(p.header.sampling_mode(), 1);
        assert_eq!(p.header.sampling_rate(), 100);
    }

    #[test]
    fn test_header_round_trip() {
        let data = packet(1);
        let p = read(&data).unwrap();
        assert_eq!(p.header.to_bytes(), data[..Header::SIZE]);
    }

    #[test]
    fn test_count_33_rejected() {
        let mut data = packet(2);
        data[2..4].copy_from_slice(&33u16.to_be_bytes());
        assert!(matches!(read(&data), Err(Error::Protocol { version: 5, .. })));
    }

    #[test]
    fn test_count_beyond_buffer_is_short() {
        // A plausible count but fewer records on the wire.
        let mut data = packet(1);
        data[2..4].copy_from_slice(&3u16.to_be_bytes());
        assert!(matches!(read(&data), Err(Error::ShortBuffer { .. })));
    }

    #[test]
    fn test_wrong_inner_version() {
        let mut data = packet(1);
        data[0..2].copy_from_slice(&9u16.to_be_bytes());
        assert!(matches!(
            read(&data),
            Err(Error::VersionMismatch { expected: 5, actual: 9 })
        ));
    }
}
