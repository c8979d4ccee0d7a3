//! NetFlow version 1, the original fixed-layout export format.
//!
//! A v1 datagram is a 16-byte header followed by `count` 48-byte flow
//! records. There are no templates and no sequence numbers.

use crate::error::{Error, Result};
use crate::read::Reader;

pub const VERSION: u16 = 1;

/// The de-facto upper bound on `count`. Cisco documents 24 records per
/// datagram but implementations in the wild go up to 32.
pub(crate) const MAX_FLOWS: u16 = 32;

/// NetFlow v1 packet header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub version: u16,
    /// Number of flow records in this packet.
    pub count: u16,
    /// Milliseconds since the export device booted.
    pub sys_uptime: u32,
    /// Seconds since the UNIX epoch at export time.
    pub unix_secs: u32,
    /// Residual nanoseconds at export time.
    pub unix_nsecs: u32,
}

impl Header {
    pub const SIZE: usize = 16;

    pub(crate) fn read(r: &mut Reader<'_>) -> Result<Self> {
        let header = Self {
            version: r.u16()?,
            count: r.u16()?,
            sys_uptime: r.u32()?,
            unix_secs: r.u32()?,
            unix_nsecs: r.u32()?,
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
        out
    }
}

/// NetFlow v1 flow record (48 bytes on the wire).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowRecord {
    /// Source IP address.
    pub src_addr: u32,
    /// Destination IP address.
    pub dst_addr: u32,
    /// IP address of the next hop router.
    pub next_hop: u32,
    /// SNMP index of the input interface.
    pub input: u16,
    /// SNMP index of the output interface.
    pub output: u16,
    /// Packets in the flow.
    pub packets: u32,
    /// Octets in the flow.
    pub octets: u32,
    /// SysUptime at the start of the flow.
    pub first: u32,
    /// SysUptime at the end of the flow.
    pub last: u32,
    pub src_port: u16,
    pub dst_port: u16,
    /// IP protocol number.
    pub protocol: u8,
    /// IP type of service.
    pub tos: u8,
    /// Cumulative OR of TCP flags.
    pub tcp_flags: u8,
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
            protocol: {
                r.skip(2)?; // pad
                r.u8()?
            },
            tos: r.u8()?,
            tcp_flags: r.u8()?,
        };
        r.skip(7)?; // pad + reserved
        Ok(record)
    }
}

/// A decoded NetFlow v1 packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    pub header: Header,
    pub records: Vec<FlowRecord>,
}

pub fn read(data: &[u8]) -> Result<Packet> {
    let mut r = Reader::new(data);
    let header = Header::read(&mut r)?;
    let records = read_flows(&mut r, header.count)?;
    Ok(Packet { header, records })
}

/// Read `count` fixed-size records, shared by all the legacy dialects.
pub(crate) fn check_count(version: u16, count: u16) -> Result<()> {
    if count == 0 || count > MAX_FLOWS {
        return Err(Error::protocol(
            version,
            format!("flow count {count} outside 1..={MAX_FLOWS}"),
        ));
    }
    Ok(())
}

fn read_flows(r: &mut Reader<'_>, count: u16) -> Result<Vec<FlowRecord>> {
    check_count(VERSION, count)?;
    let mut records = Vec::with_capacity(usize::from(count));
    for _ in 0..count {
        records.push(FlowRecord::read(r)?);
    }
    Ok(records)
}
