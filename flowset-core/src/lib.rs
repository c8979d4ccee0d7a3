//! # flowset-core
//!
//! Collector-side decoding of NetFlow and IPFIX export datagrams.
//!
//! This crate turns raw datagrams from routers, switches and probes
//! into structured flow records. It is transport agnostic: the UDP
//! listener, pcap ingestion and any pretty-printing live outside; the
//! core exposes a pure [`decode`] call.
//!
//! ## Supported dialects
//!
//! | Version | Format |
//! |---------|--------|
//! | 1, 5, 6, 7 | Fixed-layout flow records |
//! | 8 | Header and aggregation scheme; records surfaced raw |
//! | 9 | Template-driven FlowSets (RFC 3954) |
//! | 10 | IPFIX Sets (RFC 7011), enterprise and variable-length fields |
//!
//! ## Quick start
//!
//! ```rust
//! use flowset_core::{decode, Message, Session};
//!
//! // One session per exporter: it caches templates between datagrams.
//! let session = Session::new();
//!
//! // An IPFIX message announcing template 256 (source + destination
//! // IPv4 address), followed by one carrying a data record for it.
//! let template_msg = [
//!     0x00, 0x0a, 0x00, 0x20, 0x5b, 0x6d, 0x08, 0x1d,
//!     0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01,
//!     0x00, 0x02, 0x00, 0x10, 0x01, 0x00, 0x00, 0x02,
//!     0x00, 0x08, 0x00, 0x04, 0x00, 0x0c, 0x00, 0x04,
//! ];
//! let data_msg = [
//!     0x00, 0x0a, 0x00, 0x1c, 0x5b, 0x6d, 0x08, 0x1d,
//!     0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01,
//!     0x01, 0x00, 0x00, 0x0c, 0xbc, 0x41, 0x7e, 0xd5,
//!     0x2e, 0x63, 0xa4, 0x12,
//! ];
//!
//! decode(&template_msg, &session).unwrap();
//! if let Message::Ipfix(m) = decode(&data_msg, &session).unwrap() {
//!     for record in m.data_sets[0].records() {
//!         for field in record.fields() {
//!             println!("{}: {:?}", field.name().unwrap_or("?"), field.value);
//!         }
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +--------------------------------------------------------------+
//! |                        flowset-core                          |
//! +--------------------------------------------------------------+
//! |  read      - bounded big-endian cursor, RFC 7011 var-length  |
//! |  ie        - Information Element registry (IANA/CERT/Cisco)  |
//! |  translate - bytes -> typed values, reduced-size encoding    |
//! |  session   - per-exporter template cache and option store    |
//! |  v1..v8    - fixed-layout legacy parsers                     |
//! |  v9        - RFC 3954 FlowSet parser                         |
//! |  ipfix     - RFC 7011 Set parser                             |
//! |  error     - error types                                     |
//! +--------------------------------------------------------------+
//! ```
//!
//! Datagrams flow through [`decode`], which peeks the version word and
//! routes to the dialect parser; v9 and IPFIX consult the [`Session`]
//! for template state. Data sets whose template has not arrived yet are
//! preserved as raw bytes, never dropped - out-of-order UDP delivery is
//! the normal case, not an error.
//!
//! The decoder is synchronous and holds no global mutable state other
//! than the process-wide Information Element registry; concurrent
//! decodes against one shared session are safe.

pub mod error;
pub mod ie;
pub mod ipfix;
pub mod read;
pub mod record;
pub mod session;
pub mod template;
pub mod translate;
pub mod v1;
pub mod v5;
pub mod v6;
pub mod v7;
pub mod v8;
pub mod v9;

pub use error::{Error, Result};
pub use ie::{FieldType, InformationElement};
pub use record::{DataRecord, DataSet, RecordField};
pub use session::{OptionScope, ScopeKind, Session, SessionMap, SessionOption};
pub use template::{DataTemplate, FieldSpec, OptionsTemplate, Template};
pub use translate::{FieldValue, OwnedFieldValue};

use read::Reader;

/// A decoded export datagram, tagged by dialect.
#[derive(Debug, Clone, PartialEq)]
pub enum Message<'a> {
    V1(v1::Packet),
    V5(v5::Packet),
    V6(v6::Packet),
    V7(v7::Packet),
    V8(v8::Packet<'a>),
    V9(v9::Packet<'a>),
    Ipfix(ipfix::Message<'a>),
}

impl Message<'_> {
    /// The wire version this message was decoded from.
    pub fn version(&self) -> u16 {
        match self {
            Message::V1(_) => v1::VERSION,
            Message::V5(_) => v5::VERSION,
            Message::V6(_) => v6::VERSION,
            Message::V7(_) => v7::VERSION,
            Message::V8(_) => v8::VERSION,
            Message::V9(_) => v9::VERSION,
            Message::Ipfix(_) => ipfix::VERSION,
        }
    }
}

/// Decode a single export datagram.
///
/// Peeks the leading version word and dispatches to the matching
/// parser. The session carries template state for v9 and IPFIX and is
/// ignored by the legacy dialects. Template and option updates from a
/// datagram are committed to the session even when a later set in the
/// same datagram fails.
pub fn decode<'a>(data: &'a [u8], session: &Session) -> Result<Message<'a>> {
    let version = Reader::new(data).peek_u16()?;
    match version {
        v1::VERSION => Ok(Message::V1(v1::read(data)?)),
        v5::VERSION => Ok(Message::V5(v5::read(data)?)),
        v6::VERSION => Ok(Message::V6(v6::read(data)?)),
        v7::VERSION => Ok(Message::V7(v7::read(data)?)),
        v8::VERSION => Ok(Message::V8(v8::read(data)?)),
        v9::VERSION => Ok(Message::V9(v9::read(data, session)?)),
        ipfix::VERSION => Ok(Message::Ipfix(ipfix::read(data, session)?)),
        other => Err(Error::UnsupportedVersion(other)),
    }
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
