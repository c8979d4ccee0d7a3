//! NetFlow version 9 (RFC 3954): the template-driven export format.
//!
//! A packet is a header followed by FlowSets. Template FlowSets (id 0)
//! and Options Template FlowSets (id 1) announce field layouts; Data
//! FlowSets (id >= 256) reference a previously announced template by
//! using its id as the set id. Templates are tracked in the [`Session`]
//! keyed by the header's `SourceID`, since ids are only unique within
//! that scope.
//!
//! The header's `Count` field is ambiguous in the wild (some exporters
//! count FlowSets, others count records), so it is treated as advisory:
//! parsing continues until the datagram is exhausted.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::read::Reader;
use crate::record::{DataRecord, DataSet, ScopeStyle};
use crate::session::{OptionScope, ScopeKind, Session, SessionOption};
use crate::template::{DataTemplate, FieldSpec, FieldSpecs, OptionsTemplate, Template};

pub const VERSION: u16 = 9;

/// Set ids below this mark template and reserved FlowSets.
const MIN_DATA_SET_ID: u16 = 256;

/// NetFlow v9 packet header (RFC 3954 section 5.1).
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |       Version Number          |            Count              |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                           sysUpTime                           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                           UNIX Secs                           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                       Sequence Number                         |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                          Source ID                            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketHeader {
    pub version: u16,
    /// Advisory count of FlowSets or records; see the module docs.
    pub count: u16,
    pub sys_uptime: u32,
    pub unix_secs: u32,
    pub sequence_number: u32,
    /// The observation scope for template ids in this packet.
    pub source_id: u32,
}

impl PacketHeader {
    pub const SIZE: usize = 20;

    fn read(r: &mut Reader<'_>) -> Result<Self> {
        let header = Self {
            version: r.u16()?,
            count: r.u16()?,
            sys_uptime: r.u32()?,
            unix_secs: r.u32()?,
            sequence_number: r.u32()?,
            source_id: r.u32()?,
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
        out[12..16].copy_from_slice(&self.sequence_number.to_be_bytes());
        out[16..20].copy_from_slice(&self.source_id.to_be_bytes());
        out
    }
}

/// FlowSet header: a set id and the total set length including this
/// header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowSetHeader {
    pub id: u16,
    pub length: u16,
}

impl FlowSetHeader {
    pub const SIZE: usize = 4;

    fn read(r: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            id: r.u16()?,
            length: r.u16()?,
        })
    }
}

/// A decoded NetFlow v9 packet.
#[derive(Debug, Clone, PartialEq)]
pub struct Packet<'a> {
    pub header: PacketHeader,
    /// Template records announced in this packet.
    pub templates: Vec<DataTemplate>,
    /// Options template records announced in this packet.
    pub options_templates: Vec<OptionsTemplate>,
    /// Template ids withdrawn in this packet (field count zero).
    pub withdrawals: Vec<u16>,
    /// Ordinary data sets.
    pub data_sets: Vec<DataSet<'a>>,
    /// Data sets produced from options templates.
    pub options_data_sets: Vec<DataSet<'a>>,
}

/// Decode a v9 packet, consulting and updating `session` for template
/// state under the header's source id.
pub fn read<'a>(data: &'a [u8], session: &Session) -> Result<Packet<'a>> {
    let mut r = Reader::new(data);
    let header = PacketHeader::read(&mut r)?;
    trace!(
        count = header.count,
        sequence = header.sequence_number,
        source_id = header.source_id,
        "decoding v9 packet"
    );

    let mut packet = Packet {
        header,
        templates: Vec::new(),
        options_templates: Vec::new(),
        withdrawals: Vec::new(),
        data_sets: Vec::new(),
        options_data_sets: Vec::new(),
    };

    // The count field is advisory; walk FlowSets until the datagram is
    // exhausted. A trailing fragment shorter than a set header is
    // tolerated as padding.
    while r.remaining() >= FlowSetHeader::SIZE {
        let set_header = FlowSetHeader::read(&mut r)?;
        if usize::from(set_header.length) < FlowSetHeader::SIZE {
            return Err(Error::protocol(
                VERSION,
                format!(
                    "flowset {} declares length {} below the set header size",
                    set_header.id, set_header.length
                ),
            ));
        }
        let mut content = r.sub(usize::from(set_header.length) - FlowSetHeader::SIZE)?;

        match set_header.id {
            0 => read_templates(&mut content, &mut packet, session)?,
            1 => read_options_templates(&mut content, &mut packet, session)?,
            2..=255 => {
                // Reserved for future use; silently discarded.
                debug!(set_id = set_header.id, "discarding reserved flowset");
            }
            _ => read_data_set(&mut content, set_header, &mut packet, session)?,
        }
    }

    Ok(packet)
}

/// Template FlowSet (id 0): zero or more template records, then
/// padding. A record with field count zero withdraws the template.
fn read_templates<'a>(
    content: &mut Reader<'a>,
    packet: &mut Packet<'a>,
    session: &Session,
) -> Result<()> {
    let scope = packet.header.source_id;
    while content.remaining() >= 4 {
        let id = content.u16()?;
        if id == 0 {
            // Zeroed tail: alignment padding, not a record.
            break;
        }
        let field_count = content.u16()?;

        if field_count == 0 {
            debug!(template_id = id, "template withdrawn");
            session.remove_template(scope, id);
            packet.withdrawals.push(id);
            continue;
        }

        let mut fields = FieldSpecs::new();
        for _ in 0..field_count {
            fields.push(FieldSpec::new(content.u16()?, content.u16()?));
        }

        let template = DataTemplate { id, fields };
        trace!(template_id = id, fields = field_count, "registered template");
        session.add_template(scope, Template::Data(template.clone()));
        packet.templates.push(template);
    }
    Ok(())
}

/// Options Template FlowSet (id 1). Unlike IPFIX, v9 declares the
/// scope and option portions as *byte* lengths; each specifier is four
/// bytes.
fn read_options_templates<'a>(
    content: &mut Reader<'a>,
    packet: &mut Packet<'a>,
    session: &Session,
) -> Result<()> {
    let scope = packet.header.source_id;
    while content.remaining() >= 6 {
        let id = content.u16()?;
        if id == 0 {
            // Zeroed tail: alignment padding, not a record.
            break;
        }
        let scope_length = content.u16()?;
        let options_length = content.u16()?;

        if scope_length % 4 != 0 || options_length % 4 != 0 {
            return Err(Error::protocol(
                VERSION,
                format!(
                    "options template {id} scope/options byte lengths {scope_length}/{options_length} not a multiple of 4"
                ),
            ));
        }
        if scope_length == 0 {
            return Err(Error::protocol(
                VERSION,
                format!("options template {id} has no scope fields"),
            ));
        }

        let mut scope_fields = FieldSpecs::new();
        for _ in 0..scope_length / 4 {
            scope_fields.push(FieldSpec::new(content.u16()?, content.u16()?));
        }
        let mut fields = FieldSpecs::new();
        for _ in 0..options_length / 4 {
            fields.push(FieldSpec::new(content.u16()?, content.u16()?));
        }

        let template = OptionsTemplate {
            id,
            scope_fields,
            fields,
        };
        trace!(template_id = id, "registered options template");
        session.add_template(scope, Template::Options(template.clone()));
        packet.options_templates.push(template);
    }
    Ok(())
}

/// Data FlowSet (id >= 256): fixed-size records until only padding is
/// left. Unknown templates leave the payload opaque for the consumer.
fn read_data_set<'a>(
    content: &mut Reader<'a>,
    set_header: FlowSetHeader,
    packet: &mut Packet<'a>,
    session: &Session,
) -> Result<()> {
    debug_assert!(set_header.id >= MIN_DATA_SET_ID);
    let scope = packet.header.source_id;

    let Some(template) = session.get_template(scope, set_header.id) else {
        debug!(
            template_id = set_header.id,
            bytes = content.remaining(),
            "no template for data flowset, keeping raw bytes"
        );
        packet.data_sets.push(DataSet::Unresolved {
            template_id: set_header.id,
            bytes: content.rest(),
        });
        return Ok(());
    };

    // v9 templates are always fixed size.
    let size = template.record_size().unwrap_or(0);
    if size == 0 {
        return Err(Error::protocol(
            VERSION,
            format!("template {} describes empty records", set_header.id),
        ));
    }

    let mut records = Vec::new();
    while content.remaining() >= size {
        let mut record = content.sub(size)?;
        records.push(DataRecord::read(&mut record, &template, ScopeStyle::TypeCoded)?);
    }
    // Whatever is left is alignment padding, shorter than one record.

    let set = DataSet::Decoded {
        template_id: set_header.id,
        records,
    };
    match template {
        Template::Data(_) => packet.data_sets.push(set),
        Template::Options(_) => {
            install_options(&set, set_header.id, session);
            packet.options_data_sets.push(set);
        }
    }
    Ok(())
}

/// Install every field of an options-data record into the session,
/// keyed by the record's scope values. The v9 scope specifier type *is*
/// the scope kind (system, interface, ...); the scope field value is
/// the index, e.g. an interface number. This is how per-sampler
/// metadata (sampler id / mode / random interval, sampling interval)
/// becomes visible to [`Session::get_option`].
fn install_options(set: &DataSet<'_>, template_id: u16, session: &Session) {
    for record in set.records() {
        for scope_value in record.scope_values() {
            let scope = OptionScope::new(
                ScopeKind::from_wire(scope_value.spec.id),
                scope_value.bytes_as_u64() as u32,
            );
            for field in record.fields() {
                session.set_option(SessionOption {
                    template_id,
                    scope,
                    enterprise: field.spec.enterprise,
                    field_id: field.spec.id,
                    value: field.value.clone().map(|v| v.into_owned()),
                    bytes: field.bytes.to_vec(),
                });
            }
        }
    }
}
