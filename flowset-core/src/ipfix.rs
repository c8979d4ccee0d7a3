//! IPFIX (RFC 7011), wire version 10.
//!
//! An IPFIX message is a 16-byte header followed by Sets. Template Sets
//! (id 2) and Options Template Sets (id 3) announce layouts; Data Sets
//! (id >= 256) are decoded against the template registered under the
//! message's observation domain. Field specifiers may carry a Private
//! Enterprise Number (high bit of the element id), and a declared field
//! length of 0xffff selects variable-length encoding on the wire.
//!
//! Unlike v9, the header's length field is authoritative: exactly
//! `length - 16` bytes of set payload are consumed, and bytes beyond it
//! are ignored.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::read::Reader;
use crate::record::{DataRecord, DataSet, ScopeStyle};
use crate::session::{OptionScope, ScopeKind, Session, SessionOption};
use crate::template::{DataTemplate, FieldSpec, FieldSpecs, OptionsTemplate, Template};

pub const VERSION: u16 = 10;

/// Enterprise-present flag in the field specifier's element id.
const ENTERPRISE_BIT: u16 = 0x8000;

/// IPFIX message header (RFC 7011 section 3.1).
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |       Version Number          |            Length             |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                           Export Time                         |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                       Sequence Number                         |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                    Observation Domain ID                      |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHeader {
    pub version: u16,
    /// Total message length in octets, header included. Authoritative.
    pub length: u16,
    /// Seconds since the UNIX epoch when the message left the exporter.
    pub export_time: u32,
    pub sequence_number: u32,
    /// The observation scope for template ids in this message.
    pub observation_domain_id: u32,
}

impl MessageHeader {
    pub const SIZE: usize = 16;

    fn read(r: &mut Reader<'_>) -> Result<Self> {
        let header = Self {
            version: r.u16()?,
            length: r.u16()?,
            export_time: r.u32()?,
            sequence_number: r.u32()?,
            observation_domain_id: r.u32()?,
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
        out[2..4].copy_from_slice(&self.length.to_be_bytes());
        out[4..8].copy_from_slice(&self.export_time.to_be_bytes());
        out[8..12].copy_from_slice(&self.sequence_number.to_be_bytes());
        out[12..16].copy_from_slice(&self.observation_domain_id.to_be_bytes());
        out
    }
}

/// Set header common to all set types (RFC 7011 section 3.3.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetHeader {
    pub id: u16,
    /// Total set length including this header and optional padding.
    pub length: u16,
}

impl SetHeader {
    pub const SIZE: usize = 4;

    fn read(r: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            id: r.u16()?,
            length: r.u16()?,
        })
    }
}

/// A decoded IPFIX message.
#[derive(Debug, Clone, PartialEq)]
pub struct Message<'a> {
    pub header: MessageHeader,
    /// Template records announced in this message.
    pub templates: Vec<DataTemplate>,
    /// Options template records announced in this message.
    pub options_templates: Vec<OptionsTemplate>,
    /// Template ids withdrawn in this message (field count zero).
    pub withdrawals: Vec<u16>,
    /// Ordinary data sets.
    pub data_sets: Vec<DataSet<'a>>,
    /// Data sets produced from options templates.
    pub options_data_sets: Vec<DataSet<'a>>,
}

/// Decode one IPFIX message, consulting and updating `session` for
/// template state under the header's observation domain id.
pub fn read<'a>(data: &'a [u8], session: &Session) -> Result<Message<'a>> {
    let mut r = Reader::new(data);
    let header = MessageHeader::read(&mut r)?;
    if usize::from(header.length) < MessageHeader::SIZE {
        return Err(Error::protocol(
            VERSION,
            format!(
                "message length {} below the header size",
                header.length
            ),
        ));
    }
    trace!(
        length = header.length,
        sequence = header.sequence_number,
        domain = header.observation_domain_id,
        "decoding ipfix message"
    );

    // The length field is authoritative: consume exactly that much,
    // never trailing bytes the transport may have tacked on.
    let mut payload = r.sub(usize::from(header.length) - MessageHeader::SIZE)?;

    let mut message = Message {
        header,
        templates: Vec::new(),
        options_templates: Vec::new(),
        withdrawals: Vec::new(),
        data_sets: Vec::new(),
        options_data_sets: Vec::new(),
    };

    while !payload.is_empty() {
        let set_header = SetHeader::read(&mut payload)?;
        if usize::from(set_header.length) < SetHeader::SIZE {
            return Err(Error::protocol(
                VERSION,
                format!(
                    "set {} declares length {} below the set header size",
                    set_header.id, set_header.length
                ),
            ));
        }
        let mut content = payload.sub(usize::from(set_header.length) - SetHeader::SIZE)?;

        match set_header.id {
            0 | 1 => {
                // NetFlow v9 set ids; not valid in an IPFIX stream.
                return Err(Error::protocol(
                    VERSION,
                    format!("received legacy set id {}", set_header.id),
                ));
            }
            2 => read_templates(&mut content, &mut message, session)?,
            3 => read_options_templates(&mut content, &mut message, session)?,
            4..=255 => {
                // Reserved for future use; silently dropped.
                debug!(set_id = set_header.id, "dropping reserved set");
            }
            _ => read_data_set(&mut content, set_header, &mut message, session)?,
        }
    }

    Ok(message)
}

/// Read one field specifier: element id (with optional enterprise
/// number behind the high bit) and length.
fn read_field_spec(r: &mut Reader<'_>) -> Result<FieldSpec> {
    let raw_id = r.u16()?;
    let length = r.u16()?;
    if raw_id & ENTERPRISE_BIT != 0 {
        let enterprise = r.u32()?;
        Ok(FieldSpec::enterprise(raw_id ^ ENTERPRISE_BIT, length, enterprise))
    } else {
        Ok(FieldSpec::new(raw_id, length))
    }
}

/// Template Set (id 2): template records until only padding is left.
fn read_templates<'a>(
    content: &mut Reader<'a>,
    message: &mut Message<'a>,
    session: &Session,
) -> Result<()> {
    let scope = message.header.observation_domain_id;
    while content.remaining() >= 4 {
        let id = content.u16()?;
        if id == 0 {
            // Zeroed tail: alignment padding, not a record.
            break;
        }
        let field_count = content.u16()?;

        if field_count == 0 {
            // Template withdrawal, RFC 7011 section 8.1.
            debug!(template_id = id, "template withdrawn");
            session.remove_template(scope, id);
            message.withdrawals.push(id);
            continue;
        }

        let mut fields = FieldSpecs::new();
        for _ in 0..field_count {
            fields.push(read_field_spec(content)?);
        }

        let template = DataTemplate { id, fields };
        trace!(template_id = id, fields = field_count, "registered template");
        session.add_template(scope, Template::Data(template.clone()));
        message.templates.push(template);
    }
    Ok(())
}

/// Options Template Set (id 3). IPFIX declares a total field count and
/// a scope field count; the scope specifiers come first in one
/// contiguous list.
fn read_options_templates<'a>(
    content: &mut Reader<'a>,
    message: &mut Message<'a>,
    session: &Session,
) -> Result<()> {
    let scope = message.header.observation_domain_id;
    while content.remaining() >= 4 {
        let id = content.u16()?;
        if id == 0 {
            // Zeroed tail: alignment padding, not a record.
            break;
        }
        let field_count = content.u16()?;

        if field_count == 0 {
            debug!(template_id = id, "options template withdrawn");
            session.remove_template(scope, id);
            message.withdrawals.push(id);
            continue;
        }

        let scope_field_count = content.u16()?;
        if scope_field_count > field_count {
            return Err(Error::protocol(
                VERSION,
                format!(
                    "options template {id} scope field count {scope_field_count} higher than field count {field_count}"
                ),
            ));
        }
        if scope_field_count == 0 {
            return Err(Error::protocol(
                VERSION,
                format!("options template {id} has no scope fields"),
            ));
        }

        let mut scope_fields = FieldSpecs::new();
        for _ in 0..scope_field_count {
            scope_fields.push(read_field_spec(content)?);
        }
        let mut fields = FieldSpecs::new();
        for _ in 0..field_count - scope_field_count {
            fields.push(read_field_spec(content)?);
        }

        let template = OptionsTemplate {
            id,
            scope_fields,
            fields,
        };
        trace!(template_id = id, "registered options template");
        session.add_template(scope, Template::Options(template.clone()));
        message.options_templates.push(template);
    }
    Ok(())
}

/// Data Set (id >= 256): records until only padding (at most three
/// bytes) is left. A record cut short by the declared set length is a
/// framing error, not a short buffer.
fn read_data_set<'a>(
    content: &mut Reader<'a>,
    set_header: SetHeader,
    message: &mut Message<'a>,
    session: &Session,
) -> Result<()> {
    let scope = message.header.observation_domain_id;

    let Some(template) = session.get_template(scope, set_header.id) else {
        debug!(
            template_id = set_header.id,
            bytes = content.remaining(),
            "no template for data set, keeping raw bytes"
        );
        message.data_sets.push(DataSet::Unresolved {
            template_id: set_header.id,
            bytes: content.rest(),
        });
        return Ok(());
    };

    let framing_error = |residue: usize| {
        Error::protocol(
            VERSION,
            format!(
                "data set {} truncated mid-record with {residue} residual bytes",
                set_header.id
            ),
        )
    };

    let mut records = Vec::new();
    match template.record_size() {
        // The length words are unconstrained on the wire; a template
        // whose fields sum to nothing can never describe a record.
        Some(0) => {
            return Err(Error::protocol(
                VERSION,
                format!("template {} describes empty records", set_header.id),
            ));
        }
        // Fixed-size records: consume whole records by the template's
        // wire size. The residue must be padding, at most three bytes.
        Some(size) => {
            while content.remaining() >= size {
                let mut record = content.sub(size)?;
                records.push(DataRecord::read(&mut record, &template, ScopeStyle::Element)?);
            }
            if content.remaining() > 3 {
                return Err(framing_error(content.remaining()));
            }
        }
        // Variable-length records: each attempt consumes at least the
        // length prefix, so keep reading until the payload runs dry. A
        // record cut short by the set boundary is padding only when at
        // most three bytes were left before the attempt.
        None => {
            while !content.is_empty() {
                let residue = content.remaining();
                match DataRecord::read(content, &template, ScopeStyle::Element) {
                    Ok(record) => records.push(record),
                    Err(Error::ShortBuffer { .. }) if residue <= 3 => break,
                    Err(Error::ShortBuffer { .. }) => return Err(framing_error(residue)),
                    Err(other) => return Err(other),
                }
            }
        }
    }

    let set = DataSet::Decoded {
        template_id: set_header.id,
        records,
    };
    match template {
        Template::Data(_) => message.data_sets.push(set),
        Template::Options(_) => {
            install_options(&set, set_header.id, session);
            message.options_data_sets.push(set);
        }
    }
    Ok(())
}

/// Map an IPFIX scope field to the canonical option scope. Scope fields
/// are ordinary elements here (unlike v9's type-coded scopes); the
/// interface, line card and template elements carry their value as the
/// scope index, anything else collapses to the system scope.
fn scope_for_field(enterprise: u32, id: u16, index: u32) -> Option<OptionScope> {
    if enterprise != 0 {
        return None;
    }
    match id {
        // ingressInterface / egressInterface / physical variants.
        10 | 14 | 252 | 253 => Some(OptionScope::new(ScopeKind::Interface, index)),
        // lineCardId
        141 => Some(OptionScope::new(ScopeKind::LineCard, index)),
        // templateId
        145 => Some(OptionScope::new(ScopeKind::Template, index)),
        _ => None,
    }
}

/// Install every field of an options-data record into the session, so
/// sampler metadata announced per scope is visible to
/// [`Session::get_option`].
fn install_options(set: &DataSet<'_>, template_id: u16, session: &Session) {
    for record in set.records() {
        let mut scopes: Vec<OptionScope> = record
            .scope_values()
            .iter()
            .filter_map(|s| {
                scope_for_field(s.spec.enterprise, s.spec.id, s.bytes_as_u64() as u32)
            })
            .collect();
        if scopes.is_empty() {
            scopes.push(OptionScope::system());
        }
        for scope in scopes {
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
