//! Decoded data records.
//!
//! Field values borrow from the datagram buffer (zero-copy); the raw
//! bytes are authoritative and the translated value, when the registry
//! knows the element, is derived from them.

use crate::error::Result;
use crate::ie::{self, InformationElement};
use crate::read::Reader;
use crate::template::{FieldSpec, Template};
use crate::translate::{self, FieldValue};

/// How the scope specifiers of an options template are keyed.
///
/// NetFlow v9 scope fields carry a scope *type* (system, interface,
/// line card, cache, template) in the specifier's type word; IPFIX
/// scope fields are ordinary Information Elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScopeStyle {
    TypeCoded,
    Element,
}

/// One field of a decoded data record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordField<'a> {
    pub spec: FieldSpec,
    /// Registry entry for `(spec.enterprise, spec.id)`, if known.
    pub element: Option<InformationElement>,
    /// Raw wire bytes (for variable-length fields, after the length
    /// prefix).
    pub bytes: &'a [u8],
    /// Translated value; `None` when the element is unknown or the
    /// bytes do not fit its type.
    pub value: Option<FieldValue<'a>>,
}

impl<'a> RecordField<'a> {
    /// The element name from the registry, if known.
    pub fn name(&self) -> Option<&str> {
        self.element.as_ref().map(|e| e.name.as_str())
    }

    /// The raw bytes widened to a u64, for short fixed-width fields
    /// such as scope values and interface indexes.
    pub fn bytes_as_u64(&self) -> u64 {
        self.bytes
            .iter()
            .take(8)
            .fold(0u64, |acc, &b| acc << 8 | u64::from(b))
    }
}

/// A decoded data record. Records produced from an options template
/// additionally carry the scope values that precede the option fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DataRecord<'a> {
    template_id: u16,
    scope_fields: Vec<RecordField<'a>>,
    fields: Vec<RecordField<'a>>,
}

impl<'a> DataRecord<'a> {
    pub fn template_id(&self) -> u16 {
        self.template_id
    }

    /// The record's option scope values; empty for ordinary flow
    /// records.
    pub fn scope_values(&self) -> &[RecordField<'a>] {
        &self.scope_fields
    }

    pub fn fields(&self) -> &[RecordField<'a>] {
        &self.fields
    }

    /// Read one record according to `template`, translating each field
    /// through the Information Element registry. Translation failures
    /// are silent and per field; a short buffer is an error.
    pub(crate) fn read(
        r: &mut Reader<'a>,
        template: &Template,
        style: ScopeStyle,
    ) -> Result<Self> {
        let scope_fields = read_fields(r, template.scope_fields(), style == ScopeStyle::TypeCoded)?;
        let fields = read_fields(r, template.fields(), false)?;
        Ok(Self {
            template_id: template.id(),
            scope_fields,
            fields,
        })
    }
}

fn read_fields<'a>(
    r: &mut Reader<'a>,
    specs: &[FieldSpec],
    type_coded_scope: bool,
) -> Result<Vec<RecordField<'a>>> {
    let mut out = Vec::with_capacity(specs.len());
    for &spec in specs {
        let bytes = if spec.is_variable() {
            r.variable()?
        } else {
            r.take(usize::from(spec.length))?
        };
        // v9 scope specifiers carry a scope type, not an element id;
        // the registry does not apply to them.
        let element = if type_coded_scope {
            None
        } else {
            ie::lookup(spec.enterprise, spec.id)
        };
        let value = element.as_ref().and_then(|e| translate::value(bytes, e.ty));
        out.push(RecordField {
            spec,
            element,
            bytes,
            value,
        });
    }
    Ok(out)
}

/// A data set as it appears in the decoded message: either resolved
/// against a known template, or preserved opaquely until the template
/// arrives.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSet<'a> {
    Decoded {
        template_id: u16,
        records: Vec<DataRecord<'a>>,
    },
    /// No template was known for this set id within the observation
    /// scope; the payload is kept so the consumer can replay it once
    /// the template shows up.
    Unresolved { template_id: u16, bytes: &'a [u8] },
}

impl<'a> DataSet<'a> {
    pub fn template_id(&self) -> u16 {
        match self {
            DataSet::Decoded { template_id, .. } => *template_id,
            DataSet::Unresolved { template_id, .. } => *template_id,
        }
    }

    pub fn records(&self) -> &[DataRecord<'a>] {
        match self {
            DataSet::Decoded { records, .. } => records,
            DataSet::Unresolved { .. } => &[],
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, DataSet::Decoded { .. })
    }
}
