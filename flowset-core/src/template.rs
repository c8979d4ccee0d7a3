//! Templates: the field-layout descriptors that make v9 and IPFIX data
//! sets parseable.
//!
//! A template id is only meaningful within its observation scope (the
//! v9 `SourceID` / IPFIX observation domain); the session stores
//! templates keyed by `(scope, template id)`. Data templates and
//! options templates are distinct variants so the data-set resolution
//! site can pattern match instead of downcasting.

use smallvec::SmallVec;

/// A single field specifier from a (options) template record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Information Element id. The IPFIX enterprise bit is already
    /// stripped; see [`FieldSpec::enterprise`].
    pub id: u16,
    /// Declared field length in octets; [`FieldSpec::VARIABLE`] means
    /// variable-length encoding on the wire (IPFIX only).
    pub length: u16,
    /// Private Enterprise Number, 0 for IANA elements. Always 0 for
    /// NetFlow v9 templates.
    pub enterprise: u32,
}

impl FieldSpec {
    /// Wire length value marking an IPFIX variable-length element.
    pub const VARIABLE: u16 = 0xffff;

    pub fn new(id: u16, length: u16) -> Self {
        Self {
            id,
            length,
            enterprise: 0,
        }
    }

    pub fn enterprise(id: u16, length: u16, enterprise: u32) -> Self {
        Self {
            id,
            length,
            enterprise,
        }
    }

    #[inline]
    pub fn is_variable(&self) -> bool {
        self.length == Self::VARIABLE
    }
}

/// Inline storage for field specifier lists; flow templates rarely
/// exceed a couple dozen fields.
pub type FieldSpecs = SmallVec<[FieldSpec; 16]>;

/// A template record announcing the layout of ordinary flow data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTemplate {
    pub id: u16,
    pub fields: FieldSpecs,
}

/// An options template record: scope fields describing *what* the
/// record applies to, followed by the option fields themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsTemplate {
    pub id: u16,
    pub scope_fields: FieldSpecs,
    pub fields: FieldSpecs,
}

/// Either kind of template, as stored in the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    Data(DataTemplate),
    Options(OptionsTemplate),
}

impl Template {
    pub fn id(&self) -> u16 {
        match self {
            Template::Data(t) => t.id,
            Template::Options(t) => t.id,
        }
    }

    /// Scope specifiers, empty for data templates.
    pub fn scope_fields(&self) -> &[FieldSpec] {
        match self {
            Template::Data(_) => &[],
            Template::Options(t) => &t.scope_fields,
        }
    }

    /// Non-scope field specifiers.
    pub fn fields(&self) -> &[FieldSpec] {
        match self {
            Template::Data(t) => &t.fields,
            Template::Options(t) => &t.fields,
        }
    }

    /// Does any field use variable-length encoding?
    pub fn is_variable_length(&self) -> bool {
        self.scope_fields()
            .iter()
            .chain(self.fields())
            .any(FieldSpec::is_variable)
    }

    /// The fixed wire size of one record described by this template, or
    /// `None` when a field is variable-length.
    pub fn record_size(&self) -> Option<usize> {
        if self.is_variable_length() {
            return None;
        }
        Some(
            self.scope_fields()
                .iter()
                .chain(self.fields())
                .map(|f| usize::from(f.length))
                .sum(),
        )
    }
}
