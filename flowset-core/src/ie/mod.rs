//! The Information Element registry.
//!
//! Maps `(enterprise number, field id)` to a named, typed Information
//! Element. The registry is process wide: it is built once from the
//! bundled catalogues (IANA, CERT/SiLK PEN 6871, Cisco AVC PEN 9) and is
//! read-only at steady state. Consumers may add vendor elements with
//! [`register`] before the first decode; re-registering an existing key
//! is rejected with [`Error::DuplicateElement`](crate::Error).
//!
//! A lookup miss is not an error — the field is simply surfaced without
//! a translated value.

mod cert;
mod cisco;
mod iana;

use std::collections::HashMap;
use std::sync::OnceLock;

use compact_str::CompactString;
use parking_lot::RwLock;

use crate::error::{Error, Result};

pub use cert::PEN_CERT;
pub use cisco::PEN_CISCO;

/// The IPFIX abstract data type of an Information Element, per the
/// RFC 5102 / IANA type registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Unknown,
    Unsigned8,
    Unsigned16,
    Unsigned32,
    Unsigned64,
    Signed8,
    Signed16,
    Signed32,
    Signed64,
    Float32,
    Float64,
    Boolean,
    MacAddress,
    OctetArray,
    String,
    DateTimeSeconds,
    DateTimeMilliseconds,
    DateTimeMicroseconds,
    DateTimeNanoseconds,
    Ipv4Address,
    Ipv6Address,
}

/// A single entry in the Information Element registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InformationElement {
    /// Private Enterprise Number; 0 for IANA-assigned elements.
    pub enterprise: u32,
    /// Field id, unique within the enterprise namespace.
    pub id: u16,
    pub name: CompactString,
    pub ty: FieldType,
}

impl InformationElement {
    pub fn new(enterprise: u32, id: u16, name: impl Into<CompactString>, ty: FieldType) -> Self {
        Self {
            enterprise,
            id,
            name: name.into(),
            ty,
        }
    }
}

/// Catalogue of Information Elements keyed by `(enterprise, field id)`.
#[derive(Debug, Default)]
pub struct Registry {
    elements: HashMap<(u32, u16), InformationElement>,
}

impl Registry {
    /// An empty registry. Most callers want [`lookup`]/[`register`],
    /// which operate on the process-wide instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the bundled catalogues.
    pub fn with_builtin() -> Self {
        let mut reg = Self::new();
        iana::populate(&mut reg);
        cert::populate(&mut reg);
        cisco::populate(&mut reg);
        reg
    }

    pub fn lookup(&self, enterprise: u32, id: u16) -> Option<&InformationElement> {
        self.elements.get(&(enterprise, id))
    }

    /// Add an element; rejects duplicates.
    pub fn register(&mut self, element: InformationElement) -> Result<()> {
        let key = (element.enterprise, element.id);
        if self.elements.contains_key(&key) {
            return Err(Error::DuplicateElement {
                enterprise: element.enterprise,
                id: element.id,
            });
        }
        self.elements.insert(key, element);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Bulk insert used by the bundled catalogues; the tables are
    /// disjoint by construction so duplicates need not be checked.
    pub(crate) fn insert_builtin(
        &mut self,
        enterprise: u32,
        table: &[(u16, &'static str, FieldType)],
    ) {
        for &(id, name, ty) in table {
            self.elements
                .insert((enterprise, id), InformationElement::new(enterprise, id, name, ty));
        }
    }
}

fn global() -> &'static RwLock<Registry> {
    static REGISTRY: OnceLock<RwLock<Registry>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(Registry::with_builtin()))
}

/// Look up an element in the process-wide registry.
pub fn lookup(enterprise: u32, id: u16) -> Option<InformationElement> {
    global().read().lookup(enterprise, id).cloned()
}

/// Register an additional element in the process-wide registry. Call
/// before the first decode; existing keys (including the bundled
/// catalogues) are rejected.
pub fn register(element: InformationElement) -> Result<()> {
    global().write().register(element)
}
