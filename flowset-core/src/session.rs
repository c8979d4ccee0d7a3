//! Per-exporter decode state: the template cache and the option store.
//!
//! Template ids are only unique within an observation scope (the v9
//! `SourceID` or the IPFIX observation domain id), so templates are
//! keyed by `(scope, template id)`. Options extracted from options-data
//! records are keyed by `(enterprise, field id)` and then by their
//! scope, with a fallback to the system scope on lookup.
//!
//! A [`Session`] is internally synchronised: the v9/IPFIX parsers take
//! the write path while registering templates and options, the read
//! path while resolving data sets. Template updates from a datagram are
//! visible to data sets later in the same datagram. Sharing one session
//! across threads that decode datagrams from the same exporter is safe;
//! ordering across datagrams is whatever the network delivered.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::template::Template;
use crate::translate::OwnedFieldValue;

/// Option scope types, RFC 3954 section 6.1.
pub const SCOPE_SYSTEM: u16 = 1;
pub const SCOPE_INTERFACE: u16 = 2;
pub const SCOPE_LINE_CARD: u16 = 3;
pub const SCOPE_CACHE: u16 = 4;
pub const SCOPE_TEMPLATE: u16 = 5;

/// What an option applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    System,
    Interface,
    LineCard,
    Cache,
    Template,
    Other(u16),
}

impl ScopeKind {
    pub fn from_wire(ty: u16) -> Self {
        match ty {
            SCOPE_SYSTEM => ScopeKind::System,
            SCOPE_INTERFACE => ScopeKind::Interface,
            SCOPE_LINE_CARD => ScopeKind::LineCard,
            SCOPE_CACHE => ScopeKind::Cache,
            SCOPE_TEMPLATE => ScopeKind::Template,
            other => ScopeKind::Other(other),
        }
    }

    pub fn wire(&self) -> u16 {
        match self {
            ScopeKind::System => SCOPE_SYSTEM,
            ScopeKind::Interface => SCOPE_INTERFACE,
            ScopeKind::LineCard => SCOPE_LINE_CARD,
            ScopeKind::Cache => SCOPE_CACHE,
            ScopeKind::Template => SCOPE_TEMPLATE,
            ScopeKind::Other(other) => *other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScopeKind::System => "system",
            ScopeKind::Interface => "interface",
            ScopeKind::LineCard => "line card",
            ScopeKind::Cache => "cache",
            ScopeKind::Template => "template",
            ScopeKind::Other(_) => "unknown",
        }
    }
}

/// The canonical option key: a scope type plus the value of the scope
/// field (e.g. an interface index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionScope {
    pub kind: ScopeKind,
    pub index: u32,
}

impl OptionScope {
    pub fn new(kind: ScopeKind, index: u32) -> Self {
        Self { kind, index }
    }

    pub fn system() -> Self {
        Self::new(ScopeKind::System, 0)
    }
}

/// Exporter metadata extracted from an options-data record, e.g. the
/// sampling interval a given interface applies.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOption {
    /// The options template that produced this option.
    pub template_id: u16,
    pub scope: OptionScope,
    pub enterprise: u32,
    pub field_id: u16,
    /// Translated value, detached from its datagram.
    pub value: Option<OwnedFieldValue>,
    /// Raw wire bytes, always present.
    pub bytes: Vec<u8>,
}

#[derive(Debug, Default)]
struct State {
    /// Templates keyed by `(scope id, template id)`.
    templates: HashMap<(u32, u16), Template>,
    /// Options keyed by `(enterprise, field id)`, then by scope.
    options: HashMap<(u32, u16), HashMap<OptionScope, SessionOption>>,
}

/// Decode state for one exporter.
#[derive(Debug, Default)]
pub struct Session {
    state: RwLock<State>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a template. Re-announcement with an
    /// identical field list is a no-op by value; a differing field list
    /// replaces the entry (exporters reconfigure).
    pub fn add_template(&self, scope: u32, template: Template) {
        let mut state = self.state.write();
        state.templates.insert((scope, template.id()), template);
    }

    pub fn get_template(&self, scope: u32, id: u16) -> Option<Template> {
        self.state.read().templates.get(&(scope, id)).cloned()
    }

    /// Handle a template withdrawal. Returns whether an entry existed.
    pub fn remove_template(&self, scope: u32, id: u16) -> bool {
        self.state.write().templates.remove(&(scope, id)).is_some()
    }

    pub fn template_count(&self) -> usize {
        self.state.read().templates.len()
    }

    /// Install an option, replacing any previous value for the same
    /// `(enterprise, field id, scope)`.
    pub fn set_option(&self, option: SessionOption) {
        let mut state = self.state.write();
        state
            .options
            .entry((option.enterprise, option.field_id))
            .or_default()
            .insert(option.scope, option);
    }

    /// Look up an option: exact `(kind, index)` first, then the system
    /// scope, then none.
    pub fn get_option(
        &self,
        enterprise: u32,
        field_id: u16,
        kind: ScopeKind,
        index: u32,
    ) -> Option<SessionOption> {
        let state = self.state.read();
        let by_scope = state.options.get(&(enterprise, field_id))?;
        by_scope
            .get(&OptionScope::new(kind, index))
            .or_else(|| by_scope.get(&OptionScope::system()))
            .cloned()
    }
}

/// Sessions for a collector handling many exporters, keyed by the
/// exporter's source address. Template state from different exporters
/// must never mix, even when they use the same observation domain ids.
#[derive(Debug, Default)]
pub struct SessionMap {
    sessions: RwLock<HashMap<IpAddr, Arc<Session>>>,
}

impl SessionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The session for `exporter`, created on first sight.
    pub fn get_or_create(&self, exporter: IpAddr) -> Arc<Session> {
        if let Some(session) = self.sessions.read().get(&exporter) {
            return Arc::clone(session);
        }
        let mut sessions = self.sessions.write();
        Arc::clone(sessions.entry(exporter).or_default())
    }

    /// Drop an exporter's state; template expiry policy is the
    /// collector's call, not the decoder's.
    pub fn evict(&self, exporter: IpAddr) -> bool {
        self.sessions.write().remove(&exporter).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{DataTemplate, FieldSpec, Template};
    use crate::translate::FieldValue;

    fn template(id: u16, fields: &[(u16, u16)]) -> Template {
        Template::Data(DataTemplate {
            id,
            fields: fields.iter().map(|&(t, l)| FieldSpec::new(t, l)).collect(),
        })
    }

    #[test]
    fn test_template_lifecycle() {
        let session = Session::new();
        let first = template(256, &[(8, 4), (12, 4)]);

        session.add_template(1, first.clone());
        assert_eq!(session.get_template(1, 256), Some(first.clone()));

        // Idempotent re-announcement.
        session.add_template(1, first.clone());
        assert_eq!(session.template_count(), 1);

        // Re-announcement with different fields replaces.
        let second = template(256, &[(12, 4), (8, 4)]);
        session.add_template(1, second.clone());
        assert_eq!(session.get_template(1, 256), Some(second));

        // Withdrawal.
        assert!(session.remove_template(1, 256));
        assert!(!session.remove_template(1, 256));
        assert_eq!(session.get_template(1, 256), None);
    }

    #[test]
    fn test_templates_are_scoped_per_domain() {
        let session = Session::new();
        let a = template(256, &[(8, 4)]);
        let b = template(256, &[(12, 4)]);

        session.add_template(1, a.clone());
        session.add_template(2, b.clone());

        assert_eq!(session.get_template(1, 256), Some(a));
        assert_eq!(session.get_template(2, 256), Some(b));
        assert_eq!(session.get_template(3, 256), None);
    }

    #[test]
    fn test_option_scope_fallback() {
        let session = Session::new();
        session.set_option(SessionOption {
            template_id: 300,
            scope: OptionScope::new(ScopeKind::Interface, 7),
            enterprise: 0,
            field_id: 34,
            value: Some(FieldValue::UInt32(1000)),
            bytes: vec![0, 0, 0x03, 0xe8],
        });

        // Exact scope hit.
        let opt = session
            .get_option(0, 34, ScopeKind::Interface, 7)
            .expect("interface-scoped option");
        assert_eq!(opt.value, Some(FieldValue::UInt32(1000)));

        // Another interface does not fall back to interface 7, and no
        // system-scope value exists yet.
        assert!(session.get_option(0, 34, ScopeKind::Interface, 9).is_none());
        assert!(session.get_option(0, 34, ScopeKind::System, 0).is_none());

        // Once a system-scope value is set, unmatched scopes fall back
        // to it.
        session.set_option(SessionOption {
            template_id: 300,
            scope: OptionScope::system(),
            enterprise: 0,
            field_id: 34,
            value: Some(FieldValue::UInt32(100)),
            bytes: vec![0, 0, 0, 0x64],
        });
        let fallback = session
            .get_option(0, 34, ScopeKind::Interface, 9)
            .expect("system fallback");
        assert_eq!(fallback.value, Some(FieldValue::UInt32(100)));

        // The exact match still wins over the fallback.
        let exact = session.get_option(0, 34, ScopeKind::Interface, 7).unwrap();
        assert_eq!(exact.value, Some(FieldValue::UInt32(1000)));
    }

    #[test]
    fn test_session_map_isolation() {
        let map = SessionMap::new();
        let a: IpAddr = "192.0.2.1".parse().unwrap();
        let b: IpAddr = "192.0.2.2".parse().unwrap();

        map.get_or_create(a)
            .add_template(1, template(256, &[(8, 4)]));

        assert!(map.get_or_create(a).get_template(1, 256).is_some());
        assert!(map.get_or_create(b).get_template(1, 256).is_none());
        assert_eq!(map.len(), 2);

        assert!(map.evict(a));
        assert!(map.get_or_create(a).get_template(1, 256).is_none());
    }

    #[test]
    fn test_scope_kind_wire_round_trip() {
        for ty in 1..=6u16 {
            assert_eq!(ScopeKind::from_wire(ty).wire(), ty);
        }
        assert_eq!(ScopeKind::from_wire(2), ScopeKind::Interface);
        assert_eq!(ScopeKind::from_wire(99), ScopeKind::Other(99));
    }
}
