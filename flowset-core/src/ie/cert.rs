//! CERT NetSA (SiLK/YAF) Information Elements, PEN 6871.
//!
//! See <https://tools.netsa.cert.org/silk/faq.html#ipfix-fields>.

use super::FieldType::{self, *};
use super::Registry;

/// CERT NetSA Private Enterprise Number.
pub const PEN_CERT: u32 = 6871;

#[rustfmt::skip]
const CERT: &[(u16, &str, FieldType)] = &[
    (14, "initialTCPFlags",              Unsigned8),
    (15, "unionTCPFlags",                Unsigned8),
    (21, "reverseFlowDeltaMilliseconds", DateTimeMilliseconds),
    (22, "silkTCPState",                 Unsigned8),
    (30, "silkFlowType",                 Unsigned8),
    (31, "silkFlowSensor",               Unsigned8),
    (33, "silkAppLabel",                 Unsigned8),
    (40, "flowAttributes",               Unsigned16),
];

pub(super) fn populate(reg: &mut Registry) {
    reg.insert_builtin(PEN_CERT, CERT);
}
