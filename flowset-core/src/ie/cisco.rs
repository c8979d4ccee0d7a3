//! Cisco AVC Information Elements, PEN 9.
//!
//! Application Visibility and Control export parameters, see
//! <http://docwiki.cisco.com/wiki/AVC-Export:Monitoring>. The ART
//! (application response time) counters dominate this namespace.

use super::FieldType::{self, *};
use super::Registry;

/// Cisco Systems Private Enterprise Number.
pub const PEN_CISCO: u32 = 9;

#[rustfmt::skip]
const CISCO: &[(u16, &str, FieldType)] = &[
    (8232,  "policyQosClassificationHierarchy",  Unsigned32),
    (9252,  "waasOptimizationSegment",           Unsigned8),
    (9265,  "artClientPackets",                  Unsigned64),
    (9266,  "artServerPackets",                  Unsigned64),
    (9268,  "artCountRetransmissions",           Unsigned32),
    (9272,  "artCountTransactions",              Unsigned32),
    (9273,  "artTotalTransactionTimeSum",        Unsigned32),
    (9274,  "artTotalTransactionTimeMaximum",    Unsigned32),
    (9275,  "artTotalTransactionTimeMinimum",    Unsigned32),
    (9282,  "artCountNewConnections",            Unsigned32),
    (9292,  "artCountResponses",                 Unsigned32),
    (9293,  "artCountResponsesHistogramBucket1", Unsigned32),
    (9294,  "artCountResponsesHistogramBucket2", Unsigned32),
    (9295,  "artCountResponsesHistogramBucket3", Unsigned32),
    (9296,  "artCountResponsesHistogramBucket4", Unsigned32),
    (9297,  "artCountResponsesHistogramBucket5", Unsigned32),
    (9298,  "artCountResponsesHistogramBucket6", Unsigned32),
    (9299,  "artCountResponsesHistogramBucket7", Unsigned32),
    (9300,  "artCountLateResponses",             Unsigned32),
    (9303,  "artResponseTimeSum",                Unsigned32),
    (9304,  "artResponseTimeMaximum",            Unsigned32),
    (9305,  "artResponseTimeMinimum",            Unsigned32),
    (9306,  "artServerResponseTimeSum",          Unsigned32),
    (9307,  "artServerResponseTimeMaximum",      Unsigned32),
    (9308,  "artServerResponseTimeMinimum",      Unsigned32),
    (9309,  "artTotalResponseTimeSum",           Unsigned32),
    (9310,  "artTotalResponseTimeMaximum",       Unsigned32),
    (9311,  "artTotalResponseTimeMinimum",       Unsigned32),
    (9313,  "artNetworkTimeSum",                 Unsigned32),
    (9314,  "artNetworkTimeMaximum",             Unsigned32),
    (9315,  "artNetworkTimeMinimum",             Unsigned32),
    (9316,  "artClientNetworkTimeSum",           Unsigned32),
    (9317,  "artClientNetworkTimeMaximum",       Unsigned32),
    (9318,  "artClientNetworkTimeMinimum",       Unsigned32),
    (9319,  "artServerNetworkTimeSum",           Unsigned32),
    (9320,  "artServerNetworkTimeMaximum",       Unsigned32),
    (9321,  "artServerNetworkTimeMinimum",       Unsigned32),
    (9357,  "applicationHttpUriStatistics",      OctetArray),
    (9360,  "policyQosQueueIndex",               Unsigned32),
    (9361,  "policyQosQueueDrops",               Unsigned64),
    (12232, "applicationCategoryName",           Unsigned32),
    (12233, "applicationSubCategoryName",        Unsigned32),
    (12234, "applicationGroupName",              Unsigned32),
    (12235, "applicationHttpUserAgent",          OctetArray),
    (12243, "applicationTrafficClass",           Unsigned32),
    (12244, "applicationBusinessRelevance",      Unsigned32),
    (32733, "timestampAbsoluteMonitoringInterval", Unsigned64),
];

pub(super) fn populate(reg: &mut Registry) {
    reg.insert_builtin(PEN_CISCO, CISCO);
}
