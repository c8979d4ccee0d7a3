//! IANA-assigned Information Elements (enterprise number 0).
//!
//! Names and abstract data types follow the IANA "IPFIX Information
//! Elements" registry (originally RFC 5102). Ids 65-69, 97 and 105-127
//! are reserved for NetFlow v9 compatibility and have no IPFIX
//! assignment.

use super::FieldType::{self, *};
use super::Registry;

#[rustfmt::skip]
const IANA: &[(u16, &str, FieldType)] = &[
    (1,   "octetDeltaCount",                  Unsigned64),
    (2,   "packetDeltaCount",                 Unsigned64),
    (3,   "deltaFlowCount",                   Unsigned64),
    (4,   "protocolIdentifier",               Unsigned8),
    (5,   "ipClassOfService",                 Unsigned8),
    (6,   "tcpControlBits",                   Unsigned16),
    (7,   "sourceTransportPort",              Unsigned16),
    (8,   "sourceIPv4Address",                Ipv4Address),
    (9,   "sourceIPv4PrefixLength",           Unsigned8),
    (10,  "ingressInterface",                 Unsigned32),
    (11,  "destinationTransportPort",         Unsigned16),
    (12,  "destinationIPv4Address",           Ipv4Address),
    (13,  "destinationIPv4PrefixLength",      Unsigned8),
    (14,  "egressInterface",                  Unsigned32),
    (15,  "ipNextHopIPv4Address",             Ipv4Address),
    (16,  "bgpSourceAsNumber",                Unsigned32),
    (17,  "bgpDestinationAsNumber",           Unsigned32),
    (18,  "bgpNextHopIPv4Address",            Ipv4Address),
    (19,  "postMCastPacketDeltaCount",        Unsigned64),
    (20,  "postMCastOctetDeltaCount",         Unsigned64),
    (21,  "flowEndSysUpTime",                 Unsigned32),
    (22,  "flowStartSysUpTime",               Unsigned32),
    (23,  "postOctetDeltaCount",              Unsigned64),
    (24,  "postPacketDeltaCount",             Unsigned64),
    (25,  "minimumIpTotalLength",             Unsigned64),
    (26,  "maximumIpTotalLength",             Unsigned64),
    (27,  "sourceIPv6Address",                Ipv6Address),
    (28,  "destinationIPv6Address",           Ipv6Address),
    (29,  "sourceIPv6PrefixLength",           Unsigned8),
    (30,  "destinationIPv6PrefixLength",      Unsigned8),
    (31,  "flowLabelIPv6",                    Unsigned32),
    (32,  "icmpTypeCodeIPv4",                 Unsigned16),
    (33,  "igmpType",                         Unsigned8),
    (34,  "samplingInterval",                 Unsigned32),
    (35,  "samplingAlgorithm",                Unsigned8),
    (36,  "flowActiveTimeout",                Unsigned16),
    (37,  "flowIdleTimeout",                  Unsigned16),
    (38,  "engineType",                       Unsigned8),
    (39,  "engineId",                         Unsigned8),
    (40,  "exportedOctetTotalCount",          Unsigned64),
    (41,  "exportedMessageTotalCount",        Unsigned64),
    (42,  "exportedFlowRecordTotalCount",     Unsigned64),
    (43,  "ipv4RouterSc",                     Ipv4Address),
    (44,  "sourceIPv4Prefix",                 Ipv4Address),
    (45,  "destinationIPv4Prefix",            Ipv4Address),
    (46,  "mplsTopLabelType",                 Unsigned8),
    (47,  "mplsTopLabelIPv4Address",          Ipv4Address),
    (48,  "samplerId",                        Unsigned8),
    (49,  "samplerMode",                      Unsigned8),
    (50,  "samplerRandomInterval",            Unsigned32),
    (51,  "classId",                          Unsigned8),
    (52,  "minimumTTL",                       Unsigned8),
    (53,  "maximumTTL",                       Unsigned8),
    (54,  "fragmentIdentification",           Unsigned32),
    (55,  "postIpClassOfService",             Unsigned8),
    (56,  "sourceMacAddress",                 MacAddress),
    (57,  "postDestinationMacAddress",        MacAddress),
    (58,  "vlanId",                           Unsigned16),
    (59,  "postVlanId",                       Unsigned16),
    (60,  "ipVersion",                        Unsigned8),
    (61,  "flowDirection",                    Unsigned8),
    (62,  "ipNextHopIPv6Address",             Ipv6Address),
    (63,  "bgpNextHopIPv6Address",            Ipv6Address),
    (64,  "ipv6ExtensionHeaders",             Unsigned32),
    (70,  "mplsTopLabelStackSection",         OctetArray),
    (71,  "mplsLabelStackSection2",           OctetArray),
    (72,  "mplsLabelStackSection3",           OctetArray),
    (73,  "mplsLabelStackSection4",           OctetArray),
    (74,  "mplsLabelStackSection5",           OctetArray),
    (75,  "mplsLabelStackSection6",           OctetArray),
    (76,  "mplsLabelStackSection7",           OctetArray),
    (77,  "mplsLabelStackSection8",           OctetArray),
    (78,  "mplsLabelStackSection9",           OctetArray),
    (79,  "mplsLabelStackSection10",          OctetArray),
    (80,  "destinationMacAddress",            MacAddress),
    (81,  "postSourceMacAddress",             MacAddress),
    (82,  "interfaceName",                    String),
    (83,  "interfaceDescription",             String),
    (84,  "samplerName",                      String),
    (85,  "octetTotalCount",                  Unsigned64),
    (86,  "packetTotalCount",                 Unsigned64),
    (87,  "flagsAndSamplerId",                Unsigned32),
    (88,  "fragmentOffset",                   Unsigned16),
    (89,  "forwardingStatus",                 Unsigned8),
    (90,  "mplsVpnRouteDistinguisher",        OctetArray),
    (91,  "mplsTopLabelPrefixLength",         Unsigned8),
    (92,  "srcTrafficIndex",                  Unsigned32),
    (93,  "dstTrafficIndex",                  Unsigned32),
    (94,  "applicationDescription",           String),
    (95,  "applicationId",                    OctetArray),
    (96,  "applicationName",                  String),
    (98,  "postIpDiffServCodePoint",          Unsigned8),
    (99,  "multicastReplicationFactor",       Unsigned32),
    (100, "className",                        String),
    (101, "classificationEngineId",           Unsigned8),
    (102, "layer2packetSectionOffset",        Unsigned16),
    (103, "layer2packetSectionSize",          Unsigned16),
    (104, "layer2packetSectionData",          OctetArray),
    (128, "bgpNextAdjacentAsNumber",          Unsigned32),
    (129, "bgpPrevAdjacentAsNumber",          Unsigned32),
    (130, "exporterIPv4Address",              Ipv4Address),
    (131, "exporterIPv6Address",              Ipv6Address),
    (132, "droppedOctetDeltaCount",           Unsigned64),
    (133, "droppedPacketDeltaCount",          Unsigned64),
    (134, "droppedOctetTotalCount",           Unsigned64),
    (135, "droppedPacketTotalCount",          Unsigned64),
    (136, "flowEndReason",                    Unsigned8),
    (137, "commonPropertiesId",               Unsigned64),
    (138, "observationPointId",               Unsigned64),
    (139, "icmpTypeCodeIPv6",                 Unsigned16),
    (140, "mplsTopLabelIPv6Address",          Ipv6Address),
    (141, "lineCardId",                       Unsigned32),
    (142, "portId",                           Unsigned32),
    (143, "meteringProcessId",                Unsigned32),
    (144, "exportingProcessId",               Unsigned32),
    (145, "templateId",                       Unsigned16),
    (146, "wlanChannelId",                    Unsigned8),
    (147, "wlanSSID",                         String),
    (148, "flowId",                           Unsigned64),
    (149, "observationDomainId",              Unsigned32),
    (150, "flowStartSeconds",                 DateTimeSeconds),
    (151, "flowEndSeconds",                   DateTimeSeconds),
    (152, "flowStartMilliseconds",            DateTimeMilliseconds),
    (153, "flowEndMilliseconds",              DateTimeMilliseconds),
    (154, "flowStartMicroseconds",            DateTimeMicroseconds),
    (155, "flowEndMicroseconds",              DateTimeMicroseconds),
    (156, "flowStartNanoseconds",             DateTimeNanoseconds),
    (157, "flowEndNanoseconds",               DateTimeNanoseconds),
    (158, "flowStartDeltaMicroseconds",       Unsigned32),
    (159, "flowEndDeltaMicroseconds",         Unsigned32),
    (160, "systemInitTimeMilliseconds",       DateTimeMilliseconds),
    (161, "flowDurationMilliseconds",         Unsigned32),
    (162, "flowDurationMicroseconds",         Unsigned32),
    (163, "observedFlowTotalCount",           Unsigned64),
    (164, "ignoredPacketTotalCount",          Unsigned64),
    (165, "ignoredOctetTotalCount",           Unsigned64),
    (166, "notSentFlowTotalCount",            Unsigned64),
    (167, "notSentPacketTotalCount",          Unsigned64),
    (168, "notSentOctetTotalCount",           Unsigned64),
    (169, "destinationIPv6Prefix",            Ipv6Address),
    (170, "sourceIPv6Prefix",                 Ipv6Address),
    (171, "postOctetTotalCount",              Unsigned64),
    (172, "postPacketTotalCount",             Unsigned64),
    (173, "flowKeyIndicator",                 Unsigned64),
    (174, "postMCastPacketTotalCount",        Unsigned64),
    (175, "postMCastOctetTotalCount",         Unsigned64),
    (176, "icmpTypeIPv4",                     Unsigned8),
    (177, "icmpCodeIPv4",                     Unsigned8),
    (178, "icmpTypeIPv6",                     Unsigned8),
    (179, "icmpCodeIPv6",                     Unsigned8),
    (180, "udpSourcePort",                    Unsigned16),
    (181, "udpDestinationPort",               Unsigned16),
    (182, "tcpSourcePort",                    Unsigned16),
    (183, "tcpDestinationPort",               Unsigned16),
    (184, "tcpSequenceNumber",                Unsigned32),
    (185, "tcpAcknowledgementNumber",         Unsigned32),
    (186, "tcpWindowSize",                    Unsigned16),
    (187, "tcpUrgentPointer",                 Unsigned16),
    (188, "tcpHeaderLength",                  Unsigned8),
    (189, "ipHeaderLength",                   Unsigned8),
    (190, "totalLengthIPv4",                  Unsigned16),
    (191, "payloadLengthIPv6",                Unsigned16),
    (192, "ipTTL",                            Unsigned8),
    (193, "nextHeaderIPv6",                   Unsigned8),
    (194, "mplsPayloadLength",                Unsigned32),
    (195, "ipDiffServCodePoint",              Unsigned8),
    (196, "ipPrecedence",                     Unsigned8),
    (197, "fragmentFlags",                    Unsigned8),
    (198, "octetDeltaSumOfSquares",           Unsigned64),
    (199, "octetTotalSumOfSquares",           Unsigned64),
    (200, "mplsTopLabelTTL",                  Unsigned8),
    (201, "mplsLabelStackLength",             Unsigned32),
    (202, "mplsLabelStackDepth",              Unsigned32),
    (203, "mplsTopLabelExp",                  Unsigned8),
    (204, "ipPayloadLength",                  Unsigned32),
    (205, "udpMessageLength",                 Unsigned16),
    (206, "isMulticast",                      Unsigned8),
    (207, "ipv4IHL",                          Unsigned8),
    (208, "ipv4Options",                      Unsigned32),
    (209, "tcpOptions",                       Unsigned64),
    (210, "paddingOctets",                    OctetArray),
    (211, "collectorIPv4Address",             Ipv4Address),
    (212, "collectorIPv6Address",             Ipv6Address),
    (213, "exportInterface",                  Unsigned32),
    (214, "exportProtocolVersion",            Unsigned8),
    (215, "exportTransportProtocol",          Unsigned8),
    (216, "collectorTransportPort",           Unsigned16),
    (217, "exporterTransportPort",            Unsigned16),
    (218, "tcpSynTotalCount",                 Unsigned64),
    (219, "tcpFinTotalCount",                 Unsigned64),
    (220, "tcpRstTotalCount",                 Unsigned64),
    (221, "tcpPshTotalCount",                 Unsigned64),
    (222, "tcpAckTotalCount",                 Unsigned64),
    (223, "tcpUrgTotalCount",                 Unsigned64),
    (224, "ipTotalLength",                    Unsigned64),
    (225, "postNATSourceIPv4Address",         Ipv4Address),
    (226, "postNATDestinationIPv4Address",    Ipv4Address),
    (227, "postNAPTSourceTransportPort",      Unsigned16),
    (228, "postNAPTDestinationTransportPort", Unsigned16),
    (229, "natOriginatingAddressRealm",       Unsigned8),
    (230, "natEvent",                         Unsigned8),
    (231, "initiatorOctets",                  Unsigned64),
    (232, "responderOctets",                  Unsigned64),
    (233, "firewallEvent",                    Unsigned8),
    (234, "ingressVRFID",                     Unsigned32),
    (235, "egressVRFID",                      Unsigned32),
    (236, "VRFname",                          String),
    (237, "postMplsTopLabelExp",              Unsigned8),
    (238, "tcpWindowScale",                   Unsigned16),
    (239, "biflowDirection",                  Unsigned8),
    (240, "ethernetHeaderLength",             Unsigned8),
    (241, "ethernetPayloadLength",            Unsigned16),
    (242, "ethernetTotalLength",              Unsigned16),
    (243, "dot1qVlanId",                      Unsigned16),
    (244, "dot1qPriority",                    Unsigned8),
    (245, "dot1qCustomerVlanId",              Unsigned16),
    (246, "dot1qCustomerPriority",            Unsigned8),
    (247, "metroEvcId",                       String),
    (248, "metroEvcType",                     Unsigned8),
    (249, "pseudoWireId",                     Unsigned32),
    (250, "pseudoWireType",                   Unsigned16),
    (251, "pseudoWireControlWord",            Unsigned32),
    (252, "ingressPhysicalInterface",         Unsigned32),
    (253, "egressPhysicalInterface",          Unsigned32),
    (254, "postDot1qVlanId",                  Unsigned16),
    (255, "postDot1qCustomerVlanId",          Unsigned16),
    (256, "ethernetType",                     Unsigned16),
    (257, "postIpPrecedence",                 Unsigned8),
    (258, "collectionTimeMilliseconds",       DateTimeMilliseconds),
    (259, "exportSctpStreamId",               Unsigned16),
    (260, "maxExportSeconds",                 DateTimeSeconds),
    (261, "maxFlowEndSeconds",                DateTimeSeconds),
    (262, "messageMD5Checksum",               OctetArray),
    (263, "messageScope",                     Unsigned8),
    (264, "minExportSeconds",                 DateTimeSeconds),
    (265, "minFlowStartSeconds",              DateTimeSeconds),
    (266, "opaqueOctets",                     OctetArray),
    (267, "sessionScope",                     Unsigned8),
    (268, "maxFlowEndMicroseconds",           DateTimeMicroseconds),
    (269, "maxFlowEndMilliseconds",           DateTimeMilliseconds),
    (270, "maxFlowEndNanoseconds",            DateTimeNanoseconds),
    (271, "minFlowStartMicroseconds",         DateTimeMicroseconds),
    (272, "minFlowStartMilliseconds",         DateTimeMilliseconds),
    (273, "minFlowStartNanoseconds",          DateTimeNanoseconds),
    (277, "observationPointType",             Unsigned8),
    (280, "connectionTransactionId",          Unsigned64),
    (281, "postNATSourceIPv6Address",         Ipv6Address),
    (282, "postNATDestinationIPv6Address",    Ipv6Address),
    (283, "natPoolId",                        Unsigned32),
    (284, "natPoolName",                      String),
    (300, "observationDomainName",            String),
    (301, "selectionSequenceId",              Unsigned64),
    (302, "selectorId",                       Unsigned64),
    (303, "informationElementId",             Unsigned16),
    (304, "selectorAlgorithm",                Unsigned16),
    (305, "samplingPacketInterval",           Unsigned32),
    (306, "samplingPacketSpace",              Unsigned32),
    (307, "samplingTimeInterval",             Unsigned32),
    (308, "samplingTimeSpace",                Unsigned32),
    (309, "samplingSize",                     Unsigned32),
    (310, "samplingPopulation",               Unsigned32),
    (311, "samplingProbability",              Float64),
    (312, "dataLinkFrameSize",                Unsigned16),
    (313, "ipHeaderPacketSection",            OctetArray),
    (314, "ipPayloadPacketSection",           OctetArray),
    (322, "observationTimeSeconds",           DateTimeSeconds),
    (323, "observationTimeMilliseconds",      DateTimeMilliseconds),
    (324, "observationTimeMicroseconds",      DateTimeMicroseconds),
    (325, "observationTimeNanoseconds",       DateTimeNanoseconds),
    (346, "privateEnterpriseNumber",          Unsigned32),
    (352, "layer2OctetDeltaCount",            Unsigned64),
    (353, "layer2OctetTotalCount",            Unsigned64),
    (361, "portRangeStart",                   Unsigned16),
    (362, "portRangeEnd",                     Unsigned16),
    (363, "portRangeStepSize",                Unsigned16),
    (364, "portRangeNumPorts",                Unsigned16),
    (368, "ingressInterfaceType",             Unsigned32),
    (369, "egressInterfaceType",              Unsigned32),
];

pub(super) fn populate(reg: &mut Registry) {
    reg.insert_builtin(0, IANA);
}
