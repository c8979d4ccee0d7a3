//! End-to-end decode scenarios through the public API.

use flowset_core::{decode, DataSet, Error, FieldValue, Message, ScopeKind, Session};

/// Build a datagram from a whitespace-separated hex string.
fn hex(s: &str) -> Vec<u8> {
    let digits: String = s.split_whitespace().collect();
    assert!(digits.len() % 2 == 0, "odd hex digit count");
    (0..digits.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).unwrap())
        .collect()
}

#[test]
fn ipfix_template_then_data() {
    let session = Session::new();

    let template = hex("000a 0020 5b6d081d 00000001 00000001 0002 0010 0100 0002 0008 0004 000c 0004");
    let data = hex("000a 001c 5b6d081d 00000001 00000001 0100 000c bc41 7ed5 2e63 a412");

    let msg = decode(&template, &session).unwrap();
    let Message::Ipfix(m) = msg else {
        panic!("expected an IPFIX message");
    };
    assert_eq!(m.templates.len(), 1);
    assert_eq!(m.templates[0].id, 256);

    let Message::Ipfix(m) = decode(&data, &session).unwrap() else {
        panic!("expected an IPFIX message");
    };
    let records = m.data_sets[0].records();
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].fields()[0].value,
        Some(FieldValue::Ipv4("188.65.126.213".parse().unwrap()))
    );
    assert_eq!(
        records[0].fields()[1].value,
        Some(FieldValue::Ipv4("46.99.164.18".parse().unwrap()))
    );
}

#[test]
fn ipfix_same_template_id_in_two_domains() {
    let session = Session::new();

    // Domain 1: template 256 = [src, dst].
    let t1 = hex("000a 0020 5b6d081d 00000001 00000001 0002 0010 0100 0002 0008 0004 000c 0004");
    // Domain 2: template 256 = [dst, src].
    let t2 = hex("000a 0020 5b6d081d 00000001 00000002 0002 0010 0100 0002 000c 0004 0008 0004");
    decode(&t1, &session).unwrap();
    decode(&t2, &session).unwrap();

    // The identical data bytes, sent once per domain.
    let d1 = hex("000a 001c 5b6d081d 00000001 00000001 0100 000c bc41 7ed5 2e63 a412");
    let d2 = hex("000a 001c 5b6d081d 00000001 00000002 0100 000c bc41 7ed5 2e63 a412");

    let Message::Ipfix(one) = decode(&d1, &session).unwrap() else {
        panic!()
    };
    let Message::Ipfix(two) = decode(&d2, &session).unwrap() else {
        panic!()
    };

    let first = &one.data_sets[0].records()[0].fields()[0];
    assert_eq!(first.name(), Some("sourceIPv4Address"));
    assert_eq!(
        first.value,
        Some(FieldValue::Ipv4("188.65.126.213".parse().unwrap()))
    );

    // In domain 2 the leading field is the destination: the source
    // address comes second and reads 46.99.164.18.
    let swapped = &two.data_sets[0].records()[0].fields();
    assert_eq!(swapped[0].name(), Some("destinationIPv4Address"));
    assert_eq!(
        swapped[0].value,
        Some(FieldValue::Ipv4("188.65.126.213".parse().unwrap()))
    );
    assert_eq!(swapped[1].name(), Some("sourceIPv4Address"));
    assert_eq!(
        swapped[1].value,
        Some(FieldValue::Ipv4("46.99.164.18".parse().unwrap()))
    );
}

#[test]
fn v5_packet_with_two_flows() {
    let session = Session::new();

    let mut data = Vec::new();
    data.extend_from_slice(&hex("0005 0002 00015f90 5b6d081d 00000000 0000002a 00 01 0000"));
    for last_octet in [1u8, 2] {
        data.extend_from_slice(&[10, 0, 0, last_octet]); // src
        data.extend_from_slice(&[172, 16, 0, last_octet]); // dst
        data.extend_from_slice(&[10, 0, 0, 254]); // next hop
        data.extend_from_slice(&hex("0001 0002")); // ifaces
        data.extend_from_slice(&hex("0000000a 000003e8")); // packets, octets
        data.extend_from_slice(&hex("00000064 000000c8")); // first, last
        data.extend_from_slice(&hex("c350 0050")); // ports
        data.extend_from_slice(&hex("00 18 06 00")); // pad, flags, proto, tos
        data.extend_from_slice(&hex("fde8 fde9 18 10 0000")); // AS, masks, pad
    }

    let Message::V5(packet) = decode(&data, &session).unwrap() else {
        panic!("expected a v5 packet");
    };
    assert_eq!(packet.records.len(), 2);
    assert_eq!(packet.records[0].dst_port, 80);
    assert_eq!(packet.records[1].src_addr, 0x0a000002);

    // A count of 33 is out of the accepted 1..=32 range.
    let mut bad = data.clone();
    bad[2..4].copy_from_slice(&33u16.to_be_bytes());
    assert!(matches!(
        decode(&bad, &session),
        Err(Error::Protocol { version: 5, .. })
    ));
}

#[test]
fn v9_data_before_template_replay() {
    let session = Session::new();

    let data_set = hex("0009 0001 000186a0 5b6d081d 00000001 00000001 0100 000c bc417ed5 2e63a412");
    let template =
        hex("0009 0001 000186a0 5b6d081d 00000002 00000001 0000 0010 0100 0002 0008 0004 000c 0004");

    // Data arrives first: decoding succeeds and the set stays opaque.
    let Message::V9(first) = decode(&data_set, &session).unwrap() else {
        panic!("expected a v9 packet");
    };
    assert_eq!(
        first.data_sets[0],
        DataSet::Unresolved {
            template_id: 256,
            bytes: &hex("bc417ed5 2e63a412"),
        }
    );

    // After the template shows up, the same bytes decode fully.
    decode(&template, &session).unwrap();
    let Message::V9(second) = decode(&data_set, &session).unwrap() else {
        panic!()
    };
    assert!(second.data_sets[0].is_resolved());
    assert_eq!(
        second.data_sets[0].records()[0].fields()[1].value,
        Some(FieldValue::Ipv4("46.99.164.18".parse().unwrap()))
    );
}

#[test]
fn v9_options_sampling_for_interface() {
    let session = Session::new();

    // Options template 300, scope interface, option samplingInterval;
    // then an options-data record announcing 1 in 1000 for interface 7.
    let packet = hex(
        "0009 0002 000186a0 5b6d081d 00000003 00000001 \
         0001 0014 012c 0004 0004 0002 0004 0022 0004 0000 \
         012c 000c 00000007 000003e8",
    );
    decode(&packet, &session).unwrap();

    let option = session
        .get_option(0, 34, ScopeKind::Interface, 7)
        .expect("sampling interval for interface 7");
    assert_eq!(option.value, Some(FieldValue::UInt32(1000)));

    // The fallback only answers from the system scope when something
    // was installed there; interface 7 did not create one.
    assert!(session.get_option(0, 34, ScopeKind::System, 0).is_none());
}

#[test]
fn v8_header_with_raw_payload() {
    let session = Session::new();
    let data = hex("0008 0001 00002328 5b6d081d 00000000 00000007 01 00 05 02 00000000 deadbeef");

    let Message::V8(packet) = decode(&data, &session).unwrap() else {
        panic!("expected a v8 packet");
    };
    assert_eq!(
        packet.header.aggregation(),
        flowset_core::v8::Aggregation::RouterPrefix
    );
    assert_eq!(packet.payload, &hex("deadbeef")[..]);
}

#[test]
fn unsupported_version() {
    let session = Session::new();
    assert!(matches!(
        decode(&hex("0002 0000"), &session),
        Err(Error::UnsupportedVersion(2))
    ));
    assert!(matches!(
        decode(&[0x00], &session),
        Err(Error::ShortBuffer { .. })
    ));
}

#[test]
fn message_version_tags() {
    let session = Session::new();
    let v8 = hex("0008 0000 00000000 00000000 00000000 00000000 00 00 01 02 00000000");
    assert_eq!(decode(&v8, &session).unwrap().version(), 8);

    let ipfix = hex("000a 0010 5b6d081d 00000001 00000001");
    assert_eq!(decode(&ipfix, &session).unwrap().version(), 10);
}
