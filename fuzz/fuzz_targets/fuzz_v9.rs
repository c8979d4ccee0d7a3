#![no_main]

use libfuzzer_sys::fuzz_target;

use flowset_core::{decode, Session};

// Force the v9 path and keep one session across inputs so fuzzed
// template state feeds later data sets.
fuzz_target!(|data: &[u8]| {
    static SESSION: std::sync::OnceLock<Session> = std::sync::OnceLock::new();
    let session = SESSION.get_or_init(Session::new);

    let mut packet = Vec::with_capacity(data.len() + 2);
    packet.extend_from_slice(&9u16.to_be_bytes());
    packet.extend_from_slice(data);
    let _ = decode(&packet, session);
});
