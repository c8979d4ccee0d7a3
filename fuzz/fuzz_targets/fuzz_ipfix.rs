#![no_main]

use libfuzzer_sys::fuzz_target;

use flowset_core::{decode, Session};

// Force the IPFIX path and keep one session across inputs so fuzzed
// templates (including variable-length and enterprise specs) feed
// later data sets.
fuzz_target!(|data: &[u8]| {
    static SESSION: std::sync::OnceLock<Session> = std::sync::OnceLock::new();
    let session = SESSION.get_or_init(Session::new);

    let mut message = Vec::with_capacity(data.len() + 2);
    message.extend_from_slice(&10u16.to_be_bytes());
    message.extend_from_slice(data);
    let _ = decode(&message, session);
});
