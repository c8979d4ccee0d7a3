#![no_main]

use libfuzzer_sys::fuzz_target;

use flowset_core::{decode, Session};

// Arbitrary bytes through the version dispatch: every dialect parser
// must reject garbage with an error, never a panic.
fuzz_target!(|data: &[u8]| {
    let session = Session::new();
    let _ = decode(data, &session);
});
