#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any document that parses successfully must serialize and
    // reparse to a structurally equal value.
    let flags = json::config::read_flag::ALLOW_INF_AND_NAN;
    let Ok(doc) = json::read(data, flags) else { return };
    let Ok(bytes) = json::write(&doc, json::config::write_flag::ALLOW_INF_AND_NAN) else { return };
    let reparsed = json::read(&bytes, flags).expect("re-parsing our own output must not fail");
    assert!(doc.root().equals(reparsed.root()), "round trip changed document structure");
});
