#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes through the permissive reader. Err results are
    // expected and fine; what we verify is no panics or UB.
    let flags = json::config::read_flag::ALLOW_COMMENTS
        | json::config::read_flag::ALLOW_TRAILING_COMMAS
        | json::config::read_flag::ALLOW_INF_AND_NAN;
    let _ = json::read(data, flags);
    let _ = json::read(data, 0);
});
