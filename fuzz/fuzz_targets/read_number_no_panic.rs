#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = json::read_number(data, 0);
    let _ = json::read_number(data, json::config::read_flag::ALLOW_INF_AND_NAN);
});
