#![no_main]

use irtt_telegraf::sinks::format::{escape_tag_value, unescape_tag_value};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let escaped = escape_tag_value(input);
        assert_eq!(unescape_tag_value(&escaped), input);
    }
});
