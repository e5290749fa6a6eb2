#![no_main]

use irtt_telegraf::sinks::{Encoding, ExportOptions, JsonShape, Timestamp, write_result_at};
use irtt_telegraf::stats::RunResult;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(result) = serde_json::from_slice::<RunResult>(data) else {
        return;
    };
    let options = ExportOptions {
        include_timer_error: true,
        ..ExportOptions::default()
    };
    for encoding in [
        Encoding::LineProtocol,
        Encoding::Json(JsonShape::Nested),
        Encoding::Json(JsonShape::Flat),
    ] {
        let mut sink = Vec::new();
        let outcome = write_result_at(
            &mut sink,
            &result,
            &options,
            encoding,
            Timestamp::from_unix_secs(0),
        );
        if outcome.is_err() {
            assert!(sink.is_empty());
        }
    }
});
