#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(document) = serde_json::from_slice::<serde_json::Value>(data) {
        // Any JSON value either summarizes or is rejected, never panics
        if let Ok(summary) = embedgen::ApiSummary::from_document(&document) {
            let _ = serde_json::to_string_pretty(&summary);
        }
    }
});
