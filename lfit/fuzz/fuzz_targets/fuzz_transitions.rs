#![no_main]

use libfuzzer_sys::fuzz_target;
use lfit::{parse_transition_table, ResourceLimits};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(table) = parse_transition_table(s, None, &ResourceLimits::default()) {
            let _ = table.infer_domain();
        }
    }
});
