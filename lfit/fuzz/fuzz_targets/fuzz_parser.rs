#![no_main]

use libfuzzer_sys::fuzz_target;
use lfit::Engine;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let engine = Engine::new();
        if let Ok(program) = engine.parse_program(s, "fuzz_input") {
            // Whatever parses must render to something that parses to the same program
            let rendered = program.logic_form();
            let reparsed = engine.parse_program(&rendered, "fuzz_rendered");
            assert_eq!(reparsed.ok(), Some(program));
        }
    }
});
