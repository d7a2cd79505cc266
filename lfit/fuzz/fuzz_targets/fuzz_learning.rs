#![no_main]

use libfuzzer_sys::fuzz_target;
use lfit::{Domain, Engine, Transition};

// Each input byte pair is one transition of a three-variable system with
// values 0..3
fuzz_target!(|data: &[u8]| {
    let Ok(domain) = Domain::with_sizes([("a", 3), ("b", 3), ("c", 3)]) else {
        return;
    };
    let decode = |byte: u8| {
        let v = byte as usize;
        [v % 3, (v / 3) % 3, (v / 9) % 3]
    };
    let transitions: Vec<Transition> = data
        .chunks_exact(2)
        .take(64)
        .map(|pair| Transition::new(decode(pair[0]), decode(pair[1])))
        .collect();

    let report = Engine::new()
        .learn(&domain, &transitions)
        .expect("in-domain transitions always learn");
    for t in &transitions {
        // every consistently observed value is reproduced
        let next = report.program.next(&t.current).expect("valid state");
        for (variable, values) in next.iter().enumerate() {
            let observed = transitions
                .iter()
                .filter(|o| o.current == t.current)
                .all(|o| o.next.values()[variable] == t.next.values()[variable]);
            if observed {
                assert!(values.contains(&t.next.values()[variable]));
            }
        }
    }
});
