use crate::Transition;
use std::fmt::Write;

/// Render transitions as a CSV table with header `x0..x{n-1},y0..y{n-1}`.
///
/// Rows keep the order of `transitions`. An empty slice renders as an empty
/// string since the width is unknown.
pub fn transitions_to_csv(transitions: &[Transition]) -> String {
    let Some(first) = transitions.first() else {
        return String::new();
    };
    let width = first.current.len();

    let header: Vec<String> = (0..width)
        .map(|i| format!("x{}", i))
        .chain((0..width).map(|i| format!("y{}", i)))
        .collect();

    let mut out = header.join(",");
    out.push('\n');
    for t in transitions {
        let fields: Vec<String> = t
            .current
            .values()
            .iter()
            .chain(t.next.values())
            .map(|v| v.to_string())
            .collect();
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}", fields.join(","));
    }
    out
}
