use keccak_sponge::{Input, Sha3_256, TraceFormat};

#[test]
fn trace_output_contains_expected_section_headers() {
    let mut sink = Vec::new();
    let mut hasher = Sha3_256::with_trace(&mut sink, TraceFormat::NistLane).unwrap();
    hasher.finalize_with(Input::Bytes(b"abc")).unwrap();

    let trace = String::from_utf8(sink).unwrap();
    assert!(trace.contains("Round 0 Before algorithm 1"));
    assert!(trace.contains("Round 0 After algorithm 1"));
    assert!(trace.contains("Round 23 After algorithm 5"));
    assert!(trace.contains("Final state"));
    assert!(trace.contains("Squeezing output."));
    assert!(trace.contains("(0,0):"));
    assert!(trace.contains("Permutation 0"));
}

#[test]
fn tracing_does_not_change_the_digest() {
    let mut sink = Vec::new();
    let mut traced = Sha3_256::with_trace(&mut sink, TraceFormat::ByteMajorHex).unwrap();
    let traced_hex = traced.finalize_with(Input::Bytes(b"abc")).unwrap();

    let plain_hex = Sha3_256::digest(Input::Bytes(b"abc")).unwrap();
    assert_eq!(traced_hex, plain_hex);
}
