use keccak_sponge::{Input, Shake128};

#[test]
fn empty_input_256_bits_matches_fips202_vector() {
    let hex = Shake128::digest(Input::Bytes(b""), 256).unwrap();
    assert_eq!(
        hex,
        "7F9C2BA4E88F827D616045507605853ED73B8093F6EFBC88EB1A6EACFA66EF26"
    );
}

#[test]
fn prefix_property_holds_across_output_lengths() {
    let short = Shake128::digest(Input::Bytes(b"prefix check"), 128).unwrap();
    let medium = Shake128::digest(Input::Bytes(b"prefix check"), 256).unwrap();
    let long = Shake128::digest(Input::Bytes(b"prefix check"), 1024).unwrap();
    assert!(medium.starts_with(&short));
    assert!(long.starts_with(&medium));
}

#[test]
fn chunked_update_matches_one_shot() {
    let one_shot = Shake128::digest(Input::Bytes(b"abc"), 512).unwrap();

    let mut chunked = Shake128::new(512).unwrap();
    chunked.update(Input::Bytes(b"a")).unwrap();
    chunked.update(Input::Bytes(b"b")).unwrap();
    let chunked = chunked.finalize_with(Input::Bytes(b"c")).unwrap();

    assert_eq!(one_shot, chunked);
}

#[test]
fn rejects_output_length_not_a_multiple_of_8() {
    assert!(Shake128::new(100).is_err());
}
