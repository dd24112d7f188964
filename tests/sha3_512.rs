use keccak_sponge::{Input, Sha3_512};

#[test]
fn abc_matches_fips202_vector() {
    let hex = Sha3_512::digest(Input::Bytes(b"abc")).unwrap();
    assert_eq!(
        hex,
        "B751850B1A57168A5693CD924B6B096E08F621827444F70D884F5D0240D2712E10E116E9192AF3C91A7EC57647E3934057340B4CF408D5A56592F8274EEC53F0"
    );
}

#[test]
fn string_and_bytes_formats_agree() {
    let from_string = Sha3_512::digest(Input::String("abc")).unwrap();
    let from_bytes = Sha3_512::digest(Input::Bytes(b"abc")).unwrap();
    assert_eq!(from_string, from_bytes);
}

#[test]
fn use_after_finalize_is_rejected() {
    let mut h = Sha3_512::new().unwrap();
    h.finalize_with(Input::Bytes(b"abc")).unwrap();
    assert!(h.update(Input::Bytes(b"more")).is_err());
    assert!(h.finalize().is_err());
}
