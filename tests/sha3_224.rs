use keccak_sponge::{Backend, Input, Sha3_224};

#[test]
fn empty_input_matches_fips202_vector() {
    let hex = Sha3_224::digest(Input::Bytes(b"")).unwrap();
    assert_eq!(
        hex,
        "6B4E03423667DBB73B6E15454F0EB1ABD4597F9A1B078E3F5B5A6BC7"
    );
}

#[test]
fn chunked_update_matches_one_shot() {
    let one_shot = Sha3_224::digest(Input::Bytes(b"")).unwrap();

    let mut chunked = Sha3_224::new().unwrap();
    chunked.update(Input::Bytes(b"")).unwrap();
    let chunked = chunked.finalize().unwrap();

    assert_eq!(one_shot, chunked);
}

#[test]
fn bit_array_and_lane_word_backends_agree() {
    let mut bit_array = Sha3_224::with_backend(Backend::BitArray).unwrap();
    let mut lane_word = Sha3_224::with_backend(Backend::LaneWord).unwrap();
    assert_eq!(
        bit_array.finalize_with(Input::Bytes(b"backend parity check")).unwrap(),
        lane_word.finalize_with(Input::Bytes(b"backend parity check")).unwrap()
    );
}
