use keccak_sponge::{Backend, Input, Sha3_256};

#[test]
fn empty_input_matches_fips202_vector() {
    let hex = Sha3_256::digest(Input::Bytes(b"")).unwrap();
    assert_eq!(
        hex,
        "A7FFC6F8BF1ED76651C14756A061D662F580FF4DE43B49FA82D80A4B80F8434A"
    );
}

#[test]
fn abc_matches_fips202_vector() {
    let hex = Sha3_256::digest(Input::Bytes(b"abc")).unwrap();
    assert_eq!(
        hex,
        "3A985DA74FE225B2045C172D6BD390BD855F086E3E9D525B46BFE24511431532"
    );
}

#[test]
fn chunked_abc_matches_one_shot_abc() {
    let one_shot = Sha3_256::digest(Input::Bytes(b"abc")).unwrap();

    let mut chunked = Sha3_256::new().unwrap();
    chunked.update(Input::Bytes(b"a")).unwrap();
    chunked.update(Input::Bytes(b"b")).unwrap();
    let chunked = chunked.finalize_with(Input::Bytes(b"c")).unwrap();

    assert_eq!(one_shot, chunked);
}

#[test]
fn multi_block_input_exercises_more_than_one_absorb_round() {
    // The rate for SHA3-256 is 1088 bits = 136 bytes; push well past that.
    let long_input = vec![0x5au8; 1000];
    let mut bit_array = Sha3_256::with_backend(Backend::BitArray).unwrap();
    let mut lane_word = Sha3_256::with_backend(Backend::LaneWord).unwrap();
    assert_eq!(
        bit_array.finalize_with(Input::Bytes(&long_input)).unwrap(),
        lane_word.finalize_with(Input::Bytes(&long_input)).unwrap()
    );
}

#[test]
fn hexstring_and_bitstring_inputs_agree_with_bytes() {
    let from_bytes = Sha3_256::digest(Input::Bytes(b"\xA3\x00")).unwrap();
    let from_hex = Sha3_256::digest(Input::Hexstring("A3 00")).unwrap();
    let from_bits = Sha3_256::digest(Input::Bitstring("11000101 00000000")).unwrap();
    assert_eq!(from_bytes, from_hex);
    assert_eq!(from_bytes, from_bits);
}

#[test]
fn round_trip_hex_codec() {
    use keccak_sponge::{b2h, h2b};
    for hex in ["", "00", "A7FFC6F8", "DEADBEEF"] {
        assert_eq!(b2h(&h2b(hex).unwrap()).unwrap(), hex);
    }
}
