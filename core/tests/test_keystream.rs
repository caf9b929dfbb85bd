#[cfg(test)]
mod tests {
    use chachapoly_guard::crypto::{AeadError, Keystream, NonceMode, PAYLOAD_OFFSET};

    const DJB_ZERO_BLOCK0: &str = "76b8e0ada0f13d90405d6ae55386bd28bdd219b8a08ded1aa836efcc8b770dc7\
                                   da41597c5157488d7724e03fb8d84a376a43b8f41518a11cc387b669b2ee6586";
    const DJB_ZERO_BLOCK1: &str = "9f07e7be5551387a98ba977c732d080dcb0f29a048e3656912c6533e32ee7aed\
                                   29b721769ce64e43d57133b074d839d531ed1f28510afb45ace10a1f4b794d6f";
    const XCHACHA_ZERO_BLOCK0: &str = "bcd02a18bf3f01d19292de30a7a8fdaca4b65e50a6002cc72cd6d2f7c91ac3d5\
                                       728f83e0aad2bfcf9abd2d2db58faedd65015dd83fc09b131e271043019e8e0f";

    fn short_zero() -> Keystream {
        Keystream::new(&[0u8; 32], &[0u8; 8], NonceMode::ChaCha20Poly1305).unwrap()
    }

    #[test]
    fn short_mode_matches_chacha20_test_vector() {
        let mut ks = short_zero();
        assert_eq!(hex::encode(&ks.block_at(0).unwrap()[..]), DJB_ZERO_BLOCK0);
        assert_eq!(hex::encode(&ks.block_at(64).unwrap()[..]), DJB_ZERO_BLOCK1);
    }

    #[test]
    fn extended_mode_runs_hchacha20_first() {
        let mut ks = Keystream::new(&[0u8; 32], &[0u8; 24], NonceMode::XChaCha20Poly1305).unwrap();
        assert_eq!(hex::encode(&ks.block_at(0).unwrap()[..]), XCHACHA_ZERO_BLOCK0);
    }

    #[test]
    fn one_time_key_is_head_of_block_zero() {
        let mut ks = short_zero();
        let otk = ks.one_time_key().unwrap();
        assert_eq!(hex::encode(&otk[..]), &DJB_ZERO_BLOCK0[..64]);
    }

    #[test]
    fn payload_keystream_starts_at_block_one() {
        let mut ks = short_zero();
        let mut buf = [0u8; 64];
        ks.apply_payload(&mut buf).unwrap();
        assert_eq!(hex::encode(buf), DJB_ZERO_BLOCK1);
        assert_eq!(PAYLOAD_OFFSET, 64);
    }

    #[test]
    fn offsets_are_absolute_regardless_of_call_order() {
        let mut ks = short_zero();
        let mut long = vec![0u8; 300];
        ks.apply_at(0, &mut long).unwrap();

        // Read a window out of order after the stream has already advanced.
        let mut window = [0u8; 37];
        ks.apply_at(101, &mut window).unwrap();
        assert_eq!(&window[..], &long[101..138]);

        let mut head = [0u8; 5];
        ks.apply_at(0, &mut head).unwrap();
        assert_eq!(&head[..], &long[..5]);
    }

    #[test]
    fn apply_twice_is_identity() {
        let mut ks = short_zero();
        let mut data = b"some payload bytes".to_vec();
        ks.apply_payload(&mut data).unwrap();
        assert_ne!(data, b"some payload bytes");
        ks.apply_payload(&mut data).unwrap();
        assert_eq!(data, b"some payload bytes");
    }

    #[test]
    fn rejects_bad_lengths() {
        assert_eq!(
            Keystream::new(&[0u8; 31], &[0u8; 8], NonceMode::ChaCha20Poly1305).err(),
            Some(AeadError::InvalidKeySize { expected: 32, actual: 31 })
        );
        assert_eq!(
            Keystream::new(&[0u8; 32], &[0u8; 12], NonceMode::XChaCha20Poly1305).err(),
            Some(AeadError::InvalidNonceSize { expected: 24, actual: 12 })
        );
    }

    #[test]
    fn seeking_past_the_counter_is_an_error() {
        let mut ks = short_zero();
        let mut buf = [0u8; 64];
        let past_end = (u32::MAX as u64 + 1) * 64;
        assert!(matches!(
            ks.apply_at(past_end, &mut buf),
            Err(AeadError::MessageTooLarge { .. })
        ));
    }
}
