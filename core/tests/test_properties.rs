#[cfg(test)]
mod tests {
    use chachapoly_guard::crypto::{Aead, AeadError, ChaCha20Poly1305Guard, GuardedKey, TAG_LEN};
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        // Round trip holds for every key/nonce/payload/ad in both modes.
        #[test]
        fn prop_roundtrip_short(
            key in any::<[u8; 32]>(),
            nonce in any::<[u8; 8]>(),
            pt in proptest::collection::vec(any::<u8>(), 0..512),
            ad in proptest::collection::vec(any::<u8>(), 0..64),
        ) {
            let key = GuardedKey::from_slice(&key);
            let aead = ChaCha20Poly1305Guard::new(&key).unwrap();

            let sealed = aead.seal(&nonce, &pt, &ad).unwrap();
            prop_assert_eq!(sealed.len(), pt.len() + TAG_LEN);

            let opened = aead.open(&nonce, &sealed, &ad).unwrap();
            prop_assert_eq!(opened.len(), sealed.len() - TAG_LEN);
            prop_assert_eq!(opened, pt);
        }

        #[test]
        fn prop_roundtrip_extended(
            key in any::<[u8; 32]>(),
            nonce in proptest::collection::vec(any::<u8>(), 24..=24),
            pt in proptest::collection::vec(any::<u8>(), 0..512),
            ad in proptest::collection::vec(any::<u8>(), 0..64),
        ) {
            let key = GuardedKey::from_slice(&key);
            let aead = ChaCha20Poly1305Guard::new_x(&key).unwrap();

            let sealed = aead.seal(&nonce, &pt, &ad).unwrap();
            prop_assert_eq!(aead.open(&nonce, &sealed, &ad).unwrap(), pt);
        }

        // Any single-bit flip anywhere in the envelope is caught.
        #[test]
        fn prop_bit_flip_in_envelope_rejected(
            key in any::<[u8; 32]>(),
            nonce in any::<[u8; 8]>(),
            pt in proptest::collection::vec(any::<u8>(), 0..256),
            ad in proptest::collection::vec(any::<u8>(), 0..32),
            pos in any::<prop::sample::Index>(),
            bit in 0u8..8,
        ) {
            let key = GuardedKey::from_slice(&key);
            let aead = ChaCha20Poly1305Guard::new(&key).unwrap();

            let mut sealed = aead.seal(&nonce, &pt, &ad).unwrap();
            let i = pos.index(sealed.len());
            sealed[i] ^= 1 << bit;

            prop_assert_eq!(aead.open(&nonce, &sealed, &ad), Err(AeadError::AuthenticationFailed));
        }

        #[test]
        fn prop_bit_flip_in_ad_or_nonce_rejected(
            key in any::<[u8; 32]>(),
            nonce in any::<[u8; 8]>(),
            pt in proptest::collection::vec(any::<u8>(), 0..128),
            ad in proptest::collection::vec(any::<u8>(), 1..32),
            ad_pos in any::<prop::sample::Index>(),
            nonce_pos in 0usize..8,
            bit in 0u8..8,
        ) {
            let key = GuardedKey::from_slice(&key);
            let aead = ChaCha20Poly1305Guard::new(&key).unwrap();
            let sealed = aead.seal(&nonce, &pt, &ad).unwrap();

            let mut bad_ad = ad.clone();
            let i = ad_pos.index(bad_ad.len());
            bad_ad[i] ^= 1 << bit;
            prop_assert_eq!(aead.open(&nonce, &sealed, &bad_ad), Err(AeadError::AuthenticationFailed));

            let mut bad_nonce = nonce;
            bad_nonce[nonce_pos] ^= 1 << bit;
            prop_assert_eq!(aead.open(&bad_nonce, &sealed, &ad), Err(AeadError::AuthenticationFailed));
        }

        #[test]
        fn prop_seal_deterministic(
            key in any::<[u8; 32]>(),
            nonce in any::<[u8; 8]>(),
            pt in proptest::collection::vec(any::<u8>(), 0..128),
        ) {
            let key = GuardedKey::from_slice(&key);
            let aead = ChaCha20Poly1305Guard::new(&key).unwrap();
            prop_assert_eq!(aead.seal(&nonce, &pt, b"").unwrap(), aead.seal(&nonce, &pt, b"").unwrap());
        }
    }
}
