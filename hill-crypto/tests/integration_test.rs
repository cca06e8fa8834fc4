use hill_crypto::codec;
use hill_crypto::errors::HillCryptoError;
use hill_crypto::keypair::elimination::invert;
use hill_crypto::keypair::keys::{KeyPair, MAX_ORDER, MIN_ORDER, synthesize_with_order};
use hill_crypto::ring::Ring;
use hill_crypto::ring::matrix_ops::{identity_matrix, matrix_mul};

use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn happy_flow() -> Result<(), HillCryptoError> {
    let pair = KeyPair::generate(12345)?;
    let ring = Ring::alphabet();

    assert!((MIN_ORDER..=MAX_ORDER).contains(&pair.order));
    assert!(pair.verify(&ring)?);

    // Persist both keys, read them back, and confirm nothing changed in
    // flight.
    let dir = std::env::temp_dir();
    let ekey_path = dir.join("hill_crypto_happy_flow_encrypt.key");
    let dkey_path = dir.join("hill_crypto_happy_flow_decrypt.key");

    codec::write_key(&ekey_path, &pair.encrypt_key)?;
    codec::write_key(&dkey_path, &pair.decrypt_key)?;

    let encrypt_key = codec::read_key(&ekey_path)?;
    let decrypt_key = codec::read_key(&dkey_path)?;

    let _ = std::fs::remove_file(&ekey_path);
    let _ = std::fs::remove_file(&dkey_path);

    assert_eq!(encrypt_key, pair.encrypt_key);
    assert_eq!(decrypt_key, pair.decrypt_key);

    let product = matrix_mul(&encrypt_key, &decrypt_key, &ring)?;
    assert_eq!(product, identity_matrix(pair.order));

    Ok(())
}

#[test]
fn every_order_satisfies_the_identity_invariant() -> Result<(), HillCryptoError> {
    let ring = Ring::alphabet();
    for order in MIN_ORDER..=MAX_ORDER {
        let mut rng = StdRng::seed_from_u64(order as u64);
        let pair = synthesize_with_order(order, &mut rng)?;

        assert_eq!(pair.order, order);
        assert_eq!(pair.encrypt_key.len(), order);
        assert_eq!(pair.decrypt_key.len(), order);
        assert!(
            pair.verify(&ring)?,
            "Identity invariant failed for order {}",
            order
        );
    }
    Ok(())
}

#[test]
fn synthesis_is_deterministic_for_a_fixed_seed() -> Result<(), HillCryptoError> {
    let first = KeyPair::generate(987654321)?;
    let second = KeyPair::generate(987654321)?;

    assert_eq!(first.order, second.order);
    assert_eq!(first.encrypt_key, second.encrypt_key);
    assert_eq!(first.decrypt_key, second.decrypt_key);
    Ok(())
}

#[test]
fn codec_round_trip_is_bit_identical_for_every_order() -> Result<(), HillCryptoError> {
    for order in MIN_ORDER..=MAX_ORDER {
        let mut rng = StdRng::seed_from_u64(1000 + order as u64);
        let pair = synthesize_with_order(order, &mut rng)?;

        let encrypt_bytes = codec::serialize_key(&pair.encrypt_key)?;
        let decrypt_bytes = codec::serialize_key(&pair.decrypt_key)?;

        assert_eq!(codec::deserialize_key(&encrypt_bytes)?, pair.encrypt_key);
        assert_eq!(codec::deserialize_key(&decrypt_bytes)?, pair.decrypt_key);
    }
    Ok(())
}

#[test]
fn known_singular_matrix_is_rejected() {
    let ring = Ring::alphabet();
    let singular = vec![vec![2, 4], vec![1, 2]];

    match invert(&singular, &ring) {
        Err(HillCryptoError::SingularMatrix(_)) => {}
        other => panic!("Expected SingularMatrix, got {:?}", other),
    }
}

#[test]
fn json_export_survives_a_round_trip() -> Result<(), HillCryptoError> {
    let pair = KeyPair::generate(31337)?;
    let json = pair.to_json()?;
    let restored = KeyPair::from_json(&json)?;

    assert_eq!(pair, restored);
    assert!(restored.verify(&Ring::alphabet())?);
    Ok(())
}
