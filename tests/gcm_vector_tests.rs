//! End-to-end vectors: NIST GCMVS cases plus the padded-length framing this
//! library applies to partial-block plaintexts.

use hex_literal::hex;
use tinygcm::{Error, gcm_decrypt, gcm_encrypt, gcm_encrypt_padded, padded_ciphertext_len};

#[test]
fn all_zero_30_byte_plaintext() {
    // 30-byte plaintext: one full block plus a 14-byte tail. The ciphertext
    // is emitted padded to 32 bytes and the tag is framed over that length.
    let key = [0u8; 16];
    let iv = [0u8; 12];
    let aad = [0u8; 4];
    let plaintext = [0u8; 30];

    let mut ciphertext = [0u8; 32];
    let mut tag = [0u8; 16];
    gcm_encrypt(&key, &iv, &plaintext, &aad, &mut ciphertext, &mut tag).expect("encrypt succeeds");

    assert_eq!(ciphertext[0], 0x03);
    assert_eq!(ciphertext[1], 0x88);
    assert_eq!(ciphertext[29], 0x8b);
    // zero fill between true and padded length
    assert_eq!(ciphertext[30], 0x00);
    assert_eq!(ciphertext[31], 0x00);
    assert_eq!(tag[0], 0xb6);
    assert_eq!(tag[15], 0x18);

    let mut recovered = [0u8; 32];
    gcm_decrypt(&key, &iv, &ciphertext, &aad, &tag, &mut recovered).expect("tag authenticates");
    assert_eq!(&recovered[..30], &plaintext);
}

#[test]
fn nine_byte_plaintext_exercises_padding() {
    let key = [0u8; 16];
    let iv = [0u8; 12];
    let aad = [0u8; 4];
    let plaintext = [0x55u8; 9];

    let mut ciphertext = [0u8; 16];
    let mut tag = [0u8; 16];
    gcm_encrypt(&key, &iv, &plaintext, &aad, &mut ciphertext, &mut tag).expect("encrypt succeeds");

    assert_eq!(ciphertext[0], 0x56);
    assert_eq!(ciphertext[1], 0xdd);
    assert_eq!(ciphertext[8], 0xa6);
    assert_eq!(tag[0], 0x9b);
    assert_eq!(tag[15], 0x75);

    let mut recovered = [0u8; 16];
    gcm_decrypt(&key, &iv, &ciphertext, &aad, &tag, &mut recovered).expect("tag authenticates");
    assert_eq!(&recovered[..9], &plaintext);
}

// GCMVS vectors (keylen = 128) from
// https://csrc.nist.gov/Projects/cryptographic-algorithm-validation-program/CAVP-TESTING-BLOCK-CIPHER-MODES

#[test]
fn gcmvs_ptlen_128_aadlen_160() {
    let key = hex!("d4a22488f8dd1d5c6c19a7d6ca17964c");
    let iv = hex!("f3d5837f22ac1a0425e0d1d5");
    let plaintext = hex!("7b43016a16896497fb457be6d2a54122");
    let aad = hex!("f1c5d424b83f96c6ad8cb28ca0d20e475e023b5a");

    let mut ciphertext = [0u8; 16];
    let mut tag = [0u8; 16];
    gcm_encrypt(&key, &iv, &plaintext, &aad, &mut ciphertext, &mut tag).expect("encrypt succeeds");

    assert_eq!(ciphertext, hex!("c2bd67eef5e95cac27e3b06e3031d0a8"));
    assert_eq!(tag, hex!("f23eacf9d1cdf8737726c58648826e9c"));

    let mut recovered = [0u8; 16];
    gcm_decrypt(&key, &iv, &ciphertext, &aad, &tag, &mut recovered).expect("tag authenticates");
    assert_eq!(recovered, plaintext);
}

#[test]
fn gcmvs_ptlen_256_aadlen_128() {
    let key = hex!("298efa1ccf29cf62ae6824bfc19557fc");
    let iv = hex!("6f58a93fe1d207fae4ed2f6d");
    let plaintext = hex!("cc38bccd6bc536ad919b1395f5d63801f99f8068d65ca5ac63872daf16b93901");
    let aad = hex!("021fafd238463973ffe80256e5b1c6b1");

    // block-multiple plaintext: drive the padded entry point
    let mut ciphertext = [0u8; 32];
    let mut tag = [0u8; 16];
    gcm_encrypt_padded(&key, &iv, &plaintext, &aad, &mut ciphertext, &mut tag)
        .expect("encrypt succeeds");

    assert_eq!(
        ciphertext,
        hex!("dfce4e9cd291103d7fe4e63351d9e79d3dfd391e3267104658212da96521b7db")
    );
    assert_eq!(tag, hex!("542465ef599316f73a7a560509a2d9f2"));

    let mut recovered = [0u8; 32];
    gcm_decrypt(&key, &iv, &ciphertext, &aad, &tag, &mut recovered).expect("tag authenticates");
    assert_eq!(recovered, plaintext);
}

#[test]
fn gmac_tag_only() {
    // no plaintext at all: the tag authenticates the AAD alone
    let key = [0u8; 16];
    let iv = [0u8; 12];
    let aad = [0u8; 16];

    let mut tag = [0u8; 16];
    gcm_encrypt(&key, &iv, &[], &aad, &mut [], &mut tag).expect("aad-only succeeds");

    gcm_decrypt(&key, &iv, &[], &aad, &tag, &mut []).expect("tag authenticates");
}

#[test]
fn tampered_tag_rejected() {
    let key = hex!("298efa1ccf29cf62ae6824bfc19557fc");
    let iv = hex!("6f58a93fe1d207fae4ed2f6d");
    let ciphertext = hex!("dfce4e9cd291103d7fe4e63351d9e79d3dfd391e3267104658212da96521b7db");
    let aad = hex!("021fafd238463973ffe80256e5b1c6b1");
    let mut tag = hex!("542465ef599316f73a7a560509a2d9f2");

    tag[0] ^= 0x01;

    let mut recovered = [0u8; 32];
    let result = gcm_decrypt(&key, &iv, &ciphertext, &aad, &tag, &mut recovered);
    assert!(matches!(result, Err(Error::AuthFailed)));
}

#[test]
fn every_tag_bit_matters() {
    let key = hex!("298efa1ccf29cf62ae6824bfc19557fc");
    let iv = hex!("6f58a93fe1d207fae4ed2f6d");
    let ciphertext = hex!("dfce4e9cd291103d7fe4e63351d9e79d3dfd391e3267104658212da96521b7db");
    let aad = hex!("021fafd238463973ffe80256e5b1c6b1");
    let tag = hex!("542465ef599316f73a7a560509a2d9f2");

    let mut recovered = [0u8; 32];
    for byte in 0..16 {
        for bit in 0..8 {
            let mut bad_tag = tag;
            bad_tag[byte] ^= 1 << bit;
            let result = gcm_decrypt(&key, &iv, &ciphertext, &aad, &bad_tag, &mut recovered);
            assert!(
                matches!(result, Err(Error::AuthFailed)),
                "flipped tag bit {bit} of byte {byte} went unnoticed"
            );
        }
    }
}

#[test]
fn every_aad_bit_matters() {
    let key = hex!("298efa1ccf29cf62ae6824bfc19557fc");
    let iv = hex!("6f58a93fe1d207fae4ed2f6d");
    let ciphertext = hex!("dfce4e9cd291103d7fe4e63351d9e79d3dfd391e3267104658212da96521b7db");
    let aad = hex!("021fafd238463973ffe80256e5b1c6b1");
    let tag = hex!("542465ef599316f73a7a560509a2d9f2");

    let mut recovered = [0u8; 32];
    for byte in 0..aad.len() {
        for bit in 0..8 {
            let mut bad_aad = aad;
            bad_aad[byte] ^= 1 << bit;
            let result = gcm_decrypt(&key, &iv, &ciphertext, &bad_aad, &tag, &mut recovered);
            assert!(
                matches!(result, Err(Error::AuthFailed)),
                "flipped AAD bit {bit} of byte {byte} went unnoticed"
            );
        }
    }
}

#[test]
fn every_ciphertext_bit_matters() {
    let key = hex!("298efa1ccf29cf62ae6824bfc19557fc");
    let iv = hex!("6f58a93fe1d207fae4ed2f6d");
    let ciphertext = hex!("dfce4e9cd291103d7fe4e63351d9e79d3dfd391e3267104658212da96521b7db");
    let aad = hex!("021fafd238463973ffe80256e5b1c6b1");
    let tag = hex!("542465ef599316f73a7a560509a2d9f2");

    let mut recovered = [0u8; 32];
    for byte in 0..ciphertext.len() {
        for bit in 0..8 {
            let mut bad_ct = ciphertext;
            bad_ct[byte] ^= 1 << bit;
            let result = gcm_decrypt(&key, &iv, &bad_ct, &aad, &tag, &mut recovered);
            assert!(
                matches!(result, Err(Error::AuthFailed)),
                "flipped ciphertext bit {bit} of byte {byte} went unnoticed"
            );
        }
    }
}

#[test]
fn rejects_empty_everything() {
    let mut tag = [0u8; 16];
    let result = gcm_encrypt(&[0u8; 16], &[0u8; 12], &[], &[], &mut [], &mut tag);
    assert!(matches!(result, Err(Error::EmptyInput)));

    let result = gcm_decrypt(&[0u8; 16], &[0u8; 12], &[], &[], &tag, &mut []);
    assert!(matches!(result, Err(Error::EmptyInput)));
}

#[test]
fn rejects_misaligned_ciphertext() {
    let ciphertext = [0u8; 15];
    let tag = [0u8; 16];
    let mut recovered = [0u8; 16];
    let result = gcm_decrypt(&[0u8; 16], &[0u8; 12], &ciphertext, &[], &tag, &mut recovered);
    assert!(matches!(result, Err(Error::BadAlignment { len: 15 })));
}

#[test]
fn rejects_misaligned_padded_plaintext() {
    let plaintext = [0u8; 17];
    let mut ciphertext = [0u8; 32];
    let mut tag = [0u8; 16];
    let result = gcm_encrypt_padded(
        &[0u8; 16],
        &[0u8; 12],
        &plaintext,
        &[],
        &mut ciphertext,
        &mut tag,
    );
    assert!(matches!(result, Err(Error::BadAlignment { len: 17 })));
}

#[test]
fn rejects_oversized_lengths() {
    // plaintext beyond 255 - 16 would overflow the padded length
    let plaintext = [0u8; 240];
    let mut ciphertext = [0u8; 240];
    let mut tag = [0u8; 16];
    let result = gcm_encrypt(
        &[0u8; 16],
        &[0u8; 12],
        &plaintext,
        &[],
        &mut ciphertext,
        &mut tag,
    );
    assert!(matches!(result, Err(Error::SizeOverflow { len: 240 })));

    // AAD beyond a byte-sized length
    let aad = [0u8; 256];
    let result = gcm_encrypt(&[0u8; 16], &[0u8; 12], &[], &aad, &mut [], &mut tag);
    assert!(matches!(result, Err(Error::SizeOverflow { len: 256 })));

    // ciphertext beyond a byte-sized length, even though block-aligned
    let big_ct = [0u8; 256];
    let mut recovered = [0u8; 256];
    let result = gcm_decrypt(
        &[0u8; 16],
        &[0u8; 12],
        &big_ct,
        &[],
        &tag,
        &mut recovered,
    );
    assert!(matches!(result, Err(Error::SizeOverflow { len: 256 })));
}

#[test]
fn rejects_short_output_buffers() {
    // 17 bytes of plaintext need a 32-byte ciphertext buffer
    let plaintext = [0u8; 17];
    let mut ciphertext = [0u8; 31];
    let mut tag = [0u8; 16];
    let result = gcm_encrypt(
        &[0u8; 16],
        &[0u8; 12],
        &plaintext,
        &[],
        &mut ciphertext,
        &mut tag,
    );
    assert!(matches!(
        result,
        Err(Error::OutputTooSmall { len: 31, required: 32 })
    ));
    assert_eq!(padded_ciphertext_len(plaintext.len()), 32);

    let valid_ct = [0u8; 16];
    let mut short_pt = [0u8; 15];
    let result = gcm_decrypt(
        &[0u8; 16],
        &[0u8; 12],
        &valid_ct,
        &[],
        &tag,
        &mut short_pt,
    );
    assert!(matches!(
        result,
        Err(Error::OutputTooSmall { len: 15, required: 16 })
    ));
}
