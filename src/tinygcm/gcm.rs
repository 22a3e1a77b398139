//! GCM composition: authentication subkey and initial-counter-block
//! derivation, the GCTR keystream, tag generation, and the one-shot
//! encrypt / decrypt operations built from them.

use subtle::ConstantTimeEq;

use crate::tinygcm::cipher::{Aes128Enc, BlockEncrypt};
use crate::tinygcm::error::{Error, Result};
use crate::tinygcm::gf128::ghash;
use crate::tinygcm::workspace::{
    GCTR_PADDED_SCRATCH, GCTR_SCRATCH, GcmOp, WORKSPACE_DEC, WORKSPACE_ENC, WORKSPACE_ENC_PADDED,
    Workspace, take_block, take_schedule,
};
use crate::tinygcm::{BLOCK_SIZE, KEY_SIZE, NONCE_SIZE, TAG_SIZE};

// All lengths ride in 8-bit fields on the kind of links this targets.
const LEN_MAX: usize = u8::MAX as usize;

const ZERO_BLOCK: [u8; BLOCK_SIZE] = [0u8; BLOCK_SIZE];

/// Ciphertext bytes produced for a plaintext of `plaintext_len` bytes: the
/// length rounded up to a whole number of 16-byte blocks.
pub const fn padded_ciphertext_len(plaintext_len: usize) -> usize {
    (plaintext_len + BLOCK_SIZE - 1) & !(BLOCK_SIZE - 1)
}

/// H = AES_K(0^128).
fn derive_auth_key<C: BlockEncrypt>(
    cipher: &mut C,
    key: &[u8; KEY_SIZE],
    auth_key: &mut [u8; BLOCK_SIZE],
) {
    cipher.block_encrypt(&ZERO_BLOCK, key, auth_key);
}

/// J0 = IV || 0^31 || 1. Only 96-bit nonces are supported, which is what
/// makes this form of the initial counter block valid.
fn derive_icb(iv: &[u8; NONCE_SIZE], icb: &mut [u8; BLOCK_SIZE]) {
    icb[..NONCE_SIZE].copy_from_slice(iv);
    icb[NONCE_SIZE..].copy_from_slice(&[0x00, 0x00, 0x00, 0x01]);
}

/// Increments the low 32 bits of a counter block modulo 2^32; the high 96
/// bits stay fixed for the whole operation.
fn incr32(block: &mut [u8; BLOCK_SIZE]) {
    for byte in block[BLOCK_SIZE - 4..].iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            return;
        }
    }
}

/// GCTR keystream application. Writes `input.len()` bytes to the front of
/// `output`: each output block gets the keystream first, then the matching
/// input xored in. The counter is not advanced past a trailing partial block.
fn gctr<C: BlockEncrypt>(
    cipher: &mut C,
    key: &[u8; KEY_SIZE],
    icb: &[u8; BLOCK_SIZE],
    input: &[u8],
    output: &mut [u8],
    scratch: &mut [u8],
) {
    if input.is_empty() {
        return;
    }
    debug_assert!(scratch.len() >= GCTR_SCRATCH);

    let (ctr, scratch) = take_block(scratch);
    let (tmp, _) = take_block(scratch);
    ctr.copy_from_slice(icb);

    let mut in_blocks = input.chunks_exact(BLOCK_SIZE);
    let mut out_blocks = output[..input.len()].chunks_exact_mut(BLOCK_SIZE);

    for (in_block, out_block) in in_blocks.by_ref().zip(out_blocks.by_ref()) {
        let out_block: &mut [u8; BLOCK_SIZE] = out_block.try_into().unwrap(); // chunks are exactly 16
        cipher.block_encrypt(ctr, key, out_block);
        for j in 0..BLOCK_SIZE {
            out_block[j] ^= in_block[j];
        }
        incr32(ctr);
    }

    let tail = in_blocks.remainder();
    if !tail.is_empty() {
        cipher.block_encrypt(ctr, key, tmp);
        let tail_out = out_blocks.into_remainder();
        for j in 0..tail.len() {
            tail_out[j] = tail[j] ^ tmp[j];
        }
    }
}

/// GCTR restricted to whole blocks; needs no keystream tmp because each
/// block is ciphered straight into the output.
fn gctr_padded<C: BlockEncrypt>(
    cipher: &mut C,
    key: &[u8; KEY_SIZE],
    icb: &[u8; BLOCK_SIZE],
    input: &[u8],
    output: &mut [u8],
    scratch: &mut [u8],
) {
    if input.is_empty() {
        return;
    }
    debug_assert!(input.len() % BLOCK_SIZE == 0);
    debug_assert!(scratch.len() >= GCTR_PADDED_SCRATCH);

    let (ctr, _) = take_block(scratch);
    ctr.copy_from_slice(icb);

    for (in_block, out_block) in input
        .chunks_exact(BLOCK_SIZE)
        .zip(output[..input.len()].chunks_exact_mut(BLOCK_SIZE))
    {
        let out_block: &mut [u8; BLOCK_SIZE] = out_block.try_into().unwrap(); // chunks are exactly 16
        cipher.block_encrypt(ctr, key, out_block);
        for j in 0..BLOCK_SIZE {
            out_block[j] ^= in_block[j];
        }
        incr32(ctr);
    }
}

/// Ciphertext from plaintext (or back): GCTR starting one past the ICB.
fn generate_cdata<C: BlockEncrypt>(
    cipher: &mut C,
    key: &[u8; KEY_SIZE],
    icb: &[u8; BLOCK_SIZE],
    input: &[u8],
    output: &mut [u8],
    scratch: &mut [u8],
) {
    let (ctr, scratch) = take_block(scratch);
    ctr.copy_from_slice(icb);
    incr32(ctr);
    gctr(cipher, key, ctr, input, output, scratch);
}

/// [`generate_cdata`] for whole-block input.
fn generate_cdata_padded<C: BlockEncrypt>(
    cipher: &mut C,
    key: &[u8; KEY_SIZE],
    icb: &[u8; BLOCK_SIZE],
    input: &[u8],
    output: &mut [u8],
    scratch: &mut [u8],
) {
    let (ctr, scratch) = take_block(scratch);
    ctr.copy_from_slice(icb);
    incr32(ctr);
    gctr_padded(cipher, key, ctr, input, output, scratch);
}

/// Tag over AAD || CDATA || length frame, finished with the keystream block
/// derived from the ICB itself (not ICB+1).
fn generate_tag<C: BlockEncrypt>(
    cipher: &mut C,
    key: &[u8; KEY_SIZE],
    auth_key: &[u8; BLOCK_SIZE],
    icb: &[u8; BLOCK_SIZE],
    aad: &[u8],
    cdata: &[u8],
    tag: &mut [u8; TAG_SIZE],
    scratch: &mut [u8],
) {
    let (s, scratch) = take_block(scratch);
    let (tmp, scratch) = take_block(scratch);
    let (v, scratch) = take_block(scratch);
    let (len_block, _) = take_block(scratch);

    // S = GHASH_H(A || 0-pad || C || 0-pad || [len(A)]64 || [len(C)]64),
    // lengths in bits
    s.fill(0);
    ghash(auth_key, aad, s, tmp, v);
    ghash(auth_key, cdata, s, tmp, v);

    len_block[..8].copy_from_slice(&((aad.len() as u64) * 8).to_be_bytes());
    len_block[8..].copy_from_slice(&((cdata.len() as u64) * 8).to_be_bytes());
    ghash(auth_key, &len_block[..], s, tmp, v);

    // tag = GCTR(K, ICB, S); the consumed length frame doubles as the
    // counter scratch
    gctr_padded(cipher, key, icb, &s[..], &mut tag[..], &mut len_block[..]);
}

fn check_encrypt_inputs(plaintext: &[u8], aad: &[u8], ciphertext_len: usize) -> Result<()> {
    if plaintext.is_empty() && aad.is_empty() {
        return Err(Error::EmptyInput);
    }
    if aad.len() > LEN_MAX {
        return Err(Error::SizeOverflow { len: aad.len() });
    }
    if plaintext.len() > LEN_MAX - BLOCK_SIZE {
        return Err(Error::SizeOverflow {
            len: plaintext.len(),
        });
    }
    let required = padded_ciphertext_len(plaintext.len());
    if ciphertext_len < required {
        return Err(Error::OutputTooSmall {
            len: ciphertext_len,
            required,
        });
    }
    Ok(())
}

fn check_decrypt_inputs(ciphertext: &[u8], aad: &[u8], plaintext_len: usize) -> Result<()> {
    if ciphertext.is_empty() && aad.is_empty() {
        return Err(Error::EmptyInput);
    }
    if aad.len() > LEN_MAX {
        return Err(Error::SizeOverflow { len: aad.len() });
    }
    if ciphertext.len() > LEN_MAX {
        return Err(Error::SizeOverflow {
            len: ciphertext.len(),
        });
    }
    if ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(Error::BadAlignment {
            len: ciphertext.len(),
        });
    }
    if plaintext_len < ciphertext.len() {
        return Err(Error::OutputTooSmall {
            len: plaintext_len,
            required: ciphertext.len(),
        });
    }
    Ok(())
}

fn encrypt_parts(
    ws: &mut [u8],
    key: &[u8; KEY_SIZE],
    iv: &[u8; NONCE_SIZE],
    plaintext: &[u8],
    aad: &[u8],
    ciphertext: &mut [u8],
    tag: &mut [u8; TAG_SIZE],
    padded: bool,
) {
    let padded_len = padded_ciphertext_len(plaintext.len());

    let (schedule, gcm_ws) = take_schedule(ws);
    let mut cipher = Aes128Enc::from_schedule(schedule);

    let (auth_key, gcm_ws) = take_block(gcm_ws);
    let (icb, op_ws) = take_block(gcm_ws);

    derive_auth_key(&mut cipher, key, auth_key);
    derive_icb(iv, icb);

    if padded {
        generate_cdata_padded(&mut cipher, key, icb, plaintext, ciphertext, op_ws);
    } else {
        generate_cdata(&mut cipher, key, icb, plaintext, ciphertext, op_ws);
        // the bytes between the true and the padded ciphertext length are
        // part of what gets authenticated, so pin them to zero
        ciphertext[plaintext.len()..padded_len].fill(0);
    }

    generate_tag(
        &mut cipher,
        key,
        auth_key,
        icb,
        aad,
        &ciphertext[..padded_len],
        tag,
        op_ws,
    );
}

fn decrypt_parts(
    ws: &mut [u8],
    key: &[u8; KEY_SIZE],
    iv: &[u8; NONCE_SIZE],
    ciphertext: &[u8],
    aad: &[u8],
    tag: &[u8; TAG_SIZE],
    plaintext: &mut [u8],
) -> Result<()> {
    let (schedule, gcm_ws) = take_schedule(ws);
    let mut cipher = Aes128Enc::from_schedule(schedule);

    let (auth_key, gcm_ws) = take_block(gcm_ws);
    let (icb, gcm_ws) = take_block(gcm_ws);
    let (calculated, op_ws) = take_block(gcm_ws);

    derive_auth_key(&mut cipher, key, auth_key);
    derive_icb(iv, icb);

    generate_cdata_padded(&mut cipher, key, icb, ciphertext, plaintext, op_ws);
    generate_tag(&mut cipher, key, auth_key, icb, aad, ciphertext, calculated, op_ws);

    if bool::from(calculated[..].ct_eq(&tag[..])) {
        Ok(())
    } else {
        Err(Error::AuthFailed)
    }
}

/// Authenticated encryption with scratch on the stack.
///
/// Writes `padded_ciphertext_len(plaintext.len())` bytes of ciphertext (the
/// plaintext under the keystream, zero-filled up to the block boundary) and
/// the 16-byte tag. The AAD is authenticated but not encrypted. An empty
/// plaintext with non-empty AAD degenerates to GMAC: only the tag is
/// produced.
pub fn gcm_encrypt(
    key: &[u8; KEY_SIZE],
    iv: &[u8; NONCE_SIZE],
    plaintext: &[u8],
    aad: &[u8],
    ciphertext: &mut [u8],
    tag: &mut [u8; TAG_SIZE],
) -> Result<()> {
    let mut scratch = [0u8; WORKSPACE_ENC];
    gcm_encrypt_with_workspace(&mut scratch, key, iv, plaintext, aad, ciphertext, tag)
}

/// [`gcm_encrypt`] with caller-supplied scratch of at least
/// [`WORKSPACE_ENC`](crate::WORKSPACE_ENC) bytes. The workspace is zeroed in
/// full before this returns, whether the operation succeeds or not.
pub fn gcm_encrypt_with_workspace(
    workspace: &mut [u8],
    key: &[u8; KEY_SIZE],
    iv: &[u8; NONCE_SIZE],
    plaintext: &[u8],
    aad: &[u8],
    ciphertext: &mut [u8],
    tag: &mut [u8; TAG_SIZE],
) -> Result<()> {
    let mut ws = Workspace::enter(workspace, GcmOp::Encrypt)?;
    check_encrypt_inputs(plaintext, aad, ciphertext.len())?;
    encrypt_parts(ws.bytes_mut(), key, iv, plaintext, aad, ciphertext, tag, false);
    Ok(())
}

/// [`gcm_encrypt`] for plaintext that is already a whole number of 16-byte
/// blocks; takes the GCTR path with no partial-block arm. Returns
/// [`Error::BadAlignment`] otherwise.
pub fn gcm_encrypt_padded(
    key: &[u8; KEY_SIZE],
    iv: &[u8; NONCE_SIZE],
    plaintext: &[u8],
    aad: &[u8],
    ciphertext: &mut [u8],
    tag: &mut [u8; TAG_SIZE],
) -> Result<()> {
    let mut scratch = [0u8; WORKSPACE_ENC_PADDED];
    gcm_encrypt_padded_with_workspace(&mut scratch, key, iv, plaintext, aad, ciphertext, tag)
}

/// [`gcm_encrypt_padded`] with caller-supplied scratch of at least
/// [`WORKSPACE_ENC_PADDED`](crate::WORKSPACE_ENC_PADDED) bytes.
pub fn gcm_encrypt_padded_with_workspace(
    workspace: &mut [u8],
    key: &[u8; KEY_SIZE],
    iv: &[u8; NONCE_SIZE],
    plaintext: &[u8],
    aad: &[u8],
    ciphertext: &mut [u8],
    tag: &mut [u8; TAG_SIZE],
) -> Result<()> {
    let mut ws = Workspace::enter(workspace, GcmOp::EncryptPadded)?;
    if plaintext.len() % BLOCK_SIZE != 0 {
        return Err(Error::BadAlignment {
            len: plaintext.len(),
        });
    }
    check_encrypt_inputs(plaintext, aad, ciphertext.len())?;
    encrypt_parts(ws.bytes_mut(), key, iv, plaintext, aad, ciphertext, tag, true);
    Ok(())
}

/// Authenticated decryption with scratch on the stack.
///
/// Recovers `ciphertext.len()` bytes of plaintext and verifies the supplied
/// tag in constant time. On [`Error::AuthFailed`] the plaintext buffer holds
/// unspecified bytes and must not be used. An empty ciphertext with
/// non-empty AAD verifies a GMAC tag.
pub fn gcm_decrypt(
    key: &[u8; KEY_SIZE],
    iv: &[u8; NONCE_SIZE],
    ciphertext: &[u8],
    aad: &[u8],
    tag: &[u8; TAG_SIZE],
    plaintext: &mut [u8],
) -> Result<()> {
    let mut scratch = [0u8; WORKSPACE_DEC];
    gcm_decrypt_with_workspace(&mut scratch, key, iv, ciphertext, aad, tag, plaintext)
}

/// [`gcm_decrypt`] with caller-supplied scratch of at least
/// [`WORKSPACE_DEC`](crate::WORKSPACE_DEC) bytes. The workspace is zeroed in
/// full before this returns, whether the tag verifies or not.
pub fn gcm_decrypt_with_workspace(
    workspace: &mut [u8],
    key: &[u8; KEY_SIZE],
    iv: &[u8; NONCE_SIZE],
    ciphertext: &[u8],
    aad: &[u8],
    tag: &[u8; TAG_SIZE],
    plaintext: &mut [u8],
) -> Result<()> {
    let mut ws = Workspace::enter(workspace, GcmOp::Decrypt)?;
    check_decrypt_inputs(ciphertext, aad, plaintext.len())?;
    decrypt_parts(ws.bytes_mut(), key, iv, ciphertext, aad, tag, plaintext)
}
