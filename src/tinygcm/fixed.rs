//! Fixed-shape convenience adapters: 32-byte text, 12-byte nonce, 16-byte
//! tag, variable AAD. Passing `None` text is the GMAC shorthand for "length
//! zero": the AAD alone is authenticated and only a tag is produced or
//! checked.

use crate::tinygcm::error::Result;
use crate::tinygcm::gcm::{
    gcm_decrypt, gcm_decrypt_with_workspace, gcm_encrypt_padded,
    gcm_encrypt_padded_with_workspace,
};
use crate::tinygcm::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};

/// Text size handled by this module's adapters; two cipher blocks.
pub const TEXT_SIZE: usize = 32;

/// Encrypts a 32-byte plaintext (or authenticates the AAD alone when
/// `plaintext` is `None`), with scratch on the stack. `ciphertext` is left
/// untouched in the `None` case.
pub fn encrypt32(
    key: &[u8; KEY_SIZE],
    iv: &[u8; NONCE_SIZE],
    aad: &[u8],
    plaintext: Option<&[u8; TEXT_SIZE]>,
    ciphertext: &mut [u8; TEXT_SIZE],
    tag: &mut [u8; TAG_SIZE],
) -> Result<()> {
    match plaintext {
        Some(plaintext) => gcm_encrypt_padded(key, iv, plaintext, aad, ciphertext, tag),
        None => gcm_encrypt_padded(key, iv, &[], aad, &mut [], tag),
    }
}

/// [`encrypt32`] with caller-supplied scratch of at least
/// [`WORKSPACE_ENC_PADDED`](crate::WORKSPACE_ENC_PADDED) bytes.
pub fn encrypt32_with_workspace(
    workspace: &mut [u8],
    key: &[u8; KEY_SIZE],
    iv: &[u8; NONCE_SIZE],
    aad: &[u8],
    plaintext: Option<&[u8; TEXT_SIZE]>,
    ciphertext: &mut [u8; TEXT_SIZE],
    tag: &mut [u8; TAG_SIZE],
) -> Result<()> {
    match plaintext {
        Some(plaintext) => {
            gcm_encrypt_padded_with_workspace(workspace, key, iv, plaintext, aad, ciphertext, tag)
        }
        None => gcm_encrypt_padded_with_workspace(workspace, key, iv, &[], aad, &mut [], tag),
    }
}

/// Decrypts a 32-byte ciphertext after verifying its tag (or just verifies a
/// GMAC tag over the AAD when `ciphertext` is `None`), with scratch on the
/// stack. `plaintext` is left untouched in the `None` case, and holds
/// unspecified bytes when verification fails.
pub fn decrypt32(
    key: &[u8; KEY_SIZE],
    iv: &[u8; NONCE_SIZE],
    aad: &[u8],
    ciphertext: Option<&[u8; TEXT_SIZE]>,
    tag: &[u8; TAG_SIZE],
    plaintext: &mut [u8; TEXT_SIZE],
) -> Result<()> {
    match ciphertext {
        Some(ciphertext) => gcm_decrypt(key, iv, ciphertext, aad, tag, plaintext),
        None => gcm_decrypt(key, iv, &[], aad, tag, &mut []),
    }
}

/// [`decrypt32`] with caller-supplied scratch of at least
/// [`WORKSPACE_DEC`](crate::WORKSPACE_DEC) bytes.
pub fn decrypt32_with_workspace(
    workspace: &mut [u8],
    key: &[u8; KEY_SIZE],
    iv: &[u8; NONCE_SIZE],
    aad: &[u8],
    ciphertext: Option<&[u8; TEXT_SIZE]>,
    tag: &[u8; TAG_SIZE],
    plaintext: &mut [u8; TEXT_SIZE],
) -> Result<()> {
    match ciphertext {
        Some(ciphertext) => {
            gcm_decrypt_with_workspace(workspace, key, iv, ciphertext, aad, tag, plaintext)
        }
        None => gcm_decrypt_with_workspace(workspace, key, iv, &[], aad, tag, &mut []),
    }
}
