//! Sign-then-encrypt messages between two RSA key holders.
//!
//! Each side keeps its own private key and hands its public key to the other. The sender
//! signs with its own private key and encrypts a fresh AES-256 session key with the
//! receiver's public key; the receiver decrypts with its private key and verifies with
//! the sender's public key.

use tracing::trace;
use zeroize::Zeroizing;

use crate::aes::{AES_BLOCK_SIZE, Aes};
use crate::{CryptoError, RsaPrivate, RsaPublic};

const SESSION_KEY_SIZE: usize = 32;

/// Output of [`Hybrid::encrypt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// AES-CBC ciphertext followed by its 16-byte IV
    pub token: Vec<u8>,

    /// AES key, RSA-OAEP encrypted for the receiver
    pub session_key: Vec<u8>,

    /// RSA-PSS signature of the plaintext by the sender
    pub signature: Vec<u8>,
}

pub struct Hybrid;

impl Hybrid {
    pub fn encrypt(
        msg: &[u8],
        sign_key: &RsaPrivate,
        encrypt_key: &RsaPublic,
    ) -> Result<Envelope, CryptoError> {
        let key = Zeroizing::new(Aes::generate_key(SESSION_KEY_SIZE)?);
        let iv = Aes::generate_iv()?;
        let aes = Aes::new(&key, &iv)?;

        let signature = sign_key.sign(msg)?;
        let mut token = aes.encrypt(msg)?;
        token.extend_from_slice(&iv);
        let session_key = encrypt_key.encrypt(&key)?;

        trace!(msg_len = msg.len(), token_len = token.len(), "sealed envelope");
        Ok(Envelope {
            token,
            session_key,
            signature,
        })
    }

    /// Fails with [`CryptoError::InvalidSignature`] when the plaintext was not signed by
    /// the owner of `verify_key`.
    pub fn decrypt(
        envelope: &Envelope,
        decrypt_key: &RsaPrivate,
        verify_key: &RsaPublic,
    ) -> Result<Vec<u8>, CryptoError> {
        let token = &envelope.token;
        if token.len() < AES_BLOCK_SIZE {
            return Err(CryptoError::TruncatedToken(token.len()));
        }
        let (ciphertext, iv) = token.split_at(token.len() - AES_BLOCK_SIZE);

        let key = Zeroizing::new(decrypt_key.decrypt(&envelope.session_key)?);
        let msg = Aes::new(&key, iv)?.decrypt(ciphertext)?;
        verify_key.verify(&msg, &envelope.signature)?;

        trace!(msg_len = msg.len(), "opened envelope");
        Ok(msg)
    }
}
