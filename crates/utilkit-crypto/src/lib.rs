//! AES-CBC/CTR, RSA OAEP encryption and PSS signatures, PEM and OpenSSH keys and a
//! hybrid sign-then-encrypt envelope. The primitives are backed by `aws-lc-rs`.

#![forbid(unsafe_code)]

pub mod aes;
pub mod hybrid;
pub mod pem;
pub mod rsa;

use aws_lc_rs::error::{KeyRejected, Unspecified};

pub use aes::{AES_BLOCK_SIZE, AES_KEY_SIZES, Aes, AesCtr};
pub use hybrid::{Envelope, Hybrid};
pub use rsa::{RsaPrivate, RsaPublic};

#[derive(thiserror::Error, Debug)]
pub enum CryptoError {
    #[error("AES key must be 16, 24 or 32 bytes: {0} bytes")]
    InvalidKeyLength(usize),

    #[error("IV must be 16 bytes: {0} bytes")]
    InvalidIvLength(usize),

    #[error("token is shorter than its 16-byte IV: {0} bytes")]
    TruncatedToken(usize),

    #[error("expected a '{expected}' PEM block")]
    PemLabel { expected: &'static str },

    #[error("malformed PEM: {0}")]
    Pem(String),

    #[error("decoding PEM body: {0}")]
    Decode(#[from] data_encoding::DecodeError),

    #[error("PKCS#8: {0}")]
    Pkcs8(#[from] pkcs8::Error),

    #[error("public key info: {0}")]
    Spki(#[from] pkcs8::spki::Error),

    #[error("{0}")]
    Ssh(#[from] ssh_key::Error),

    #[error("expected an ssh-rsa key, found {0}")]
    NotRsa(String),

    #[error("key rejected: {0}")]
    KeyRejected(#[from] KeyRejected),

    #[error("signature verification failed")]
    InvalidSignature,

    #[error("cryptographic operation failed")]
    Unspecified(#[from] Unspecified),
}

/// Generate `len` cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Result<Vec<u8>, CryptoError> {
    let mut val = vec![0u8; len];
    aws_lc_rs::rand::fill(&mut val)?;
    Ok(val)
}
