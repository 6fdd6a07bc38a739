//! Encryption keys associated with SecureString parameters.
//!
//! The key lifecycle lives elsewhere; parameters only need to extend their
//! grants to the key.

use crate::core::constants::{KMS_DECRYPT_ACTIONS, KMS_ENCRYPT_ACTIONS};
use crate::core::iam::{Grant, Grantable};
use crate::core::token::Value;

/// Grant surface of a KMS key.
pub trait EncryptionKey {
    fn key_arn(&self) -> &Value<String>;

    /// Allow the grantee to decrypt with this key.
    fn grant_decrypt(&self, grantee: &mut dyn Grantable) -> Grant {
        Grant::add_to_principal(grantee, KMS_DECRYPT_ACTIONS, vec![self.key_arn().clone()])
    }

    /// Allow the grantee to encrypt with this key.
    fn grant_encrypt(&self, grantee: &mut dyn Grantable) -> Grant {
        Grant::add_to_principal(grantee, KMS_ENCRYPT_ACTIONS, vec![self.key_arn().clone()])
    }
}

/// A key referenced by ARN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    arn: Value<String>,
}

impl Key {
    pub fn from_key_arn(arn: impl Into<Value<String>>) -> Self {
        Self { arn: arn.into() }
    }
}

impl EncryptionKey for Key {
    fn key_arn(&self) -> &Value<String> {
        &self.arn
    }
}
