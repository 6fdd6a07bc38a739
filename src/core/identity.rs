//! Construct identities.
//!
//! Logical IDs for template entries, generated parameter names and the
//! identity used to deduplicate imported parameter values.

use sha2::{Digest, Sha256};

use crate::core::constants::{IMPORT_IDENTITY_NAMESPACE, IMPORT_IDENTITY_VERSION};
use crate::core::token::Value;

/// Path components dropped from logical IDs.
const HIDDEN_COMPONENTS: &[&str] = &["Resource", "Default"];

const HASH_LEN: usize = 8;

/// Identity of the deduplicated import for `name`.
///
/// The same name always maps to the same identity, so repeated lookups in
/// one stack find the import created by the first.
pub fn import_identity(name: &Value<String>) -> String {
    format!(
        "{}:{}:{}",
        IMPORT_IDENTITY_NAMESPACE,
        name.display(),
        IMPORT_IDENTITY_VERSION
    )
}

/// Logical ID for a construct path.
///
/// Non-alphanumeric characters are stripped and an 8 character digest of
/// the full path is appended, so two paths that strip to the same text
/// still get distinct IDs.
pub fn logical_id(path: &[&str]) -> String {
    let human: String = path
        .iter()
        .filter(|c| !HIDDEN_COMPONENTS.contains(c))
        .flat_map(|c| c.chars())
        .filter(|ch| ch.is_ascii_alphanumeric())
        .collect();

    format!("{}{}", human, path_hash(path))
}

/// Physical name generated for a parameter declared without one.
///
/// Both parts keep only characters valid in a parameter name.
pub fn generated_name(stack_name: &str, id: &str) -> String {
    format!(
        "{}-{}-{}",
        name_safe(stack_name),
        name_safe(id),
        path_hash(&[stack_name, id])
    )
}

fn name_safe(text: &str) -> String {
    text.chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '-' || *ch == '_')
        .collect()
}

fn path_hash(path: &[&str]) -> String {
    let digest = Sha256::digest(path.join("/").as_bytes());
    let hex: String = digest.iter().map(|b| format!("{:02X}", b)).collect();
    hex[..HASH_LEN].to_string()
}
