//! Context providers.
//!
//! Lookups run while the stack is being defined. A provider answers a
//! [`ContextQuery`] with a value, or `None` when it has nothing cached yet.
//!
//! - [`StaticContext`]: values loaded from `paramstore.context.json`
//! - `SsmContextProvider`: live SSM `GetParameter` calls (`--features aws`)

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::error::{LookupError, Result};

/// A context query: provider name plus sorted properties.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ContextQuery {
    provider: String,
    props: BTreeMap<String, String>,
}

impl ContextQuery {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            props: BTreeMap::new(),
        }
    }

    pub fn prop(mut self, key: &str, value: impl Into<String>) -> Self {
        self.props.insert(key.to_string(), value.into());
        self
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.props.get(key).map(String::as_str)
    }

    /// Cache key, e.g. `ssm:account=1:parameterName=/a:region=us-east-1`.
    pub fn key(&self) -> String {
        let mut key = self.provider.clone();
        for (k, v) in &self.props {
            key.push_str(&format!(":{}={}", k, v));
        }
        key
    }
}

/// Synchronous source of context values.
pub trait ContextProvider {
    /// Resolve a query. `Ok(None)` means the value is not available yet.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Provider` if the provider itself fails.
    fn get_value(&self, query: &ContextQuery) -> Result<Option<String>>;
}

/// Context values held in memory, keyed by [`ContextQuery::key`].
#[derive(Debug, Default, Clone)]
pub struct StaticContext {
    values: BTreeMap<String, String>,
}

impl StaticContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON object of `key -> value` pairs.
    ///
    /// A missing file yields an empty context.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::ContextFile` if the file exists but cannot be
    /// read or is not a flat JSON object of strings.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no context file");
            return Ok(Self::new());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| LookupError::ContextFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let values: BTreeMap<String, String> =
            serde_json::from_str(&contents).map_err(|e| LookupError::ContextFile {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        debug!(path = %path.display(), entries = values.len(), "context loaded");
        Ok(Self { values })
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn with(mut self, query: &ContextQuery, value: impl Into<String>) -> Self {
        self.insert(query.key(), value);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ContextProvider for StaticContext {
    fn get_value(&self, query: &ContextQuery) -> Result<Option<String>> {
        Ok(self.values.get(&query.key()).cloned())
    }
}

/// Live SSM lookups.
///
/// Uses AWS credentials from the environment or the default credential
/// provider chain, in the region named by the query.
#[cfg(feature = "aws")]
#[derive(Debug, Default)]
pub struct SsmContextProvider;

#[cfg(feature = "aws")]
impl ContextProvider for SsmContextProvider {
    fn get_value(&self, query: &ContextQuery) -> Result<Option<String>> {
        use tracing::trace;

        let Some(name) = query.get("parameterName") else {
            return Ok(None);
        };
        let region = query.get("region").map(str::to_string);

        trace!(name, region = ?region, "looking up SSM parameter");

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| LookupError::Provider(format!("failed to create runtime: {}", e)))?;

        rt.block_on(async {
            let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
            if let Some(region) = region {
                loader = loader.region(aws_config::Region::new(region));
            }
            let config = loader.load().await;
            let client = aws_sdk_ssm::Client::new(&config);

            let result = client
                .get_parameter()
                .name(name)
                .with_decryption(true)
                .send()
                .await
                .map_err(|e| LookupError::Provider(format!("GetParameter failed: {}", e)))?;

            let value = result
                .parameter()
                .and_then(|p| p.value())
                .map(str::to_string);

            trace!(found = value.is_some(), "SSM lookup finished");
            Ok(value)
        })
    }
}
