//! Provider registry: which script writer a database provider gets.

/// How generated SQL is written to an output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterPolicy {
    /// SQL and comments only.
    Plain,
    /// Each SQL statement is followed by a batch separator line.
    BatchSeparated { separator: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ProviderEntry {
    prefix: String,
    policy: WriterPolicy,
}

/// Maps provider-name prefixes to writer policies.
///
/// Lookup is case-insensitive and the longest matching prefix wins, so a
/// specific entry such as `sqlserverce` can override the `sqlserver` family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRegistry {
    entries: Vec<ProviderEntry>,
}

pub const SQL_SERVER_PREFIX: &str = "sqlserver";
pub const SQL_SERVER_BATCH_SEPARATOR: &str = "GO";

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::empty().with_entry(
            SQL_SERVER_PREFIX,
            WriterPolicy::BatchSeparated { separator: SQL_SERVER_BATCH_SEPARATOR.to_string() },
        )
    }
}

impl ProviderRegistry {
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    /// Register a prefix, replacing any entry with the same prefix.
    pub fn with_entry(mut self, prefix: &str, policy: WriterPolicy) -> Self {
        let prefix = prefix.to_ascii_lowercase();
        self.entries.retain(|entry| entry.prefix != prefix);
        self.entries.push(ProviderEntry { prefix, policy });
        self
    }

    pub fn policy_for(&self, provider: &str) -> WriterPolicy {
        let provider = provider.to_ascii_lowercase();
        self.entries
            .iter()
            .filter(|entry| provider.starts_with(&entry.prefix))
            .max_by_key(|entry| entry.prefix.len())
            .map(|entry| entry.policy.clone())
            .unwrap_or(WriterPolicy::Plain)
    }
}
