use serde::Serialize;
use std::collections::HashMap;

/// A package entry as parsed from one input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageEntry {
    /// Package name, exactly as written
    pub name: String,
    /// Version string, exactly as written
    pub version: String,
}

impl PackageEntry {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Name → version mapping collected from a package list.
///
/// Names are unique; inserting a name that is already present replaces its
/// version. No order is kept while collecting, `sorted` produces the
/// display order.
#[derive(Debug, Clone, Default)]
pub struct PackageList {
    versions: HashMap<String, String>,
}

impl PackageList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry, returning the version it replaced (if any)
    pub fn insert(&mut self, entry: PackageEntry) -> Option<String> {
        self.versions.insert(entry.name, entry.version)
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.versions.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Consume the list and return entries ordered by lowercase name.
    ///
    /// Names that only differ by case are ordered by their exact spelling.
    pub fn sorted(self) -> Vec<PackageEntry> {
        let mut entries: Vec<PackageEntry> = self
            .versions
            .into_iter()
            .map(|(name, version)| PackageEntry { name, version })
            .collect();

        entries.sort_by_cached_key(|entry| (entry.name.to_lowercase(), entry.name.clone()));
        entries
    }
}

impl FromIterator<PackageEntry> for PackageList {
    fn from_iter<I: IntoIterator<Item = PackageEntry>>(iter: I) -> Self {
        let mut list = Self::new();
        for entry in iter {
            list.insert(entry);
        }
        list
    }
}
