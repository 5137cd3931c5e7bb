//! The design knowledge corpus
//!
//! Two disjoint families of partitions (domains and stacks), each partition an
//! ordered list of entries loaded from one TOML file. A loaded [`Corpus`] is
//! immutable for the rest of the invocation.

mod builtin;
mod entry;
mod loader;
pub mod partition;

use std::collections::BTreeMap;
use std::path::PathBuf;

pub use entry::Entry;
pub use loader::load_family;
pub use partition::{Domain, Family, Partition, Stack};

/// Where partition files are read from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CorpusSource {
    /// Data compiled into the binary
    #[default]
    Builtin,
    /// A corpus root containing `domain/<name>.toml` and `stack/<name>.toml`
    Directory(PathBuf),
}

impl CorpusSource {
    pub fn describe(&self) -> String {
        match self {
            CorpusSource::Builtin => "builtin".to_string(),
            CorpusSource::Directory(root) => root.display().to_string(),
        }
    }
}

/// All partitions of one family with their entries
#[derive(Debug, Clone)]
pub struct Corpus {
    family: Family,
    partitions: BTreeMap<Partition, Vec<Entry>>,
}

impl Corpus {
    pub(crate) fn new(family: Family, partitions: BTreeMap<Partition, Vec<Entry>>) -> Self {
        Self { family, partitions }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Entries of one partition in declared order, if it was loaded
    pub fn entries(&self, partition: Partition) -> Option<&[Entry]> {
        self.partitions.get(&partition).map(Vec::as_slice)
    }

    /// Partitions in declared order
    pub fn partitions(&self) -> impl Iterator<Item = Partition> + '_ {
        self.partitions.keys().copied()
    }

    /// Total number of entries across all partitions
    pub fn len(&self) -> usize {
        self.partitions.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
