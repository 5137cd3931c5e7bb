//! Corpus entry types

use serde::{Deserialize, Serialize};

use super::partition::Partition;

/// One discrete piece of advisory knowledge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Identifier, unique within the partition
    pub id: String,
    /// Display name
    pub title: String,
    /// Curated tags used as the primary matching signal
    pub keywords: Vec<String>,
    /// Guidance text returned to the caller
    pub body: String,
    /// Partition this entry was loaded from
    #[serde(skip)]
    pub partition: Partition,
    /// Position in the partition file (declared order)
    #[serde(skip)]
    pub position: usize,
}

/// On-disk shape of a single `[[entry]]` table
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EntryRecord {
    pub id: String,
    pub title: String,
    pub keywords: Vec<String>,
    pub body: String,
}

/// On-disk shape of a partition file
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PartitionFile {
    #[serde(default)]
    pub entry: Vec<EntryRecord>,
}

impl EntryRecord {
    pub(crate) fn into_entry(self, partition: Partition, position: usize) -> Entry {
        Entry {
            id: self.id,
            title: self.title,
            keywords: self.keywords,
            body: self.body,
            partition,
            position,
        }
    }
}
