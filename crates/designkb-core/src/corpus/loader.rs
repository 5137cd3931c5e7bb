//! Corpus loading from built-in data or a corpus directory

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::time::Instant;

use tracing::debug;

use super::builtin;
use super::entry::{Entry, PartitionFile};
use super::partition::{Family, Partition};
use super::{Corpus, CorpusSource};
use crate::bail_corpus;
use crate::error::Result;
use crate::trace_time;

/// Load every partition of a family
///
/// Fails with `CorpusUnavailable` if any partition file is missing, unreadable
/// or malformed. A partial corpus is never returned.
pub fn load_family(source: &CorpusSource, family: Family) -> Result<Corpus> {
    let start = Instant::now();
    let mut partitions = BTreeMap::new();

    for partition in family.partitions() {
        let text = read_partition(source, partition)?;
        let entries = parse_partition(partition, &text)?;
        debug!(
            partition = partition.as_str(),
            entries = entries.len(),
            "load_partition"
        );
        partitions.insert(partition, entries);
    }

    let corpus = Corpus::new(family, partitions);
    debug!(
        family = family.as_str(),
        source = %source.describe(),
        entries = corpus.len(),
        "load_family"
    );
    trace_time!(start, "load_family", entries = corpus.len());

    Ok(corpus)
}

fn read_partition(source: &CorpusSource, partition: Partition) -> Result<String> {
    match source {
        CorpusSource::Builtin => Ok(builtin::partition_source(partition).to_string()),
        CorpusSource::Directory(root) => {
            let path = root
                .join(partition.family().dir_name())
                .join(partition.file_name());
            match fs::read_to_string(&path) {
                Ok(text) => Ok(text),
                Err(e) => bail_corpus!(
                    partition.family(),
                    format!("failed to read {}: {}", path.display(), e)
                ),
            }
        }
    }
}

/// Parse one partition file, assigning partition keys and declared positions
pub(crate) fn parse_partition(partition: Partition, text: &str) -> Result<Vec<Entry>> {
    let family = partition.family();
    let file: PartitionFile = match toml::from_str(text) {
        Ok(file) => file,
        Err(e) => bail_corpus!(
            family,
            format!("malformed partition '{}': {}", partition, e)
        ),
    };

    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(file.entry.len());

    for (position, record) in file.entry.into_iter().enumerate() {
        if record.id.trim().is_empty() {
            bail_corpus!(
                family,
                format!("entry {} in partition '{}' has an empty id", position, partition)
            );
        }
        if !seen.insert(record.id.clone()) {
            bail_corpus!(
                family,
                format!("duplicate id '{}' in partition '{}'", record.id, partition)
            );
        }
        entries.push(record.into_entry(partition, position));
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Domain, Stack};
    use crate::error::DesignKbError;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
[[entry]]
id = "glass"
title = "Glassmorphism"
keywords = ["glassmorphism", "blur"]
body = "Frosted panels."

[[entry]]
id = "flat"
title = "Flat"
keywords = []
body = "No depth."
"#;

    #[test]
    fn test_parse_partition_assigns_positions() {
        let partition = Partition::Domain(Domain::Style);
        let entries = parse_partition(partition, SAMPLE).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "glass");
        assert_eq!(entries[0].position, 0);
        assert_eq!(entries[1].position, 1);
        assert_eq!(entries[1].partition, partition);
        assert!(entries[1].keywords.is_empty());
    }

    #[test]
    fn test_parse_partition_rejects_duplicate_ids() {
        let text = format!(
            "{}\n[[entry]]\nid = \"glass\"\ntitle = \"Again\"\nkeywords = []\nbody = \"x\"\n",
            SAMPLE
        );
        let err = parse_partition(Partition::Domain(Domain::Style), &text).unwrap_err();
        assert!(matches!(err, DesignKbError::CorpusUnavailable { .. }));
        assert!(err.to_string().contains("duplicate id 'glass'"));
    }

    #[test]
    fn test_parse_partition_rejects_missing_fields() {
        let text = "[[entry]]\nid = \"x\"\ntitle = \"No body\"\n";
        let err = parse_partition(Partition::Stack(Stack::Vue), text).unwrap_err();
        assert!(matches!(
            err,
            DesignKbError::CorpusUnavailable {
                family: Family::Stack,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_partition_requires_keywords_key() {
        let text = "[[entry]]\nid = \"x\"\ntitle = \"T\"\nbody = \"b\"\n";
        let err = parse_partition(Partition::Domain(Domain::Ux), text).unwrap_err();
        assert!(matches!(
            err,
            DesignKbError::CorpusUnavailable {
                family: Family::Domain,
                ..
            }
        ));
        assert!(err.to_string().contains("keywords"));
    }

    #[test]
    fn test_parse_partition_rejects_empty_id() {
        let text = "[[entry]]\nid = \" \"\ntitle = \"Blank\"\nkeywords = []\nbody = \"x\"\n";
        let err = parse_partition(Partition::Domain(Domain::Ux), text).unwrap_err();
        assert!(err.to_string().contains("empty id"));
    }

    #[test]
    fn test_empty_partition_file_is_valid() {
        let entries = parse_partition(Partition::Domain(Domain::Chart), "").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_load_builtin_families() {
        let domains = load_family(&CorpusSource::Builtin, Family::Domain).unwrap();
        assert_eq!(domains.family(), Family::Domain);
        assert_eq!(domains.partitions().count(), Domain::ALL.len());

        let stacks = load_family(&CorpusSource::Builtin, Family::Stack).unwrap();
        assert_eq!(stacks.partitions().count(), Stack::ALL.len());
        assert!(!stacks.is_empty());
    }

    #[test]
    fn test_load_directory_missing_partition_fails() {
        let dir = tempdir().unwrap();
        let domain_dir = dir.path().join("domain");
        fs::create_dir_all(&domain_dir).unwrap();
        fs::write(domain_dir.join("style.toml"), SAMPLE).unwrap();

        let source = CorpusSource::Directory(dir.path().to_path_buf());
        let err = load_family(&source, Family::Domain).unwrap_err();
        assert!(matches!(err, DesignKbError::CorpusUnavailable { .. }));
        assert!(err.to_string().contains("typography.toml"));
    }

    #[test]
    fn test_load_directory_complete_family() {
        let dir = tempdir().unwrap();
        let domain_dir = dir.path().join("domain");
        fs::create_dir_all(&domain_dir).unwrap();
        for name in Family::Domain.partition_names() {
            fs::write(domain_dir.join(format!("{}.toml", name)), "").unwrap();
        }
        fs::write(domain_dir.join("style.toml"), SAMPLE).unwrap();

        let source = CorpusSource::Directory(dir.path().to_path_buf());
        let corpus = load_family(&source, Family::Domain).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(
            corpus.entries(Partition::Domain(Domain::Style)).unwrap()[0].title,
            "Glassmorphism"
        );
    }
}
