//! Domain/stack selection
//!
//! The single point where caller-supplied partition names become a
//! [`Partition`]. Exactly one of domain or stack must be given.

use crate::bail_selector;
use crate::corpus::{Corpus, Domain, Entry, Family, Partition, Stack};
use crate::error::{DesignKbError, Result};

/// Resolve the raw `--domain` / `--stack` values to a partition
pub fn resolve(domain: Option<&str>, stack: Option<&str>) -> Result<Partition> {
    match (domain, stack) {
        (Some(_), Some(_)) => bail_selector!("--domain and --stack are mutually exclusive"),
        (None, None) => bail_selector!("one of --domain or --stack is required"),
        (Some(name), None) => name
            .parse::<Domain>()
            .map(Partition::Domain)
            .map_err(|()| DesignKbError::unknown_partition(Family::Domain, name)),
        (None, Some(name)) => name
            .parse::<Stack>()
            .map(Partition::Stack)
            .map_err(|()| DesignKbError::unknown_partition(Family::Stack, name)),
    }
}

/// Narrow a loaded corpus to one partition's entries
pub fn select(corpus: &Corpus, partition: Partition) -> Result<&[Entry]> {
    if corpus.family() != partition.family() {
        bail_selector!(format!(
            "partition '{}' is not part of the {} corpus",
            partition,
            corpus.family()
        ));
    }

    corpus.entries(partition).ok_or_else(|| {
        DesignKbError::corpus_unavailable(
            partition.family(),
            format!("partition '{}' was not loaded", partition),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{load_family, CorpusSource};

    #[test]
    fn test_resolve_domain() {
        assert_eq!(
            resolve(Some("color"), None).unwrap(),
            Partition::Domain(Domain::Color)
        );
    }

    #[test]
    fn test_resolve_stack() {
        assert_eq!(
            resolve(None, Some("react-native")).unwrap(),
            Partition::Stack(Stack::ReactNative)
        );
    }

    #[test]
    fn test_resolve_both_is_invalid_selector() {
        let err = resolve(Some("style"), Some("react")).unwrap_err();
        assert!(matches!(err, DesignKbError::InvalidSelector { .. }));
    }

    #[test]
    fn test_resolve_neither_is_invalid_selector() {
        let err = resolve(None, None).unwrap_err();
        assert!(matches!(err, DesignKbError::InvalidSelector { .. }));
    }

    #[test]
    fn test_resolve_unknown_domain_lists_options() {
        let err = resolve(Some("nonexistent"), None).unwrap_err();
        match err {
            DesignKbError::UnknownPartition {
                family,
                value,
                valid,
            } => {
                assert_eq!(family, Family::Domain);
                assert_eq!(value, "nonexistent");
                assert!(valid.contains(&"typography"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let err = resolve(None, Some("Flutter")).unwrap_err();
        assert!(matches!(
            err,
            DesignKbError::UnknownPartition {
                family: Family::Stack,
                ..
            }
        ));
    }

    #[test]
    fn test_select_returns_only_requested_partition() {
        let corpus = load_family(&CorpusSource::Builtin, Family::Domain).unwrap();
        let partition = Partition::Domain(Domain::Color);
        let entries = select(&corpus, partition).unwrap();
        assert!(!entries.is_empty());
        assert!(entries.iter().all(|e| e.partition == partition));
    }

    #[test]
    fn test_select_rejects_family_mismatch() {
        let corpus = load_family(&CorpusSource::Builtin, Family::Domain).unwrap();
        let err = select(&corpus, Partition::Stack(Stack::React)).unwrap_err();
        assert!(matches!(err, DesignKbError::InvalidSelector { .. }));
    }
}
