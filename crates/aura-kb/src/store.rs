//! The knowledge store — YAML loading with embedded fallback.

use aura_core::{ReferenceRecord, Result, RiskRecord};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::embedded;

/// Where the loaded records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// External YAML files.
    Files,
    /// The embedded curated dataset (files absent or unreadable).
    Embedded,
}

/// The read-only knowledge base: risk records plus bibliography.
///
/// Constructed once at startup and passed by reference thereafter; nothing
/// mutates it for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    risks: Vec<RiskRecord>,
    references: Vec<ReferenceRecord>,
    source: Source,
}

impl KnowledgeBase {
    /// Load from two YAML sources, falling back to the embedded dataset on
    /// any failure. Parse errors are treated identically to "file absent":
    /// no partial-load state is ever exposed.
    pub fn load(risks_path: &Path, refs_path: &Path) -> Self {
        match Self::try_load_files(risks_path, refs_path) {
            Ok(kb) => {
                debug!(
                    risks = kb.risks.len(),
                    references = kb.references.len(),
                    "loaded knowledge base from files"
                );
                kb
            }
            Err(e) => {
                warn!(error = %e, "using embedded curated base");
                Self::embedded()
            }
        }
    }

    /// The embedded curated dataset.
    pub fn embedded() -> Self {
        Self {
            risks: embedded::risks(),
            references: embedded::references(),
            source: Source::Embedded,
        }
    }

    /// Build directly from record lists (tests, callers with their own data).
    pub fn from_records(risks: Vec<RiskRecord>, references: Vec<ReferenceRecord>) -> Self {
        Self {
            risks,
            references,
            source: Source::Files,
        }
    }

    fn try_load_files(risks_path: &Path, refs_path: &Path) -> Result<Self> {
        let risks_text = std::fs::read_to_string(risks_path)?;
        let refs_text = std::fs::read_to_string(refs_path)?;
        let risks: Vec<RiskRecord> = serde_yaml::from_str(&risks_text)?;
        let references: Vec<ReferenceRecord> = serde_yaml::from_str(&refs_text)?;
        Ok(Self {
            risks,
            references,
            source: Source::Files,
        })
    }

    pub fn risks(&self) -> &[RiskRecord] {
        &self.risks
    }

    pub fn references(&self) -> &[ReferenceRecord] {
        &self.references
    }

    pub fn source(&self) -> Source {
        self.source
    }

    /// Lookup table from reference id to record. Duplicate ids overwrite
    /// silently (last write wins); the dataset is curated and assumed
    /// duplicate-free.
    pub fn reference_index(&self) -> HashMap<&str, &ReferenceRecord> {
        let mut index = HashMap::new();
        for r in &self.references {
            index.insert(r.id.as_str(), r);
        }
        index
    }

    /// Look up a risk record by id.
    pub fn risk(&self, id: &str) -> Option<&RiskRecord> {
        self.risks.iter().find(|r| r.id == id)
    }
}

/// Resolve a data file name against the working directory, then `data/`.
pub fn resolve_data_path(base: &Path, name: &str) -> PathBuf {
    let at_root = base.join(name);
    if at_root.exists() {
        at_root
    } else {
        base.join("data").join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_files_fall_back_to_embedded() {
        let kb = KnowledgeBase::load(
            Path::new("/nonexistent/risks.yaml"),
            Path::new("/nonexistent/references.yaml"),
        );
        assert_eq!(kb.source(), Source::Embedded);
        assert!(!kb.risks().is_empty());
        assert!(!kb.references().is_empty());
    }

    #[test]
    fn malformed_yaml_falls_back_to_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let risks = dir.path().join("risks.yaml");
        let refs = dir.path().join("references.yaml");
        std::fs::write(&risks, "{{{ not yaml").unwrap();
        std::fs::write(&refs, "- id: ok\n  authors: A\n  year: 2020\n  title: T\n  venue: V\n").unwrap();

        let kb = KnowledgeBase::load(&risks, &refs);
        assert_eq!(kb.source(), Source::Embedded);
    }

    #[test]
    fn valid_files_load() {
        let dir = tempfile::tempdir().unwrap();
        let risks_path = dir.path().join("risks.yaml");
        let refs_path = dir.path().join("references.yaml");

        let mut f = std::fs::File::create(&risks_path).unwrap();
        writeln!(
            f,
            "- id: r1\n  phase: Create\n  title: Test risk\n  severity: Very High\n  justification: Because.\n  evidence: [one]\n  mitigations: [fix it]\n  references: [a1]"
        )
        .unwrap();
        let mut f = std::fs::File::create(&refs_path).unwrap();
        writeln!(
            f,
            "- id: a1\n  authors: Author, A.\n  year: 2021\n  title: Paper\n  venue: Venue\n  doi: 10.1/xyz"
        )
        .unwrap();

        let kb = KnowledgeBase::load(&risks_path, &refs_path);
        assert_eq!(kb.source(), Source::Files);
        assert_eq!(kb.risks().len(), 1);
        assert_eq!(kb.risks()[0].severity, aura_core::Severity::VeryHigh);
        assert_eq!(kb.risks()[0].phase, aura_core::Phase::Create);

        let index = kb.reference_index();
        assert!(index.contains_key("a1"));
    }

    #[test]
    fn reference_index_last_write_wins() {
        let mut refs = embedded::references();
        let mut dup = refs[0].clone();
        dup.title = "Overwritten".into();
        refs.push(dup);
        let kb = KnowledgeBase::from_records(vec![], refs);
        let index = kb.reference_index();
        assert_eq!(index["ruckenstein2022"].title, "Overwritten");
    }

    #[test]
    fn data_path_prefers_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("data")).unwrap();
        std::fs::write(dir.path().join("data").join("risks.yaml"), "[]").unwrap();
        // Only in data/ -> resolves there.
        assert_eq!(
            resolve_data_path(dir.path(), "risks.yaml"),
            dir.path().join("data").join("risks.yaml")
        );
        // Present at root -> root wins.
        std::fs::write(dir.path().join("risks.yaml"), "[]").unwrap();
        assert_eq!(
            resolve_data_path(dir.path(), "risks.yaml"),
            dir.path().join("risks.yaml")
        );
    }
}
