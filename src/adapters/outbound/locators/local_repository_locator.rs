use crate::graph_generation::domain::DependencyId;
use crate::ports::outbound::DescriptorLocator;
use crate::shared::error::PomGraphError;
use crate::shared::Result;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

/// Locator backed by a Maven-layout local repository (e.g. `~/.m2/repository`).
///
/// A dependency `org.a:lib1` is looked up under `<root>/org/a/lib1/<version>/lib1-<version>.pom`.
/// Identifiers carry no version, so the highest version directory holding a
/// matching `.pom` file is chosen.
#[derive(Debug, Clone)]
pub struct LocalRepositoryLocator {
    root: PathBuf,
}

impl LocalRepositoryLocator {
    /// # Errors
    /// Returns an error if `root` is not an existing directory
    pub fn new(root: PathBuf) -> Result<Self> {
        if !root.exists() {
            return Err(PomGraphError::InvalidLocalRepository {
                path: root,
                reason: "Directory does not exist".to_string(),
            }
            .into());
        }
        if !root.is_dir() {
            return Err(PomGraphError::InvalidLocalRepository {
                path: root,
                reason: "Not a directory".to_string(),
            }
            .into());
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn candidate_poms(&self, dependency: &DependencyId) -> Vec<(String, PathBuf)> {
        let artifact_dir = self
            .root
            .join(dependency.group_path())
            .join(dependency.artifact_id());

        let Ok(versions) = fs::read_dir(&artifact_dir) else {
            return Vec::new();
        };

        versions
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| {
                let version = entry.file_name().to_string_lossy().into_owned();
                let pom = entry
                    .path()
                    .join(format!("{}-{}.pom", dependency.artifact_id(), version));
                pom.is_file().then_some((version, pom))
            })
            .collect()
    }
}

impl DescriptorLocator for LocalRepositoryLocator {
    fn locate(&self, dependency: &DependencyId) -> Option<PathBuf> {
        self.candidate_poms(dependency)
            .into_iter()
            .max_by(|(a, _), (b, _)| compare_versions(a, b))
            .map(|(_, pom)| pom)
    }
}

/// Segment-wise version ordering.
///
/// Numeric segments compare as numbers and rank above qualifiers, and a
/// release outranks the same version with a qualifier (`1.0` > `1.0-SNAPSHOT`).
fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = a.split(['.', '-']);
    let mut right = b.split(['.', '-']);

    loop {
        let ordering = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (Some(l), None) => {
                return if l.parse::<u64>().is_ok() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
            (None, Some(r)) => {
                return if r.parse::<u64>().is_ok() {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (Some(l), Some(r)) => match (l.parse::<u64>(), r.parse::<u64>()) {
                (Ok(x), Ok(y)) => x.cmp(&y),
                (Ok(_), Err(_)) => Ordering::Greater,
                (Err(_), Ok(_)) => Ordering::Less,
                (Err(_), Err(_)) => l.cmp(r),
            },
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}
