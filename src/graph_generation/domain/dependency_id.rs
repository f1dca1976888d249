use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// Maven coordinate without version: `groupId:artifactId`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyId {
    group_id: String,
    artifact_id: String,
}

impl DependencyId {
    pub fn new(group_id: String, artifact_id: String) -> Result<Self> {
        if group_id.is_empty() {
            anyhow::bail!("groupId cannot be empty");
        }
        if artifact_id.is_empty() {
            anyhow::bail!("artifactId cannot be empty");
        }
        Ok(Self {
            group_id,
            artifact_id,
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// Directory of the group inside a Maven-layout repository (`org.a` -> `org/a`)
    pub fn group_path(&self) -> String {
        self.group_id.replace('.', "/")
    }
}

impl fmt::Display for DependencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

impl FromStr for DependencyId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (group_id, artifact_id) = s
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("Invalid dependency identifier '{}': expected groupId:artifactId", s))?;
        Self::new(group_id.to_string(), artifact_id.to_string())
    }
}
