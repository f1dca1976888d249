use crate::ports::outbound::DescriptorReader;
use crate::shared::error::PomGraphError;
use crate::shared::security::validate_descriptor_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading descriptors from disk
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorReader for FileSystemReader {
    fn read_descriptor(&self, path: &Path) -> Result<Vec<u8>> {
        if !path.exists() {
            return Err(PomGraphError::DescriptorNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        validate_descriptor_file(path)
            .and_then(|()| fs::read(path).map_err(Into::into))
            .map_err(|e| {
                PomGraphError::DescriptorReadError {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_descriptor_success() {
        let temp_dir = TempDir::new().unwrap();
        let pom = temp_dir.path().join("pom.xml");
        fs::write(&pom, "<project/>").unwrap();

        let content = FileSystemReader::new().read_descriptor(&pom).unwrap();
        assert_eq!(content, b"<project/>");
    }

    #[test]
    fn test_read_descriptor_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_descriptor(&temp_dir.path().join("pom.xml"));

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Descriptor file not found"));
    }

    #[test]
    fn test_read_descriptor_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_descriptor(temp_dir.path());

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to read descriptor"));
        assert!(err_string.contains("not a regular file"));
    }

    #[test]
    fn test_read_descriptor_keeps_non_utf8_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let pom = temp_dir.path().join("pom.xml");
        let latin1 = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><project name=\"J\xfcrgen\"/>";
        fs::write(&pom, latin1).unwrap();

        let content = FileSystemReader::new().read_descriptor(&pom).unwrap();
        assert_eq!(content, latin1.to_vec());
    }
}
