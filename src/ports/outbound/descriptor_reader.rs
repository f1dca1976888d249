use crate::shared::Result;
use std::path::Path;

/// DescriptorReader port for loading project descriptors
pub trait DescriptorReader {
    /// Returns the raw bytes of the descriptor at `path`
    ///
    /// Character decoding is left to the parser, which honours the XML
    /// declaration and byte order mark.
    ///
    /// # Errors
    /// Returns an error if the file is missing, is not a regular file,
    /// exceeds the size limit or cannot be read.
    fn read_descriptor(&self, path: &Path) -> Result<Vec<u8>>;
}
