use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

#[derive(Debug)]
pub enum ChecksumError {
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl std::fmt::Display for ChecksumError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChecksumError::Io { path, source } => {
                write!(f, "failed to checksum '{}': {}", path, source)
            }
        }
    }
}

impl std::error::Error for ChecksumError {}

/// Hex sha256 digest of a file's contents.
pub fn sha256_file(path: &Path) -> Result<String, ChecksumError> {
    let mut file = std::fs::File::open(path).map_err(|source| ChecksumError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    loop {
        let read = file.read(&mut buffer).map_err(|source| ChecksumError::Io {
            path: path.display().to_string(),
            source,
        })?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Writes the `<artifact>.sha256` sidecar next to an artifact and returns
/// the digest.
pub fn write_sidecar(artifact: &Path) -> Result<String, ChecksumError> {
    let digest = sha256_file(artifact)?;
    let file_name = artifact
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let sidecar = artifact.with_file_name(crate::naming::checksum_name(&file_name));
    std::fs::write(&sidecar, format!("{}  {}\n", digest, file_name)).map_err(|source| {
        ChecksumError::Io {
            path: sidecar.display().to_string(),
            source,
        }
    })?;
    Ok(digest)
}
