//! Host-files command handler
//!
//! Loads and validates `agent-config.yaml`, derives the per-host files and
//! writes them under the output directory, one directory per host.

use std::io;
use std::path::{Component, Path};

use crate::cli::args::HostFilesArgs;
use crate::config::{ConfigLoader, DirFetcher};
use crate::error::ClusterBootError;
use crate::hostfiles::{HostConfigFileMap, host_config_files};

/// Derive and write per-host files.
///
/// # Errors
///
/// Returns a config error if loading or validation fails, or an I/O error
/// if the files cannot be written.
pub fn run(args: &HostFilesArgs) -> Result<(), ClusterBootError> {
    let loader = ConfigLoader::with_defaults();
    let loaded = loader.load(&DirFetcher::new(&args.dir))?;
    if loaded.is_none() {
        tracing::warn!(dir = %args.dir.display(), "configuration not found, no host files derived");
    }

    let files = host_config_files(loaded.as_ref().map(|l| &l.config))?;

    if args.dry_run {
        for (name, content) in &files {
            println!("{name} ({} bytes)", content.len());
        }
        return Ok(());
    }

    write_files(&args.output, &files)?;
    tracing::info!(
        output = %args.output.display(),
        files = files.len(),
        "wrote host config files"
    );
    Ok(())
}

/// Writes each entry of `files` below `root`, creating host directories.
///
/// # Errors
///
/// Returns [`io::ErrorKind::InvalidInput`] for an entry that would resolve
/// outside `root` (absolute, or containing `..`), or an I/O error if a
/// directory or file cannot be created. Entries are checked before anything
/// is written.
pub fn write_files(root: &Path, files: &HostConfigFileMap) -> io::Result<()> {
    if let Some(name) = files.keys().find(|name| !stays_below_root(name)) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("host file {name:?} would be written outside {}", root.display()),
        ));
    }

    for (name, content) in files {
        let path = root.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        tracing::debug!(path = %path.display(), "wrote host file");
    }
    Ok(())
}

fn stays_below_root(name: &str) -> bool {
    Path::new(name)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_files_creates_host_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut files = HostConfigFileMap::new();
        files.insert("node1/role".to_string(), b"master".to_vec());
        files.insert("node1/mac_addresses".to_string(), b"aa:bb:cc:dd:ee:ff\n".to_vec());

        write_files(dir.path(), &files).unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.path().join("node1/role")).unwrap(),
            "master"
        );
        assert_eq!(
            std::fs::read_to_string(dir.path().join("node1").join("mac_addresses")).unwrap(),
            "aa:bb:cc:dd:ee:ff\n"
        );
    }

    #[test]
    fn test_write_files_refuses_absolute_hostname() {
        let dir = tempfile::tempdir().unwrap();
        let outside = tempfile::tempdir().unwrap();
        let target = outside.path().join("escaped");
        let mut files = HostConfigFileMap::new();
        files.insert(format!("{}/role", target.display()), b"master".to_vec());

        let err = write_files(dir.path(), &files).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(!target.exists());
    }

    #[test]
    fn test_write_files_refuses_parent_segments() {
        let root = tempfile::tempdir().unwrap();
        let out = root.path().join("out");
        let mut files = HostConfigFileMap::new();
        files.insert("good/role".to_string(), b"worker".to_vec());
        files.insert("../../escaped/role".to_string(), b"worker".to_vec());

        let err = write_files(&out, &files).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("../../escaped/role"));
        // Nothing is written when any entry is rejected
        assert!(!out.exists());
    }
}
