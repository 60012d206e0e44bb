//! File and directory copying from the template source into a project

use anyhow::{Context, Result};
use std::fs::{self, File, FileTimes};
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Copy a single file, creating missing parent directories of the destination.
///
/// Contents, permissions, and access and modification times are copied. Times
/// are applied before the permissions, so a read-only copy still gets them.
pub fn copy_file(source: &Path, target: &Path) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let context = || {
        format!(
            "Failed to copy {} to {}",
            source.display(),
            target.display()
        )
    };

    let mut input = File::open(source).with_context(context)?;
    let metadata = input.metadata().with_context(context)?;
    let mut output = File::create(target).with_context(context)?;
    io::copy(&mut input, &mut output).with_context(context)?;

    let _ = output.set_times(source_times(&metadata));
    drop(output);

    fs::set_permissions(target, metadata.permissions()).with_context(context)?;

    Ok(())
}

/// Copy a directory tree, replacing whatever is already at the destination.
///
/// An existing destination (directory or file) is removed first, so afterwards
/// the destination holds exactly what the source holds. Symlinks inside the
/// source are followed and their contents copied.
pub fn copy_directory_tree(source: &Path, target: &Path) -> Result<()> {
    remove_existing(target)?;

    fs::create_dir_all(target)
        .with_context(|| format!("Failed to create directory: {}", target.display()))?;

    for entry in WalkDir::new(source).follow_links(true).min_depth(1) {
        let entry = entry
            .with_context(|| format!("Failed to read directory: {}", source.display()))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .with_context(|| format!("Unexpected path outside {}", source.display()))?;
        let dest = target.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)
                .with_context(|| format!("Failed to create directory: {}", dest.display()))?;
        } else {
            copy_file(entry.path(), &dest)?;
        }
    }

    Ok(())
}

/// Remove a path of any kind; a missing path is fine
fn remove_existing(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(_) => return Ok(()),
    };

    if metadata.is_dir() {
        fs::remove_dir_all(path)
            .with_context(|| format!("Failed to remove existing directory: {}", path.display()))
    } else {
        fs::remove_file(path)
            .with_context(|| format!("Failed to remove existing file: {}", path.display()))
    }
}

fn source_times(metadata: &fs::Metadata) -> FileTimes {
    let mut times = FileTimes::new();
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    times
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_copy_file_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("LICENSE");
        write(&source, "MIT");

        let target = tmp.path().join("out/nested/LICENSE");
        copy_file(&source, &target).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "MIT");
    }

    #[test]
    fn test_copy_file_preserves_modified_time() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("AGENTS.md");
        write(&source, "agents");

        let past = SystemTime::UNIX_EPOCH + Duration::from_secs(1_500_000_000);
        File::options()
            .write(true)
            .open(&source)
            .unwrap()
            .set_modified(past)
            .unwrap();

        let target = tmp.path().join("copy/AGENTS.md");
        copy_file(&source, &target).unwrap();

        let modified = fs::metadata(&target).unwrap().modified().unwrap();
        assert_eq!(modified, past);
    }

    #[test]
    fn test_copy_file_preserves_modified_time_of_read_only_source() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("LICENSE");
        write(&source, "MIT");

        let past = SystemTime::UNIX_EPOCH + Duration::from_secs(1_500_000_000);
        File::options()
            .write(true)
            .open(&source)
            .unwrap()
            .set_modified(past)
            .unwrap();
        let mut permissions = fs::metadata(&source).unwrap().permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&source, permissions).unwrap();

        let target = tmp.path().join("copy/LICENSE");
        copy_file(&source, &target).unwrap();

        let metadata = fs::metadata(&target).unwrap();
        assert!(metadata.permissions().readonly());
        assert_eq!(metadata.modified().unwrap(), past);
        assert_eq!(fs::read_to_string(&target).unwrap(), "MIT");
    }

    #[test]
    fn test_copy_file_missing_source_reports_paths() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("missing.md");
        let target = tmp.path().join("out/missing.md");

        let err = copy_file(&source, &target).unwrap_err();
        let message = format!("{err:#}");

        assert!(message.contains("missing.md"));
        assert!(message.contains("Failed to copy"));
    }

    #[test]
    fn test_copy_directory_tree_copies_nested_files() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("src/.github");
        write(&source.join("workflows/ci.yml"), "on: push");
        write(&source.join("chatmodes/review.md"), "review");
        fs::create_dir_all(source.join("empty")).unwrap();

        let target = tmp.path().join("dst/.github");
        copy_directory_tree(&source, &target).unwrap();

        assert_eq!(
            fs::read_to_string(target.join("workflows/ci.yml")).unwrap(),
            "on: push"
        );
        assert!(target.join("chatmodes/review.md").is_file());
        assert!(target.join("empty").is_dir());
    }

    #[test]
    fn test_copy_directory_tree_replaces_existing_contents() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("src/docs");
        write(&source.join("index.md"), "new");

        let target = tmp.path().join("dst/docs");
        write(&target.join("index.md"), "old");
        write(&target.join("stale/notes.md"), "stale");

        copy_directory_tree(&source, &target).unwrap();

        assert_eq!(fs::read_to_string(target.join("index.md")).unwrap(), "new");
        assert!(!target.join("stale").exists());
        let entries: Vec<_> = fs::read_dir(&target).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_copy_directory_tree_replaces_file_at_destination() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("src/.claude");
        write(&source.join("agents/pm.md"), "pm");

        let target = tmp.path().join("dst/.claude");
        write(&target, "not a directory");

        copy_directory_tree(&source, &target).unwrap();

        assert!(target.is_dir());
        assert!(target.join("agents/pm.md").is_file());
    }
}
