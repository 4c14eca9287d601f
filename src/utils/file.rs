//! File reading utilities

use crate::error::{FetchError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem root that probes read from.
///
/// Probes address files by their absolute system path (`/proc/uptime`); the
/// root decides where that path actually lives. Production uses `/`, tests
/// point it at a scratch directory, and Bedrock strata are roots of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysRoot {
    base: PathBuf,
}

impl Default for SysRoot {
    fn default() -> Self {
        SysRoot::system()
    }
}

impl SysRoot {
    pub fn system() -> Self {
        SysRoot { base: PathBuf::from("/") }
    }

    pub fn new<P: Into<PathBuf>>(base: P) -> Self {
        SysRoot { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn is_system(&self) -> bool {
        self.base == Path::new("/")
    }

    /// Root nested under this one, e.g. a Bedrock stratum.
    pub fn nested<P: AsRef<Path>>(&self, path: P) -> SysRoot {
        SysRoot::new(self.path(path))
    }

    /// Location of the absolute system path `path` under this root.
    pub fn path<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let path = path.as_ref();
        self.base.join(path.strip_prefix("/").unwrap_or(path))
    }

    pub fn exists<P: AsRef<Path>>(&self, path: P) -> bool {
        self.path(path).exists()
    }

    /// Safely read a file to string with error handling
    pub fn read_to_string<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        fs::read_to_string(self.path(path)).map_err(FetchError::from)
    }

    /// Read first line of a file, trimmed
    pub fn read_first_line<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        read_first_line(self.path(path))
    }
}

/// Read first line of a file, trimmed
/// Optimized for single-line files like /proc/sys/kernel/osrelease
/// Uses direct syscalls and a single read
pub fn read_first_line<P: AsRef<Path>>(path: P) -> Result<String> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let path_cstr = CString::new(path.as_ref().as_os_str().as_bytes())
        .map_err(|_| FetchError::Parse("Invalid path".to_string()))?;

    let mut buffer = [0u8; 256];
    let bytes_read = unsafe {
        let fd = libc::open(path_cstr.as_ptr(), libc::O_RDONLY | libc::O_CLOEXEC);
        if fd < 0 {
            return Err(FetchError::from(std::io::Error::last_os_error()));
        }
        let n = libc::read(fd, buffer.as_mut_ptr() as *mut libc::c_void, buffer.len());
        libc::close(fd);
        n
    };

    if bytes_read < 0 {
        return Err(FetchError::from(std::io::Error::last_os_error()));
    }

    let content = String::from_utf8_lossy(&buffer[..bytes_read as usize]);
    Ok(content.lines().next().unwrap_or("").trim().to_string())
}

/// Count sub-directories of `dir` from its link count.
///
/// Each child directory's `..` entry adds a hard link to its parent, so a
/// directory holding N sub-directories has N + 2 links. Filesystems that do
/// not maintain this (btrfs reports 1) are handled by iterating instead.
pub fn count_subdirs<P: AsRef<Path>>(dir: P) -> Result<usize> {
    use std::os::unix::fs::MetadataExt;

    let dir = dir.as_ref();
    let nlink = fs::metadata(dir)?.nlink();
    if nlink >= 2 {
        let by_links = (nlink - 2) as usize;
        if by_links > 0 {
            return Ok(by_links);
        }
    }

    Ok(fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map_or(false, |ft| ft.is_dir()))
        .count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_root_path_mapping() {
        let root = SysRoot::new("/tmp/fake");
        assert_eq!(root.path("/proc/uptime"), PathBuf::from("/tmp/fake/proc/uptime"));
        assert_eq!(root.path("etc/os-release"), PathBuf::from("/tmp/fake/etc/os-release"));
        assert_eq!(SysRoot::system().path("/proc/uptime"), PathBuf::from("/proc/uptime"));
        assert!(SysRoot::system().is_system());
        assert!(!root.is_system());
    }

    #[test]
    fn test_nested_root() {
        let root = SysRoot::new("/tmp/fake");
        let stratum = root.nested("/bedrock/strata/arch");
        assert_eq!(stratum.path("/var/lib"), PathBuf::from("/tmp/fake/bedrock/strata/arch/var/lib"));
    }

    #[test]
    fn test_read_first_line() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("osrelease"), "  6.16.4-200.fc42.x86_64 \nsecond\n").unwrap();
        let root = SysRoot::new(dir.path());
        assert_eq!(root.read_first_line("/osrelease").unwrap(), "6.16.4-200.fc42.x86_64");
        assert!(root.read_first_line("/missing").is_err());
    }

    #[test]
    fn test_read_first_line_empty_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("empty"), "").unwrap();
        assert_eq!(read_first_line(dir.path().join("empty")).unwrap(), "");
    }

    #[test]
    fn test_count_subdirs() {
        let dir = TempDir::new().unwrap();
        for name in ["a-1.0", "b-2.0", "c-3.0"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        fs::write(dir.path().join("ALPM_DB_VERSION"), "9\n").unwrap();
        assert_eq!(count_subdirs(dir.path()).unwrap(), 3);
    }

    #[test]
    fn test_count_subdirs_empty() {
        let dir = TempDir::new().unwrap();
        assert_eq!(count_subdirs(dir.path()).unwrap(), 0);
    }
}
