//! Loading the PCI ID registry into memory.

use std::fs::{self, File};
use std::io;
use std::os::unix::io::AsRawFd;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Well-known install locations of `pci.ids`, most common first.
pub const DEFAULT_PATHS: &[&str] = &[
    "/usr/share/hwdata/pci.ids",
    "/usr/share/misc/pci.ids",
    "/usr/share/pci.ids",
    "/var/lib/pciutils/pci.ids",
    "/usr/local/share/pci.ids",
];

/// Read-only view of a registry file.
///
/// Normally backed by a private read-only mapping of the file, released when
/// the registry is dropped. Falls back to an owned copy if mapping fails.
pub struct IdRegistry {
    source: Option<PathBuf>,
    backing: Backing,
}

enum Backing {
    Mapped(Mapping),
    Owned(Vec<u8>),
}

impl IdRegistry {
    /// Open the first existing, non-empty file among `paths`.
    ///
    /// Returns `None` when no candidate qualifies; a missing registry is a
    /// normal condition on minimal systems.
    pub fn open_first<P: AsRef<Path>>(paths: &[P]) -> Option<IdRegistry> {
        for path in paths {
            let path = path.as_ref();
            match Self::open(path) {
                Ok(Some(registry)) => {
                    debug!(path = %path.display(), bytes = registry.len(), "loaded PCI ID registry");
                    return Some(registry);
                }
                Ok(None) => trace!(path = %path.display(), "registry candidate is empty"),
                Err(err) => trace!(path = %path.display(), error = %err, "registry candidate unavailable"),
            }
        }
        None
    }

    /// Open a single registry file. `Ok(None)` means the file is empty.
    pub fn open(path: &Path) -> io::Result<Option<IdRegistry>> {
        let file = File::open(path)?;
        let len = file.metadata()?.len() as usize;
        if len == 0 {
            return Ok(None);
        }

        let backing = match Mapping::new(&file, len) {
            Ok(mapping) => Backing::Mapped(mapping),
            Err(err) => {
                debug!(path = %path.display(), error = %err, "mmap failed, reading registry instead");
                Backing::Owned(fs::read(path)?)
            }
        };

        Ok(Some(IdRegistry {
            source: Some(path.to_path_buf()),
            backing,
        }))
    }

    /// Registry over bytes already in memory.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> IdRegistry {
        IdRegistry {
            source: None,
            backing: Backing::Owned(bytes.into()),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match &self.backing {
            Backing::Mapped(mapping) => mapping.as_bytes(),
            Backing::Owned(bytes) => bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Path the registry was loaded from, if it came from disk.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self.backing, Backing::Mapped(_))
    }
}

/// A `PROT_READ`/`MAP_PRIVATE` mapping of a whole file.
struct Mapping {
    ptr: *mut libc::c_void,
    len: usize,
}

impl Mapping {
    fn new(file: &File, len: usize) -> io::Result<Mapping> {
        // The fd may be closed right after mapping; the mapping keeps its own
        // reference to the file.
        let ptr = unsafe {
            libc::mmap(
                std::ptr::null_mut(),
                len,
                libc::PROT_READ,
                libc::MAP_PRIVATE,
                file.as_raw_fd(),
                0,
            )
        };
        if ptr == libc::MAP_FAILED {
            return Err(io::Error::last_os_error());
        }
        Ok(Mapping { ptr, len })
    }

    fn as_bytes(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.ptr as *const u8, self.len) }
    }
}

impl Drop for Mapping {
    fn drop(&mut self) {
        unsafe {
            libc::munmap(self.ptr, self.len);
        }
    }
}
