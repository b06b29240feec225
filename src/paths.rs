/// Path resolution for report locations
///
/// Absolute paths are computed lexically against a base directory; nothing
/// here touches the filesystem.
use std::io;
use std::path::{Component, Path, PathBuf};

/// Turns a reported file path into its absolute form.
pub trait PathResolver {
    fn absolutize(&self, path: &str) -> String;
}

/// Resolves relative paths against a fixed base directory
#[derive(Debug, Clone)]
pub struct BaseDirResolver {
    base: PathBuf,
}

impl BaseDirResolver {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Resolver rooted at the process working directory
    pub fn from_current_dir() -> io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }
}

impl PathResolver for BaseDirResolver {
    fn absolutize(&self, path: &str) -> String {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            return normalize(candidate).display().to_string();
        }
        normalize(&self.base.join(candidate)).display().to_string()
    }
}

/// Drop `.` components and fold `..` into its parent
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Never pop past the root
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_relative_path_joins_base() {
        let resolver = BaseDirResolver::new("/work/project");
        assert_eq!(resolver.absolutize("src/a.js"), "/work/project/src/a.js");
    }

    #[cfg(unix)]
    #[test]
    fn test_dot_components_are_folded() {
        let resolver = BaseDirResolver::new("/work/project");
        assert_eq!(resolver.absolutize("./lib/../src/./a.js"), "/work/project/src/a.js");
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_path_is_kept() {
        let resolver = BaseDirResolver::new("/work/project");
        assert_eq!(resolver.absolutize("/elsewhere/b.js"), "/elsewhere/b.js");
    }

    #[cfg(unix)]
    #[test]
    fn test_parent_dir_stops_at_root() {
        let resolver = BaseDirResolver::new("/");
        assert_eq!(resolver.absolutize("../../a.js"), "/a.js");
    }
}
