use anyhow::{Context, Result, bail};
use std::path::{Component, Path, PathBuf};

pub fn repo_root() -> Result<PathBuf> {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask is expected at <repo>/xtask")
}

/// Default location of `perf.toml`.
pub fn config_path(root: &Path) -> PathBuf {
    root.join("perf.toml")
}

/// Joins `p` onto the repo root unless it is already absolute.
pub fn resolve(root: &Path, p: &Path) -> PathBuf {
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        root.join(p)
    }
}

/// Resolves `.` and `..` lexically, without touching the filesystem.
fn normalize(p: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for c in p.components() {
        match c {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Refuses a directory that is the repo root or one of its ancestors.
pub fn ensure_disposable(root: &Path, dir: &Path) -> Result<()> {
    let dir = normalize(dir);
    if dir.as_os_str().is_empty() || normalize(root).starts_with(&dir) {
        bail!(
            "Refusing to use {} as a scratch directory: it contains the repository at {}",
            dir.display(),
            root.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/a/../..")), PathBuf::from("/"));
    }

    #[test]
    fn test_disposable_dirs() {
        let root = Path::new("/work/s2n-quic");
        assert!(ensure_disposable(root, Path::new("/work/s2n-quic/target/perf/quinn")).is_ok());
        assert!(ensure_disposable(root, Path::new("/opt/quinn")).is_ok());

        for bad in ["", "/work/s2n-quic", "/work/s2n-quic/.", "/work/s2n-quic/..", "/work", "/"] {
            assert!(ensure_disposable(root, Path::new(bad)).is_err(), "{bad:?} accepted");
        }
        let sneaky = resolve(root, Path::new("target/../.."));
        assert!(ensure_disposable(root, &sneaky).is_err());
    }

    #[test]
    fn test_resolve_relative() {
        let root = Path::new("/work/s2n-quic");
        assert_eq!(
            resolve(root, Path::new("target/perf/quinn")),
            PathBuf::from("/work/s2n-quic/target/perf/quinn")
        );
    }

    #[test]
    fn test_resolve_absolute() {
        let root = Path::new("/work/s2n-quic");
        assert_eq!(
            resolve(root, Path::new("/opt/quinn")),
            PathBuf::from("/opt/quinn")
        );
    }
}
