use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::LocalStorage;
use crate::error::DbResult;

/// One file per key under a directory.
///
/// Keys are mapped to file names by replacing every character outside
/// `[A-Za-z0-9_-]` with `_`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// ## Summary
    /// Opens (and creates if needed) the storage directory.
    ///
    /// ## Errors
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> DbResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        tracing::debug!(path = %dir.display(), "Opened local snapshot storage");
        Ok(Self { dir })
    }

    fn file_name(key: &str) -> String {
        key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", Self::file_name(key)))
    }

    // Each write gets its own temporary file so concurrent writers of one key
    // never rename each other's partial output.
    fn temp_path_for(&self, key: &str) -> PathBuf {
        self.dir
            .join(format!("{}.{}.tmp", Self::file_name(key), Uuid::new_v4()))
    }
}

impl LocalStorage for FileStorage {
    fn get(&self, key: &str) -> DbResult<Option<Vec<u8>>> {
        match std::fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> DbResult<()> {
        let path = self.path_for(key);
        let tmp = self.temp_path_for(key);
        let written = std::fs::write(&tmp, value).and_then(|()| std::fs::rename(&tmp, &path));
        if let Err(e) = written {
            std::fs::remove_file(&tmp).ok();
            return Err(e.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("webinvite-storage-{}", uuid::Uuid::new_v4()))
    }

    #[test_log::test]
    fn test_round_trip_and_missing_key() {
        let dir = temp_dir();
        let storage = FileStorage::open(&dir).expect("open");

        assert_eq!(storage.get("wedding-preview-x").expect("get"), None);
        storage.set("wedding-preview-x", b"{}").expect("set");
        storage.set("wedding-preview-x", b"{\"a\":1}").expect("overwrite");
        assert_eq!(
            storage.get("wedding-preview-x").expect("get"),
            Some(b"{\"a\":1}".to_vec())
        );

        std::fs::remove_dir_all(dir).ok();
    }

    #[test_log::test]
    fn test_concurrent_writes_to_one_key() {
        let dir = temp_dir();
        let storage = FileStorage::open(&dir).expect("open");

        let failures: usize = std::thread::scope(|scope| {
            let workers: Vec<_> = (0..8u8)
                .map(|n| {
                    let storage = &storage;
                    scope.spawn(move || {
                        let value = vec![b'a' + n; 1024];
                        (0..100)
                            .filter(|_| storage.set("wedding-preview-x", &value).is_err())
                            .count()
                    })
                })
                .collect();
            workers
                .into_iter()
                .map(|w| w.join().expect("worker"))
                .sum()
        });
        assert_eq!(failures, 0);

        let stored = storage
            .get("wedding-preview-x")
            .expect("get")
            .expect("value present");
        assert_eq!(stored.len(), 1024);
        assert!(stored.iter().all(|b| *b == stored[0]), "torn write");

        let leftovers = std::fs::read_dir(&dir)
            .expect("read dir")
            .filter_map(Result::ok)
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .count();
        assert_eq!(leftovers, 0);

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_keys_are_sanitized() {
        let storage = FileStorage {
            dir: PathBuf::from("/tmp/x"),
        };
        assert_eq!(
            storage.path_for("../etc/passwd"),
            PathBuf::from("/tmp/x/___etc_passwd.json")
        );
    }
}
