use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{Mutex, MutexGuard};

use crate::constants::{GROCERY_LIST_FILE, RECIPES_FILE};
use crate::error::StorageError;
use crate::schema::{GroceryItem, Recipe};

/// One JSON file holding one flat collection. Every read-modify-write cycle
/// runs under the collection's mutex, so two requests against the same
/// collection cannot lose each other's writes.
pub struct JsonRepository<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonRepository<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
            _marker: PhantomData,
        }
    }

    /// Acquires exclusive access to the collection for one
    /// load-mutate-store cycle.
    pub async fn open(&self) -> Collection<'_, T> {
        Collection {
            path: &self.path,
            _guard: self.lock.lock().await,
            _marker: PhantomData,
        }
    }
}

pub struct Collection<'a, T> {
    path: &'a Path,
    _guard: MutexGuard<'a, ()>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Collection<'_, T>
where
    T: Serialize + DeserializeOwned,
{
    /// A missing file reads as an empty collection (first run); a file that
    /// exists but fails to parse is an error, never a silent empty read.
    pub fn load(&self) -> Result<Vec<T>, StorageError> {
        match fs::read_to_string(self.path) {
            Ok(data) => serde_json::from_str(&data).map_err(StorageError::from),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(vec![]),
            Err(e) => Err(StorageError::from(e)),
        }
    }

    /// Writes the full collection to a temp file and renames it into place,
    /// so a failed write cannot leave a truncated collection behind.
    pub fn store(&self, items: &[T]) -> Result<(), StorageError> {
        let data = serde_json::to_string_pretty(items).map_err(StorageError::from)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data).map_err(StorageError::from)?;
        fs::rename(&tmp, self.path).map_err(StorageError::from)?;

        Ok(())
    }
}

/// The two file-backed collections the API operates on.
pub struct Database {
    pub recipes: JsonRepository<Recipe>,
    pub grocery: JsonRepository<GroceryItem>,
}

impl Database {
    /// Creates the data directory and seeds both collection files with `[]`
    /// on first run.
    pub fn open(dir: &Path) -> Result<Self, StorageError> {
        fs::create_dir_all(dir).map_err(StorageError::from)?;

        let recipes = dir.join(RECIPES_FILE);
        let grocery = dir.join(GROCERY_LIST_FILE);

        for path in [&recipes, &grocery] {
            if !path.exists() {
                fs::write(path, "[]").map_err(StorageError::from)?;
            }
        }

        log::info!("database ready at {}", dir.display());

        Ok(Self {
            recipes: JsonRepository::new(recipes),
            grocery: JsonRepository::new(grocery),
        })
    }
}
