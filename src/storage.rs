use crate::error::{RecordError, StorageError};
use crate::model::{Task, TaskList};
use directories::ProjectDirs;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const DATA_FILE_NAME: &str = "tasks.txt";
/// Used when the platform data directory cannot be resolved.
pub const FALLBACK_DATA_FILE: &str = "data/tasks.txt";

#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Reads and writes the task list at a fixed path. Holds no file handle
/// between calls.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn default_path() -> PathBuf {
        match ProjectDirs::from("com", "robert", "robert") {
            Some(proj) => proj.data_dir().join(DATA_FILE_NAME),
            None => PathBuf::from(FALLBACK_DATA_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Creates the file (and its parent directories) when missing and
    /// returns an empty list in that case.
    ///
    /// Malformed lines are skipped. A deadline with an invalid date fails
    /// the whole load.
    pub fn load(&self) -> Result<TaskList, StorageError> {
        if !self.path.exists() {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
                }
            }
            File::create(&self.path).map_err(|e| self.io_error(e))?;
            info!(path = %self.path.display(), "created empty data file");
            return Ok(TaskList::new());
        }

        let file = File::open(&self.path).map_err(|e| self.io_error(e))?;
        let mut tasks = TaskList::new();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| self.io_error(e))?;
            match Task::from_line(&line) {
                Ok(task) => tasks.add(task),
                Err(RecordError::Malformed) => {
                    warn!(line = idx + 1, content = %line, "skipping malformed record");
                }
                Err(RecordError::InvalidDate(source)) => {
                    return Err(StorageError::InvalidRecord {
                        path: self.path.clone(),
                        line: idx + 1,
                        source,
                    });
                }
            }
        }
        info!(count = tasks.len(), path = %self.path.display(), "loaded tasks");
        Ok(tasks)
    }

    /// Overwrites the file with one line per task. Not atomic: a failed
    /// write can leave a partial file behind.
    pub fn save(&self, tasks: &TaskList) -> Result<(), StorageError> {
        let file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);
        for task in tasks {
            write!(writer, "{}{}", task.to_line(), LINE_SEPARATOR)
                .map_err(|e| self.io_error(e))?;
        }
        writer.flush().map_err(|e| self.io_error(e))?;
        info!(count = tasks.len(), path = %self.path.display(), "saved tasks");
        Ok(())
    }
}
