// File: ./src/model/list.rs
// Ordered task collection
use crate::error::TaskError;
use crate::model::item::Task;

/// Insertion-ordered list of tasks. Indices here are 0-based; the command
/// layer translates the 1-based numbers users type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn get(&self, index: usize) -> Result<&Task, TaskError> {
        let len = self.tasks.len();
        self.tasks
            .get(index)
            .ok_or(TaskError::IndexOutOfRange { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Task, TaskError> {
        let len = self.tasks.len();
        self.tasks
            .get_mut(index)
            .ok_or(TaskError::IndexOutOfRange { index, len })
    }

    pub fn remove(&mut self, index: usize) -> Result<Task, TaskError> {
        if index >= self.tasks.len() {
            return Err(TaskError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(self.tasks.remove(index))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Drops the current contents and takes `tasks` as the new order.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Tasks whose description contains `keyword`, ignoring case.
    pub fn find(&self, keyword: &str) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.matches(keyword)).collect()
    }

    /// Deadlines first, earliest date first, then every other task.
    /// Both groups keep their relative order on ties.
    pub fn sorted(&self) -> Vec<Task> {
        let (mut deadlines, others): (Vec<Task>, Vec<Task>) =
            self.tasks.iter().cloned().partition(Task::is_deadline);
        deadlines.sort_by_key(|t| t.by());
        deadlines.extend(others);
        deadlines
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
