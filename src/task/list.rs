//! In-memory task list

use super::error::{Result, TaskError};
use super::model::Task;
use super::sort::{self, SortKey, SortOrder};

/// Ordered list of tasks. Indices are 0-based and stay contiguous after
/// deletion; [`TaskList::index_of`] converts the 1-based numbers users see.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
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

    /// Append a task and return a reference to it
    pub fn add(&mut self, task: Task) -> &Task {
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Convert a 1-based task number into an index into this list
    pub fn index_of(&self, number: usize) -> Result<usize> {
        if number == 0 || number > self.tasks.len() {
            return Err(TaskError::invalid(match self.tasks.len() {
                0 => format!("There is no task {number}: the list is empty."),
                len => format!("There is no task {number}. Pick a number from 1 to {len}."),
            }));
        }
        Ok(number - 1)
    }

    /// Remove and return the task at `index`, shifting later tasks down
    pub fn delete(&mut self, index: usize) -> Result<Task> {
        if index >= self.tasks.len() {
            return Err(out_of_range(index, self.tasks.len()));
        }
        Ok(self.tasks.remove(index))
    }

    /// Mark the task at `index` as done. Returns the task and whether its
    /// state changed. An event that starts after it ends is left pending.
    pub fn mark_complete(&mut self, index: usize) -> Result<(&Task, bool)> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or_else(|| out_of_range(index, len))?;
        let changed = task.mark_complete()?;
        Ok((task, changed))
    }

    /// Reorder the list in place. Stable, so repeated sorts are no-ops.
    pub fn sort(&mut self, order: SortOrder, key: SortKey) {
        sort::sort(&mut self.tasks, order, key);
    }

    /// Sorted view of the list paired with each task's index, leaving the
    /// stored order untouched
    pub fn sorted(&self, order: SortOrder, key: SortKey) -> Vec<(usize, &Task)> {
        let mut view: Vec<(usize, &Task)> = self.tasks.iter().enumerate().collect();
        view.sort_by(|a, b| sort::compare(a.1, b.1, order, key));
        view
    }

    /// Tasks whose description contains `keyword`, ignoring case, paired
    /// with their index
    pub fn find(&self, keyword: &str) -> Vec<(usize, &Task)> {
        let needle = keyword.trim().to_lowercase();
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.description().to_lowercase().contains(&needle))
            .collect()
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

fn out_of_range(index: usize, len: usize) -> TaskError {
    TaskError::invalid(format!(
        "Task index {index} is out of range for a list of {len}."
    ))
}
