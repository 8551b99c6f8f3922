//! Sort keys, sort order and the task comparator

use chrono::NaiveDateTime;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::error::{Result, TaskError};
use super::model::{Task, TaskKind};

/// Field a task list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Description,
    StartDate,
    DeadlineOrEndDate,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::StartDate => "start date",
            Self::DeadlineOrEndDate => "deadline/end date",
        }
    }
}

impl FromStr for SortKey {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "description" | "desc" | "name" => Ok(Self::Description),
            "start" | "start-date" | "startdate" | "from" => Ok(Self::StartDate),
            "deadline" | "end" | "end-date" | "enddate" | "by" | "to" => {
                Ok(Self::DeadlineOrEndDate)
            }
            _ => Err(TaskError::invalid(format!(
                "I cannot sort the list on that field: \"{}\". Sort on description, start or deadline.",
                s.trim()
            ))),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction of a sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// +1 for ascending, -1 for descending
    pub fn multiplier(&self) -> i32 {
        match self {
            Self::Ascending => 1,
            Self::Descending => -1,
        }
    }

    /// Apply this direction to an ascending comparison
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl FromStr for SortOrder {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "a" | "asc" | "ascend" | "ascending" => Ok(Self::Ascending),
            "d" | "desc" | "descend" | "descending" => Ok(Self::Descending),
            _ => Err(TaskError::invalid(format!(
                "The sort order you entered is invalid: \"{}\". Use ascending or descending.",
                s.trim()
            ))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A point on the timeline used for sorting. Kinds without a given time sit
/// at `NegInfinity`, before every real instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Bound {
    NegInfinity,
    At(NaiveDateTime),
}

fn effective_start(task: &Task) -> Bound {
    match task.kind() {
        TaskKind::Todo | TaskKind::Deadline { .. } => Bound::NegInfinity,
        TaskKind::Event { from, .. } => Bound::At(*from),
    }
}

fn effective_end(task: &Task) -> Bound {
    match task.kind() {
        TaskKind::Todo => Bound::NegInfinity,
        TaskKind::Deadline { by } => Bound::At(*by),
        TaskKind::Event { to, .. } => Bound::At(*to),
    }
}

/// Compare two tasks on `key`, in the direction given by `order`.
///
/// Descriptions compare case-sensitively, so `"Zoo"` sorts before `"apple"`.
pub fn compare(a: &Task, b: &Task, order: SortOrder, key: SortKey) -> Ordering {
    let ascending = match key {
        SortKey::Description => a.description().cmp(b.description()),
        SortKey::StartDate => effective_start(a).cmp(&effective_start(b)),
        SortKey::DeadlineOrEndDate => effective_end(a).cmp(&effective_end(b)),
    };
    order.apply(ascending)
}

/// Stable in-place sort. Ties keep their existing relative order.
pub fn sort(tasks: &mut [Task], order: SortOrder, key: SortKey) {
    tasks.sort_by(|a, b| compare(a, b, order, key));
}

impl Task {
    /// Compare against `other`, returning -1, 0 or 1.
    pub fn compare_to(&self, other: &Task, order: SortOrder, key: SortKey) -> i32 {
        let ascending = compare(self, other, SortOrder::Ascending, key) as i32;
        ascending * order.multiplier()
    }
}
