//! Datafile line parser

use super::datetime::from_canonical_string;
use super::error::{Result, TaskError};
use super::model::{Task, TaskKind, COMPLETED_FLAG, FIELD_SEPARATOR};

/// Rebuild a task from one datafile line.
///
/// Lines look like `T|-|desc`, `D|T|desc|<by>` or `E|-|desc|<from>|<to>`.
/// Fields past the last one a kind needs are ignored. The description is
/// kept byte for byte, so `parse_line(&task.save())` gives back `task`.
pub fn parse_line(line: &str) -> Result<Task> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let field = |idx: usize| fields.get(idx).copied().ok_or_else(|| corrupted(line));

    let kind = match fields.first().copied() {
        Some("T") => TaskKind::Todo,
        Some("D") => TaskKind::Deadline {
            by: from_canonical_string(field(3)?)?,
        },
        Some("E") => TaskKind::Event {
            from: from_canonical_string(field(3)?)?,
            to: from_canonical_string(field(4)?)?,
        },
        _ => return Err(corrupted(line)),
    };
    let task = Task::from_parts(field(2)?.to_string(), kind).map_err(|_| corrupted(line))?;

    if field(1)? == COMPLETED_FLAG {
        task.completed()
    } else {
        Ok(task)
    }
}

fn corrupted(line: &str) -> TaskError {
    TaskError::parse(format!("Data \"{line}\" cannot be parsed."))
}
