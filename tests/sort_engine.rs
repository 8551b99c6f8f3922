//! Integration tests for sorting mixed task lists

use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use taskdeck::task::{sort, SortKey, SortOrder, Task, TaskError, TaskList};

fn day(m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn names(tasks: &TaskList) -> Vec<&str> {
    tasks.iter().map(|t| t.description()).collect()
}

fn mixed() -> TaskList {
    [
        Task::event("retreat", day(6, 1), day(6, 2)).unwrap(),
        Task::deadline("essay", day(1, 1)).unwrap(),
        Task::todo("laundry").unwrap(),
        Task::event("launch", day(3, 1), day(7, 1)).unwrap(),
        Task::deadline("report", day(6, 1)).unwrap(),
        Task::todo("dishes").unwrap(),
    ]
    .into_iter()
    .collect()
}

const ALL_KEYS: [SortKey; 3] = [
    SortKey::Description,
    SortKey::StartDate,
    SortKey::DeadlineOrEndDate,
];
const ALL_ORDERS: [SortOrder; 2] = [SortOrder::Ascending, SortOrder::Descending];

#[test]
fn test_start_date_keeps_todo_deadline_ties_stable() {
    let mut tasks: TaskList = [
        Task::todo("todo").unwrap(),
        Task::deadline("deadline", day(1, 1)).unwrap(),
        Task::event("event", day(6, 1), day(6, 2)).unwrap(),
    ]
    .into_iter()
    .collect();

    tasks.sort(SortOrder::Ascending, SortKey::StartDate);
    assert_eq!(names(&tasks), ["todo", "deadline", "event"]);
}

#[test]
fn test_start_date_ascending_on_mixed_list() {
    let mut tasks = mixed();
    tasks.sort(SortOrder::Ascending, SortKey::StartDate);
    assert_eq!(
        names(&tasks),
        ["essay", "laundry", "report", "dishes", "launch", "retreat"]
    );
}

#[test]
fn test_start_date_descending_puts_events_first() {
    let mut tasks = mixed();
    tasks.sort(SortOrder::Descending, SortKey::StartDate);
    assert_eq!(
        names(&tasks),
        ["retreat", "launch", "essay", "laundry", "report", "dishes"]
    );
}

#[test]
fn test_deadline_or_end_date_on_mixed_list() {
    let mut tasks = mixed();
    tasks.sort(SortOrder::Ascending, SortKey::DeadlineOrEndDate);
    // report (deadline 6/1) and retreat (ends 6/2) sit between essay and launch
    assert_eq!(
        names(&tasks),
        ["laundry", "dishes", "essay", "report", "retreat", "launch"]
    );
}

#[test]
fn test_description_order() {
    let mut tasks = mixed();
    tasks.sort(SortOrder::Ascending, SortKey::Description);
    assert_eq!(
        names(&tasks),
        ["dishes", "essay", "launch", "laundry", "report", "retreat"]
    );
}

#[test]
fn test_sorting_is_idempotent() {
    for key in ALL_KEYS {
        for order in ALL_ORDERS {
            let mut once = mixed();
            once.sort(order, key);
            let mut twice = once.clone();
            twice.sort(order, key);
            assert_eq!(once, twice, "{key} {order}");
        }
    }
}

#[test]
fn test_sort_matches_free_function() {
    for key in ALL_KEYS {
        for order in ALL_ORDERS {
            let mut list = mixed();
            list.sort(order, key);

            let mut raw: Vec<Task> = mixed().iter().cloned().collect();
            sort::sort(&mut raw, order, key);
            assert_eq!(list, raw.into_iter().collect::<TaskList>());
        }
    }
}

#[test]
fn test_sorted_view_matches_in_place_sort() {
    let tasks = mixed();
    let view: Vec<&str> = tasks
        .sorted(SortOrder::Descending, SortKey::DeadlineOrEndDate)
        .into_iter()
        .map(|(_, t)| t.description())
        .collect();

    let mut sorted = mixed();
    sorted.sort(SortOrder::Descending, SortKey::DeadlineOrEndDate);
    assert_eq!(view, names(&sorted));
}

#[test]
fn test_invalid_tokens_are_invalid_arguments() {
    assert!(matches!(
        "sideways".parse::<SortOrder>(),
        Err(TaskError::InvalidArgument(_))
    ));
    assert!(matches!(
        "priority".parse::<SortKey>(),
        Err(TaskError::InvalidArgument(_))
    ));
}
