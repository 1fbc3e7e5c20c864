//! Kanban board model definitions
//!
//! The board is three ordered lists of task text. Its serialized form is the
//! snapshot format: `{"todo": [...], "doing": [...], "done": [...]}`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;
use crate::Result;

/// strftime pattern for the completion stamp, upper-cased after formatting.
pub const COMPLETION_STAMP_FORMAT: &str = "%H:%M %d %b %Y";

/// One of the three board columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Todo,
    Doing,
    Done,
}

impl Column {
    /// Columns in display order
    pub const ALL: [Column; 3] = [Column::Todo, Column::Doing, Column::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
        }
    }

    /// Display title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::Doing => "Doing",
            Self::Done => "Done",
        }
    }

    /// Hint shown when the column has no tasks
    pub fn empty_hint(&self) -> &'static str {
        match self {
            Self::Todo => "No tasks yet. Add one above!",
            Self::Doing => "No tasks in progress. Move some from To Do!",
            Self::Done => "Nothing done yet. Keep going!",
        }
    }

    /// Columns a task in this column may be moved to
    pub fn targets(&self) -> &'static [Column] {
        match self {
            Self::Todo => &[Column::Doing],
            Self::Doing => &[Column::Todo, Column::Done],
            Self::Done => &[],
        }
    }

    pub fn can_move_to(&self, target: Column) -> bool {
        self.targets().contains(&target)
    }

    /// Whether tasks in this column can be reordered
    pub fn reorderable(&self) -> bool {
        !matches!(self, Self::Done)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reorder direction for [`Board::swap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Format the completion stamp, e.g. `14:05 03 MAR 2024`.
pub fn completion_stamp(at: NaiveDateTime) -> String {
    at.format(COMPLETION_STAMP_FORMAT).to_string().to_uppercase()
}

/// The complete board state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    todo: Vec<String>,
    #[serde(default)]
    doing: Vec<String>,
    #[serde(default)]
    done: Vec<String>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_columns(todo: Vec<String>, doing: Vec<String>, done: Vec<String>) -> Self {
        Self { todo, doing, done }
    }

    /// Tasks of a column, in display order
    pub fn column(&self, column: Column) -> &[String] {
        match column {
            Column::Todo => &self.todo,
            Column::Doing => &self.doing,
            Column::Done => &self.done,
        }
    }

    fn column_mut(&mut self, column: Column) -> &mut Vec<String> {
        match column {
            Column::Todo => &mut self.todo,
            Column::Doing => &mut self.doing,
            Column::Done => &mut self.done,
        }
    }

    pub fn len(&self, column: Column) -> usize {
        self.column(column).len()
    }

    /// Number of tasks across all columns
    pub fn total(&self) -> usize {
        self.todo.len() + self.doing.len() + self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Append a task to `todo`. Empty text is ignored.
    pub fn add(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.todo.push(text.to_string());
        true
    }

    /// Move the task at `index` in `source` to the end of `target`.
    ///
    /// Tasks entering `done` get ` - <stamp>` appended, stamped with `now`.
    /// Returns `Ok(false)` when `index` is out of range, and
    /// [`Error::IllegalTransition`] when `source` may not move to `target`.
    pub fn move_task(
        &mut self,
        source: Column,
        index: usize,
        target: Column,
        now: NaiveDateTime,
    ) -> Result<bool> {
        if !source.can_move_to(target) {
            return Err(Error::IllegalTransition {
                from: source,
                to: target,
            });
        }

        let tasks = self.column_mut(source);
        if index >= tasks.len() {
            return Ok(false);
        }
        let mut task = tasks.remove(index);

        if target == Column::Done {
            task = format!("{} - {}", task, completion_stamp(now));
        }
        self.column_mut(target).push(task);

        Ok(true)
    }

    /// Exchange the task at `index` with its neighbour in `direction`.
    pub fn swap(&mut self, column: Column, index: usize, direction: Direction) -> bool {
        let tasks = self.column_mut(column);
        let neighbour = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => index.checked_add(1),
        };

        match neighbour {
            Some(other) if index < tasks.len() && other < tasks.len() => {
                tasks.swap(index, other);
                true
            }
            _ => false,
        }
    }

    /// Remove the task at `index`, returning it.
    pub fn delete(&mut self, column: Column, index: usize) -> Option<String> {
        let tasks = self.column_mut(column);
        if index < tasks.len() {
            Some(tasks.remove(index))
        } else {
            None
        }
    }
}
