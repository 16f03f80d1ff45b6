//! In-memory board state: the ordered column list and the ordered task list.
//!
//! Tasks live in one flat list; a column shows the tasks whose `column_id`
//! matches it, in list order. Every task references a column that exists on
//! the board, so deleting a column also deletes its tasks.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use crate::core::ids::{random_u32, IdSource};
use crate::core::reorder::move_item;
use crate::error::BoardError;
use crate::models::{Column, Id, Task};

#[derive(Debug, Clone)]
pub struct Board {
    columns: Vec<Column>,
    tasks: Vec<Task>,
    draw: IdSource,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self::with_id_source(random_u32)
    }

    pub fn with_id_source(draw: IdSource) -> Self {
        Self {
            columns: Vec::new(),
            tasks: Vec::new(),
            draw,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn column(&self, id: Id) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn task(&self, id: Id) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn column_index(&self, id: Id) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id)
    }

    pub fn task_index(&self, id: Id) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Tasks owned by `column_id`, in board order.
    pub fn tasks_in(&self, column_id: Id) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |t| t.column_id == column_id)
    }

    pub fn task_count_in(&self, column_id: Id) -> usize {
        self.tasks_in(column_id).count()
    }

    /// Appends a column with a fresh id and a numbered default title.
    pub fn create_column(&mut self) -> Id {
        let id = self.fresh_id();
        let title = Column::default_title(self.columns.len());
        log::debug!("creating column {id} ({title})");
        self.columns.push(Column::new(id, title));
        id
    }

    /// Removes a column together with every task it owns.
    pub fn delete_column(&mut self, id: Id) -> Result<Column, BoardError> {
        let index = self.column_index(id).ok_or(BoardError::ColumnNotFound(id))?;
        let column = self.columns.remove(index);
        let before = self.tasks.len();
        self.tasks.retain(|t| t.column_id != id);
        log::debug!("deleted column {id} and {} task(s)", before - self.tasks.len());
        Ok(column)
    }

    pub fn rename_column(&mut self, id: Id, title: String) -> Result<(), BoardError> {
        let column = self
            .columns
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(BoardError::ColumnNotFound(id))?;
        column.update_title(title);
        Ok(())
    }

    /// Appends a task to `column_id` with a fresh id and numbered default content.
    pub fn create_task(&mut self, column_id: Id) -> Result<Id, BoardError> {
        if self.column(column_id).is_none() {
            return Err(BoardError::ColumnNotFound(column_id));
        }
        let id = self.fresh_id();
        let content = Task::default_content(self.tasks.len());
        log::debug!("creating task {id} in column {column_id}");
        self.tasks.push(Task::new(id, column_id, content));
        Ok(id)
    }

    pub fn delete_task(&mut self, id: Id) -> Result<Task, BoardError> {
        let index = self.task_index(id).ok_or(BoardError::TaskNotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    /// Replaces the content of one task; all other tasks are left as they are.
    pub fn update_task(&mut self, id: Id, content: String) -> Result<(), BoardError> {
        self.task_mut(id)?.update_content(content);
        Ok(())
    }

    /// Moves a task into `column_id` without changing its place in the task list.
    pub fn reassign_task(&mut self, id: Id, column_id: Id) -> Result<(), BoardError> {
        if self.column(column_id).is_none() {
            return Err(BoardError::ColumnNotFound(column_id));
        }
        self.task_mut(id)?.move_to(column_id);
        Ok(())
    }

    pub fn move_column(&mut self, from: usize, to: usize) -> bool {
        move_item(&mut self.columns, from, to)
    }

    pub fn move_task(&mut self, from: usize, to: usize) -> bool {
        move_item(&mut self.tasks, from, to)
    }

    fn task_mut(&mut self, id: Id) -> Result<&mut Task, BoardError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(BoardError::TaskNotFound(id))
    }

    fn id_taken(&self, id: Id) -> bool {
        self.columns.iter().any(|c| c.id == id) || self.tasks.iter().any(|t| t.id == id)
    }

    // Redraws until the id is unused by any column or task on this board.
    fn fresh_id(&self) -> Id {
        loop {
            let id = Id((self.draw)());
            if !self.id_taken(id) {
                return id;
            }
            log::debug!("id {id} already in use, drawing again");
        }
    }
}
