use leptos::prelude::*;
use crate::core::Board;
use crate::error::BoardError;
use crate::models::Id;

/// Board state plus the callbacks the column and task views call into.
///
/// Everything in here is `Copy`, so the hook is shared through context
/// instead of being threaded through every component's props.
#[derive(Clone, Copy)]
pub struct BoardHook {
    pub board: RwSignal<Board>,
    pub create_column: Callback<()>,
    pub delete_column: Callback<Id>,
    pub rename_column: Callback<(Id, String)>,
    pub create_task: Callback<Id>,
    pub delete_task: Callback<Id>,
    pub update_task: Callback<(Id, String)>,
}

pub fn use_board() -> BoardHook {
    let board = RwSignal::new(Board::new());

    let create_column = Callback::new(move |_: ()| {
        board.update(|b| {
            b.create_column();
        });
    });

    let delete_column = Callback::new(move |id: Id| {
        let mut result = Ok(());
        board.update(|b| result = b.delete_column(id).map(|_| ()));
        report("delete column", result);
    });

    let rename_column = Callback::new(move |(id, title): (Id, String)| {
        let mut result = Ok(());
        board.update(|b| result = b.rename_column(id, title));
        report("rename column", result);
    });

    let create_task = Callback::new(move |column_id: Id| {
        let mut result = Ok(());
        board.update(|b| result = b.create_task(column_id).map(|_| ()));
        report("create task", result);
    });

    let delete_task = Callback::new(move |id: Id| {
        let mut result = Ok(());
        board.update(|b| result = b.delete_task(id).map(|_| ()));
        report("delete task", result);
    });

    let update_task = Callback::new(move |(id, content): (Id, String)| {
        let mut result = Ok(());
        board.update(|b| result = b.update_task(id, content));
        report("update task", result);
    });

    BoardHook {
        board,
        create_column,
        delete_column,
        rename_column,
        create_task,
        delete_task,
        update_task,
    }
}

// Stale ids only come from views racing a delete; nothing to recover.
fn report(action: &str, result: Result<(), BoardError>) {
    if let Err(err) = result {
        log::warn!("{action} ignored: {err}");
    }
}
