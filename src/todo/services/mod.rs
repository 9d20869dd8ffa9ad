//! Application services for the todo query and maintenance surface.

mod todos;

pub use todos::{OwnedTodo, TodoListFilter, TodoService, TodoServiceError, TodoServiceResult};
