use thiserror::Error;

use cm_core::CoreError;
use cm_graph::GraphError;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("unknown edit mode {0:?}")]
    UnknownMode(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("graph edit rejected: {0}")]
    Graph(#[from] GraphError),
}

pub type EditorResult<T> = Result<T, EditorError>;
