use print_impose::ImposeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkOrderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Imposition error: {0}")]
    Impose(#[from] ImposeError),
    #[error("Invalid work order: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Work order {0} has no line items")]
    NoLineItems(String),
}

pub type Result<T> = std::result::Result<T, WorkOrderError>;
