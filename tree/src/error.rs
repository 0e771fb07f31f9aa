use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeIndexError<Id> {
    #[error("duplicate record id {id:?}")]
    DuplicateId { id: Id },

    #[error("cycle detected in parent links at id {id:?}")]
    CycleDetected { id: Id },

    #[error("failed to parse records from json")]
    Json(#[from] serde_json::Error),
}
