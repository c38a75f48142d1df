use thiserror::Error;

#[derive(Debug, Error)]
pub enum MealError {
    #[error("Food data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Please select at least one food or drink item.")]
    NoSelection,

    #[error("Nutrition provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, MealError>;
