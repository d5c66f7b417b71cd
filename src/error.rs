use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Catalog load error: {0}")]
    CatalogLoad(String),

    #[error("Catalog header is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("No meals available for {slot} on {date}")]
    NoMealsAvailable { slot: String, date: String },

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Failed to generate meal plan: {0}")]
    PlanGeneration(#[source] Box<PlannerError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl PlannerError {
    /// True when the plan could not be built because the constraints filter
    /// out every meal for some slot.
    pub fn is_exhaustion(&self) -> bool {
        match self {
            PlannerError::NoMealsAvailable { .. } => true,
            PlannerError::PlanGeneration(inner) => inner.is_exhaustion(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
