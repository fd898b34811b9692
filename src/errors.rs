use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("generation failed: {0}")] Generation(String),
    #[error("invalid input: {0}")] Validation(String),
}
