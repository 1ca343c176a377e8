use survey_model::ModelError;
use thiserror::Error;

/// Errors from applying a patch to a form record.
#[derive(Error, Debug)]
pub enum FormError {
    #[error("'{0}' is not a field of the form")]
    UnknownSection(String),

    #[error("{section} expects a text value")]
    TextExpected { section: &'static str },

    #[error("patch does not fit the record: {0}")]
    Shape(#[from] serde_json::Error),

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, FormError>;
