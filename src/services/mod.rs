use thiserror::Error;

use crate::domain::record::UnknownSortField;

pub mod api;
pub mod main;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    UnknownSortField(#[from] UnknownSortField),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
