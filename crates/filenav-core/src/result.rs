use crate::error::NavError;

pub type NavResult<T> = Result<T, NavError>;
