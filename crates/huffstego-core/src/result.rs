use crate::HuffstegoError;

pub type Result<T> = std::result::Result<T, HuffstegoError>;
