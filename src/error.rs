use thiserror::Error;

/// Reasons a height profile can not be measured.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MaterialError {
    #[error("height profile is empty")]
    EmptyProfile,

    #[error("negative height at index {index}")]
    NegativeHeight { index: usize },

    #[error("trapped volume does not fit in a u64")]
    Overflow,

    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<MaterialError>,
    },
}

impl MaterialError {
    pub(crate) fn in_row(self, row: usize) -> Self {
        MaterialError::Row { row, source: Box::new(self) }
    }
}
