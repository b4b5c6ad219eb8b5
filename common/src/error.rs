use thiserror::Error;

/// Broad category of a [`PrimerError`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    /// A caller-supplied value failed a precondition. No state was changed.
    InvalidArgument,
    /// A bounded collection was asked to grow past its capacity or to
    /// yield from empty.
    OutOfBounds,
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum PrimerError {
    #[error("Radius must be bigger than 0, got {0}.")]
    NonPositiveRadius(i32),

    #[error("No text style named '{0}'.")]
    UnknownTextStyle(String),

    #[error("Stack exceeded capacity of {0}!")]
    StackFull(usize),

    #[error("Stack empty")]
    StackEmpty,

    #[error("Heap is full (max size {0})")]
    HeapFull(usize),

    #[error("Heap is empty")]
    HeapEmpty,
}

impl PrimerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PrimerError::NonPositiveRadius(_)
            | PrimerError::UnknownTextStyle(_)
            | PrimerError::StackFull(_)
            | PrimerError::StackEmpty => ErrorKind::InvalidArgument,
            PrimerError::HeapFull(_) | PrimerError::HeapEmpty => ErrorKind::OutOfBounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_should_classify_precondition_failures_as_invalid_argument() {
        assert_eq!(PrimerError::NonPositiveRadius(0).kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            PrimerError::UnknownTextStyle("xyz".into()).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(PrimerError::StackEmpty.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn kind_should_classify_heap_failures_as_out_of_bounds() {
        assert_eq!(PrimerError::HeapFull(3).kind(), ErrorKind::OutOfBounds);
        assert_eq!(PrimerError::HeapEmpty.kind(), ErrorKind::OutOfBounds);
    }

    #[test]
    fn display_should_name_the_offending_value() {
        assert_eq!(
            PrimerError::NonPositiveRadius(-4).to_string(),
            "Radius must be bigger than 0, got -4."
        );
        assert_eq!(
            PrimerError::UnknownTextStyle("xyz".into()).to_string(),
            "No text style named 'xyz'."
        );
    }
}
