use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// No encoding rule exists for the value's runtime type, or it claims the
    /// big-integer capability without a valid integer behind it.
    #[error("{context}: unsupported type: {type_name}")]
    UnsupportedType {
        type_name: &'static str,
        /// Describes the whole call, e.g. `encode value: my_crate::Order`.
        context: String,
    },
}

impl EncodeError {
    pub(crate) fn unsupported(type_name: &'static str, context: &str) -> Self {
        EncodeError::UnsupportedType {
            type_name,
            context: context.to_owned(),
        }
    }

    /// The offending runtime type.
    pub fn type_name(&self) -> &'static str {
        match self {
            EncodeError::UnsupportedType { type_name, .. } => type_name,
        }
    }
}
