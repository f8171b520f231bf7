use thiserror::Error;

/// Why an occurrence could not be turned into a candidate entry.
///
/// Argument positions are 1-based, as shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error(
        "Function {function} must have a String Literal or Binary Expression for argument #{position}, found {found} instead!"
    )]
    MalformedLiteralArgument {
        function: String,
        position: usize,
        found: String,
    },

    #[error(
        "Function {function} must use the '+' operator for string concatenation for argument #{position}, found {operator} instead!"
    )]
    InvalidConcatenationOperator {
        function: String,
        position: usize,
        operator: String,
    },

    #[error("{element} component must have a prop '{id_attribute}' or '{short_form_attribute}'!")]
    MissingRequiredIdentifier {
        element: String,
        id_attribute: String,
        short_form_attribute: String,
    },
}
