use std::fmt;
use std::io;

#[derive(Debug)]
pub enum AstError {
    // Output errors
    IoError(io::Error),

    // Contract violations reported by conversions
    UnknownNodeKind(u8),
    UnknownOperator(String),
    UnknownType(String),
    UnknownSample(String),

    // Tree validation errors
    InvalidIdentifier {
        identifier: String,
        context: &'static str,
    },
    MalformedNode {
        node: &'static str,
        message: String,
    },
}

impl AstError {
    /// Create an invalid identifier error for the named construct
    pub fn invalid_identifier(identifier: impl Into<String>, context: &'static str) -> Self {
        AstError::InvalidIdentifier {
            identifier: identifier.into(),
            context,
        }
    }

    /// Create a malformed node error
    pub fn malformed(node: &'static str, message: impl Into<String>) -> Self {
        AstError::MalformedNode {
            node,
            message: message.into(),
        }
    }
}

impl fmt::Display for AstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstError::IoError(err) => write!(f, "I/O error: {}", err),

            AstError::UnknownNodeKind(tag) => write!(f, "Unknown node kind tag {}", tag),
            AstError::UnknownOperator(op) => write!(f, "Unknown operator '{}'", op),
            AstError::UnknownType(name) => write!(f, "Unknown type '{}'", name),
            AstError::UnknownSample(name) => write!(f, "Unknown sample '{}'", name),

            AstError::InvalidIdentifier { identifier, context } => {
                write!(f, "Invalid identifier '{}' in {}", identifier, context)
            }
            AstError::MalformedNode { node, message } => {
                write!(f, "Malformed {} node: {}", node, message)
            }
        }
    }
}

impl std::error::Error for AstError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AstError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for AstError {
    fn from(err: io::Error) -> Self {
        AstError::IoError(err)
    }
}

// Type alias for Result with AstError
pub type AstResult<T> = Result<T, AstError>;
