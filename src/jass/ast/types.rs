//! Type names

use serde::Serialize;
use std::fmt;

/// A type reference: one of the built-in primitives or a user declared type name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Type {
    Code,
    Handle,
    Integer,
    Real,
    Boolean,
    String,
    Named(String),
}

impl Type {
    pub fn named(name: impl Into<String>) -> Self {
        Type::Named(name.into())
    }

    pub fn is_primitive(&self) -> bool {
        !matches!(self, Type::Named(_))
    }

    pub fn name(&self) -> &str {
        match self {
            Type::Code => "code",
            Type::Handle => "handle",
            Type::Integer => "integer",
            Type::Real => "real",
            Type::Boolean => "boolean",
            Type::String => "string",
            Type::Named(name) => name,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The result type of a function. `nothing` is only valid here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum ReturnType {
    Nothing,
    Type(Type),
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnType::Nothing => f.write_str("nothing"),
            ReturnType::Type(ty) => ty.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_names() {
        assert_eq!(Type::Integer.to_string(), "integer");
        assert!(Type::Handle.is_primitive());
        assert!(!Type::named("unit").is_primitive());
        assert_eq!(Type::named("unit").name(), "unit");
    }

    #[test]
    fn test_return_type_display() {
        assert_eq!(ReturnType::Nothing.to_string(), "nothing");
        assert_eq!(ReturnType::Type(Type::Real).to_string(), "real");
    }
}
