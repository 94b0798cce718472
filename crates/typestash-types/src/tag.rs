use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Declared semantic type of a stored key.
///
/// The tag selects the decode rule applied to the raw string read back from
/// the backend. [`TypeTag::Unknown`] stands for a shape the schema does not
/// describe; such keys decode to the raw string unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Number,
    String,
    Boolean,
    /// Millisecond timestamp.
    Date,
    /// Any JSON payload, returned as parsed.
    Object,
    /// A JSON array.
    Array,
    Unknown,
}

impl TypeTag {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Object => "object",
            Self::Array => "array",
            Self::Unknown => "unknown",
        }
    }

    /// Returns `true` for tags whose payload is JSON text.
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Object | Self::Array)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tag name that is not one of the lowercase [`TypeTag`] names.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown type tag: {0:?}")]
pub struct UnknownTagError(pub String);

impl FromStr for TypeTag {
    type Err = UnknownTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "number" => Ok(Self::Number),
            "string" => Ok(Self::String),
            "boolean" => Ok(Self::Boolean),
            "date" => Ok(Self::Date),
            "object" => Ok(Self::Object),
            "array" => Ok(Self::Array),
            "unknown" => Ok(Self::Unknown),
            other => Err(UnknownTagError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [TypeTag; 7] = [
        TypeTag::Number,
        TypeTag::String,
        TypeTag::Boolean,
        TypeTag::Date,
        TypeTag::Object,
        TypeTag::Array,
        TypeTag::Unknown,
    ];

    #[test]
    fn name_parses_back() {
        for tag in ALL {
            assert_eq!(tag.name().parse::<TypeTag>(), Ok(tag));
        }
    }

    #[test]
    fn unrecognized_name_is_an_error() {
        let err = "Number".parse::<TypeTag>().unwrap_err();
        assert_eq!(err, UnknownTagError("Number".into()));
        assert!("".parse::<TypeTag>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&TypeTag::Date).unwrap();
        assert_eq!(json, "\"date\"");
        let tag: TypeTag = serde_json::from_str("\"array\"").unwrap();
        assert_eq!(tag, TypeTag::Array);
    }

    #[test]
    fn only_object_and_array_are_json() {
        let json: Vec<_> = ALL.into_iter().filter(|t| t.is_json()).collect();
        assert_eq!(json, vec![TypeTag::Object, TypeTag::Array]);
    }
}
