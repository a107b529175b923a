//! Custom error types for gendiff.

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read file {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML in {path}: {source}")]
    YamlError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid TOML in {path}: {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not detect file format for {path}")]
    UnknownFormat { path: String },

    #[error("Top-level value in {path} is a {found}, expected an object")]
    NotAnObject { path: String, found: String },
}

/// A diff tree read from JSON that breaks the node shape contract.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("Invalid node status '{status}'")]
    InvalidNodeStatus { status: String },

    #[error("Node '{key}' with status '{status}' is missing field '{field}'")]
    MissingField {
        key: String,
        status: String,
        field: &'static str,
    },

    #[error("Invalid diff tree JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Value of '{key}' is {value}, which JSON cannot represent")]
    NonFiniteNumber { key: String, value: f64 },

    #[error("Failed to serialize to JSON: {source}")]
    JsonSerializationError {
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum GendiffError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl ParseError {
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn read_error(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn json_error(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::JsonError {
            path: path.into(),
            source,
        }
    }

    pub fn yaml_error(path: impl Into<String>, source: serde_yaml::Error) -> Self {
        Self::YamlError {
            path: path.into(),
            source,
        }
    }

    pub fn toml_error(path: impl Into<String>, source: toml::de::Error) -> Self {
        Self::TomlError {
            path: path.into(),
            source,
        }
    }

    pub fn unknown_format(path: impl Into<String>) -> Self {
        Self::UnknownFormat { path: path.into() }
    }

    pub fn not_an_object(path: impl Into<String>, found: impl Into<String>) -> Self {
        Self::NotAnObject {
            path: path.into(),
            found: found.into(),
        }
    }
}

impl OutputError {
    pub fn non_finite_number(key: impl Into<String>, value: f64) -> Self {
        Self::NonFiniteNumber {
            key: key.into(),
            value,
        }
    }
}

impl TreeError {
    pub fn invalid_status(status: impl Into<String>) -> Self {
        Self::InvalidNodeStatus {
            status: status.into(),
        }
    }

    pub fn missing_field(
        key: impl Into<String>,
        status: impl Into<String>,
        field: &'static str,
    ) -> Self {
        Self::MissingField {
            key: key.into(),
            status: status.into(),
            field,
        }
    }
}
