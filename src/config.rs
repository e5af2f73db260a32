/// Validated, immutable run configuration built once from the command line.
use std::fmt;
use std::path::PathBuf;

/// The operation requested with `-operation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Add,
    List,
    FindById,
    Remove,
    /// Any other name; rejected at dispatch time.
    Unsupported(String),
}

impl Operation {
    /// Map a command-line name to an `Operation`. Names are case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "add" => Self::Add,
            "list" => Self::List,
            "findById" => Self::FindById,
            "remove" => Self::Remove,
            other => Self::Unsupported(other.to_owned()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Add => "add",
            Self::List => "list",
            Self::FindById => "findById",
            Self::Remove => "remove",
            Self::Unsupported(name) => name,
        }
    }

    /// Whether the operation needs an `-item` payload.
    #[must_use]
    pub fn needs_item(&self) -> bool {
        matches!(self, Self::Add)
    }

    /// Whether the operation needs an `-id`.
    #[must_use]
    pub fn needs_id(&self) -> bool {
        matches!(self, Self::FindById | Self::Remove)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Everything a command needs to run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backing store file; guaranteed to exist once validation succeeded.
    pub file_name: PathBuf,
    pub operation: Operation,
    /// Raw JSON payload for `add`.
    pub item: Option<String>,
    /// Target id for `findById` and `remove`.
    pub id: Option<String>,
}
