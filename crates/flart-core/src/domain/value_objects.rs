//! Domain value objects: EntityKind, SerializationStyle, StateManagement,
//! GenerationConfig, Dependency.
//!
//! # Design
//!
//! These are pure value types: `Copy` where possible, equality-by-value, no
//! identity. They define the vocabulary the template selector branches on
//! and their string representations. Parsing user input into them is the
//! caller's job.

use crate::domain::error::DomainError;
use std::fmt;

// ── EntityKind ───────────────────────────────────────────────────────────────

/// What is being scaffolded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Model,
    Screen,
}

impl EntityKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Screen => "screen",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── SerializationStyle ───────────────────────────────────────────────────────

/// How value types get equality, `toString` and (de)serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SerializationStyle {
    /// Hand-written `Equatable` classes.
    #[default]
    Plain,
    /// `@freezed` declarations completed by `build_runner`.
    Generated,
}

impl SerializationStyle {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Generated => "freezed",
        }
    }

    /// Map the persisted `useFreezed` flag.
    pub const fn from_use_freezed(use_freezed: bool) -> Self {
        if use_freezed {
            Self::Generated
        } else {
            Self::Plain
        }
    }

    pub const fn is_generated(self) -> bool {
        matches!(self, Self::Generated)
    }
}

impl fmt::Display for SerializationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── StateManagement ──────────────────────────────────────────────────────────

/// State-container flavour for screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StateManagement {
    /// Event hierarchy + bloc + state (three files).
    #[default]
    Bloc,
    /// Cubit + state (two files).
    Cubit,
}

impl StateManagement {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bloc => "bloc",
            Self::Cubit => "cubit",
        }
    }

    /// Map the persisted `useCubit` flag.
    pub const fn from_use_cubit(use_cubit: bool) -> Self {
        if use_cubit { Self::Cubit } else { Self::Bloc }
    }

    /// Name of the nested state-container directory.
    pub const fn directory(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for StateManagement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── GenerationConfig ─────────────────────────────────────────────────────────

/// Options for one generation request.
///
/// Fields are optional so the template selector can reject a request whose
/// options were never resolved. Callers resolve them once up front, usually
/// through [`GenerationConfig::with_defaults`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationConfig {
    pub serialization: Option<SerializationStyle>,
    pub state_management: Option<StateManagement>,
}

impl GenerationConfig {
    pub fn new(serialization: SerializationStyle, state_management: StateManagement) -> Self {
        Self {
            serialization: Some(serialization),
            state_management: Some(state_management),
        }
    }

    pub fn with_serialization(mut self, style: SerializationStyle) -> Self {
        self.serialization = Some(style);
        self
    }

    pub fn with_state_management(mut self, state: StateManagement) -> Self {
        self.state_management = Some(state);
        self
    }

    /// Fill every unset option with its documented default.
    pub fn with_defaults(self) -> Self {
        Self {
            serialization: Some(self.serialization.unwrap_or_default()),
            state_management: Some(self.state_management.unwrap_or_default()),
        }
    }

    pub fn require_serialization(&self) -> Result<SerializationStyle, DomainError> {
        self.serialization
            .ok_or(DomainError::MissingConfiguration {
                field: "serialization",
            })
    }

    pub fn require_state_management(&self) -> Result<StateManagement, DomainError> {
        self.state_management
            .ok_or(DomainError::MissingConfiguration {
                field: "state_management",
            })
    }
}

// ── Dependency ───────────────────────────────────────────────────────────────

/// Which manifest section a package belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DependencyKind {
    Regular,
    Dev,
}

impl DependencyKind {
    /// Section name in `pubspec.yaml`.
    pub const fn section(&self) -> &'static str {
        match self {
            Self::Regular => "dependencies",
            Self::Dev => "dev_dependencies",
        }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section())
    }
}

/// A package the generated code needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dependency {
    pub name: &'static str,
    pub kind: DependencyKind,
}

impl Dependency {
    pub const fn regular(name: &'static str) -> Self {
        Self {
            name,
            kind: DependencyKind::Regular,
        }
    }

    pub const fn dev(name: &'static str) -> Self {
        Self {
            name,
            kind: DependencyKind::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        self.kind == DependencyKind::Dev
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DependencyKind::Regular => f.write_str(self.name),
            DependencyKind::Dev => write!(f, "dev:{}", self.name),
        }
    }
}

// ── CodegenMode ──────────────────────────────────────────────────────────────

/// How the external code generator runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodegenMode {
    /// One-shot build, deleting conflicting outputs.
    Build,
    /// Keep watching and rebuilding until interrupted.
    Watch,
}

impl fmt::Display for CodegenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build => f.write_str("build"),
            Self::Watch => f.write_str("watch"),
        }
    }
}
