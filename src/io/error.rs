//! Error types and context management for map generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all map generation operations
#[derive(Debug)]
pub enum MapError {
    /// No catalog entry satisfies the constraints accumulated at a cell
    ///
    /// Terminal for the current attempt: edge state is already committed, so
    /// the only recovery is a fresh attempt from new vertices.
    CatalogExhausted {
        /// Cell coordinates `[col, row]` that could not be resolved
        cell: [usize; 2],
        /// Generation attempt (1-based) in which this occurred
        attempt: usize,
        /// Edge mask of the query descriptor
        edge_mask: u8,
        /// Border mask of the query descriptor
        border_mask: u8,
        /// Ignore mask of the query descriptor
        ignore_mask: u8,
    },

    /// A tile descriptor has an invalid bit string
    MalformedCatalogEntry {
        /// Position of the descriptor in its source list
        index: usize,
        /// Name of the offending field
        field: &'static str,
        /// Raw value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A coordinate lookup found zero or several lattice elements
    IdentityLookup {
        /// Kind of element looked up (`"vertex"` or `"edge"`)
        kind: &'static str,
        /// First coordinate `[col, row]`
        from: [usize; 2],
        /// Second coordinate for edge lookups
        to: Option<[usize; 2]>,
        /// Number of elements found
        matches: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Tile set file is not valid JSON or misses required fields
    TileSetParse {
        /// Path to the tile set file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Failed to load a tile image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save the rendered map to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CatalogExhausted {
                cell,
                attempt,
                edge_mask,
                border_mask,
                ignore_mask,
            } => {
                write!(
                    f,
                    "Generation failed, retry: no tile matches cell ({}, {}) in attempt {attempt} \
                     (edge {edge_mask:04b}, border {border_mask:08b}, ignore {ignore_mask:04b})",
                    cell[0], cell[1]
                )
            }
            Self::MalformedCatalogEntry {
                index,
                field,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Malformed catalog entry {index}: {field} = '{value}': {reason}"
                )
            }
            Self::IdentityLookup {
                kind,
                from,
                to,
                matches,
            } => match to {
                Some(to) => write!(
                    f,
                    "Expected exactly one {kind} between ({}, {}) and ({}, {}), found {matches}",
                    from[0], from[1], to[0], to[1]
                ),
                None => write!(
                    f,
                    "Expected exactly one {kind} at ({}, {}), found {matches}",
                    from[0], from[1]
                ),
            },
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::TileSetParse { path, source } => {
                write!(f, "Failed to parse tile set '{}': {source}", path.display())
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::TileSetParse { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl MapError {
    /// Whether a fresh generation attempt could succeed where this one failed
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::CatalogExhausted { .. })
    }
}

/// Convenience type alias for map generation results
pub type Result<T> = std::result::Result<T, MapError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Generation attempt (1-based)
    pub attempt: Option<usize>,
}

/// Enriches error messages with generation state information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the attempt number
    ///
    /// # Errors
    ///
    /// Propagates the original error with the attempt applied
    fn with_attempt(self, attempt: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<MapError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only exhaustion is attempt-specific
            if let MapError::CatalogExhausted { attempt, .. } = &mut error {
                if let Some(value) = context.attempt {
                    *attempt = value;
                }
            }
            error
        })
    }

    fn with_attempt(self, attempt: usize) -> Result<T> {
        self.with_context(ErrorContext {
            attempt: Some(attempt),
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MapError {
    MapError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an identity lookup error for an edge between two vertices
pub const fn edge_lookup_error(from: [usize; 2], to: [usize; 2], matches: usize) -> MapError {
    MapError::IdentityLookup {
        kind: "edge",
        from,
        to: Some(to),
        matches,
    }
}

/// Create an identity lookup error for a lattice vertex
pub const fn vertex_lookup_error(at: [usize; 2]) -> MapError {
    MapError::IdentityLookup {
        kind: "vertex",
        from: at,
        to: None,
        matches: 0,
    }
}
