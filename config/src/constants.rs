//! # Configuration Constants
//!
//! Centralized constants for the relief pipeline. All mesh defaults,
//! grayscale mapping values, and safety limits are defined here.
//!
//! ## Categories
//!
//! - **Defaults**: Caller-overridable mesh generation parameters
//! - **Grayscale**: Intensity range of the input grid
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// DEFAULT MESH PARAMETERS
// =============================================================================

/// Default extrusion height (Z axis) in output units.
///
/// In binary mode this is the height of every solid cell; in continuous
/// mode it is the height a fully white (255) pixel maps to.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_EXTRUDE_HEIGHT;
///
/// let user_height: Option<f64> = None;
/// let height = user_height.unwrap_or(DEFAULT_EXTRUDE_HEIGHT);
/// assert_eq!(height, 15.0);
/// ```
pub const DEFAULT_EXTRUDE_HEIGHT: f64 = 15.0;

/// Default output width (X dimension) in output units.
pub const DEFAULT_X_SIZE: f64 = 120.0;

/// Default output depth (Y dimension) in output units.
pub const DEFAULT_Y_SIZE: f64 = 120.0;

/// Default solidity threshold for binary mode.
///
/// Pixels with intensity strictly below the threshold are solid; a pixel
/// exactly equal to the threshold is background.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_THRESHOLD;
///
/// let pixel = 128u32;
/// assert!(!(pixel < DEFAULT_THRESHOLD)); // boundary pixel is background
/// ```
pub const DEFAULT_THRESHOLD: u32 = 128;

// =============================================================================
// GRAYSCALE CONSTANTS
// =============================================================================

/// Maximum grayscale intensity of the input grid.
///
/// Continuous mode maps intensities linearly onto `[0, extrude_height]`
/// by dividing by this value.
///
/// # Example
///
/// ```rust
/// use config::constants::GRAYSCALE_MAX;
///
/// let z_fraction = 255.0 / GRAYSCALE_MAX;
/// assert_eq!(z_fraction, 1.0);
/// ```
pub const GRAYSCALE_MAX: f64 = 255.0;

/// Highest valid threshold value for binary mode.
///
/// Thresholds above this are rejected as invalid configuration.
pub const MAX_THRESHOLD: u32 = 255;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of facets in a single generated mesh.
///
/// Safety limit to prevent memory exhaustion from extremely large input
/// grids. Builders pre-check their worst-case facet count against this
/// bound and fail with an explicit capacity error instead of truncating.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_FACETS;
///
/// let cells = 1_000_000usize;
/// assert!(cells * 12 < MAX_FACETS);
/// ```
pub const MAX_FACETS: usize = 100_000_000;
