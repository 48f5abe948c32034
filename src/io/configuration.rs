//! Analysis constants and runtime configuration defaults

// Histogram settings
/// Default side length of the square patterns counted in a multipoint histogram
pub const DEFAULT_PATCH_SIZE: usize = 4;

// 2^25 bins is already 256 MiB of counts; a 6x6 patch would need 2^36
/// Largest number of pattern bits (patch side squared) a histogram may index
pub const MAX_HISTOGRAM_BITS: usize = 25;

// Otsu thresholding
/// Number of bins used when thresholding non-integer intensities
pub const OTSU_BIN_COUNT: usize = 256;
/// Widest value range thresholded with one bin per integer
pub const OTSU_MAX_INTEGER_BINS: usize = 65_536;

// Multidimensional scaling
/// Dimension of the embedding space
pub const MDS_COMPONENTS: usize = 2;
/// Number of random restarts; the lowest-stress run is kept
pub const MDS_INITIALIZATIONS: usize = 4;
/// Iteration cap for a single stress-minimization run
pub const MDS_MAX_ITERATIONS: usize = 300;
/// Relative stress improvement below which a run is considered converged
pub const MDS_TOLERANCE: f64 = 1e-3;
/// Substitute for zero embedding distances in the Guttman transform
pub const MDS_MIN_DISTANCE: f64 = 1e-5;

// Default values for driver parameters
/// Fixed seed for reproducible sampling and embedding
pub const DEFAULT_SEED: u64 = 42;
/// Number of windows sampled per rotation
pub const DEFAULT_SAMPLE_COUNT: usize = 10;
/// Side length of sampled windows in pixels
pub const DEFAULT_WINDOW_SIZE: usize = 64;

/// Counter-clockwise quarter turns applied to the reference before sampling
pub const ROTATIONS: [usize; 3] = [0, 1, 2];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix for the embedding coordinates file
pub const EMBEDDING_CSV_SUFFIX: &str = "_mds.csv";
/// Suffix for the embedding scatter plot
pub const EMBEDDING_PLOT_SUFFIX: &str = "_mds.png";
/// Side length of the square scatter plot in pixels
pub const PLOT_SIZE: u32 = 480;
/// Blank border around plotted points in pixels
pub const PLOT_MARGIN: u32 = 24;
/// Half-width of a plotted marker in pixels
pub const PLOT_MARKER_RADIUS: u32 = 4;
/// Marker colors for each rotation group, reference last
pub const PLOT_GROUP_COLORS: [[u8; 4]; 4] = [
    [31, 119, 180, 255],
    [255, 127, 14, 255],
    [44, 160, 44, 255],
    [0, 0, 0, 255],
];
