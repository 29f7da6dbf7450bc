//! Plot configuration shared across output modules
//!
//! This module defines the common configuration structure used by both
//! the plan-view plume map and the centerline profile plots.

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// Used by both plan-view (spatial) and centerline (profile) plots.
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `line_color`: Line color for single-profile plots
/// - `series_colors`: Optional colors, one per band or per compared profile
/// - `background`: Background color
/// - `marker_size`: Scatter marker radius in pixels
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example: Centerline Profile
///
/// ```rust,ignore
/// use plume_rs::output::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::centerline("Benzene Centerline");
/// config.line_color = BLUE;
/// config.width = 1920;  // Full HD
/// config.height = 1080;
/// ```
///
/// # Example: Plume Map with Custom Band Colors
///
/// ```rust,ignore
/// let mut config = PlotConfig::plume_map("Site 12 Survey");
/// config.series_colors = Some(vec![
///     CYAN,
///     BLUE,
///     MAGENTA,
///     RED,
/// ]);
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: auto-set by plot type)
    pub xlabel: String,

    /// Y-axis label (default: "Concentration (µg/L)")
    pub ylabel: String,

    /// Line color for single-profile plots (default: RED)
    pub line_color: RGBColor,

    /// Optional colors, one per concentration band or compared profile
    ///
    /// If None, uses default palette: [RED, BLUE, GREEN, MAGENTA, CYAN, ...].
    /// The plume map factory installs the survey palette
    /// [GREEN, YELLOW, ORANGE, RED] instead, coldest band first.
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Scatter marker radius in pixels (default: 3)
    pub marker_size: u32,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: String::new(), // Set by specific plot type
            ylabel: "Concentration (µg/L)".to_string(),
            line_color: RED,
            series_colors: None,
            background: WHITE,
            marker_size: 3,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
///
/// # Example
///
/// ```rust,ignore
/// let config = PlotConfig::plume_map(NO_TITLE);
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for plan-view plume maps with optional custom title
    ///
    /// Sets the axis labels to downgradient / transverse distance, installs
    /// the survey band palette (green, yellow, orange, red from the coldest
    /// band up) and titles the plot "Contaminant Plume" unless told otherwise.
    ///
    /// # Arguments
    ///
    /// * `title` - Custom title (String, &str) or None for default
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// // With custom title (no Some() needed!)
    /// let config = PlotConfig::plume_map("Site 12 Survey");
    /// let config = PlotConfig::plume_map(format!("Plume after {} d", time));
    ///
    /// // With default title
    /// let config = PlotConfig::plume_map(None::<&str>);
    /// ```
    pub fn plume_map(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "Distance downgradient (m)".to_string();
        config.ylabel = "Transverse distance (m)".to_string();
        config.series_colors = Some(vec![
            GREEN,
            YELLOW,
            RGBColor(255, 165, 0), // Orange
            RED,
        ]);
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Contaminant Plume".to_string());
        config
    }

    /// Create config for centerline profiles with optional custom title
    ///
    /// Sets xlabel to "Distance downgradient (m)" and title to custom value
    /// or "Centerline Profile"
    ///
    /// # Arguments
    ///
    /// * `title` - Custom title (String, &str) or None for default
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// // With custom title (no Some() needed!)
    /// let config = PlotConfig::centerline("Benzene Centerline");
    /// let config = PlotConfig::centerline(format!("Profile at t={}", time));
    ///
    /// // With default title
    /// let config = PlotConfig::centerline(None::<&str>);
    /// ```
    pub fn centerline(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "Distance downgradient (m)".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Centerline Profile".to_string());
        config
    }

    /// Create config with custom series colors
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use plotters::prelude::*;
    ///
    /// let config = PlotConfig::with_series_colors(vec![RED, BLUE, GREEN]);
    /// ```
    pub fn with_series_colors(colors: Vec<RGBColor>) -> Self {
        let mut config = Self::default();
        config.series_colors = Some(colors);
        config
    }

    /// Get color for the series at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to default palette
    pub(crate) fn get_series_color(&self, series_index: usize) -> RGBColor {
        if let Some(ref colors) = self.series_colors {
            if series_index < colors.len() {
                return colors[series_index];
            }
        }

        // Default palette
        let default_colors = vec![
            RED,
            BLUE,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0),   // Orange
            RGBColor(128, 0, 128),   // Purple
            RGBColor(255, 192, 203), // Pink
            RGBColor(165, 42, 42),   // Brown
        ];

        default_colors[series_index % default_colors.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================
