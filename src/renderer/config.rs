//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Board width in pixels
    pub width: f64,

    /// Board height in pixels
    pub height: f64,

    /// Distance between grid lines; 0 disables the grid
    pub grid_spacing: f64,

    /// Radius of the corner markers
    pub corner_radius: f64,

    /// Opacity of past poses
    pub history_opacity: f64,

    /// Opacity of the target outline and the ghost preview
    pub overlay_opacity: f64,

    /// Whether to include XML declaration and standalone attributes
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "ps-" for "ps-square")
    pub class_prefix: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            grid_spacing: 20.0,
            corner_radius: 6.0,
            history_opacity: 0.3,
            overlay_opacity: 0.5,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("ps-".to_string()),
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size
    pub fn with_board_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the grid spacing (0 disables the grid)
    pub fn with_grid_spacing(mut self, spacing: f64) -> Self {
        self.grid_spacing = spacing;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}
