//! Help layout configuration.
//!
//! Controls the spacing of the interactive help output. Every field has a
//! default, so a partial document is enough when the layout is embedded in a
//! program's own configuration.
//!
//! # Example YAML
//!
//! ```yaml
//! start_skip: 2
//! help_sep: 3
//! right_margin: 1
//! narrow_threshold: 100
//! default_width: 80
//! force_narrow: false
//! ```

use serde::{Deserialize, Serialize};

use crate::terminal::DEFAULT_DISPLAY_WIDTH;

/// Display width below which the formatter switches to narrow mode.
pub const DEFAULT_NARROW_THRESHOLD: usize = 100;

/// Spacing parameters for [`HelpFormatter`](crate::HelpFormatter).
///
/// # Examples
///
/// ```
/// use cmdopts_render::HelpLayout;
///
/// let layout = HelpLayout::default();
/// assert_eq!(layout.start_skip, 4);
/// assert_eq!(layout.help_sep, 4);
/// assert_eq!(layout.narrow_threshold, 100);
/// assert!(!layout.force_narrow);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpLayout {
    /// Spaces before each option label.
    pub start_skip: usize,
    /// Minimum spaces between the label column and the help text in wide
    /// mode.
    pub help_sep: usize,
    /// Columns left free at the right edge of the display.
    pub right_margin: usize,
    /// Display widths below this use narrow mode.
    pub narrow_threshold: usize,
    /// Width used when the terminal cannot be queried.
    pub default_width: usize,
    /// Always use narrow mode.
    pub force_narrow: bool,
}

impl Default for HelpLayout {
    fn default() -> Self {
        Self {
            start_skip: 4,
            help_sep: 4,
            right_margin: 1,
            narrow_threshold: DEFAULT_NARROW_THRESHOLD,
            default_width: DEFAULT_DISPLAY_WIDTH,
            force_narrow: false,
        }
    }
}
