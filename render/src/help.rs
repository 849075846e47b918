//! Interactive help rendering.
//!
//! Two layouts are supported. Wide mode puts labels and help text side by
//! side:
//!
//! ```text
//!     -h, --help    print this help
//!     --number      set the number, continuation lines
//!                   line up with the help column
//! ```
//!
//! Narrow mode, used when forced or when the display is narrower than
//! [`HelpLayout::narrow_threshold`], puts the help text under its label:
//!
//! ```text
//!     -h, --help
//!         print this help
//! ```

use std::io::{self, Write};

use cmdopts_core::{Entry, Registry};

use crate::layout::HelpLayout;
use crate::terminal::{TerminalWidth, display_width};

/// Heading printed between the pre-help block and the option list.
pub const OPTIONS_HEADING: &str = "list of command line options:";

/// Renders a [`Registry`] as word-wrapped help text.
///
/// # Examples
///
/// ```
/// use cmdopts_core::{Arity, Registry};
/// use cmdopts_render::{FixedWidth, HelpFormatter};
///
/// let mut registry = Registry::new();
/// registry.add_option(Some('h'), Some("help"), Arity::NoArg, "print this help")?;
/// registry.add_option(None, Some("number"), Arity::SingleArg, "set a number")?;
///
/// let text = HelpFormatter::new(&registry).render(&FixedWidth(100));
/// assert!(text.contains("    -h, --help    print this help\n"));
/// assert!(text.contains("    --number      set a number\n"));
/// # Ok::<(), cmdopts_core::RegistryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HelpFormatter<'a> {
    registry: &'a Registry,
    layout: HelpLayout,
}

impl<'a> HelpFormatter<'a> {
    /// Creates a formatter with the default layout.
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            layout: HelpLayout::default(),
        }
    }

    /// Replaces the layout.
    pub fn with_layout(mut self, layout: HelpLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Returns `true` if the given display width produces narrow output.
    pub fn is_narrow(&self, display_width: usize) -> bool {
        self.layout.force_narrow
            || self.registry.narrow_mode_forced()
            || display_width < self.layout.narrow_threshold
    }

    /// Renders help using the width reported by `terminal`, or the layout's
    /// default width when the query fails.
    pub fn render(&self, terminal: &dyn TerminalWidth) -> String {
        self.render_with_width(display_width(terminal, self.layout.default_width))
    }

    /// Renders help for an explicit display width.
    pub fn render_with_width(&self, display_width: usize) -> String {
        let layout = &self.layout;
        let column = option_column_width(self.registry);
        let narrow = self.is_narrow(display_width);

        let offset = if narrow {
            2 * layout.start_skip
        } else {
            layout.start_skip + column + layout.help_sep
        };
        let text_width = display_width.saturating_sub(offset + layout.right_margin);

        let mut out = String::new();
        out.push_str(self.registry.pre_help());
        out.push('\n');
        out.push_str(OPTIONS_HEADING);
        out.push_str("\n\n");

        for entry in self.registry.entries() {
            match entry {
                Entry::Section(section) => {
                    out.push_str(&section.name);
                    out.push('\n');
                }
                Entry::Option(option) => {
                    let label = option.label();
                    push_spaces(&mut out, layout.start_skip);
                    out.push_str(&label);
                    if narrow {
                        out.push('\n');
                        push_spaces(&mut out, 2 * layout.start_skip);
                    } else {
                        let pad = column.saturating_sub(label.chars().count());
                        push_spaces(&mut out, layout.help_sep + pad);
                    }
                    out.push_str(&wrap_paragraph(&option.help, text_width, offset));
                    out.push('\n');
                }
            }
        }

        out.push_str(self.registry.post_help());
        out.push('\n');
        out
    }

    /// Writes the rendered help to `out`.
    pub fn write_to<W: Write>(&self, terminal: &dyn TerminalWidth, out: &mut W) -> io::Result<()> {
        out.write_all(self.render(terminal).as_bytes())
    }
}

/// Width of the widest option label (`-x`, `--long` or `-x, --long`).
pub fn option_column_width(registry: &Registry) -> usize {
    registry
        .options()
        .map(|option| option.label().chars().count())
        .max()
        .unwrap_or(0)
}

/// Wraps `text` on single spaces to at most `text_width` columns per line.
///
/// A word is appended to the current line while the line length plus the
/// word (with its separating space) fits; otherwise a new line starts,
/// indented by `indent` spaces. The first word always stays on the first
/// line, and a single word longer than `text_width` is never split.
///
/// # Examples
///
/// ```
/// use cmdopts_render::wrap_paragraph;
///
/// assert_eq!(wrap_paragraph("aaa bbb ccc", 7, 2), "aaa bbb\n  ccc");
/// assert_eq!(wrap_paragraph("short", 40, 4), "short");
/// ```
pub fn wrap_paragraph(text: &str, text_width: usize, indent: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut words = text.split(' ');

    let Some(first) = words.next() else {
        return out;
    };
    out.push_str(first);
    let mut line_len = first.chars().count();

    for word in words {
        let chunk = 1 + word.chars().count();
        if line_len + chunk > text_width {
            out.push('\n');
            push_spaces(&mut out, indent);
            out.push_str(word);
            line_len = chunk;
        } else {
            out.push(' ');
            out.push_str(word);
            line_len += chunk;
        }
    }

    out
}

fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n(' ', count));
}

#[cfg(test)]
mod tests {
    use cmdopts_core::Arity;

    use super::*;
    use crate::terminal::FixedWidth;

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.prepend_help_message("usage: demo [options]");
        registry.append_help_message("report bugs upstream");
        registry.add_section("General options:").unwrap();
        registry
            .add_option(Some('h'), None, Arity::NoArg, "print this help")
            .unwrap();
        registry
            .add_option(None, Some("number"), Arity::SingleArg, "set the number used by the demo")
            .unwrap();
        registry
    }

    #[test]
    fn test_column_width_uses_widest_label() {
        let mut registry = registry();
        assert_eq!(option_column_width(&registry), "--number".len());

        registry
            .add_option(Some('v'), Some("verbose"), Arity::NoArg, "")
            .unwrap();
        assert_eq!(option_column_width(&registry), "-v, --verbose".len());
    }

    #[test]
    fn test_wide_mode_aligns_help_column() {
        let registry = registry();
        let text = HelpFormatter::new(&registry).render_with_width(100);

        let column = 4 + "--number".len() + 4;
        let help_lines: Vec<&str> = text
            .lines()
            .filter(|line| line.starts_with("    -"))
            .collect();
        assert_eq!(help_lines.len(), 2);
        assert_eq!(help_lines[0].find("print"), Some(column));
        assert_eq!(help_lines[1].find("set"), Some(column));
    }

    #[test]
    fn test_full_wide_output() {
        let registry = registry();
        let text = HelpFormatter::new(&registry).render_with_width(120);

        let expected = "usage: demo [options]\n\
                        list of command line options:\n\
                        \n\
                        General options:\n    \
                        -h          print this help\n    \
                        --number    set the number used by the demo\n\
                        report bugs upstream\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_narrow_mode_below_threshold() {
        let registry = registry();
        let formatter = HelpFormatter::new(&registry);
        assert!(formatter.is_narrow(99));
        assert!(!formatter.is_narrow(100));

        let text = formatter.render_with_width(80);
        assert!(text.contains("    -h\n        print this help\n"));
        assert!(text.contains("    --number\n        set the number used by the demo\n"));
    }

    #[test]
    fn test_forced_narrow_mode() {
        let mut registry = registry();
        registry.enable_narrow_mode();
        let text = HelpFormatter::new(&registry).render_with_width(200);
        assert!(text.contains("    -h\n        print this help\n"));

        let layout = HelpLayout {
            force_narrow: true,
            ..HelpLayout::default()
        };
        registry.disable_narrow_mode();
        let text = HelpFormatter::new(&registry)
            .with_layout(layout)
            .render_with_width(200);
        assert!(text.contains("    -h\n        print this help\n"));
    }

    #[test]
    fn test_render_falls_back_to_default_width() {
        struct NoTerminal;
        impl TerminalWidth for NoTerminal {
            fn columns(&self) -> io::Result<usize> {
                Err(io::Error::other("not a tty"))
            }
        }

        let registry = registry();
        let formatter = HelpFormatter::new(&registry);
        assert_eq!(formatter.render(&NoTerminal), formatter.render_with_width(80));
        assert_eq!(formatter.render(&FixedWidth(150)), formatter.render_with_width(150));
    }

    #[test]
    fn test_wrap_continuation_uses_indent() {
        let wrapped = wrap_paragraph("one two three four five", 10, 6);
        assert_eq!(wrapped, "one two\n      three\n      four five");
    }

    #[test]
    fn test_wrap_lines_fit_text_width() {
        let text = "the quick brown fox jumps over the lazy dog and keeps running far away";
        let width = 20;
        let wrapped = wrap_paragraph(text, width, 3);

        for (idx, line) in wrapped.lines().enumerate() {
            let content = if idx == 0 { line } else { &line[3..] };
            assert!(content.len() <= width, "line {idx} too long: {content:?}");
        }
        assert_eq!(wrapped.replace("\n   ", " "), text);
    }

    #[test]
    fn test_wrap_keeps_overlong_word_whole() {
        let wrapped = wrap_paragraph("tiny supercalifragilistic end", 6, 1);
        assert_eq!(wrapped, "tiny\n supercalifragilistic\n end");
    }

    #[test]
    fn test_wrap_keeps_overlong_first_word_on_first_line() {
        let wrapped = wrap_paragraph("supercalifragilistic tiny", 5, 3);
        assert_eq!(wrapped, "supercalifragilistic\n   tiny");
    }

    #[test]
    fn test_wrap_empty_text() {
        assert_eq!(wrap_paragraph("", 10, 2), "");
    }

    #[test]
    fn test_write_to_matches_render() {
        let registry = registry();
        let formatter = HelpFormatter::new(&registry);
        let mut buf = Vec::new();
        formatter.write_to(&FixedWidth(100), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), formatter.render_with_width(100));
    }
}
