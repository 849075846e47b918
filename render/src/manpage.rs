//! Man page (roff) export.
//!
//! Options become `.IP` paragraphs and sections become `.SS` subsection
//! headings. Text is not wrapped; the man renderer does that.

use std::io::{self, Write};

use cmdopts_core::{Entry, Registry};

/// Doubles every backslash so roff prints it literally. Lines starting with
/// a control character (`.` or `'`) are prefixed with `\&`.
///
/// # Examples
///
/// ```
/// use cmdopts_render::escape_text;
///
/// assert_eq!(escape_text(r"match \d+"), r"match \\d+");
/// assert_eq!(escape_text(".hidden files"), r"\&.hidden files");
/// ```
pub fn escape_text(text: &str) -> String {
    text.lines()
        .map(|line| {
            let escaped = line.replace('\\', "\\\\");
            if escaped.starts_with('.') || escaped.starts_with('\'') {
                format!("\\&{escaped}")
            } else {
                escaped
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len() * 2);
    for ch in label.chars() {
        match ch {
            '-' => out.push_str("\\-"),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out
}

/// Renders the option list as roff markup.
///
/// # Examples
///
/// ```
/// use cmdopts_core::{Arity, Registry};
/// use cmdopts_render::export_options;
///
/// let mut registry = Registry::new();
/// registry.add_section("General")?;
/// registry.add_option(Some('h'), Some("help"), Arity::NoArg, r"print \ help")?;
///
/// assert_eq!(
///     export_options(&registry),
///     ".SS General\n.IP \"\\fB\\-h, \\-\\-help\\fR\" 4\nprint \\\\ help\n"
/// );
/// # Ok::<(), cmdopts_core::RegistryError>(())
/// ```
pub fn export_options(registry: &Registry) -> String {
    let mut out = String::new();
    for entry in registry.entries() {
        match entry {
            Entry::Option(option) => {
                out.push_str(&format!(
                    ".IP \"\\fB{}\\fR\" 4\n",
                    escape_label(&option.label())
                ));
                if !option.help.is_empty() {
                    out.push_str(&escape_text(&option.help));
                    out.push('\n');
                }
            }
            Entry::Section(section) => {
                out.push_str(&format!(".SS {}\n", section.name));
            }
        }
    }
    out
}

/// Writes the option list markup to `out`.
pub fn write_options<W: Write>(registry: &Registry, out: &mut W) -> io::Result<()> {
    out.write_all(export_options(registry).as_bytes())
}

/// A complete man page around a registry's option list.
///
/// # Examples
///
/// ```
/// use cmdopts_core::Registry;
/// use cmdopts_render::ManPage;
///
/// let page = ManPage::new("example", "1.0")
///     .with_summary("manpage example")
///     .with_author("Jane Doe");
/// let text = page.render(&Registry::new());
///
/// assert!(text.starts_with(".TH example 1 "));
/// assert!(text.contains(".SH NAME\nexample \\- manpage example\n"));
/// assert!(text.ends_with(".SH AUTHOR\nJane Doe\n"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManPage {
    pub name: String,
    pub section: u8,
    pub date: String,
    pub version: String,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub synopsis: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
}

impl ManPage {
    /// Creates a section 1 page dated `01 Jan 1970`.
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            section: 1,
            date: "01 Jan 1970".to_string(),
            version: version.to_string(),
            title: None,
            summary: None,
            synopsis: None,
            description: None,
            author: None,
        }
    }

    /// Sets the date shown in the `.TH` header.
    pub fn with_date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    /// Sets the centre header; defaults to `<name> man page`.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Sets the one-line summary after the name in `NAME`.
    pub fn with_summary(mut self, summary: &str) -> Self {
        self.summary = Some(summary.to_string());
        self
    }

    /// Sets the `SYNOPSIS` text; defaults to the program name.
    pub fn with_synopsis(mut self, synopsis: &str) -> Self {
        self.synopsis = Some(synopsis.to_string());
        self
    }

    /// Sets the paragraph that opens `DESCRIPTION`.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Adds an `AUTHOR` section.
    pub fn with_author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }

    /// Renders the page with the registry's options under `DESCRIPTION`.
    pub fn render(&self, registry: &Registry) -> String {
        let mut out = String::new();
        self.append_header(&mut out);
        self.append_name_section(&mut out);
        self.append_synopsis_section(&mut out);
        self.append_description_section(&mut out);
        out.push_str(&export_options(registry));
        if let Some(author) = &self.author {
            out.push_str(".SH AUTHOR\n");
            out.push_str(&escape_text(author));
            out.push('\n');
        }
        out
    }

    fn append_header(&self, out: &mut String) {
        let title = self
            .title
            .clone()
            .unwrap_or_else(|| format!("{} man page", self.name));
        out.push_str(&format!(
            ".TH {} {} \"{}\" \"{}\" \"{}\"\n",
            self.name, self.section, self.date, self.version, title
        ));
    }

    fn append_name_section(&self, out: &mut String) {
        out.push_str(".SH NAME\n");
        match &self.summary {
            Some(summary) => {
                out.push_str(&format!("{} \\- {}\n", self.name, escape_text(summary)));
            }
            None => {
                out.push_str(&self.name);
                out.push('\n');
            }
        }
    }

    fn append_synopsis_section(&self, out: &mut String) {
        out.push_str(".SH SYNOPSIS\n");
        out.push_str(&escape_text(self.synopsis.as_deref().unwrap_or(self.name.as_str())));
        out.push('\n');
    }

    fn append_description_section(&self, out: &mut String) {
        out.push_str(".SH DESCRIPTION\n");
        out.push_str(&format!(".B {}\n", self.name));
        if let Some(description) = &self.description {
            out.push_str(&escape_text(description));
            out.push('\n');
        }
    }
}
