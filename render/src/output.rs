//! Registry descriptions for tooling and documentation.

use cmdopts_core::{Alias, ArgumentValue, Arity, Entry, OptionSpec, Registry};

use crate::error::Result;

/// Supported description formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Json,
    Yaml,
    Markdown,
}

/// Describes the declared entries of a registry in the requested format.
///
/// # Errors
///
/// Returns [`RenderError::Json`](crate::RenderError::Json) or
/// [`RenderError::Yaml`](crate::RenderError::Yaml) if serialization fails.
///
/// # Examples
///
/// ```
/// use cmdopts_core::{Arity, Registry};
/// use cmdopts_render::{OutputFormat, describe};
///
/// let mut registry = Registry::new();
/// registry.add_option(Some('v'), Some("verbose"), Arity::NoArg, "be chatty")?;
///
/// let md = describe(&registry, OutputFormat::Markdown).unwrap();
/// assert!(md.contains("| `-v, --verbose` | none |  | be chatty |"));
///
/// let json = describe(&registry, OutputFormat::Json).unwrap();
/// assert!(json.contains("\"verbose\""));
/// # Ok::<(), cmdopts_core::RegistryError>(())
/// ```
pub fn describe(registry: &Registry, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(registry.entries())?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(registry.entries())?),
        OutputFormat::Markdown => Ok(registry_to_markdown(registry)),
    }
}

fn registry_to_markdown(registry: &Registry) -> String {
    let mut out = String::new();
    let mut table_open = false;

    for entry in registry.entries() {
        match entry {
            Entry::Section(section) => {
                if table_open {
                    out.push('\n');
                    table_open = false;
                }
                out.push_str(&format!("## {}\n\n", section.name));
            }
            Entry::Option(option) => {
                if !table_open {
                    out.push_str("| Option | Argument | Default | Description |\n");
                    out.push_str("|--------|----------|---------|-------------|\n");
                    table_open = true;
                }
                out.push_str(&format!(
                    "| `{}` | {} | {} | {} |\n",
                    option.label(),
                    arity_label(option.arity),
                    default_label(option),
                    description(registry, option)
                ));
            }
        }
    }

    out
}

fn arity_label(arity: Arity) -> &'static str {
    match arity {
        Arity::NoArg => "none",
        Arity::SingleArg => "single",
        Arity::MultiArg => "multiple",
    }
}

fn default_label(option: &OptionSpec) -> String {
    match option.argument() {
        Some(ArgumentValue::Single(value)) => format!("`{value}`"),
        Some(ArgumentValue::Multi(values)) => values
            .iter()
            .map(|value| format!("`{value}`"))
            .collect::<Vec<_>>()
            .join(", "),
        None => String::new(),
    }
}

fn description(registry: &Registry, option: &OptionSpec) -> String {
    let help = option.help.replace('|', "\\|");
    let target = match option.alias() {
        Some(Alias::Resolved(index)) => registry
            .entries()
            .get(*index)
            .and_then(Entry::as_option)
            .map(OptionSpec::label),
        Some(Alias::Unresolved(name)) => Some(format!("--{name} (undeclared)")),
        None => None,
    };
    match target {
        Some(target) if help.is_empty() => format!("alias of `{target}`"),
        Some(target) => format!("{help} (alias of `{target}`)"),
        None => help,
    }
}
