//! Option set used by the `demo`, `help`, `manpage` and `describe`
//! subcommands.

use cmdopts_core::{Arity, Registry, RegistryError};

pub const PROGRAM: &str = "cmdopts";

pub const SUMMARY: &str = "command-line option parsing demo";

pub const SYNOPSIS: &str = "cmdopts demo [options] [--] [ARGS]...";

pub const DESCRIPTION: &str =
    "parses its arguments with a small declared option set and reports what it found";

pub fn registry() -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();
    registry.prepend_help_message(&format!("usage: {SYNOPSIS}"));

    registry.add_section("General options:")?;
    registry.add_option(Some('h'), Some("help"), Arity::NoArg, "display this help and exit")?;
    registry.add_option(Some('V'), Some("version"), Arity::NoArg, "print the version and exit")?;
    registry.add_option(
        Some('v'),
        Some("verbose"),
        Arity::NoArg,
        "report every processed option, including the include paths and the output file",
    )?;

    registry.add_section("Processing options:")?;
    registry.add_option(
        Some('n'),
        Some("number"),
        Arity::SingleArg,
        "set the number the demo prints back; the argument must be an integer",
    )?;
    registry.add_option(
        Some('I'),
        Some("include"),
        Arity::MultiArg,
        "add a directory to the include path, can be given several times",
    )?;
    registry.add_option_with_default(
        Some('o'),
        Some("output"),
        Arity::SingleArg,
        "a.out",
        "write the result to FILE instead of a.out",
    )?;
    registry.add_alias("number", None, Some("count"), "same as --number")?;

    registry.append_help_message("arguments after '--' are always treated as positional");
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use cmdopts_core::validate_registry;

    use super::*;

    #[test]
    fn test_demo_registry_is_valid() {
        let registry = registry().unwrap();
        assert!(validate_registry(&registry).is_empty());
        assert_eq!(registry.options().count(), 7);
    }

    #[test]
    fn test_count_forwards_to_number() {
        let mut registry = registry().unwrap();
        registry.parse(["--count", "3"]).unwrap();
        assert_eq!(
            registry.get_argument("number").and_then(|value| value.as_single()),
            Some("3")
        );
    }

    #[test]
    fn test_output_defaults_to_a_out() {
        let mut registry = registry().unwrap();
        registry.parse(["-v"]).unwrap();
        assert!(!registry.was_provided("output"));
        assert_eq!(
            registry.get_argument('o').and_then(|value| value.as_single()),
            Some("a.out")
        );
    }
}
