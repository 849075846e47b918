//! Single-pass argv parser.
//!
//! Tokens are classified in priority order:
//!
//! 1. `-` is ignored.
//! 2. `--` ends option processing; every later token is positional.
//! 3. `--name` is a long option. Unknown names abort the parse.
//! 4. `-abc` is a cluster of short options, equivalent to `-a -b -c`.
//!    Unknown characters are skipped.
//! 5. Anything else is a positional parameter.
//!
//! An option that takes an argument consumes the next whole token, so `-n 5`
//! works while `-n5` is read as the cluster `-n -5`.

use tracing::{error, trace, warn};

use crate::error::{ParseError, ParseWarning};
use crate::registry::Registry;
use crate::types::{Entry, Identifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Dash,
    EndOfOptions,
    Long(&'a str),
    ShortCluster(&'a str),
    Positional,
}

fn classify(token: &str, end_of_options: bool) -> Token<'_> {
    if end_of_options {
        return Token::Positional;
    }
    match token {
        "-" => Token::Dash,
        "--" => Token::EndOfOptions,
        _ => {
            if let Some(name) = token.strip_prefix("--") {
                Token::Long(name)
            } else if let Some(cluster) = token.strip_prefix('-') {
                Token::ShortCluster(cluster)
            } else {
                Token::Positional
            }
        }
    }
}

impl Registry {
    /// Parses `args` (program name excluded) against the declared options.
    ///
    /// Provided flags, argument values and positional parameters are written
    /// into the registry as tokens are consumed. On failure the pass stops
    /// at the offending token and whatever was already recorded stays.
    /// Repeating a non-repeatable option is not an error; it is recorded in
    /// [`warnings`](Registry::warnings).
    ///
    /// Calling `parse` again adds to the earlier result: provided flags,
    /// stored arguments and positional parameters are kept. Only the
    /// warnings are reset per call.
    ///
    /// # Errors
    ///
    /// - [`ParseError::UnknownOption`] for a `--name` that is not declared.
    /// - [`ParseError::MissingArgument`] when an option that needs an
    ///   argument is the last token.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdopts_core::{ArgumentValue, Arity, ParseError, Registry};
    ///
    /// let mut registry = Registry::new();
    /// registry.add_option(Some('n'), Some("number"), Arity::MultiArg, "")?;
    ///
    /// registry.parse(["--number", "5", "-n", "7", "file"]).unwrap();
    /// assert_eq!(
    ///     registry.get_argument("number"),
    ///     Some(&ArgumentValue::Multi(vec!["5".into(), "7".into()]))
    /// );
    /// assert_eq!(registry.positional_parameters(), ["file"]);
    ///
    /// let err = registry.parse(["--bogus"]).unwrap_err();
    /// assert_eq!(err, ParseError::UnknownOption("bogus".into()));
    /// # Ok::<(), cmdopts_core::RegistryError>(())
    /// ```
    pub fn parse<I, S>(&mut self, args: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.warnings.clear();
        let mut tokens = args.into_iter();
        let mut end_of_options = false;

        while let Some(arg) = tokens.next() {
            let token = arg.as_ref();
            match classify(token, end_of_options) {
                Token::Dash => {}
                Token::EndOfOptions => end_of_options = true,
                Token::Long(name) => {
                    let Some(index) = self.find_index(Identifier::Long(name)) else {
                        let err = ParseError::UnknownOption(name.to_string());
                        error!(%err, "aborting parse");
                        return Err(err);
                    };
                    self.apply(index, name, &mut tokens)?;
                }
                Token::ShortCluster(cluster) => {
                    for short in cluster.chars() {
                        match self.find_index(Identifier::Short(short)) {
                            Some(index) => {
                                let mut buf = [0; 4];
                                self.apply(index, short.encode_utf8(&mut buf), &mut tokens)?;
                            }
                            None => trace!(option = %short, "skipping unknown short option"),
                        }
                    }
                }
                Token::Positional => self.positional.push(token.to_string()),
            }
        }

        Ok(())
    }

    /// Marks the option at `index` as provided and stores its argument.
    /// `given` is the identifier as it appeared on the command line.
    fn apply<I, S>(&mut self, index: usize, given: &str, tokens: &mut I) -> Result<(), ParseError>
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
    {
        let Some(option) = self.entries.get_mut(index).and_then(Entry::as_option_mut) else {
            return Ok(());
        };
        if option.provided && !option.arity.is_repeatable() {
            let warning = ParseWarning::RepeatedOption(given.to_string());
            warn!(%warning);
            self.warnings.push(warning);
        }
        option.provided = true;

        if option.arity.takes_argument() {
            let Some(value) = tokens.next() else {
                let err = ParseError::MissingArgument(option.display_name());
                error!(%err, "aborting parse");
                return Err(err);
            };
            option.store(value.as_ref().to_string());
        }
        Ok(())
    }
}
