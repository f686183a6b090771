//! The token scan that applies a schema to an argument sequence.

use strsim::levenshtein;

use crate::error::{ParseError, ParseResult};
use crate::schema::{Binding, OptionDescriptor, OptionSchema};

/// Maximum Levenshtein distance to consider a long name as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Parser for argv-style token sequences.
///
/// One instance wraps one immutable [`OptionSchema`]; `parse` can then be
/// called any number of times, each call scanning its own token sequence
/// into its own target record. The scan is a single left-to-right pass with
/// one token of lookahead for value options and no backtracking; it halts
/// at the first error, leaving options applied before it in place.
pub struct OptionParser<'s, C> {
    schema: &'s OptionSchema<C>,
}

impl<'s, C> OptionParser<'s, C> {
    /// Creates a parser over a schema.
    pub fn new(schema: &'s OptionSchema<C>) -> Self {
        Self { schema }
    }

    /// Scans a token sequence into `config`.
    ///
    /// The first token is the invoking process's identifier and is bound
    /// verbatim (the empty string included); an empty sequence is a
    /// successful no-op. Every later token is either an option (with its
    /// value, for arity-1 options) or a positional argument.
    pub fn parse<I, S>(&self, config: &mut C, tokens: I) -> ParseResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<String> = tokens
            .into_iter()
            .map(|t| t.as_ref().to_string())
            .collect();

        let mut rest = tokens.iter();
        if let Some(first) = rest.next() {
            if let Some(bind) = &self.schema.exe_name {
                bind(config, first.as_str());
            }
        }

        let args: Vec<&String> = rest.collect();
        let mut i = 0;
        while i < args.len() {
            let token = args[i].as_str();
            let next = args.get(i + 1).map(|t| t.as_str());

            if let Some(name) = token.strip_prefix("--") {
                i += self.apply_long(config, token, name, next)?;
            } else if token.len() > 1 && token.starts_with('-') {
                i += self.apply_short(config, token, next)?;
            } else {
                self.apply_positional(config, token)?;
                i += 1;
            }
        }
        Ok(())
    }

    /// Applies a `--name` token. Returns how many tokens were consumed.
    fn apply_long(
        &self,
        config: &mut C,
        token: &str,
        name: &str,
        next: Option<&str>,
    ) -> ParseResult<usize> {
        match self.schema.find_long(name) {
            Some(option) => self.apply_option(config, option, token, next),
            None => Err(ParseError::unrecognized(token, self.suggest(name))),
        }
    }

    /// Applies a `-x` or `-abc` token. Returns how many tokens were
    /// consumed.
    ///
    /// A multi-character body is first tried as a whole spelling, then
    /// expanded as a group of single-character flags, each of which must be
    /// a zero-arity option.
    fn apply_short(&self, config: &mut C, token: &str, next: Option<&str>) -> ParseResult<usize> {
        let body = &token[1..];

        let mut chars = body.chars();
        let (first, rest) = (chars.next(), chars.as_str());
        if let (Some(c), "") = (first, rest) {
            return match self.schema.find_short(c) {
                Some(option) => self.apply_option(config, option, token, next),
                None => Err(ParseError::unrecognized(token, None)),
            };
        }

        if let Some(option) = self.schema.find_long(body) {
            return self.apply_option(config, option, token, next);
        }

        for c in body.chars() {
            match self.schema.find_short(c) {
                Some(option) => match &option.binding {
                    Binding::Flag(set) => set(config),
                    Binding::Value { .. } => {
                        return Err(ParseError::GroupedValueOption {
                            group: token.to_string(),
                            flag: c,
                        })
                    }
                },
                None => {
                    return Err(ParseError::GroupedUnknownFlag {
                        group: token.to_string(),
                        flag: c,
                    })
                }
            }
        }
        Ok(1)
    }

    /// Applies one matched descriptor, consuming its value token if it has
    /// an arity of 1.
    fn apply_option(
        &self,
        config: &mut C,
        option: &OptionDescriptor<C>,
        spelling: &str,
        next: Option<&str>,
    ) -> ParseResult<usize> {
        match &option.binding {
            Binding::Flag(set) => {
                set(config);
                Ok(1)
            }
            Binding::Value { apply, .. } => {
                let value = next.ok_or_else(|| ParseError::missing_value(spelling))?;
                apply(config, value)
                    .map_err(|message| ParseError::invalid_value(spelling, message))?;
                Ok(2)
            }
        }
    }

    /// Hands a bare token to the schema's positional binding, if any.
    fn apply_positional(&self, config: &mut C, token: &str) -> ParseResult<()> {
        match &self.schema.positional {
            Some((_, bind)) => {
                bind(config, token);
                Ok(())
            }
            None => Err(ParseError::UnexpectedArgument {
                token: token.to_string(),
            }),
        }
    }

    /// Finds a long name within edit distance of a misspelled one.
    fn suggest(&self, name: &str) -> Option<String> {
        let (best, distance) = self
            .schema
            .long_names()
            .map(|candidate| (candidate.to_string(), levenshtein(name, candidate)))
            .min_by_key(|(_, d)| *d)?;

        (distance > 0 && distance <= MAX_SUGGESTION_DISTANCE).then_some(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Demo {
        exe: String,
        all: bool,
        brief: bool,
        echo: bool,
        level: i32,
        names: Vec<String>,
        rest: Vec<String>,
    }

    fn schema() -> OptionSchema<Demo> {
        OptionSchema::new()
            .exe_name(|c: &mut Demo, name| c.exe = name.to_string())
            .flag(Some('a'), "all", "select everything", |c| c.all = true)
            .flag(Some('b'), "brief", "shorter output", |c| c.brief = true)
            .flag(Some('e'), "echo", "echo the selection", |c| c.echo = true)
            .value(Some('x'), "level", "<n>", "verbosity level", |c, raw| {
                c.level = raw
                    .parse()
                    .map_err(|_| format!("unable to convert '{raw}' to an integer"))?;
                Ok(())
            })
            .value(Some('n'), "name", "<name>", "collect a name", |c, raw| {
                c.names.push(raw.to_string());
                Ok(())
            })
            .positional("<arg>", |c, token| c.rest.push(token.to_string()))
    }

    fn parse(tokens: &[&str]) -> ParseResult<Demo> {
        let schema = schema();
        let mut config = Demo::default();
        OptionParser::new(&schema).parse(&mut config, tokens)?;
        Ok(config)
    }

    // ==================== Basics ====================

    #[test]
    fn test_empty_token_sequence_is_a_no_op() {
        assert_eq!(parse(&[]).unwrap(), Demo::default());
    }

    #[test]
    fn test_first_token_binds_verbatim() {
        assert_eq!(parse(&["prog"]).unwrap().exe, "prog");
        assert_eq!(parse(&[""]).unwrap().exe, "");
    }

    #[test]
    fn test_long_and_short_spellings() {
        let config = parse(&["prog", "--all", "-b"]).unwrap();
        assert!(config.all);
        assert!(config.brief);
        assert!(!config.echo);
    }

    #[test]
    fn test_value_option_consumes_next_token() {
        assert_eq!(parse(&["prog", "-x", "2"]).unwrap().level, 2);
        assert_eq!(parse(&["prog", "--level", "7"]).unwrap().level, 7);
    }

    #[test]
    fn test_value_token_is_taken_verbatim() {
        // Even a token that looks like an option is the value.
        let config = parse(&["prog", "-n", "-b"]).unwrap();
        assert_eq!(config.names, vec!["-b"]);
        assert!(!config.brief);
    }

    #[test]
    fn test_repeated_value_option_preserves_order() {
        let config = parse(&["prog", "-n", "xml", "-n", "junit"]).unwrap();
        assert_eq!(config.names, vec!["xml", "junit"]);
    }

    #[test]
    fn test_positional_tokens_fall_through() {
        let config = parse(&["prog", "first", "-a", "second"]).unwrap();
        assert_eq!(config.rest, vec!["first", "second"]);
        assert!(config.all);
    }

    #[test]
    fn test_lone_dash_is_positional() {
        assert_eq!(parse(&["prog", "-"]).unwrap().rest, vec!["-"]);
    }

    // ==================== Flag Groups ====================

    #[test]
    fn test_combined_flags_expand() {
        let grouped = parse(&["prog", "-abe"]).unwrap();
        let separate = parse(&["prog", "-a", "-b", "-e"]).unwrap();
        assert_eq!(grouped, separate);
    }

    #[test]
    fn test_whole_spelling_wins_over_group_expansion() {
        // "-level" names the long option, not the flags l, e, v...
        assert_eq!(parse(&["prog", "-level", "3"]).unwrap().level, 3);
    }

    #[test]
    fn test_value_option_in_group_is_an_error() {
        let err = parse(&["prog", "-axb"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::GroupedValueOption {
                group: "-axb".to_string(),
                flag: 'x',
            }
        );
    }

    #[test]
    fn test_unknown_flag_in_group_is_an_error() {
        let err = parse(&["prog", "-abq"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::GroupedUnknownFlag {
                group: "-abq".to_string(),
                flag: 'q',
            }
        );
    }

    // ==================== Failures ====================

    #[test]
    fn test_missing_value() {
        let err = parse(&["prog", "-x"]).unwrap_err();
        assert_eq!(err, ParseError::missing_value("-x"));
    }

    #[test]
    fn test_conversion_failure_names_the_value() {
        let err = parse(&["prog", "-x", "oops"]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("convert"));
        assert!(message.contains("oops"));
    }

    #[test]
    fn test_conversion_failure_leaves_field_untouched() {
        let schema = schema();
        let mut config = Demo::default();
        config.level = 42;
        let result = OptionParser::new(&schema).parse(&mut config, ["prog", "-x", "oops"]);
        assert!(result.is_err());
        assert_eq!(config.level, 42);
    }

    #[test]
    fn test_earlier_options_stay_applied_after_an_error() {
        let schema = schema();
        let mut config = Demo::default();
        let result = OptionParser::new(&schema).parse(&mut config, ["prog", "-a", "--nope"]);
        assert!(result.is_err());
        assert!(config.all);
    }

    #[test]
    fn test_unrecognized_long_option_suggests_a_near_miss() {
        let err = parse(&["prog", "--leval", "3"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::unrecognized("--leval", Some("level".to_string()))
        );
    }

    #[test]
    fn test_unrecognized_long_option_without_a_near_miss() {
        let err = parse(&["prog", "--frobnicate"]).unwrap_err();
        assert_eq!(err, ParseError::unrecognized("--frobnicate", None));
    }

    #[test]
    fn test_unrecognized_short_option() {
        let err = parse(&["prog", "-q"]).unwrap_err();
        assert_eq!(err, ParseError::unrecognized("-q", None));
    }

    #[test]
    fn test_stray_token_without_positional_binding_is_an_error() {
        let schema: OptionSchema<Demo> =
            OptionSchema::new().flag(Some('a'), "all", "select everything", |c: &mut Demo| c.all = true);
        let mut config = Demo::default();
        let err = OptionParser::new(&schema)
            .parse(&mut config, ["prog", "stray"])
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedArgument {
                token: "stray".to_string(),
            }
        );
    }
}
