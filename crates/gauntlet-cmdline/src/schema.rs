//! Option descriptors and the schema they form.
//!
//! A schema is built once at startup and is immutable afterwards; parsing
//! never mutates it, so a schema can be shared freely between threads and
//! parse calls.

/// Binding for an option that takes no value.
type FlagBinding<C> = Box<dyn Fn(&mut C) + Send + Sync>;

/// Binding for an option that consumes one value token.
///
/// The closure converts first and only assigns on success, so a failed
/// conversion leaves the target field untouched. The returned message ends
/// up in [`ParseError::InvalidValue`](crate::ParseError::InvalidValue).
type ValueBinding<C> = Box<dyn Fn(&mut C, &str) -> Result<(), String> + Send + Sync>;

/// Binding for the process name and for positional arguments.
type TokenBinding<C> = Box<dyn Fn(&mut C, &str) + Send + Sync>;

/// How many value tokens an option consumes, and where they go.
pub(crate) enum Binding<C> {
    /// Arity 0: sets a present/true state.
    Flag(FlagBinding<C>),
    /// Arity 1: converts and assigns the next token.
    Value {
        /// Placeholder shown in the usage screen, e.g. `<filename>`.
        hint: String,
        apply: ValueBinding<C>,
    },
}

/// One recognized command line option: its spellings, its help line, and
/// its binding into the target record.
pub struct OptionDescriptor<C> {
    pub(crate) short: Option<char>,
    pub(crate) long: String,
    pub(crate) help: String,
    pub(crate) binding: Binding<C>,
}

impl<C> OptionDescriptor<C> {
    /// The option's canonical `--long` spelling.
    pub fn long(&self) -> &str {
        &self.long
    }

    /// The option's `-x` spelling, when it has one.
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// Whether the option consumes a value token.
    pub fn takes_value(&self) -> bool {
        matches!(self.binding, Binding::Value { .. })
    }
}

/// The registered set of options for one host program, bound to its
/// configuration record type `C`.
///
/// Build with the chained constructors, then hand to
/// [`OptionParser`](crate::OptionParser). See the crate docs for a worked
/// example.
pub struct OptionSchema<C> {
    pub(crate) options: Vec<OptionDescriptor<C>>,
    pub(crate) exe_name: Option<TokenBinding<C>>,
    pub(crate) positional: Option<(String, TokenBinding<C>)>,
}

impl<C> OptionSchema<C> {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            exe_name: None,
            positional: None,
        }
    }

    /// Binds the first token (the invoking process's own identifier).
    ///
    /// The token is passed through verbatim, the empty string included.
    pub fn exe_name(mut self, bind: impl Fn(&mut C, &str) + Send + Sync + 'static) -> Self {
        self.exe_name = Some(Box::new(bind));
        self
    }

    /// Adds a zero-arity option.
    pub fn flag(
        mut self,
        short: Option<char>,
        long: &str,
        help: &str,
        set: impl Fn(&mut C) + Send + Sync + 'static,
    ) -> Self {
        self.options.push(OptionDescriptor {
            short,
            long: long.to_string(),
            help: help.to_string(),
            binding: Binding::Flag(Box::new(set)),
        });
        self
    }

    /// Adds a one-arity option.
    ///
    /// `apply` receives the raw value token; it converts first and mutates
    /// the record only on success. To collect repeated occurrences, append
    /// to a `Vec` field — the parser's left-to-right scan preserves order.
    pub fn value(
        mut self,
        short: Option<char>,
        long: &str,
        hint: &str,
        help: &str,
        apply: impl Fn(&mut C, &str) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.options.push(OptionDescriptor {
            short,
            long: long.to_string(),
            help: help.to_string(),
            binding: Binding::Value {
                hint: hint.to_string(),
                apply: Box::new(apply),
            },
        });
        self
    }

    /// Binds every non-option token after the process name.
    ///
    /// Without this binding, stray tokens are a parse error; what a bare
    /// token means is the host's decision, not the engine's.
    pub fn positional(
        mut self,
        hint: &str,
        bind: impl Fn(&mut C, &str) + Send + Sync + 'static,
    ) -> Self {
        self.positional = Some((hint.to_string(), Box::new(bind)));
        self
    }

    /// Looks up a descriptor by its long spelling.
    pub(crate) fn find_long(&self, name: &str) -> Option<&OptionDescriptor<C>> {
        self.options.iter().find(|o| o.long == name)
    }

    /// Looks up a descriptor by its short spelling.
    pub(crate) fn find_short(&self, c: char) -> Option<&OptionDescriptor<C>> {
        self.options.iter().find(|o| o.short == Some(c))
    }

    /// All long spellings, for near-miss suggestions.
    pub(crate) fn long_names(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.long.as_str())
    }

    /// Renders a usage screen from the descriptor table.
    pub fn usage(&self, process_name: &str) -> String {
        let mut lines = Vec::new();

        let positional_hint = self
            .positional
            .as_ref()
            .map(|(hint, _)| format!(" [{hint} ...]"))
            .unwrap_or_default();
        lines.push(format!("usage:\n  {process_name}{positional_hint} [options]\n"));
        lines.push("options:".to_string());

        let spellings: Vec<String> = self.options.iter().map(render_spelling).collect();
        let width = spellings.iter().map(String::len).max().unwrap_or(0);
        for (spelling, option) in spellings.iter().zip(&self.options) {
            lines.push(format!("  {spelling:width$}  {}", option.help));
        }

        lines.join("\n")
    }
}

impl<C> Default for OptionSchema<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders one option's spellings column, e.g. `-x, --abortx <count>`.
fn render_spelling<C>(option: &OptionDescriptor<C>) -> String {
    let mut spelling = match option.short {
        Some(c) => format!("-{c}, --{}", option.long),
        None => format!("    --{}", option.long),
    };
    if let Binding::Value { hint, .. } = &option.binding {
        spelling.push(' ');
        spelling.push_str(hint);
    }
    spelling
}
