use std::fmt;
use std::sync::Arc;

use crate::Result;

// ============================================================================
// ArgumentMode / NameType
// ============================================================================

/// Whether an option takes an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArgumentMode {
    #[default]
    NoArgument,
    RequiredArgument,
    OptionalArgument,
}

impl ArgumentMode {
    pub fn takes_arg(self) -> bool {
        !matches!(self, ArgumentMode::NoArgument)
    }
}

/// Which form of an option matched on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameType {
    ShortName,
    LongName,
}

// ============================================================================
// Opt
// ============================================================================

/// Called once per match with the option, the matched form and the argument
/// (empty when none was given).
pub type OptionHandler =
    Arc<dyn Fn(&Opt, NameType, &str) -> Result<()> + Send + Sync + 'static>;

#[derive(Clone, Default)]
pub struct Opt {
    short_name: Option<char>,
    long_name: Option<String>,
    argument: ArgumentMode,
    handler: Option<OptionHandler>,
}

impl Opt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn short(mut self, c: char) -> Self {
        self.short_name = Some(c);
        self
    }

    pub fn long(mut self, name: &str) -> Self {
        self.long_name = Some(name.to_string());
        self
    }

    pub fn argument(mut self, mode: ArgumentMode) -> Self {
        self.argument = mode;
        self
    }

    pub fn required(self) -> Self {
        self.argument(ArgumentMode::RequiredArgument)
    }

    pub fn optional(self) -> Self {
        self.argument(ArgumentMode::OptionalArgument)
    }

    pub fn handler<F>(mut self, func: F) -> Self
    where
        F: Fn(&Opt, NameType, &str) -> Result<()> + Send + Sync + 'static,
    {
        self.handler = Some(Arc::new(func));
        self
    }

    pub fn short_name(&self) -> Option<char> {
        self.short_name
    }

    pub fn long_name(&self) -> Option<&str> {
        self.long_name.as_deref()
    }

    pub fn argument_mode(&self) -> ArgumentMode {
        self.argument
    }

    pub fn takes_arg(&self) -> bool {
        self.argument.takes_arg()
    }

    /// `--long` if the option has a long form, else `-c`, else empty.
    pub fn display_name(&self) -> String {
        match (&self.long_name, self.short_name) {
            (Some(name), _) => format!("--{}", name),
            (None, Some(c)) => format!("-{}", c),
            (None, None) => String::new(),
        }
    }

    pub(crate) fn invoke(&self, name_type: NameType, value: &str) -> Result<()> {
        match &self.handler {
            Some(func) => func(self, name_type, value),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Opt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opt")
            .field("short_name", &self.short_name)
            .field("long_name", &self.long_name)
            .field("argument", &self.argument)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

// ============================================================================
// OptionTable
// ============================================================================

/// Ordered option declarations. Order decides which short option wins on a
/// duplicate and the order candidates are reported in ambiguity errors.
#[derive(Clone, Default)]
pub struct OptionTable {
    options: Vec<Opt>,
    callback: Option<OptionHandler>,
}

impl OptionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option. An option without its own handler gets the table
    /// callback in effect at this point, if any.
    pub fn option(mut self, mut opt: Opt) -> Self {
        if opt.handler.is_none() {
            opt.handler = self.callback.clone();
        }
        self.options.push(opt);
        self
    }

    /// Set the handler used by options added after this call.
    pub fn callback<F>(mut self, func: F) -> Self
    where
        F: Fn(&Opt, NameType, &str) -> Result<()> + Send + Sync + 'static,
    {
        self.callback = Some(Arc::new(func));
        self
    }

    pub fn options(&self) -> &[Opt] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl fmt::Debug for OptionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.options).finish()
    }
}
