/// Runtime logging options of a [`List`].
///
/// Events are emitted through [`tracing`]; nothing is printed unless the
/// application installs a subscriber.
///
/// # Examples
///
/// ```
/// use ordered_list::{Config, List};
///
/// let config = Config::new().trace(true).report_errors(false);
/// let list: List = List::with_config(config);
/// assert!(list.config().trace);
/// assert!(!list.config().report_errors);
/// ```
///
/// [`List`]: crate::List
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Emit a `debug` event for bulk mutations (`remove_data`, `clear`,
    /// `reverse`, `rotate`).
    pub trace: bool,
    /// Emit a `warn` event for every rejected argument, in addition to
    /// returning the error.
    pub report_errors: bool,
}

impl Config {
    /// The default configuration: tracing off, error reporting on.
    pub const fn new() -> Self {
        Self {
            trace: false,
            report_errors: true,
        }
    }

    pub fn trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn report_errors(mut self, report_errors: bool) -> Self {
        self.report_errors = report_errors;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
