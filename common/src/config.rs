use crate::insurance::DEFAULT_BASE_RATE;

#[derive(Debug, Clone)]
pub struct Config {
    /// Unscaled premium handed to the calculator.
    pub base_rate: u32,
    /// Quiet level. Anything above 0 hides the header and vehicle summary.
    ///
    /// The report line itself is always written.
    pub quiet: u8,
    /// Disables ANSI colors on the log output.
    pub no_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_rate: DEFAULT_BASE_RATE,
            quiet: 0,
            no_color: false,
        }
    }
}
