/// Settings the command runner needs, independent of where they came from
/// (command line flags, a TOML file, or defaults).
pub trait ConfigProvider {
    /// Days assumed per month when flattening an interval into a fixed duration.
    fn days_in_month(&self) -> u8;
    /// Seconds assumed per day when flattening an interval into a fixed duration.
    fn seconds_in_day(&self) -> u32;
    fn output_format(&self) -> OutputFormat;
    /// chrono format string used when printing timestamps.
    fn timestamp_layout(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const VALID: [&'static str; 2] = ["text", "json"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}
