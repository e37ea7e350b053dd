use super::export::{
    DEFAULT_TIME_WINDOW_DAYS, FULL_EXPORT_FILENAME, RAW_EXPORT_FILENAME, RAW_TIME_WINDOW_DAYS,
};

/// Preset pairing a default time window with a default output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportProfile {
    /// Configurable window, `crowdscore_data.csv`.
    #[default]
    Full,
    /// Last week of raw ten-minute scores, `crowdscore_raw_data.csv`.
    Raw,
}

impl ExportProfile {
    pub fn default_time_window_days(&self) -> u32 {
        match self {
            ExportProfile::Full => DEFAULT_TIME_WINDOW_DAYS,
            ExportProfile::Raw => RAW_TIME_WINDOW_DAYS,
        }
    }

    pub fn default_filename(&self) -> &'static str {
        match self {
            ExportProfile::Full => FULL_EXPORT_FILENAME,
            ExportProfile::Raw => RAW_EXPORT_FILENAME,
        }
    }
}
