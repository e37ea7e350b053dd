//! CLI argument definitions for crowdscore.

use std::path::PathBuf;

use clap::Parser;
use crowdscore_core::{Credentials, ExportProfile, Region};

use crate::commands::export::ExportOptions;

#[derive(Parser, Debug)]
#[command(name = "crowdscore")]
#[command(about = "Export CrowdStrike Falcon CrowdScore history to CSV", version)]
pub struct Args {
    /// Number of days of history to retrieve (default: 30, or 7 with --raw)
    #[arg(short = 't', long = "time", value_name = "DAYS")]
    pub time_window: Option<u32>,

    /// CrowdStrike API client ID
    #[arg(short = 'k', long = "falcon_client_id", env = "FALCON_CLIENT_ID")]
    pub falcon_client_id: String,

    /// CrowdStrike API client secret
    #[arg(
        short = 's',
        long = "falcon_client_secret",
        env = "FALCON_CLIENT_SECRET",
        hide_env_values = true
    )]
    pub falcon_client_secret: String,

    /// CrowdStrike cloud region (auto, us1, us2, eu1, usgov1)
    #[arg(short = 'b', long = "base-url", default_value = "auto")]
    pub base_url: Region,

    /// Show the data table in the terminal
    #[arg(short = 'd', long = "show-data")]
    pub show_data: bool,

    /// Reverse the data table order (display only)
    #[arg(short, long)]
    pub reverse: bool,

    /// Export raw scores of the last 7 days to crowdscore_raw_data.csv
    #[arg(long)]
    pub raw: bool,

    /// Output file path (default depends on --raw)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn profile(&self) -> ExportProfile {
        if self.raw {
            ExportProfile::Raw
        } else {
            ExportProfile::Full
        }
    }

    pub fn time_window_days(&self) -> u32 {
        self.time_window
            .unwrap_or_else(|| self.profile().default_time_window_days())
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.profile().default_filename()))
    }
}

impl From<Args> for ExportOptions {
    fn from(args: Args) -> Self {
        let time_window_days = args.time_window_days();
        let output = args.output_path();
        Self {
            credentials: Credentials::new(args.falcon_client_id, args.falcon_client_secret),
            region: args.base_url,
            time_window_days,
            show_data: args.show_data,
            reverse: args.reverse,
            output,
        }
    }
}
