use clap::{ArgAction, Parser};
use log::LevelFilter;
use ezclock_ui::clock::ClockTime;

/// Lays out an analog clock and logs the resulting draw list.
#[derive(Parser, Debug)]
#[command(name = "ezclock-studio", version)]
pub struct Cli {
    /// Side of the square viewport in logical pixels.
    #[arg(long, default_value_t = 200.0)]
    pub size: f32,

    /// Time to show as HH:MM or HH:MM:SS. Defaults to the local time.
    #[arg(long)]
    pub time: Option<ClockTime>,

    /// Number of frames to run; each one advances the clock by a second.
    #[arg(long, default_value_t = 1)]
    pub frames: u32,

    /// Request animated transitions between frames.
    #[arg(long, default_value_t = false)]
    pub animated: bool,

    /// Log filter in env_logger syntax (e.g. "debug", "ezclock_ui=trace").
    /// Overrides `-v`.
    #[arg(long, env = "EZCLOCK_LOG")]
    pub log: Option<String>,

    /// Raise the log level: `-v` for debug, `-vv` for trace.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["ezclock-studio"]);
        assert_eq!(cli.size, 200.0);
        assert_eq!(cli.frames, 1);
        assert!(cli.time.is_none());
        assert_eq!(cli.log_level(), LevelFilter::Info);
    }

    #[test]
    fn parses_time_and_verbosity() {
        let cli = Cli::parse_from(["ezclock-studio", "--time", "10:09:30", "-vv"]);
        assert_eq!(cli.time, Some(ClockTime::new(10, 9, 30)));
        assert_eq!(cli.log_level(), LevelFilter::Trace);
    }

    #[test]
    fn rejects_malformed_time() {
        assert!(Cli::try_parse_from(["ezclock-studio", "--time", "ten"]).is_err());
    }
}
