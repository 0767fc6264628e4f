//! Command line argument parsing for the Wordhoard server using clap.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::service::ServiceConfig;

/// Wordhoard - word-search service over lazily built dictionaries
#[derive(Parser, Debug, Clone)]
#[command(name = "wordhoard")]
#[command(about = "Serve letter-permutation and regex word searches over HTTP")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordhoardArgs {
    /// Port to listen on
    #[arg(short, long, env = "WORDHOARD_PORT", default_value_t = 9000)]
    pub port: u16,

    /// Address to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Directory holding the `*.dic` dictionary files
    #[arg(long, env = "WORDHOARD_DICT_DIR", default_value = "dict")]
    pub dict_dir: PathBuf,

    /// Don't build dictionaries on start
    #[arg(long)]
    pub lazy_init: bool,

    /// Send debug info in error responses
    #[arg(short, long)]
    pub debug: bool,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl WordhoardArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig::default().with_debug(self.debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = WordhoardArgs::try_parse_from(["wordhoard"]).unwrap();

        assert_eq!(args.addr().port(), 9000);
        assert_eq!(args.dict_dir, PathBuf::from("dict"));
        assert!(!args.lazy_init);
        assert_eq!(args.log_level(), LevelFilter::Warn);
        assert_eq!(args.service_config(), ServiceConfig::default());
    }

    #[test]
    fn test_flags() {
        let args = WordhoardArgs::try_parse_from([
            "wordhoard",
            "-p",
            "8080",
            "--dict-dir",
            "/srv/dict",
            "--lazy-init",
            "-d",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.port, 8080);
        assert!(args.lazy_init);
        assert!(args.service_config().debug);
        assert_eq!(args.log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = WordhoardArgs::try_parse_from(["wordhoard", "-q", "-vvv"]).unwrap();

        assert_eq!(args.verbosity(), 0);
        assert_eq!(args.log_level(), LevelFilter::Error);
    }
}
