//! Command-line configuration

use crate::demos::constants::{
    DEFAULT_DEPTH_LIMIT, DEFAULT_EXPRESSION, DEFAULT_FIB_N, DEFAULT_MESSAGE, MAX_DEPTH_LIMIT,
    MAX_FIB_N,
};
use crate::demos::{Demo, DemoSettings};
use crate::trace::DEFAULT_SNAPSHOT_LIMIT;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "stacktty",
    about = "Step through annotated traces of stacks, queues and call frames",
    version
)]
pub struct Cli {
    /// Demonstration to record
    #[arg(value_enum, default_value_t = Demo::All)]
    pub demo: Demo,

    /// Print the trace to stdout instead of opening the viewer
    #[arg(long)]
    pub plain: bool,

    /// n for the Fibonacci demonstration
    #[arg(long, default_value_t = DEFAULT_FIB_N,
          value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_FIB_N)))]
    pub fib_n: u32,

    /// Recursion limit for the stack depth demonstration
    #[arg(long, default_value_t = DEFAULT_DEPTH_LIMIT, value_parser = parse_depth_limit)]
    pub depth_limit: usize,

    /// Message to bury and unbury
    #[arg(long, default_value = DEFAULT_MESSAGE)]
    pub message: String,

    /// Expression for the bracket checker
    #[arg(long, default_value = DEFAULT_EXPRESSION)]
    pub expression: String,

    /// Memory budget for recorded steps, in bytes
    #[arg(long, default_value_t = DEFAULT_SNAPSHOT_LIMIT)]
    pub snapshot_limit: usize,
}

impl Cli {
    pub fn demo_settings(&self) -> DemoSettings {
        DemoSettings {
            fib_n: self.fib_n,
            depth_limit: self.depth_limit,
            message: self.message.clone(),
            expression: self.expression.clone(),
        }
    }
}

fn parse_depth_limit(s: &str) -> Result<usize, String> {
    let limit: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a positive integer", s))?;
    if (1..=MAX_DEPTH_LIMIT).contains(&limit) {
        Ok(limit)
    } else {
        Err(format!("depth limit must be between 1 and {}", MAX_DEPTH_LIMIT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["stacktty"]).unwrap();
        assert_eq!(cli.demo, Demo::All);
        assert!(!cli.plain);
        assert_eq!(cli.demo_settings(), DemoSettings::default());
        assert_eq!(cli.snapshot_limit, DEFAULT_SNAPSHOT_LIMIT);
    }

    #[test]
    fn test_demo_and_options() {
        let cli = Cli::try_parse_from([
            "stacktty",
            "call-chain",
            "--plain",
            "--fib-n",
            "7",
            "--message",
            "abc",
        ])
        .unwrap();
        assert_eq!(cli.demo, Demo::CallChain);
        assert!(cli.plain);
        assert_eq!(cli.fib_n, 7);
        assert_eq!(cli.demo_settings().message, "abc");
    }

    #[test]
    fn test_limits_are_enforced() {
        assert!(Cli::try_parse_from(["stacktty", "--fib-n", "21"]).is_err());
        assert!(Cli::try_parse_from(["stacktty", "--depth-limit", "0"]).is_err());
        assert!(Cli::try_parse_from(["stacktty", "--depth-limit", "2001"]).is_err());
        assert!(Cli::try_parse_from(["stacktty", "--depth-limit", "2000"]).is_ok());
    }
}
