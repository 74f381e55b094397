// src/cli.rs
use std::error::Error;

use crate::config::Paths;
use crate::file::normalize_dir_path;

pub const HELP: &str = include_str!("cli_help.txt");

pub enum Command {
    Run(Paths),
    Help,
}

/// Parse the process arguments (program name excluded).
pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut paths = Paths::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--input" => {
                let v = args.next().ok_or("Missing value for --input")?;
                paths.input_dir = normalize_dir_path(&v);
            }
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing value for --out")?;
                paths.out_dir = normalize_dir_path(&v);
            }
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }
    Ok(Command::Run(paths))
}

pub fn from_env() -> Result<Command, Box<dyn Error>> {
    parse_args(std::env::args().skip(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_args() {
        let Command::Run(p) = parse_args(args(&[])).unwrap() else { panic!("expected run") };
        assert_eq!(p, Paths::default());
    }

    #[test]
    fn directory_overrides() {
        let Command::Run(p) = parse_args(args(&["-i", "data/in", "--out", "data/out"])).unwrap() else {
            panic!("expected run")
        };
        assert_eq!(p.input_dir, PathBuf::from("data/in"));
        assert_eq!(p.out_dir, PathBuf::from("data/out"));
    }

    #[test]
    fn help_and_errors() {
        assert!(matches!(parse_args(args(&["-h"])).unwrap(), Command::Help));
        assert!(parse_args(args(&["-o"])).is_err());
        assert!(parse_args(args(&["--all"])).is_err());
    }
}
