use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
    pub escaped: bool,
    /// Command name followed by its arguments.
    pub command: Vec<String>,
}

impl CliArgs {
    pub fn from_env() -> Result<Self, String> {
        Self::from_args(std::env::args().skip(1))
    }

    /// Leading `--flags` configure the run; the first other word starts the
    /// command and everything after it belongs to the command.
    pub fn from_args<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut parsed = Self::defaults();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    parsed.config_path = Self::next_path(&mut args, "--config")?;
                }
                "--logs" => {
                    parsed.logs_dir = Self::next_path(&mut args, "--logs")?;
                }
                "--escaped" | "-e" => parsed.escaped = true,
                "--help" | "-h" => parsed.command.push("help".to_string()),
                "--" => break,
                flag if flag.starts_with("--") => {
                    return Err(format!("Unknown argument: {flag}"));
                }
                _ => {
                    parsed.command.push(arg);
                    break;
                }
            }
            if !parsed.command.is_empty() {
                break;
            }
        }
        parsed.command.extend(args);
        Ok(parsed)
    }

    fn next_path<I>(args: &mut I, flag: &str) -> Result<PathBuf, String>
    where
        I: Iterator<Item = String>,
    {
        args.next()
            .map(PathBuf::from)
            .ok_or_else(|| format!("Missing value for {flag}"))
    }

    fn defaults() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            logs_dir: PathBuf::from("logs"),
            escaped: false,
            command: Vec::new(),
        }
    }
}
