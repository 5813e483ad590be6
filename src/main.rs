use std::io::{self, Write};

use anyhow::Context;
use tty_cursor::command::command_parser::CommandParser;
use tty_cursor::core::cli::CliArgs;
use tty_cursor::core::context::AppContext;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = CliArgs::from_env().map_err(anyhow::Error::msg)?;
    let mut ctx = AppContext::new_with_paths(args.config_path, args.logs_dir, args.escaped)
        .context("failed to start")?;

    let result = CommandParser::new()
        .parse(&args.command)
        .and_then(|command| command.execute(&mut ctx));

    match result {
        Ok(out) => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(out.as_bytes())
                .and_then(|_| stdout.flush())
                .context("failed to write to stdout")?;
            Ok(())
        }
        Err(err) => {
            ctx.logger.error(err.to_string());
            Err(err.into())
        }
    }
}
