mod api;
mod cli;
mod config;
mod context;
mod form;
mod prompt;
mod remote;
mod shell;
mod view;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use cli::{Args, Command};
use config::{AppConfig, BaseUrl};
use context::AppContext;
use prompt::Terminal;
use remote::Remote;

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mut config = AppConfig::resolve(args.config.as_deref())?;
    if let Some(base_url) = args.base_url {
        config.api.base_url = BaseUrl(base_url);
    }

    let ctx = {
        let client = api::Client::new(&config.api.base_url.0, config.api.timeout());
        let remote = Remote::spawn(Arc::new(client))?;

        AppContext { config, remote }
    };

    let mut terminal = Terminal::stdio();

    let succeeded = shell::dispatch(&ctx, args.command.unwrap_or(Command::Shell), &mut terminal)?;

    // dropping the context waits for queued requests
    drop(ctx);

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
