mod app;
mod client;
mod error;
mod models;
mod option;

use std::{
    fs::File,
    io::{self, BufRead, Write},
    path::PathBuf,
    process,
};

use anyhow::{anyhow, Result};
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};
use structopt::StructOpt;

use crate::{
    app::{prompt, view},
    client::{AwsCli, Client, CommandRunner},
    option::{Config, Opt},
};

fn setup_logging() -> Result<()> {
    let mut path = get_app_cache_path()?;
    path.push("awsab.log");
    let _ = WriteLogger::init(LevelFilter::Debug, LogConfig::default(), File::create(path)?);
    Ok(())
}

fn get_app_cache_path() -> Result<PathBuf> {
    let mut path = dirs_next::cache_dir().ok_or_else(|| anyhow!("failed to find os cache dir."))?;
    path.push("awsab");
    std::fs::create_dir_all(&path)?;
    Ok(path)
}

async fn run<R, I, O>(config: Config, runner: R, input: I, mut output: O) -> Result<i32>
where
    R: CommandRunner,
    I: BufRead,
    O: Write,
{
    let service = match config.service {
        Some(service) => service,
        None => {
            writeln!(output, "No action specified. Use -h for help.")?;
            return Ok(1);
        }
    };
    log::debug!("config is {:?}", config);
    log::info!("{}", service.description());

    let client = Client::connect(runner, config.profile.clone()).await?;
    log::debug!("connected with profile {:?}", client.profile());

    let request = prompt::fill(service, &config.params, input, &mut output)?;
    let value = app::dispatch(&client, &request).await?;
    view::render(&mut output, request.service(), &value)?;
    Ok(0)
}

#[tokio::main]
async fn main() {
    let config: Config = Opt::from_args().into();

    if let Err(e) = setup_logging() {
        eprintln!("failed to set up logging: {:#}", e);
    }

    let runner = AwsCli::new(config.timeout);
    let (stdin, stdout) = (io::stdin(), io::stdout());
    let code = match run(config, runner, stdin.lock(), stdout.lock()).await {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("{:#}", e);
            1
        }
    };
    process::exit(code);
}
