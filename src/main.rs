pub use error::Error;
mod area;
mod command;
mod conf;
mod error;
mod export;
mod map;
mod overpass;
mod session;
use conf::{Conf, LogFormat};
use std::env;
use tracing_subscriber::EnvFilter;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let conf = Conf::from_env()?;

    init_logging(&conf.log_format);

    let args: Vec<String> = env::args().collect();

    let command = match args.get(1) {
        Some(some) => some,
        None => Err(Error::CLI("No actions passed".into()))?,
    };

    match command.as_str() {
        "areas" => command::areas::run(&args[2..])?,
        "query" => command::query::run(&conf, &args[2..])?,
        "select" => command::select::run(&args[2..])?,
        "export" => command::export::run(&conf, &args[2..]).await?,
        "export-all" => command::export_all::run(&conf, &args[2..]).await?,
        first_arg => Err(Error::CLI(format!("Unknown command: {first_arg}")))?,
    }

    Ok(())
}

fn init_logging(format: &LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
