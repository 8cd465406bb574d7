use super::{arg, load_session};
use crate::{
    conf::Conf,
    export::{Exporter, FileSink, LogLoading, LogNotifier},
    overpass::OverpassClient,
    Error, Result,
};
use tracing::info;

pub async fn run(conf: &Conf, args: &[String]) -> Result<()> {
    let mut session = load_session(arg(args, 0, "boundary file")?)?;
    session.select_area(arg(args, 1, "area name")?)?;
    let area = session
        .selected_area()
        .ok_or_else(|| Error::CLI("No area selected".into()))?;
    let client = OverpassClient::new(conf.overpass_api_url.clone());
    info!(area = %area.name, api_url = %client.api_url(), "Exporting area streets");
    let exporter = Exporter::new(
        client,
        FileSink::new(&conf.output_dir),
        LogNotifier,
        LogLoading,
    );
    let export = exporter.export_one(area).await?;
    println!("{}", exporter.sink().path(&export.file_name).display());
    Ok(())
}
