use super::{arg, load_session};
use crate::{
    conf::Conf,
    export::{Exporter, FileSink, LogLoading, LogNotifier},
    overpass::OverpassClient,
    Result,
};
use tracing::warn;

pub async fn run(conf: &Conf, args: &[String]) -> Result<()> {
    let session = load_session(arg(args, 0, "boundary file")?)?;
    let exporter = Exporter::new(
        OverpassClient::new(conf.overpass_api_url.clone()),
        FileSink::new(&conf.output_dir),
        LogNotifier,
        LogLoading,
    );
    let res = exporter.export_all(session.store().areas()).await?;
    if !res.failures.is_empty() {
        let failed: Vec<&str> = res.failures.iter().map(|it| it.area.as_str()).collect();
        warn!(?failed, "Some areas are missing from the export");
    }
    println!("{}", exporter.sink().path(&res.export.file_name).display());
    Ok(())
}
