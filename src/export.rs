pub mod feedback;
pub mod sink;
pub use feedback::LoadingGuard;
pub use feedback::LoadingIndicator;
pub use feedback::LogLoading;
pub use feedback::LogNotifier;
pub use feedback::Notifier;
pub use sink::FileSink;
pub use sink::Sink;

use crate::{
    area::Area,
    overpass::{self, OverpassApi},
    Error, Result,
};
use std::collections::BTreeSet;
use std::time::Instant;
use tracing::{info, warn};

pub const ALL_AREAS_FILE_NAME: &str = "all streets.txt";
const LINE_SEPARATOR: &str = "\r\n";

pub fn area_file_name(area_name: &str) -> String {
    format!("Streets {area_name}.txt")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub text: String,
}

impl Export {
    fn new(file_name: String, names: &[String]) -> Export {
        Export {
            file_name,
            text: names.join(LINE_SEPARATOR),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaFailure {
    pub area: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportAll {
    pub export: Export,
    pub failures: Vec<AreaFailure>,
}

pub struct Exporter<C, S, N, L> {
    client: C,
    sink: S,
    notifier: N,
    loading: L,
}

impl<C, S, N, L> Exporter<C, S, N, L>
where
    C: OverpassApi,
    S: Sink,
    N: Notifier,
    L: LoadingIndicator,
{
    pub fn new(client: C, sink: S, notifier: N, loading: L) -> Self {
        Exporter {
            client,
            sink,
            notifier,
            loading,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Exports unique, sorted street names of a single area. Failures are reported to the
    /// user and nothing gets delivered.
    pub async fn export_one(&self, area: &Area) -> Result<Export> {
        let _loading = LoadingGuard::new(&self.loading);
        let started_at = Instant::now();
        let res = self._export_one(area).await;
        match &res {
            Ok(export) => info!(
                area = %area.name,
                file_name = %export.file_name,
                time_ms = started_at.elapsed().as_millis(),
                "Exported area streets",
            ),
            Err(e) => self.notifier.notify_error(&format!(
                "Failed to export streets of {}: {}",
                area.name,
                e.describe(),
            )),
        }
        res
    }

    async fn _export_one(&self, area: &Area) -> Result<Export> {
        let names = self.fetch_names(area, true).await?;
        let export = Export::new(area_file_name(&area.name), &names);
        self.sink.deliver(&export.text, &export.file_name)?;
        Ok(export)
    }

    /// Exports street names of all areas, one query at a time. A failed area is reported
    /// and skipped, the rest of them still make it to the output.
    pub async fn export_all<'a>(
        &self,
        areas: impl IntoIterator<Item = &'a Area>,
    ) -> Result<ExportAll> {
        let _loading = LoadingGuard::new(&self.loading);
        let started_at = Instant::now();
        let mut all_names: Vec<String> = vec![];
        let mut failures: Vec<AreaFailure> = vec![];
        for area in areas {
            match self.fetch_names(area, false).await {
                Ok(names) => {
                    info!(area = %area.name, names = names.len(), "Fetched area streets");
                    all_names.extend(names);
                }
                Err(e) => {
                    let message = e.describe();
                    warn!(
                        area = %area.name,
                        query_failure = e.is_query_failure(),
                        error = %message,
                        "Skipping area",
                    );
                    self.notifier.notify_error(&format!(
                        "Failed to fetch streets of {}: {}",
                        area.name, message,
                    ));
                    failures.push(AreaFailure {
                        area: area.name.clone(),
                        message,
                    });
                }
            }
        }
        let all_names: Vec<String> = all_names
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let export = Export::new(ALL_AREAS_FILE_NAME.into(), &all_names);
        if let Err(e) = self.sink.deliver(&export.text, &export.file_name) {
            self.notifier
                .notify_error(&format!("Failed to save streets: {}", e.describe()));
            return Err(e);
        }
        info!(
            names = all_names.len(),
            failed_areas = failures.len(),
            time_ms = started_at.elapsed().as_millis(),
            "Exported streets of all areas",
        );
        Ok(ExportAll { export, failures })
    }

    async fn fetch_names(&self, area: &Area, dedupe: bool) -> Result<Vec<String>> {
        if area.ring_lat_lon.is_empty() {
            Err(Error::InvalidPlacemark(format!("Area {} has no points", area.name)))?
        }
        let query = overpass::build(&area.ring_lat_lon);
        let response = self.client.query(&query).await?;
        overpass::extract(&response, dedupe)
    }
}
