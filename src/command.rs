pub mod areas;
pub mod export;
pub mod export_all;
pub mod query;
pub mod select;

use crate::{
    export::{LogNotifier, Notifier},
    map::GeoJsonMap,
    session::Session,
    Error, Result,
};
use std::fs;
use tracing::info;

/// Loads a boundary file into a fresh session, skipped placemarks are reported one by one.
fn load_session(path: &str) -> Result<Session<GeoJsonMap>> {
    info!(path, "Loading boundaries");
    let raw = fs::read_to_string(path)?;
    let mut session = Session::new(GeoJsonMap::new());
    for e in session.parse_boundaries(&raw)? {
        LogNotifier.notify_error(&format!("Skipped placemark: {}", e.describe()));
    }
    Ok(session)
}

fn arg<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| Error::CLI(format!("Missing argument: {name}")))
}
