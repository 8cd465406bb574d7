use super::{arg, load_session};
use crate::{Error, Result};
use tracing::info;

/// Selects areas one after another and prints what ended up on the map.
pub fn run(args: &[String]) -> Result<()> {
    let mut session = load_session(arg(args, 0, "boundary file")?)?;
    if args.len() < 2 {
        Err(Error::CLI("Missing argument: area name".into()))?
    }
    for name in &args[1..] {
        session.select_area(name)?;
    }
    info!(
        overlays = session.map().overlay_count(),
        view = ?session.map().view(),
        "Selected areas",
    );
    println!("{}", serde_json::to_string_pretty(&session.map().to_geojson())?);
    Ok(())
}
