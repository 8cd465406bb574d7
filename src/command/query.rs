use super::{arg, load_session};
use crate::{conf::Conf, overpass, Result};

pub fn run(conf: &Conf, args: &[String]) -> Result<()> {
    let session = load_session(arg(args, 0, "boundary file")?)?;
    let area = session.store().get(arg(args, 1, "area name")?)?;
    let query = overpass::build(&area.ring_lat_lon);
    println!("{}", overpass::request_url(&conf.overpass_api_url, &query));
    Ok(())
}
