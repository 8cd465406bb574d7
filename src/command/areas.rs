use super::{arg, load_session};
use crate::Result;

pub fn run(args: &[String]) -> Result<()> {
    let session = load_session(arg(args, 0, "boundary file")?)?;
    for name in session.store().list() {
        println!("{name}");
    }
    Ok(())
}
