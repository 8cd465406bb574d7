use super::{Area, AreaCollection};
use crate::{Error, Result};
use roxmltree::{Document, Node};
use tracing::{debug, info, warn};

const PLACEMARK: &str = "Placemark";
const NAME: &str = "name";
const COORDINATES: &str = "coordinates";
const MIN_RING_POINTS: usize = 3;

pub struct ParsedBoundaries {
    pub areas: AreaCollection,
    /// Placemarks that were skipped, one error per record.
    pub rejected: Vec<Error>,
}

/// Parses KML markup into named areas. Only a malformed document fails the whole parse,
/// broken placemarks end up in [ParsedBoundaries::rejected].
pub fn parse(raw: &str) -> Result<ParsedBoundaries> {
    let doc = Document::parse(raw)?;
    let mut areas = AreaCollection::new();
    let mut rejected = vec![];
    let placemarks = doc
        .descendants()
        .filter(|it| it.is_element() && it.tag_name().name() == PLACEMARK);
    for (index, placemark) in placemarks.enumerate() {
        match parse_placemark(index, placemark) {
            Ok(area) => {
                debug!(name = %area.name, points = area.ring_lon_lat.len(), "Parsed area");
                if let Some(old) = areas.insert(area) {
                    warn!(name = %old.name, "Duplicate area name, keeping the last one");
                }
            }
            Err(e) => {
                warn!(index, error = %e, "Skipping placemark");
                rejected.push(e);
            }
        }
    }
    info!(
        areas = areas.len(),
        rejected = rejected.len(),
        "Parsed boundary document",
    );
    Ok(ParsedBoundaries { areas, rejected })
}

fn parse_placemark(index: usize, placemark: Node) -> Result<Area> {
    let name = first_descendant(placemark, NAME)
        .and_then(|it| it.text())
        .filter(|it| !it.is_empty())
        .ok_or(Error::MissingName(index))?;
    let coordinates = first_descendant(placemark, COORDINATES)
        .and_then(|it| it.text())
        .ok_or_else(|| Error::InvalidPlacemark(format!("Area {name} has no coordinates")))?;
    let ring = parse_coordinates(coordinates)
        .map_err(|e| Error::InvalidPlacemark(format!("Area {name} has invalid coordinates: {e}")))?;
    if ring.len() < MIN_RING_POINTS {
        Err(Error::InvalidPlacemark(format!(
            "Area {name} has {} points, at least {MIN_RING_POINTS} are required",
            ring.len(),
        )))?
    }
    Ok(Area::new(name, ring))
}

fn first_descendant<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.descendants()
        .find(|it| it.is_element() && it.tag_name().name() == name)
}

/// Reads `lon,lat[,elevation]` tuples separated by any whitespace, elevation is dropped.
fn parse_coordinates(raw: &str) -> std::result::Result<Vec<[f64; 2]>, String> {
    raw.split_whitespace()
        .map(|tuple| {
            let mut parts = tuple.split(',');
            let lon = parse_component(parts.next(), tuple)?;
            let lat = parse_component(parts.next(), tuple)?;
            Ok([lon, lat])
        })
        .collect()
}

fn parse_component(component: Option<&str>, tuple: &str) -> std::result::Result<f64, String> {
    component
        .filter(|it| !it.is_empty())
        .and_then(|it| it.parse::<f64>().ok())
        .filter(|it| it.is_finite())
        .ok_or_else(|| format!("can't read coordinate {tuple:?}"))
}
