use geo::{Coord, LineString, Polygon};
use std::collections::HashMap;

/// Opaque reference to a polygon drawn by a [crate::map::MapView].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayHandle(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Area {
    pub name: String,
    pub ring_lon_lat: Vec<[f64; 2]>,
    pub ring_lat_lon: Vec<[f64; 2]>,
    pub overlay: Option<OverlayHandle>,
}

impl Area {
    pub fn new(name: impl Into<String>, ring_lon_lat: Vec<[f64; 2]>) -> Area {
        let ring_lat_lon = ring_lon_lat.iter().map(|[lon, lat]| [*lat, *lon]).collect();
        Area {
            name: name.into(),
            ring_lon_lat,
            ring_lat_lon,
            overlay: None,
        }
    }

    pub fn rendered(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn polygon(&self) -> Polygon {
        let exterior: LineString = self
            .ring_lon_lat
            .iter()
            .map(|[lon, lat]| Coord { x: *lon, y: *lat })
            .collect();
        Polygon::new(exterior, vec![])
    }
}

/// Areas keyed by name, iterated in the order they were first inserted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaCollection {
    areas: Vec<Area>,
    index: HashMap<String, usize>,
}

impl AreaCollection {
    pub fn new() -> AreaCollection {
        AreaCollection::default()
    }

    /// Last insert wins, but the replaced area keeps its original position.
    pub fn insert(&mut self, area: Area) -> Option<Area> {
        match self.index.get(&area.name) {
            Some(&i) => Some(std::mem::replace(&mut self.areas[i], area)),
            None => {
                self.index.insert(area.name.clone(), self.areas.len());
                self.areas.push(area);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Area> {
        self.index.get(name).map(|&i| &self.areas[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Area> {
        self.index.get(name).map(|&i| &mut self.areas[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Area> {
        self.areas.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.areas.iter().map(|it| it.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
