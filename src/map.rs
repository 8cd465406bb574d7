use crate::area::{Area, OverlayHandle};
use geo::{BoundingRect, Polygon, Rect};
use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// The map the areas are drawn on.
pub trait MapView {
    /// Draws the area outline labelled with its name.
    fn draw_area(&mut self, area: &Area) -> OverlayHandle;
    fn remove_overlay(&mut self, overlay: OverlayHandle);
    /// Moves the view so the whole overlay is visible.
    fn fit_bounds(&mut self, overlay: OverlayHandle);
}

struct Overlay {
    label: String,
    polygon: Polygon,
}

/// Headless map, keeps drawn overlays around so they can be dumped as GeoJSON.
#[derive(Default)]
pub struct GeoJsonMap {
    overlays: BTreeMap<OverlayHandle, Overlay>,
    next_id: u64,
    view: Option<Rect>,
}

impl GeoJsonMap {
    pub fn new() -> GeoJsonMap {
        GeoJsonMap::default()
    }

    pub fn view(&self) -> Option<Rect> {
        self.view
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    /// Drawn overlays, the collection bbox is the current view.
    pub fn to_geojson(&self) -> FeatureCollection {
        let features = self
            .overlays
            .iter()
            .map(|(handle, overlay)| {
                let mut properties = JsonObject::new();
                properties.insert("name".into(), overlay.label.clone().into());
                Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(geojson::Value::from(&overlay.polygon))),
                    id: Some(Id::Number(handle.0.into())),
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();
        FeatureCollection {
            bbox: self
                .view
                .map(|it| vec![it.min().x, it.min().y, it.max().x, it.max().y]),
            features,
            foreign_members: None,
        }
    }
}

impl MapView for GeoJsonMap {
    fn draw_area(&mut self, area: &Area) -> OverlayHandle {
        self.next_id += 1;
        let handle = OverlayHandle(self.next_id);
        debug!(name = %area.name, ?handle, "Drawing area");
        self.overlays.insert(
            handle,
            Overlay {
                label: area.name.clone(),
                polygon: area.polygon(),
            },
        );
        handle
    }

    fn remove_overlay(&mut self, overlay: OverlayHandle) {
        if self.overlays.remove(&overlay).is_none() {
            warn!(?overlay, "Tried to remove unknown overlay");
        }
    }

    fn fit_bounds(&mut self, overlay: OverlayHandle) {
        match self.overlays.get(&overlay) {
            Some(it) => self.view = it.polygon.bounding_rect(),
            None => warn!(?overlay, "Tried to focus unknown overlay"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{GeoJsonMap, MapView};
    use crate::area::{Area, OverlayHandle};
    use crate::test::mock_ring;

    #[test]
    fn draw_area() {
        let mut map = GeoJsonMap::new();
        let first = map.draw_area(&Area::new("North", mock_ring()));
        let second = map.draw_area(&Area::new("South", mock_ring()));
        assert_ne!(first, second);
        assert_eq!(2, map.overlay_count());
        assert!(map.view().is_none());
    }

    #[test]
    fn fit_bounds() {
        let mut map = GeoJsonMap::new();
        let overlay = map.draw_area(&Area::new(
            "North",
            vec![[37.1, 55.1], [37.3, 55.1], [37.3, 55.4], [37.1, 55.4]],
        ));
        map.fit_bounds(overlay);
        let view = map.view().unwrap();
        assert_eq!(37.1, view.min().x);
        assert_eq!(55.1, view.min().y);
        assert_eq!(37.3, view.max().x);
        assert_eq!(55.4, view.max().y);
    }

    #[test]
    fn unknown_overlay_is_ignored() {
        let mut map = GeoJsonMap::new();
        map.fit_bounds(OverlayHandle(42));
        map.remove_overlay(OverlayHandle(42));
        assert!(map.view().is_none());
        assert_eq!(0, map.overlay_count());
    }

    #[test]
    fn remove_overlay() {
        let mut map = GeoJsonMap::new();
        let overlay = map.draw_area(&Area::new("North", mock_ring()));
        map.remove_overlay(overlay);
        assert_eq!(0, map.overlay_count());
        assert!(map.to_geojson().features.is_empty());
    }

    #[test]
    fn to_geojson() {
        let mut map = GeoJsonMap::new();
        let overlay = map.draw_area(&Area::new("North", mock_ring()));
        map.fit_bounds(overlay);
        let collection = map.to_geojson();
        assert_eq!(1, collection.features.len());
        let feature = &collection.features[0];
        assert_eq!(Some("North"), feature.property("name").and_then(|it| it.as_str()));
        assert!(matches!(
            feature.geometry.as_ref().map(|it| &it.value),
            Some(geojson::Value::Polygon(_)),
        ));
        assert_eq!(Some(4), collection.bbox.map(|it| it.len()));
    }
}
