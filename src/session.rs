use crate::{
    area::{self, Area, AreaCollection, AreaStore},
    map::MapView,
    Error, Result,
};
use tracing::{info, warn};

/// Loaded areas together with the map they are drawn on and the current selection.
pub struct Session<M> {
    store: AreaStore,
    map: M,
    selected: Option<String>,
}

impl<M: MapView> Session<M> {
    pub fn new(map: M) -> Self {
        Session {
            store: AreaStore::new(AreaCollection::new()),
            map,
            selected: None,
        }
    }

    /// Replaces all areas with the ones found in `raw`, previously drawn overlays are
    /// removed from the map. Returns the placemarks that had to be skipped. A malformed
    /// document leaves the session untouched.
    pub fn parse_boundaries(&mut self, raw: &str) -> Result<Vec<Error>> {
        let parsed = area::parse(raw)?;
        for overlay in self.store.overlays() {
            self.map.remove_overlay(overlay);
        }
        self.store.clear();
        self.selected = None;
        if parsed.areas.is_empty() {
            warn!("Boundary document has no usable placemarks");
        } else {
            self.store.replace(parsed.areas);
        }
        info!(
            areas = self.store.len(),
            empty = self.store.is_empty(),
            "Loaded boundaries",
        );
        Ok(parsed.rejected)
    }

    /// Draws the area unless it's already on the map, then focuses on it.
    pub fn select_area(&mut self, name: &str) -> Result<()> {
        let area = self.store.get(name)?;
        let existing = area.overlay;
        let overlay = match existing {
            Some(overlay) => overlay,
            None => {
                let overlay = self.map.draw_area(area);
                self.store.mark_rendered(name, overlay)?;
                overlay
            }
        };
        self.map.fit_bounds(overlay);
        self.selected = Some(name.into());
        Ok(())
    }

    pub fn selected_area(&self) -> Option<&Area> {
        self.selected
            .as_deref()
            .and_then(|it| self.store.get(it).ok())
    }

    pub fn store(&self) -> &AreaStore {
        &self.store
    }

    pub fn map(&self) -> &M {
        &self.map
    }
}
