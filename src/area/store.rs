use super::{Area, AreaCollection, OverlayHandle};
use crate::{Error, Result};
use tracing::debug;

#[derive(Debug, Default)]
pub struct AreaStore {
    areas: AreaCollection,
}

impl AreaStore {
    pub fn new(areas: AreaCollection) -> AreaStore {
        AreaStore { areas }
    }

    pub fn list(&self) -> Vec<&str> {
        self.areas.names().collect()
    }

    pub fn areas(&self) -> impl Iterator<Item = &Area> {
        self.areas.iter()
    }

    pub fn get(&self, name: &str) -> Result<&Area> {
        self.areas
            .get(name)
            .ok_or_else(|| Error::NotFound(name.into()))
    }

    /// Callers are expected to check [Area::rendered] first, a second call is an error.
    pub fn mark_rendered(&mut self, name: &str, overlay: OverlayHandle) -> Result<()> {
        let area = self
            .areas
            .get_mut(name)
            .ok_or_else(|| Error::NotFound(name.into()))?;
        if area.rendered() {
            Err(Error::AlreadyRendered(name.into()))?
        }
        debug!(name, ?overlay, "Area rendered");
        area.overlay = Some(overlay);
        Ok(())
    }

    pub fn overlays(&self) -> Vec<OverlayHandle> {
        self.areas.iter().filter_map(|it| it.overlay).collect()
    }

    /// Overlays must be disposed of by the caller before clearing.
    pub fn clear(&mut self) {
        self.areas = AreaCollection::new();
    }

    pub fn replace(&mut self, areas: AreaCollection) {
        self.areas = areas;
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::AreaStore;
    use crate::area::{Area, AreaCollection, OverlayHandle};
    use crate::test::mock_ring;
    use crate::{Error, Result};

    fn mock_store() -> AreaStore {
        let mut areas = AreaCollection::new();
        areas.insert(Area::new("South", mock_ring()));
        areas.insert(Area::new("North", mock_ring()));
        AreaStore::new(areas)
    }

    #[test]
    fn list_in_parse_order() {
        assert_eq!(vec!["South", "North"], mock_store().list());
    }

    #[test]
    fn get() -> Result<()> {
        let store = mock_store();
        assert_eq!("North", store.get("North")?.name);
        assert!(matches!(store.get("West"), Err(Error::NotFound(name)) if name == "West"));
        Ok(())
    }

    #[test]
    fn mark_rendered() -> Result<()> {
        let mut store = mock_store();
        store.mark_rendered("North", OverlayHandle(7))?;
        let north = store.get("North")?;
        assert!(north.rendered());
        assert_eq!(Some(OverlayHandle(7)), north.overlay);
        assert!(!store.get("South")?.rendered());
        assert_eq!(vec![OverlayHandle(7)], store.overlays());
        Ok(())
    }

    #[test]
    fn mark_rendered_twice() -> Result<()> {
        let mut store = mock_store();
        store.mark_rendered("North", OverlayHandle(1))?;
        let res = store.mark_rendered("North", OverlayHandle(2));
        assert!(matches!(res, Err(Error::AlreadyRendered(_))));
        assert_eq!(Some(OverlayHandle(1)), store.get("North")?.overlay);
        Ok(())
    }

    #[test]
    fn mark_rendered_missing() {
        let mut store = mock_store();
        let res = store.mark_rendered("West", OverlayHandle(1));
        assert!(matches!(res, Err(Error::NotFound(_))));
    }

    #[test]
    fn clear() {
        let mut store = mock_store();
        store.clear();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn replace() -> Result<()> {
        let mut store = mock_store();
        store.mark_rendered("North", OverlayHandle(1))?;
        let mut areas = AreaCollection::new();
        areas.insert(Area::new("North", mock_ring()));
        store.replace(areas);
        assert_eq!(1, store.len());
        assert!(!store.get("North")?.rendered());
        assert!(store.overlays().is_empty());
        Ok(())
    }
}
