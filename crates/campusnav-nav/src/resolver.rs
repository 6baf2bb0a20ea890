use campusnav_core::error::{CampusError, Result};
use campusnav_core::models::{Building, BuildingId};
use campusnav_store::ReferenceTables;

/// Looks up buildings by display name or id
pub struct BuildingResolver<'a> {
    buildings: &'a [Building],
}

impl<'a> BuildingResolver<'a> {
    pub fn new(buildings: &'a [Building]) -> Self {
        Self { buildings }
    }

    pub fn from_tables<T: ReferenceTables>(tables: &'a T) -> Self {
        Self::new(tables.buildings())
    }

    /// First building whose display name equals `name` exactly (case-sensitive)
    pub fn resolve(&self, name: &str) -> Result<&'a Building> {
        self.buildings
            .iter()
            .find(|b| b.name == name)
            .ok_or_else(|| CampusError::BuildingNotFound { name: name.to_string() })
    }

    /// First building with the given id
    pub fn by_id(&self, id: &BuildingId) -> Result<&'a Building> {
        self.buildings
            .iter()
            .find(|b| &b.id == id)
            .ok_or_else(|| CampusError::BuildingIdNotFound { id: id.clone() })
    }

    /// Display names in table order, as offered by the selectors
    pub fn names(&self) -> Vec<&'a str> {
        self.buildings.iter().map(|b| b.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buildings() -> Vec<Building> {
        vec![
            Building::new(1, "Library", 21.50, 39.24),
            Building::new(2, "Gym", 21.51, 39.25),
            Building::new(3, "Library", 21.52, 39.26),
        ]
    }

    #[test]
    fn test_resolve_exact_name() {
        let buildings = buildings();
        let resolver = BuildingResolver::new(&buildings);

        let gym = resolver.resolve("Gym").unwrap();
        assert_eq!(gym.id, BuildingId::from(2));
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let buildings = buildings();
        let resolver = BuildingResolver::new(&buildings);

        assert_eq!(resolver.resolve("Library").unwrap().id, BuildingId::from(1));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let buildings = buildings();
        let resolver = BuildingResolver::new(&buildings);

        let err = resolver.resolve("library").unwrap_err();
        assert!(matches!(err, CampusError::BuildingNotFound { ref name } if name == "library"));
        assert!(err.is_not_found());
        assert!(resolver.resolve("Lib").is_err());
    }

    #[test]
    fn test_by_id() {
        let buildings = buildings();
        let resolver = BuildingResolver::new(&buildings);

        assert_eq!(resolver.by_id(&BuildingId::from(2)).unwrap().name, "Gym");
        assert!(matches!(
            resolver.by_id(&BuildingId::from(9)),
            Err(CampusError::BuildingIdNotFound { .. })
        ));
    }

    #[test]
    fn test_names_in_table_order() {
        let buildings = buildings();
        let resolver = BuildingResolver::new(&buildings);
        assert_eq!(resolver.names(), vec!["Library", "Gym", "Library"]);
    }
}
