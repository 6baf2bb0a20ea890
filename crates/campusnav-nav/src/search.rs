use campusnav_core::models::Building;

/// Buildings whose display name contains `query`, ignoring case, in table order.
///
/// The query is a literal substring. An empty query returns nothing rather
/// than every building.
pub fn search<'a>(buildings: &'a [Building], query: &str) -> Vec<&'a Building> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    buildings
        .iter()
        .filter(|b| b.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buildings() -> Vec<Building> {
        vec![
            Building::new(1, "Library", 21.50, 39.24),
            Building::new(2, "Gym", 21.51, 39.25),
            Building::new(3, "Central Library Annex", 21.52, 39.26),
            Building::new(4, "مكتبة الجامعة", 21.53, 39.27),
        ]
    }

    #[test]
    fn test_case_insensitive_substring() {
        let buildings = buildings();
        let names: Vec<&str> = search(&buildings, "LIB").iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Library", "Central Library Annex"]);
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let buildings = buildings();
        assert!(search(&buildings, "").is_empty());
    }

    #[test]
    fn test_no_match() {
        let buildings = buildings();
        assert!(search(&buildings, "stadium").is_empty());
    }

    #[test]
    fn test_query_is_literal() {
        let buildings = buildings();
        assert!(search(&buildings, "L.b").is_empty());
        assert_eq!(search(&buildings, " ").len(), 2);
    }

    #[test]
    fn test_non_latin_names() {
        let buildings = buildings();
        let found = search(&buildings, "مكتبة");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, campusnav_core::models::BuildingId::from(4));
    }
}
