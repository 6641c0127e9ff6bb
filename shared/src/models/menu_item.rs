//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item entity
///
/// `description` goes over the wire as `menu_item_description`; the
/// column itself is called `description`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    /// Whole currency units
    pub price: i32,
    #[serde(rename = "menu_item_description", alias = "description", default)]
    pub description: String,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: i32,
    #[serde(rename = "menu_item_description", alias = "description", default)]
    pub description: String,
}

/// Full replace payload (PUT)
///
/// Name and price are required; an omitted description keeps the stored one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemReplace {
    pub name: String,
    pub price: i32,
    #[serde(rename = "menu_item_description", alias = "description", default)]
    pub description: Option<String>,
}

impl MenuItemReplace {
    pub fn apply_to(self, current: &MenuItem) -> MenuItemCreate {
        MenuItemCreate {
            name: self.name,
            price: self.price,
            description: self
                .description
                .unwrap_or_else(|| current.description.clone()),
        }
    }
}

/// Partial update payload (PATCH)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub price: Option<i32>,
    #[serde(rename = "menu_item_description", alias = "description")]
    pub description: Option<String>,
}

impl MenuItemUpdate {
    /// Overlay the present fields onto `current`, producing a full payload
    pub fn apply_to(self, current: &MenuItem) -> MenuItemCreate {
        MenuItemCreate {
            name: self.name.unwrap_or_else(|| current.name.clone()),
            price: self.price.unwrap_or(current.price),
            description: self
                .description
                .unwrap_or_else(|| current.description.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_name_for_description() {
        let item = MenuItem {
            id: 1,
            name: "Greek Salad".into(),
            price: 12,
            description: "Crispy lettuce".into(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Greek Salad",
                "price": 12,
                "menu_item_description": "Crispy lettuce"
            })
        );
    }

    #[test]
    fn test_create_accepts_alias_and_default() {
        let c: MenuItemCreate =
            serde_json::from_str(r#"{"name":"Bruschetta","price":8,"description":"Toasted"}"#)
                .unwrap();
        assert_eq!(c.description, "Toasted");

        let c: MenuItemCreate = serde_json::from_str(r#"{"name":"Bruschetta","price":8}"#).unwrap();
        assert_eq!(c.description, "");
    }

    #[test]
    fn test_patch_overlays_present_fields() {
        let current = MenuItem {
            id: 3,
            name: "Lemon Dessert".into(),
            price: 6,
            description: "Grandma's recipe".into(),
        };
        let patch: MenuItemUpdate = serde_json::from_str(r#"{"price":7}"#).unwrap();
        let merged = patch.apply_to(&current);
        assert_eq!(merged.name, "Lemon Dessert");
        assert_eq!(merged.price, 7);
        assert_eq!(merged.description, "Grandma's recipe");
    }

    #[test]
    fn test_replace_keeps_description_when_omitted() {
        let current = MenuItem {
            id: 3,
            name: "Bruschetta".into(),
            price: 8,
            description: "Toasted".into(),
        };
        let put: MenuItemReplace = serde_json::from_str(r#"{"name":"Bruschetta","price":9}"#).unwrap();
        let replaced = put.apply_to(&current);
        assert_eq!(replaced.price, 9);
        assert_eq!(replaced.description, "Toasted");

        let put: MenuItemReplace =
            serde_json::from_str(r#"{"name":"B","price":9,"menu_item_description":""}"#).unwrap();
        assert_eq!(put.apply_to(&current).description, "");

        assert!(serde_json::from_str::<MenuItemReplace>(r#"{"name":"B"}"#).is_err());
    }
}
