use serde::{Deserialize, Serialize};

/// One dish from the restaurant menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,

    pub dish_name: String,

    #[serde(default)]
    pub dish_category: Option<String>,

    #[serde(default)]
    pub dish_price: i64,

    /// Portion weight.
    #[serde(default)]
    pub dish_g: Option<String>,

    #[serde(default)]
    pub size: Option<String>,

    #[serde(default)]
    pub simple_ingridients: Option<String>,

    #[serde(default)]
    pub additional_dishes: Option<String>,

    #[serde(default)]
    pub iiko_id: Option<String>,

    #[serde(default)]
    pub dish_rec_nutritionist: Option<String>,

    #[serde(default)]
    pub stat_reviews: Option<String>,

    #[serde(default)]
    pub stat_rating: Option<String>,
}

/// Optional filters for menu listing and search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuFilter {
    pub category: Option<String>,
    pub restaurant: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
}

impl MenuFilter {
    /// Query parameters for the filters that are set.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(c) = &self.category {
            pairs.push(("category".to_string(), c.clone()));
        }
        if let Some(r) = &self.restaurant {
            pairs.push(("restaurant".to_string(), r.clone()));
        }
        if let Some(p) = self.min_price {
            pairs.push(("min_price".to_string(), p.to_string()));
        }
        if let Some(p) = self.max_price {
            pairs.push(("max_price".to_string(), p.to_string()));
        }
        pairs
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}
