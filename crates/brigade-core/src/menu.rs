//! Menu items and their variants.
//!
//! A menu item is a closed set of variants sharing one set of derived
//! operations. Combos fold over their components instead of carrying
//! their own price, ingredients, or prep flag.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Category of a menu item, derived from its variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuCategory {
    Entree,
    Drink,
    Dessert,
    Combo,
}

/// Dietary classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietaryType {
    Regular,
    Vegetarian,
    Vegan,
    GlutenFree,
}

/// Variant-specific data of a menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MenuVariant {
    Entree {
        ingredients: Vec<String>,
        prep_minutes: u32,
    },
    Drink {
        alcoholic: bool,
    },
    Dessert {
        allergens: Vec<String>,
    },
    Combo {
        components: Vec<MenuItem>,
        discount_percent: u8,
    },
}

/// A menu item: shared fields plus a variant.
///
/// The entity store owns canonical item state; orders capture value
/// copies at add-time, so later price changes never rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub base_price: Money,
    pub dietary: DietaryType,
    pub available: bool,
    pub variant: MenuVariant,
}

impl MenuItem {
    /// Create an entree.
    pub fn entree(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        dietary: DietaryType,
        ingredients: Vec<String>,
        prep_minutes: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            base_price: price,
            dietary,
            available: true,
            variant: MenuVariant::Entree {
                ingredients,
                prep_minutes,
            },
        }
    }

    /// Create a drink. Drinks are always classified as Regular.
    pub fn drink(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        alcoholic: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            base_price: price,
            dietary: DietaryType::Regular,
            available: true,
            variant: MenuVariant::Drink { alcoholic },
        }
    }

    /// Create a dessert.
    pub fn dessert(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        dietary: DietaryType,
        allergens: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            base_price: price,
            dietary,
            available: true,
            variant: MenuVariant::Dessert { allergens },
        }
    }

    /// Create a combo from component items and a discount percent.
    ///
    /// Price, ingredients, and the kitchen-prep flag are all derived by
    /// folding over the components.
    pub fn combo(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        components: Vec<MenuItem>,
        discount_percent: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            base_price: Money::ZERO,
            dietary: DietaryType::Regular,
            available: true,
            variant: MenuVariant::Combo {
                components,
                discount_percent,
            },
        }
    }

    /// The category this item belongs to.
    pub fn category(&self) -> MenuCategory {
        match self.variant {
            MenuVariant::Entree { .. } => MenuCategory::Entree,
            MenuVariant::Drink { .. } => MenuCategory::Drink,
            MenuVariant::Dessert { .. } => MenuCategory::Dessert,
            MenuVariant::Combo { .. } => MenuCategory::Combo,
        }
    }

    /// The effective price of this item.
    pub fn price(&self) -> Money {
        match &self.variant {
            MenuVariant::Combo {
                components,
                discount_percent,
            } => {
                let total: Money = components.iter().map(MenuItem::price).sum();
                total.apply_discount_percent(*discount_percent)
            }
            _ => self.base_price,
        }
    }

    /// Whether serving this item requires kitchen preparation.
    pub fn requires_kitchen_prep(&self) -> bool {
        match &self.variant {
            MenuVariant::Entree { .. } | MenuVariant::Dessert { .. } => true,
            MenuVariant::Drink { .. } => false,
            MenuVariant::Combo { components, .. } => {
                components.iter().any(MenuItem::requires_kitchen_prep)
            }
        }
    }

    /// Ingredients needed to serve this item.
    ///
    /// Combos fold over their components, deduplicated in first-occurrence
    /// order.
    pub fn required_ingredients(&self) -> Vec<String> {
        match &self.variant {
            MenuVariant::Entree { ingredients, .. } => ingredients.clone(),
            MenuVariant::Drink { .. } | MenuVariant::Dessert { .. } => {
                vec![self.name.to_lowercase()]
            }
            MenuVariant::Combo { components, .. } => {
                let mut seen = Vec::new();
                for component in components {
                    for ingredient in component.required_ingredients() {
                        if !seen.contains(&ingredient) {
                            seen.push(ingredient);
                        }
                    }
                }
                seen
            }
        }
    }

    /// Whether a drink requires age verification. Always false for other
    /// variants.
    pub fn requires_age_verification(&self) -> bool {
        matches!(self.variant, MenuVariant::Drink { alcoholic: true })
    }

    /// Allergens declared for a dessert; empty for other variants.
    pub fn allergens(&self) -> &[String] {
        match &self.variant {
            MenuVariant::Dessert { allergens } => allergens,
            _ => &[],
        }
    }

    /// A copy of this item with a new base price; every other field is
    /// unchanged.
    pub fn with_price(&self, price: Money) -> Self {
        Self {
            base_price: price,
            ..self.clone()
        }
    }

    /// Toggle availability. Maintained by the service layer from the
    /// linked inventory item's stock status.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}
