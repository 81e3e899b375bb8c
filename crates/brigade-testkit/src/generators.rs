//! Proptest strategies for property-based testing.

use proptest::prelude::*;

use brigade_core::{AuditRecord, DietaryType, EntityKind, MenuItem, Money};
use brigade_perms::{Role, Staff};

/// Strategy over the three staff roles.
pub fn role_strategy() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Manager), Just(Role::Waiter), Just(Role::Chef)]
}

/// Strategy over staff members with short alphanumeric identifiers.
pub fn staff_strategy() -> impl Strategy<Value = Staff> {
    ("[a-z][a-z0-9]{0,7}", "[A-Z][a-z]{1,9}", role_strategy())
        .prop_map(|(id, name, role)| Staff::new(id, name, role))
}

/// Strategy over entity kinds.
pub fn entity_kind_strategy() -> impl Strategy<Value = EntityKind> {
    prop_oneof![
        Just(EntityKind::Menu),
        Just(EntityKind::Order),
        Just(EntityKind::Inventory),
        Just(EntityKind::Reservation),
        Just(EntityKind::Payment),
    ]
}

/// Strategy over audit records with arbitrary field content.
pub fn audit_record_strategy() -> impl Strategy<Value = AuditRecord> {
    (
        "[a-z][a-z0-9]{0,7}",
        role_strategy(),
        "[a-z]+\\.[a-z]+",
        entity_kind_strategy(),
        "[a-z0-9-]{1,12}",
        ".{0,40}",
    )
        .prop_map(|(actor, role, action, entity, entity_id, details)| {
            AuditRecord::new(actor, role.as_str(), action, entity, entity_id, details)
        })
}

/// Strategy over available leaf menu items (no combos).
pub fn menu_item_strategy() -> impl Strategy<Value = MenuItem> {
    let price = (50i64..5_000).prop_map(Money::from_cents);
    let dietary = prop_oneof![
        Just(DietaryType::Regular),
        Just(DietaryType::Vegetarian),
        Just(DietaryType::Vegan),
        Just(DietaryType::GlutenFree),
    ];

    prop_oneof![
        (
            "[a-z][a-z0-9]{1,7}",
            "[A-Z][a-z]{2,10}",
            price.clone(),
            dietary,
            proptest::collection::vec("[a-z]{2,8}", 1..4),
            1u32..30,
        )
            .prop_map(|(id, name, price, dietary, ingredients, prep)| {
                MenuItem::entree(id, name, "", price, dietary, ingredients, prep)
            }),
        ("[a-z][a-z0-9]{1,7}", "[A-Z][a-z]{2,10}", price.clone(), any::<bool>())
            .prop_map(|(id, name, price, alcoholic)| {
                MenuItem::drink(id, name, "", price, alcoholic)
            }),
        (
            "[a-z][a-z0-9]{1,7}",
            "[A-Z][a-z]{2,10}",
            price,
            proptest::collection::vec("[a-z]{2,8}", 0..3),
        )
            .prop_map(|(id, name, price, allergens)| {
                MenuItem::dessert(id, name, "", price, DietaryType::Regular, allergens)
            }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_items_are_available(item in menu_item_strategy()) {
            prop_assert!(item.available);
            prop_assert!(item.price() > Money::ZERO);
        }

        #[test]
        fn generated_records_carry_role_labels(record in audit_record_strategy()) {
            prop_assert!(matches!(record.role.as_str(), "manager" | "waiter" | "chef"));
        }
    }
}
