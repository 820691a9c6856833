//! Order line items.
//!
//! An [`OrderItem`] is a closed set of variants sharing one capability
//! surface: name, unit price, quantity, line total and a metadata string.
//! Items are immutable once built.

use crate::menu::MenuEntry;
use crate::money::Cents;
use rust_decimal::Decimal;
use std::fmt;

/// A food line: a menu entry and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoodItem {
    pub entry: MenuEntry,
    pub quantity: u32,
}

/// A drink line. Refills are recorded but are not billed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DrinkItem {
    pub entry: MenuEntry,
    pub quantity: u32,
    pub refills: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrderItem {
    Food(FoodItem),
    Drink(DrinkItem),
}

impl OrderItem {
    /// Creates a food line. Callers validate `quantity >= 1` beforehand.
    pub fn food(entry: MenuEntry, quantity: u32) -> Self {
        OrderItem::Food(FoodItem { entry, quantity })
    }

    /// Creates a drink line. Callers validate `quantity >= 1` beforehand.
    pub fn drink(entry: MenuEntry, quantity: u32, refills: u32) -> Self {
        OrderItem::Drink(DrinkItem {
            entry,
            quantity,
            refills,
        })
    }

    fn entry(&self) -> &MenuEntry {
        match self {
            OrderItem::Food(food) => &food.entry,
            OrderItem::Drink(drink) => &drink.entry,
        }
    }

    pub fn name(&self) -> &str {
        &self.entry().name
    }

    pub fn unit_price(&self) -> Decimal {
        self.entry().unit_price
    }

    pub fn quantity(&self) -> u32 {
        match self {
            OrderItem::Food(food) => food.quantity,
            OrderItem::Drink(drink) => drink.quantity,
        }
    }

    /// `unit_price * quantity`. Refills never change the total.
    pub fn total(&self) -> Decimal {
        self.unit_price() * Decimal::from(self.quantity())
    }

    /// Human readable rendering of every field, used for the order signature.
    pub fn metadata(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OrderItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Price: {}, Quantity: {}",
            self.name(),
            Cents(self.unit_price()),
            self.quantity()
        )?;
        if let OrderItem::Drink(drink) = self {
            write!(f, ", Refills: {}", drink.refills)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_item() {
        let burger = OrderItem::food(MenuEntry::food("Burger", Decimal::new(599, 2)), 2);

        assert_eq!(burger.name(), "Burger");
        assert_eq!(burger.unit_price(), Decimal::new(599, 2));
        assert_eq!(burger.quantity(), 2);
        assert_eq!(burger.total(), Decimal::new(1198, 2));
        assert_eq!(burger.metadata(), "Name: Burger, Price: 5.99, Quantity: 2");
    }

    #[test]
    fn test_drink_refills_are_not_billed() {
        let entry = MenuEntry::drink("Pepsi", Decimal::new(299, 2));
        let plain = OrderItem::drink(entry.clone(), 3, 0);
        let refilled = OrderItem::drink(entry, 3, 4);

        assert_eq!(plain.total(), Decimal::new(897, 2));
        assert_eq!(refilled.total(), plain.total());
        assert_eq!(
            refilled.metadata(),
            "Name: Pepsi, Price: 2.99, Quantity: 3, Refills: 4"
        );
    }

    #[test]
    fn test_metadata_pads_price_to_two_decimals() {
        let water = OrderItem::drink(MenuEntry::drink("Water", Decimal::new(1, 0)), 1, 2);
        assert_eq!(water.metadata(), "Name: Water, Price: 1.00, Quantity: 1, Refills: 2");
    }

    #[test]
    fn test_metadata_rounds_price() {
        let odd = OrderItem::food(MenuEntry::food("Odd", Decimal::new(1005, 3)), 1);
        assert_eq!(odd.metadata(), "Name: Odd, Price: 1.01, Quantity: 1");
    }
}
