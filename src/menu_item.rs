//! Producto que se puede pedir en el cafe.
use std::fmt;

use rust_decimal::Decimal;

use crate::{coffee::Coffee, donut::Donut, sandwich::Sandwich};

/// Conjunto cerrado de productos del menu. Cada variante conoce su propio precio.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MenuItem {
    Coffee(Coffee),
    Donut(Donut),
    Sandwich(Sandwich),
}

impl MenuItem {
    pub fn price(&self) -> Decimal {
        match self {
            MenuItem::Coffee(coffee) => coffee.price(),
            MenuItem::Donut(donut) => donut.price(),
            MenuItem::Sandwich(sandwich) => sandwich.price(),
        }
    }

    pub fn description(&self) -> String {
        match self {
            MenuItem::Coffee(coffee) => coffee.description(),
            MenuItem::Donut(donut) => donut.description(),
            MenuItem::Sandwich(sandwich) => sandwich.description(),
        }
    }

    /// Indica si el producto se identifica por su valor (solo las donas) y no por su linea en el pedido
    pub fn has_value_identity(&self) -> bool {
        matches!(self, MenuItem::Donut(_))
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl From<Coffee> for MenuItem {
    fn from(coffee: Coffee) -> Self {
        MenuItem::Coffee(coffee)
    }
}

impl From<Donut> for MenuItem {
    fn from(donut: Donut) -> Self {
        MenuItem::Donut(donut)
    }
}

impl From<Sandwich> for MenuItem {
    fn from(sandwich: Sandwich) -> Self {
        MenuItem::Sandwich(sandwich)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeSet, str::FromStr};

    use super::*;
    use crate::choices::{Bread, CupSize, DonutType, Meat};

    #[test]
    fn should_dispatch_price_to_each_variant() {
        let coffee = MenuItem::from(Coffee::new(CupSize::Tall, 0));
        let donut = MenuItem::from(Donut::new(DonutType::Cake, "PLAIN"));
        let sandwich = MenuItem::from(Sandwich::new(Some(Meat::Fish), Bread::Bagel, BTreeSet::new()));
        assert_eq!(Decimal::from_str("2.49").unwrap(), coffee.price());
        assert_eq!(Decimal::from_str("1.89").unwrap(), donut.price());
        assert_eq!(Decimal::from_str("9.99").unwrap(), sandwich.price());
    }

    #[test]
    fn should_display_the_item_description() {
        let donut = MenuItem::from(Donut::new(DonutType::Yeast, "Glazed"));
        assert_eq!("Donut: Glazed", donut.to_string());
    }

    #[test]
    fn should_only_give_value_identity_to_donuts() {
        assert_eq!(true, MenuItem::from(Donut::new(DonutType::Yeast, "Glazed")).has_value_identity());
        assert_eq!(false, MenuItem::from(Coffee::new(CupSize::Short, 0)).has_value_identity());
    }
}
