//! Cafe del menu. Su precio depende del tamaño del vaso y de la cantidad de sabores agregados.
use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::{
    choices::{CoffeeAddOn, CupSize},
    constants::{COFFEE_ADDON_PRICE, COFFEE_BASE_PRICE, COFFEE_SIZE_INCREMENT},
    errors::CafeError,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coffee {
    size: CupSize,
    addon_count: u32,
}

impl Coffee {
    pub fn new(size: CupSize, addon_count: u32) -> Coffee {
        Coffee { size, addon_count }
    }

    /// Crea un cafe a partir del token del tamaño elegido (por ejemplo "grande")
    pub fn from_token(size: &str, addon_count: u32) -> Result<Coffee, CafeError> {
        Ok(Coffee::new(size.parse()?, addon_count))
    }

    /// Crea un cafe con los sabores marcados. Cada sabor cuenta una sola vez.
    pub fn with_add_ons(size: CupSize, add_ons: &BTreeSet<CoffeeAddOn>) -> Coffee {
        Coffee::new(size, add_ons.len() as u32)
    }

    pub fn size(&self) -> CupSize {
        self.size
    }

    pub fn addon_count(&self) -> u32 {
        self.addon_count
    }

    pub fn price(&self) -> Decimal {
        COFFEE_BASE_PRICE
            + COFFEE_SIZE_INCREMENT * Decimal::from(self.size.ordinal())
            + COFFEE_ADDON_PRICE * Decimal::from(self.addon_count)
    }

    pub fn description(&self) -> String {
        format!("Coffee: Size-{}, Added Flavors-{}", self.size, self.addon_count)
    }
}
