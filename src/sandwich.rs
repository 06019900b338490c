//! Sandwich del menu. Se cobra la carne y cada agregado; el pan no cambia el precio.
use std::collections::BTreeSet;

use log::warn;
use rust_decimal::Decimal;

use crate::{
    choices::{Bread, Meat, SandwichAddOn},
    constants::{
        BEEF_PRICE, CHEESE_PRICE, CHICKEN_PRICE, FISH_PRICE, LETTUCE_PRICE, ONIONS_PRICE,
        TOMATOES_PRICE,
    },
    errors::CafeError,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sandwich {
    meat: Option<Meat>,
    bread: Bread,
    add_ons: BTreeSet<SandwichAddOn>,
}

impl Sandwich {
    pub fn new(meat: Option<Meat>, bread: Bread, add_ons: BTreeSet<SandwichAddOn>) -> Sandwich {
        if meat.is_none() {
            // TODO decidir si un sandwich sin carne deberia rechazarse en lugar de costar 0
            warn!("Sandwich on {} created without meat, it will be priced at 0", bread);
        }
        Sandwich {
            meat,
            bread,
            add_ons,
        }
    }

    /// Crea un sandwich a partir de tokens canonicos ("BEEF", "WHEAT_TOAST", "CHEESE").
    /// Los agregados repetidos se cuentan una sola vez.
    pub fn from_tokens<S: AsRef<str>>(
        meat: Option<&str>,
        bread: &str,
        add_ons: &[S],
    ) -> Result<Sandwich, CafeError> {
        let meat: Option<Meat> = meat.map(str::parse).transpose()?;
        let bread: Bread = bread.parse()?;
        let add_ons = parse_add_ons(add_ons)?;
        Ok(Sandwich::new(meat, bread, add_ons))
    }

    pub fn meat(&self) -> Option<Meat> {
        self.meat
    }

    pub fn bread(&self) -> Bread {
        self.bread
    }

    pub fn add_ons(&self) -> &BTreeSet<SandwichAddOn> {
        &self.add_ons
    }

    /// Un sandwich sin carne cuesta 0.
    pub fn price(&self) -> Decimal {
        let meat_price = match self.meat {
            None => return Decimal::ZERO,
            Some(Meat::Chicken) => CHICKEN_PRICE,
            Some(Meat::Fish) => FISH_PRICE,
            Some(Meat::Beef) => BEEF_PRICE,
        };
        self.add_ons
            .iter()
            .map(|add_on| match add_on {
                SandwichAddOn::Cheese => CHEESE_PRICE,
                SandwichAddOn::Lettuce => LETTUCE_PRICE,
                SandwichAddOn::Tomatoes => TOMATOES_PRICE,
                SandwichAddOn::Onions => ONIONS_PRICE,
            })
            .fold(meat_price, |total, price| total + price)
    }

    pub fn description(&self) -> String {
        let meat = self.meat.map_or("None", |meat| meat.name());
        let add_ons: Vec<&str> = self.add_ons.iter().map(|add_on| add_on.name()).collect();
        format!(
            "Sandwich: Meat - {}, Bread - {}, Add-ons - {}",
            meat,
            self.bread,
            add_ons.join(", ")
        )
    }
}

/// Crea un sandwich traduciendo la etiqueta del pan que ve el usuario ("Wheat Toast", "Sour Dough", "Bagel")
pub fn create_sandwich<S: AsRef<str>>(
    meat: Option<&str>,
    bread_label: &str,
    add_ons: &[S],
) -> Result<Sandwich, CafeError> {
    let bread = Bread::from_label(bread_label)?;
    let meat: Option<Meat> = meat.map(str::parse).transpose()?;
    let add_ons = parse_add_ons(add_ons)?;
    Ok(Sandwich::new(meat, bread, add_ons))
}

fn parse_add_ons<S: AsRef<str>>(add_ons: &[S]) -> Result<BTreeSet<SandwichAddOn>, CafeError> {
    add_ons
        .iter()
        .map(|add_on| add_on.as_ref().parse())
        .collect()
}
