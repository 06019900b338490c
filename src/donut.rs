//! Dona del menu. El precio depende solo del tipo; el sabor se usa para mostrarla y compararla.
use rust_decimal::Decimal;

use crate::{
    choices::DonutType,
    constants::{CAKE_DONUT_PRICE, DONUT_HOLE_PRICE, YEAST_DONUT_PRICE},
    errors::CafeError,
};

/// Dos donas son iguales si tienen el mismo tipo y el mismo sabor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Donut {
    donut_type: DonutType,
    flavor: String,
}

impl Donut {
    pub fn new(donut_type: DonutType, flavor: impl Into<String>) -> Donut {
        Donut {
            donut_type,
            flavor: flavor.into(),
        }
    }

    pub fn from_token(donut_type: &str, flavor: impl Into<String>) -> Result<Donut, CafeError> {
        Ok(Donut::new(donut_type.parse()?, flavor))
    }

    /// Crea la dona elegida en el menu por su nombre completo, por ejemplo "Yeast Glazed".
    /// El sabor queda como el nombre en mayusculas con guiones bajos ("YEAST_GLAZED").
    pub fn from_menu_name(name: &str) -> Result<Donut, CafeError> {
        let donut_type = DonutType::from_menu_name(name)?;
        Ok(Donut::new(donut_type, name.trim().to_uppercase().replace(' ', "_")))
    }

    pub fn donut_type(&self) -> DonutType {
        self.donut_type
    }

    pub fn flavor(&self) -> &str {
        &self.flavor
    }

    pub fn price(&self) -> Decimal {
        match self.donut_type {
            DonutType::Yeast => YEAST_DONUT_PRICE,
            DonutType::Cake => CAKE_DONUT_PRICE,
            DonutType::DonutHole => DONUT_HOLE_PRICE,
        }
    }

    pub fn description(&self) -> String {
        format!("Donut: {}", self.flavor)
    }
}
