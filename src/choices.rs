//! Opciones enumeradas del menu y su validacion a partir de texto.
//! Toda la normalizacion de etiquetas (mayusculas, sinonimos de panes, nombres de donas)
//! se hace aca, de modo que el resto del modelo solo recibe valores ya validados.
use std::{fmt, str::FromStr};

use crate::errors::CafeError;

/// Convierte un token libre al formato canonico: sin espacios alrededor y en mayusculas
fn normalize(token: &str) -> String {
    token.trim().to_uppercase()
}

fn invalid(kind: &str, value: &str) -> CafeError {
    CafeError::InvalidArgument(format!("Unknown {}: {}", kind, value))
}

/// Tamaño del vaso de cafe. El orden de las variantes define el incremento de precio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CupSize {
    Short,
    Tall,
    Grande,
    Venti,
}

impl CupSize {
    pub fn ordinal(&self) -> u32 {
        match self {
            CupSize::Short => 0,
            CupSize::Tall => 1,
            CupSize::Grande => 2,
            CupSize::Venti => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CupSize::Short => "SHORT",
            CupSize::Tall => "TALL",
            CupSize::Grande => "GRANDE",
            CupSize::Venti => "VENTI",
        }
    }
}

impl FromStr for CupSize {
    type Err = CafeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "SHORT" => Ok(CupSize::Short),
            "TALL" => Ok(CupSize::Tall),
            "GRANDE" => Ok(CupSize::Grande),
            "VENTI" => Ok(CupSize::Venti),
            _ => Err(invalid("cup size", s)),
        }
    }
}

/// Sabores que se le pueden agregar a un cafe. Todos cuestan lo mismo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CoffeeAddOn {
    FrenchVanilla,
    SweetCream,
    IrishCream,
    Caramel,
    Mocha,
}

impl FromStr for CoffeeAddOn {
    type Err = CafeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Se aceptan tanto "FRENCH_VANILLA" como "French Vanilla"
        match normalize(s).replace(' ', "_").as_str() {
            "FRENCH_VANILLA" => Ok(CoffeeAddOn::FrenchVanilla),
            "SWEET_CREAM" => Ok(CoffeeAddOn::SweetCream),
            "IRISH_CREAM" => Ok(CoffeeAddOn::IrishCream),
            "CARAMEL" => Ok(CoffeeAddOn::Caramel),
            "MOCHA" => Ok(CoffeeAddOn::Mocha),
            _ => Err(invalid("coffee add-on", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DonutType {
    Yeast,
    Cake,
    DonutHole,
}

impl DonutType {
    /// Obtiene el tipo de dona a partir del nombre que figura en el menu,
    /// por ejemplo "Yeast Glazed" o "Donut Hole Jelly".
    pub fn from_menu_name(name: &str) -> Result<DonutType, CafeError> {
        if name.contains("Yeast") {
            Ok(DonutType::Yeast)
        } else if name.contains("Cake") {
            Ok(DonutType::Cake)
        } else if name.contains("Donut Hole") {
            Ok(DonutType::DonutHole)
        } else {
            Err(invalid("donut", name))
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DonutType::Yeast => "YEAST",
            DonutType::Cake => "CAKE",
            DonutType::DonutHole => "DONUT_HOLE",
        }
    }
}

impl FromStr for DonutType {
    type Err = CafeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "YEAST" => Ok(DonutType::Yeast),
            "CAKE" => Ok(DonutType::Cake),
            "DONUT_HOLE" => Ok(DonutType::DonutHole),
            _ => Err(invalid("donut type", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Meat {
    Chicken,
    Fish,
    Beef,
}

impl Meat {
    pub fn name(&self) -> &'static str {
        match self {
            Meat::Chicken => "CHICKEN",
            Meat::Fish => "FISH",
            Meat::Beef => "BEEF",
        }
    }
}

impl FromStr for Meat {
    type Err = CafeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "CHICKEN" => Ok(Meat::Chicken),
            "FISH" => Ok(Meat::Fish),
            "BEEF" => Ok(Meat::Beef),
            _ => Err(invalid("meat", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bread {
    WheatToast,
    Bagel,
    SourDough,
}

impl Bread {
    /// Traduce la etiqueta que ve el usuario ("Wheat Toast", "Sour Dough", "Bagel") al pan correspondiente.
    /// No distingue mayusculas de minusculas.
    pub fn from_label(label: &str) -> Result<Bread, CafeError> {
        match normalize(label).as_str() {
            "WHEAT TOAST" => Ok(Bread::WheatToast),
            "SOUR DOUGH" => Ok(Bread::SourDough),
            "BAGEL" => Ok(Bread::Bagel),
            _ => Err(invalid("bread", label)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Bread::WheatToast => "WHEAT_TOAST",
            Bread::Bagel => "BAGEL",
            Bread::SourDough => "SOUR_DOUGH",
        }
    }
}

impl FromStr for Bread {
    type Err = CafeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "WHEAT_TOAST" => Ok(Bread::WheatToast),
            "BAGEL" => Ok(Bread::Bagel),
            "SOUR_DOUGH" => Ok(Bread::SourDough),
            _ => Err(invalid("bread", s)),
        }
    }
}

/// Agregados de un sandwich. Cada uno se cobra por separado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SandwichAddOn {
    Cheese,
    Lettuce,
    Tomatoes,
    Onions,
}

impl SandwichAddOn {
    pub fn name(&self) -> &'static str {
        match self {
            SandwichAddOn::Cheese => "CHEESE",
            SandwichAddOn::Lettuce => "LETTUCE",
            SandwichAddOn::Tomatoes => "TOMATOES",
            SandwichAddOn::Onions => "ONIONS",
        }
    }
}

impl FromStr for SandwichAddOn {
    type Err = CafeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "CHEESE" => Ok(SandwichAddOn::Cheese),
            "LETTUCE" => Ok(SandwichAddOn::Lettuce),
            "TOMATOES" => Ok(SandwichAddOn::Tomatoes),
            "ONIONS" => Ok(SandwichAddOn::Onions),
            _ => Err(invalid("sandwich add-on", s)),
        }
    }
}

macro_rules! display_by_name {
    ($($choice:ty),*) => {
        $(impl fmt::Display for $choice {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.name())
            }
        })*
    };
}

display_by_name!(CupSize, DonutType, Meat, Bread, SandwichAddOn);
