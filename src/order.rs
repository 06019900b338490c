//! Pedido en curso: la lista de productos que el cliente va armando antes de confirmarlo.
use log::{debug, warn};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    constants::{MONEY_DECIMAL_PLACES, SALES_TAX_RATE},
    errors::CafeError,
    menu_item::MenuItem,
};

/// Identificador de una linea de pedido. Dos cafes iguales agregados por separado son dos lineas distintas,
/// y lleva el numero de pedido para que una linea de otro pedido nunca coincida.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId {
    order_number: u64,
    index: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderEntry {
    pub line: LineId,
    pub item: MenuItem,
}

/// Montos a cobrar por un pedido
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bill {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl Bill {
    pub fn from_subtotal(subtotal: Decimal) -> Bill {
        let tax = (subtotal * SALES_TAX_RATE)
            .round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        Bill {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

#[derive(Debug)]
pub struct Order {
    order_number: u64,
    items: Vec<OrderEntry>,
    next_line: u64,
}

impl Order {
    pub fn new(order_number: u64) -> Order {
        Order {
            order_number,
            items: Vec::new(),
            next_line: 0,
        }
    }

    pub fn order_number(&self) -> u64 {
        self.order_number
    }

    /// Agrega el producto al final del pedido y devuelve la linea que ocupa
    pub fn add_item(&mut self, item: impl Into<MenuItem>) -> LineId {
        let line = LineId {
            order_number: self.order_number,
            index: self.next_line,
        };
        self.next_line += 1;
        let item = item.into();
        debug!("[ORDER {}] Added {}", self.order_number, item);
        self.items.push(OrderEntry { line, item });
        line
    }

    /// Agrega `quantity` copias del producto. Con cantidad 0 no se agrega nada.
    pub fn add_items(
        &mut self,
        item: impl Into<MenuItem>,
        quantity: u32,
    ) -> Result<Vec<LineId>, CafeError> {
        if quantity == 0 {
            return Err(CafeError::InvalidArgument(
                "Quantity must be a positive number".to_string(),
            ));
        }
        let item = item.into();
        Ok((0..quantity).map(|_| self.add_item(item.clone())).collect())
    }

    /// Quita la primera aparicion de la entrada. Las donas se buscan por valor,
    /// el resto de los productos por su linea y su contenido. Si no esta, no hace nada.
    pub fn remove_item(&mut self, entry: &OrderEntry) -> bool {
        let position = if entry.item.has_value_identity() {
            self.items.iter().position(|other| other.item == entry.item)
        } else {
            self.items
                .iter()
                .position(|other| other.line == entry.line && other.item == entry.item)
        };
        match position {
            Some(index) => {
                let removed = self.items.remove(index);
                debug!("[ORDER {}] Removed {}", self.order_number, removed.item);
                true
            }
            None => {
                warn!(
                    "[ORDER {}] Tried to remove {} but it is not in the order",
                    self.order_number, entry.item
                );
                false
            }
        }
    }

    pub fn calculate_total(&self) -> Decimal {
        self.items.iter().map(|entry| entry.item.price()).sum()
    }

    pub fn bill(&self) -> Bill {
        Bill::from_subtotal(self.calculate_total())
    }

    /// Devuelve una copia de las entradas, modificarla no altera el pedido
    pub fn get_items(&self) -> Vec<OrderEntry> {
        self.items.clone()
    }

    /// Copia de los productos sin sus lineas, tal como se guardan en el historial
    pub fn snapshot(&self) -> Vec<MenuItem> {
        self.items.iter().map(|entry| entry.item.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
