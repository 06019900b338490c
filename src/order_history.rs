//! Historial de pedidos confirmados durante la vida del proceso
use log::info;
use rust_decimal::Decimal;

use crate::menu_item::MenuItem;

/// Pedidos confirmados, cada uno guardado como una copia independiente de sus productos.
/// Las posiciones no son estables: al cancelar un pedido los siguientes se corren un lugar.
#[derive(Debug, Default)]
pub struct OrderHistory {
    orders: Vec<Vec<MenuItem>>,
}

impl OrderHistory {
    pub fn new() -> OrderHistory {
        OrderHistory { orders: Vec::new() }
    }

    pub fn all_orders(&self) -> &[Vec<MenuItem>] {
        &self.orders
    }

    /// Acceso a la coleccion viva, para editar el historial en el lugar
    pub fn all_orders_mut(&mut self) -> &mut Vec<Vec<MenuItem>> {
        &mut self.orders
    }

    /// Guarda una copia de los productos como un nuevo pedido y devuelve su posicion
    pub fn place(&mut self, items: &[MenuItem]) -> usize {
        self.orders.push(items.to_vec());
        let position = self.orders.len() - 1;
        info!("[HISTORY] Placed order at position {} with {} items", position, items.len());
        position
    }

    /// Quita el pedido en esa posicion. Si la posicion no existe no hace nada.
    pub fn cancel(&mut self, index: usize) -> Option<Vec<MenuItem>> {
        if index >= self.orders.len() {
            return None;
        }
        info!("[HISTORY] Cancelled order at position {}", index);
        Some(self.orders.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&[MenuItem]> {
        self.orders.get(index).map(Vec::as_slice)
    }

    pub fn total_of(&self, index: usize) -> Option<Decimal> {
        self.get(index)
            .map(|items| items.iter().map(MenuItem::price).sum())
    }

    /// Nombres para mostrar ("Order 1", "Order 2", ...), calculados con la posicion actual
    pub fn labels(&self) -> Vec<String> {
        (1..=self.orders.len())
            .map(|position| format!("Order {}", position))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::{
        choices::{CupSize, DonutType},
        coffee::Coffee,
        donut::Donut,
    };

    fn coffee_order() -> Vec<MenuItem> {
        vec![MenuItem::from(Coffee::new(CupSize::Venti, 1))]
    }

    fn donut_order(flavor: &str) -> Vec<MenuItem> {
        vec![MenuItem::from(Donut::new(DonutType::Yeast, flavor))]
    }

    #[test]
    fn should_create_an_empty_history() {
        let history = OrderHistory::new();
        assert_eq!(true, history.is_empty());
        assert_eq!(true, history.labels().is_empty());
    }

    #[test]
    fn should_place_orders_at_the_end() {
        let mut history = OrderHistory::new();
        assert_eq!(0, history.place(&coffee_order()));
        assert_eq!(1, history.place(&donut_order("Glazed")));
        assert_eq!(Some(coffee_order().as_slice()), history.get(0));
    }

    #[test]
    fn should_cancel_and_shift_following_orders() {
        let mut history = OrderHistory::new();
        history.place(&coffee_order());
        history.place(&donut_order("Glazed"));
        history.place(&donut_order("Plain"));

        let cancelled = history.cancel(0);

        assert_eq!(Some(coffee_order()), cancelled);
        assert_eq!(2, history.len());
        assert_eq!(Some(donut_order("Glazed").as_slice()), history.get(0));
        assert_eq!(Some(donut_order("Plain").as_slice()), history.get(1));
    }

    #[test]
    fn should_ignore_cancel_out_of_range() {
        let mut history = OrderHistory::new();
        history.place(&coffee_order());
        assert_eq!(None, history.cancel(1));
        assert_eq!(1, history.len());
    }

    #[test]
    fn should_label_orders_by_current_position() {
        let mut history = OrderHistory::new();
        history.place(&coffee_order());
        history.place(&donut_order("Glazed"));
        history.place(&donut_order("Plain"));
        history.cancel(1);
        assert_eq!(vec!["Order 1".to_string(), "Order 2".to_string()], history.labels());
    }

    #[test]
    fn should_keep_an_independent_copy_of_placed_items() {
        let mut history = OrderHistory::new();
        let mut items = coffee_order();
        history.place(&items);
        items.push(MenuItem::from(Donut::new(DonutType::Cake, "PLAIN")));
        assert_eq!(Some(coffee_order().as_slice()), history.get(0));
    }

    #[test]
    fn should_total_a_placed_order() {
        let mut history = OrderHistory::new();
        history.place(&[
            MenuItem::from(Coffee::new(CupSize::Short, 0)),
            MenuItem::from(Donut::new(DonutType::DonutHole, "Jelly")),
        ]);
        assert_eq!(Some(Decimal::from_str("2.38").unwrap()), history.total_of(0));
        assert_eq!(None, history.total_of(1));
    }

    #[test]
    fn should_allow_editing_the_live_collection() {
        let mut history = OrderHistory::new();
        history.place(&coffee_order());
        history.all_orders_mut()[0].clear();
        assert_eq!(true, history.all_orders()[0].is_empty());
    }
}
