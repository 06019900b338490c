//! Sesion del cafe: el pedido en curso, la numeracion de pedidos y el historial.
use log::{info, warn};

use crate::{errors::CafeError, order::Order, order_history::OrderHistory};

/// Hay un unico pedido en curso por sesion. Si la sesion se compartiera entre hilos
/// habria que protegerla entera con un `Mutex` por cada operacion.
#[derive(Debug)]
pub struct CafeSession {
    current_order: Order,
    next_order_number: u64,
    history: OrderHistory,
}

impl CafeSession {
    pub fn new() -> CafeSession {
        CafeSession {
            current_order: Order::new(1),
            next_order_number: 2,
            history: OrderHistory::new(),
        }
    }

    pub fn current_order(&self) -> &Order {
        &self.current_order
    }

    pub fn current_order_mut(&mut self) -> &mut Order {
        &mut self.current_order
    }

    pub fn history(&self) -> &OrderHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut OrderHistory {
        &mut self.history
    }

    /// Reemplaza el pedido en curso por uno vacio con el siguiente numero.
    /// No guarda nada en el historial. Si se agotaron los numeros de pedido, el pedido en curso no cambia.
    pub fn reset_order(&mut self) -> Result<(), CafeError> {
        let order_number = self.next_order_number;
        self.next_order_number = order_number.checked_add(1).ok_or_else(|| {
            CafeError::InvalidState("No order numbers left".to_string())
        })?;
        self.current_order = Order::new(order_number);
        Ok(())
    }

    /// Confirma el pedido en curso: lo copia al historial y empieza uno nuevo.
    /// Devuelve la posicion del pedido en el historial.
    pub fn place_order(&mut self) -> Result<usize, CafeError> {
        if self.current_order.is_empty() {
            warn!("[SESSION] Tried to place order {} without items", self.current_order.order_number());
            return Err(CafeError::InvalidState(
                "Add items to your order first".to_string(),
            ));
        }
        if self.next_order_number == u64::MAX {
            return Err(CafeError::InvalidState("No order numbers left".to_string()));
        }
        let bill = self.current_order.bill();
        let position = self.history.place(&self.current_order.snapshot());
        info!(
            "[SESSION] Order {} placed: subtotal={} tax={} total={}",
            self.current_order.order_number(),
            bill.subtotal,
            bill.tax,
            bill.total
        );
        self.reset_order()?;
        Ok(position)
    }
}

impl Default for CafeSession {
    fn default() -> Self {
        CafeSession::new()
    }
}
