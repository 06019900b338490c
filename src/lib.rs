pub mod cafe_session;
pub mod choices;
pub mod coffee;
pub mod constants;
pub mod donut;
pub mod errors;
pub mod menu_item;
pub mod order;
pub mod order_history;
pub mod orders_reader;
pub mod sandwich;
