//! Lectura de un lote de pedidos en JSON. Cada producto viene con los tokens elegidos por el cliente
//! y se valida antes de tocar el pedido en curso.
use log::{debug, error, info};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::{
    cafe_session::CafeSession,
    choices::CoffeeAddOn,
    coffee::Coffee,
    donut::Donut,
    errors::CafeError,
    menu_item::MenuItem,
    sandwich::create_sandwich,
};

#[derive(Deserialize, Debug)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum JsonItem {
    Coffee {
        size: String,
        #[serde(default)]
        add_ons: Vec<String>,
    },
    Donut {
        donut_type: Option<String>,
        flavor: Option<String>,
        /// Nombre completo en el menu ("Yeast Glazed"), alternativo a tipo y sabor
        name: Option<String>,
    },
    Sandwich {
        meat: Option<String>,
        bread: String,
        #[serde(default)]
        add_ons: Vec<String>,
    },
}

#[derive(Deserialize, Debug)]
struct JsonLine {
    #[serde(flatten)]
    item: JsonItem,
    #[serde(default = "default_quantity")]
    quantity: u32,
}

#[derive(Deserialize, Debug)]
struct JsonOrder {
    items: Vec<JsonLine>,
}

#[derive(Deserialize)]
struct OrdersConfiguration {
    orders: Vec<JsonOrder>,
}

fn default_quantity() -> u32 {
    1
}

fn read_orders<R: Read>(reader: R) -> Result<Vec<JsonOrder>, CafeError> {
    let orders_config: OrdersConfiguration = serde_json::from_reader(reader)?;
    Ok(orders_config.orders)
}

fn read_orders_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<JsonOrder>, CafeError> {
    let file = File::open(path)?;
    read_orders(BufReader::new(file))
}

fn build_item(item: JsonItem) -> Result<MenuItem, CafeError> {
    let item = match item {
        JsonItem::Coffee { size, add_ons } => {
            let add_ons = add_ons
                .iter()
                .map(|add_on| add_on.parse())
                .collect::<Result<BTreeSet<CoffeeAddOn>, CafeError>>()?;
            MenuItem::from(Coffee::with_add_ons(size.parse()?, &add_ons))
        }
        JsonItem::Donut {
            donut_type,
            flavor,
            name,
        } => match (name, donut_type, flavor) {
            (Some(name), _, _) => MenuItem::from(Donut::from_menu_name(&name)?),
            (None, Some(donut_type), Some(flavor)) => {
                MenuItem::from(Donut::from_token(&donut_type, flavor)?)
            }
            _ => {
                return Err(CafeError::InvalidArgument(
                    "Donut needs a name or a donut_type and flavor".to_string(),
                ))
            }
        },
        JsonItem::Sandwich {
            meat,
            bread,
            add_ons,
        } => MenuItem::from(create_sandwich(meat.as_deref(), &bread, add_ons.as_slice())?),
    };
    Ok(item)
}

/// Valida todas las lineas del pedido antes de agregarlas, para no dejar el pedido a medio cargar.
/// Un pedido que ya tiene productos en curso no se mezcla con el lote.
fn add_order_to_session(session: &mut CafeSession, order: JsonOrder) -> Result<usize, CafeError> {
    if !session.current_order().is_empty() {
        return Err(CafeError::InvalidState(format!(
            "Order {} already has items in progress",
            session.current_order().order_number()
        )));
    }
    let mut lines = Vec::new();
    for line in order.items {
        if line.quantity == 0 {
            return Err(CafeError::InvalidArgument(
                "Quantity must be a positive number".to_string(),
            ));
        }
        lines.push((build_item(line.item)?, line.quantity));
    }

    let current_order = session.current_order_mut();
    for (item, quantity) in lines {
        current_order.add_items(item, quantity)?;
    }
    session.place_order()
}

fn place_orders(session: &mut CafeSession, json_orders: Vec<JsonOrder>) -> usize {
    let mut placed = 0;
    for (index, order) in json_orders.into_iter().enumerate() {
        match add_order_to_session(session, order) {
            Ok(position) => {
                debug!("[READER] Order {} stored at position {}", index, position);
                placed += 1;
            }
            Err(err) => {
                error!("[READER] Skipped order {}: {}", index, err);
            }
        }
    }
    info!("[READER] No more orders left, {} placed", placed);
    placed
}

/// Lee el archivo de pedidos y confirma en la sesion cada pedido valido.
/// Devuelve la cantidad de pedidos confirmados.
pub fn read_and_place_orders<P: AsRef<Path>>(
    session: &mut CafeSession,
    path: P,
) -> Result<usize, CafeError> {
    let json_orders = read_orders_from_file(path)?;
    Ok(place_orders(session, json_orders))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;

    use super::*;
    use crate::choices::DonutType;

    fn place_from_json(session: &mut CafeSession, json: &str) -> usize {
        let orders = read_orders(json.as_bytes()).unwrap();
        place_orders(session, orders)
    }

    #[test]
    fn should_place_every_valid_order() {
        let mut session = CafeSession::new();
        let json = r#"{ "orders": [
            { "items": [
                { "kind": "coffee", "size": "grande", "add_ons": ["Mocha", "CARAMEL"] },
                { "kind": "donut", "donut_type": "YEAST", "flavor": "Glazed", "quantity": 2 }
            ] },
            { "items": [
                { "kind": "sandwich", "meat": "BEEF", "bread": "Bagel", "add_ons": ["CHEESE", "ONIONS"] }
            ] }
        ] }"#;

        let placed = place_from_json(&mut session, json);

        assert_eq!(2, placed);
        assert_eq!(Some(3), session.history().get(0).map(|items| items.len()));
        assert_eq!(Some(Decimal::from_str("7.17").unwrap()), session.history().total_of(0));
        assert_eq!(Some(Decimal::from_str("12.29").unwrap()), session.history().total_of(1));
        assert_eq!(3, session.current_order().order_number());
    }

    #[test]
    fn should_skip_orders_with_invalid_items_without_partial_state() {
        let mut session = CafeSession::new();
        let json = r#"{ "orders": [
            { "items": [
                { "kind": "coffee", "size": "tall" },
                { "kind": "sandwich", "meat": "CHICKEN", "bread": "Croissant" }
            ] },
            { "items": [ { "kind": "donut", "donut_type": "CAKE", "flavor": "Plain" } ] }
        ] }"#;

        let placed = place_from_json(&mut session, json);

        assert_eq!(1, placed);
        assert_eq!(1, session.history().len());
        assert_eq!(Some(Decimal::from_str("1.89").unwrap()), session.history().total_of(0));
        assert_eq!(true, session.current_order().is_empty());
    }

    #[test]
    fn should_not_mix_batch_with_order_in_progress() {
        let mut session = CafeSession::new();
        session
            .current_order_mut()
            .add_item(Coffee::new(crate::choices::CupSize::Short, 0));
        let json = r#"{ "orders": [
            { "items": [ { "kind": "donut", "donut_type": "CAKE", "flavor": "Plain" } ] }
        ] }"#;

        let placed = place_from_json(&mut session, json);

        assert_eq!(0, placed);
        assert_eq!(true, session.history().is_empty());
        assert_eq!(1, session.current_order().len());
        assert_eq!(1, session.current_order().order_number());
    }

    #[test]
    fn should_build_donuts_from_menu_names() {
        let mut session = CafeSession::new();
        let json = r#"{ "orders": [
            { "items": [ { "kind": "donut", "name": "Cake Chocolate", "quantity": 2 } ] },
            { "items": [ { "kind": "donut", "name": "Blueberry Muffin" } ] },
            { "items": [ { "kind": "donut", "flavor": "Plain" } ] }
        ] }"#;

        let placed = place_from_json(&mut session, json);

        assert_eq!(1, placed);
        assert_eq!(Some(Decimal::from_str("3.78").unwrap()), session.history().total_of(0));
        let expected = MenuItem::from(Donut::new(DonutType::Cake, "CAKE_CHOCOLATE"));
        assert_eq!(Some(expected), session.history().get(0).map(|items| items[0].clone()));
    }

    #[test]
    fn should_skip_orders_with_zero_quantity_or_no_items() {
        let mut session = CafeSession::new();
        let json = r#"{ "orders": [
            { "items": [ { "kind": "coffee", "size": "short", "quantity": 0 } ] },
            { "items": [] }
        ] }"#;

        assert_eq!(0, place_from_json(&mut session, json));
        assert_eq!(true, session.history().is_empty());
    }

    #[test]
    fn should_price_sandwich_without_meat_at_zero() {
        let mut session = CafeSession::new();
        let json = r#"{ "orders": [
            { "items": [ { "kind": "sandwich", "bread": "Sour Dough", "add_ons": ["LETTUCE"] } ] }
        ] }"#;

        assert_eq!(1, place_from_json(&mut session, json));
        assert_eq!(Some(Decimal::ZERO), session.history().total_of(0));
    }

    #[test]
    fn should_fail_with_malformed_json() {
        let result = read_orders("{ \"orders\": [".as_bytes());
        assert_eq!(true, matches!(result, Err(CafeError::FileReaderError(_))));
    }

    #[test]
    fn should_fail_when_file_does_not_exist() {
        let mut session = CafeSession::new();
        let result = read_and_place_orders(&mut session, "does-not-exist.json");
        assert_eq!(true, matches!(result, Err(CafeError::FileReaderError(_))));
    }
}
