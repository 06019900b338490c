use std::env;

use cafe_orders::{
    cafe_session::CafeSession, constants::ORDERS_FILE, order::Bill,
    orders_reader::read_and_place_orders,
};
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).env().init() {
        eprintln!("Error initializing logger: {}", err);
    }

    let path = env::args().nth(1).unwrap_or_else(|| ORDERS_FILE.to_string());
    let mut session = CafeSession::new();
    if let Err(err) = read_and_place_orders(&mut session, &path) {
        error!("Could not process orders from {}: {}", path, err);
        return;
    }

    let history = session.history();
    for (label, items) in history.labels().iter().zip(history.all_orders()) {
        let bill = Bill::from_subtotal(items.iter().map(|item| item.price()).sum());
        info!(
            "{}: subtotal={} tax={} total={}",
            label, bill.subtotal, bill.tax, bill.total
        );
        for item in items {
            info!("    {} ({})", item, item.price());
        }
    }
}
