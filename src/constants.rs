//! Parametros de configuracion del cafe: precios del menu, impuestos y archivo de pedidos
use rust_decimal::Decimal;

/// Precio base de un cafe tamaño SHORT sin agregados
pub const COFFEE_BASE_PRICE: Decimal = Decimal::from_parts(199, 0, 0, false, 2);

/// Incremento por cada tamaño por encima de SHORT
pub const COFFEE_SIZE_INCREMENT: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

/// Precio de cada agregado (sabor) del cafe
pub const COFFEE_ADDON_PRICE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

pub const YEAST_DONUT_PRICE: Decimal = Decimal::from_parts(179, 0, 0, false, 2);
pub const CAKE_DONUT_PRICE: Decimal = Decimal::from_parts(189, 0, 0, false, 2);
pub const DONUT_HOLE_PRICE: Decimal = Decimal::from_parts(39, 0, 0, false, 2);

pub const CHICKEN_PRICE: Decimal = Decimal::from_parts(899, 0, 0, false, 2);
pub const FISH_PRICE: Decimal = Decimal::from_parts(999, 0, 0, false, 2);
pub const BEEF_PRICE: Decimal = Decimal::from_parts(1099, 0, 0, false, 2);

pub const CHEESE_PRICE: Decimal = Decimal::from_parts(100, 0, 0, false, 2);
pub const LETTUCE_PRICE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);
pub const TOMATOES_PRICE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);
pub const ONIONS_PRICE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// Impuesto a las ventas aplicado sobre el subtotal de un pedido (7%)
pub const SALES_TAX_RATE: Decimal = Decimal::from_parts(7, 0, 0, false, 2);

/// Cantidad de decimales con la que se redondean los montos
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Archivo de pedidos que se lee si no se indica otro por linea de comandos
pub const ORDERS_FILE: &str = "orders.json";
