//! Host callbacks for the actions the screen does not handle itself.

/// Snapshot of what the user is about to order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total: f64,
}

/// Navigation and checkout hooks supplied by the host.
pub trait ProductActions {
    fn on_back(&mut self);
    fn on_add_to_cart(&mut self, order: &OrderLine);
    fn on_buy_now(&mut self, order: &OrderLine);
}

/// Default hooks: log and do nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingActions;

impl ProductActions for LoggingActions {
    fn on_back(&mut self) {
        log::info!("Back");
    }

    fn on_add_to_cart(&mut self, order: &OrderLine) {
        log::info!(
            "Add to cart: {} x{} ({:.2})",
            order.product_name,
            order.quantity,
            order.total
        );
    }

    fn on_buy_now(&mut self, order: &OrderLine) {
        log::info!(
            "Buy now: {} x{} ({:.2})",
            order.product_name,
            order.quantity,
            order.total
        );
    }
}
