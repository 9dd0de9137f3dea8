//! The product detail screen as a storefront_ui application.

use std::path::Path;

use storefront_ui::{Application, Color, Element, ImageData};

use crate::actions::{LoggingActions, OrderLine, ProductActions};
use crate::message::Message;
use crate::model::{ImageRef, Product};
use crate::price;
use crate::state::ViewState;
use crate::theme::Theme;
use crate::views::{view_product_detail, DetailViewModel};

/// Product detail screen.
///
/// Owns the product, the local [`ViewState`] and the host's
/// [`ProductActions`]. Dropping the view discards the state.
pub struct ProductDetailView<H: ProductActions = LoggingActions> {
    product: Product,
    state: ViewState,
    actions: H,
    currency_symbol: String,
    hero_image: Option<ImageData>,
    theme: Theme,
}

impl ProductDetailView<LoggingActions> {
    /// View whose actions only log.
    pub fn with_logging(product: Product) -> Self {
        Self::new(product, LoggingActions)
    }
}

impl<H: ProductActions> ProductDetailView<H> {
    pub fn new(product: Product, actions: H) -> Self {
        Self {
            product,
            state: ViewState::new(),
            actions,
            currency_symbol: "R$".to_string(),
            hero_image: None,
            theme: Theme,
        }
    }

    /// Set the prefix of the price label.
    pub fn currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Set the decoded hero image. `None` shows the placeholder.
    pub fn hero_image(mut self, image: Option<ImageData>) -> Self {
        self.hero_image = image;
        self
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn actions(&self) -> &H {
        &self.actions
    }

    pub fn actions_mut(&mut self) -> &mut H {
        &mut self.actions
    }

    /// `unit_price * quantity` for the current quantity.
    pub fn total_price(&self) -> f64 {
        price::total_price(self.product.unit_price, self.state.quantity())
    }

    /// Total as shown on screen, e.g. "R$ 50.00".
    pub fn price_label(&self) -> String {
        price::price_label(&self.currency_symbol, self.total_price())
    }

    /// What add-to-cart and buy-now hand to the host.
    pub fn order_line(&self) -> OrderLine {
        OrderLine {
            product_name: self.product.name.clone(),
            quantity: self.state.quantity(),
            unit_price: self.product.unit_price,
            total: self.total_price(),
        }
    }
}

impl<H: ProductActions> Application for ProductDetailView<H> {
    type Message = Message;

    fn title(&self) -> String {
        format!("{} - Product Details", self.product.name)
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::Increment => {
                self.state.increment();
                log::debug!("Quantity -> {}", self.state.quantity());
            }
            Message::Decrement => {
                if self.state.decrement() {
                    log::debug!("Quantity -> {}", self.state.quantity());
                } else {
                    log::debug!("Quantity already at minimum");
                }
            }
            Message::ToggleFavorite => {
                self.state.toggle_favorite();
                log::debug!("Favorite -> {}", self.state.is_favorite());
            }
            Message::Back => self.actions.on_back(),
            Message::AddToCart => {
                let order = self.order_line();
                self.actions.on_add_to_cart(&order);
            }
            Message::BuyNow => {
                let order = self.order_line();
                self.actions.on_buy_now(&order);
            }
        }
    }

    fn view(&self) -> Element<Message> {
        view_product_detail(&DetailViewModel {
            product: &self.product,
            state: self.state,
            price_label: self.price_label(),
            hero_image: self.hero_image.as_ref(),
            theme: &self.theme,
        })
    }

    fn background(&self) -> Color {
        self.theme.background_color()
    }
}

/// Decode the product's hero image if it refers to a local file.
///
/// Remote URIs are not fetched. Failures fall back to the placeholder.
pub fn load_hero_image(product: &Product, base_dir: Option<&Path>) -> Option<ImageData> {
    match ImageRef::parse(&product.image, base_dir) {
        ImageRef::Local(path) => match ImageData::open(&path) {
            Ok(image) => {
                log::debug!(
                    "Loaded hero image {:?} ({}x{})",
                    path,
                    image.width(),
                    image.height()
                );
                Some(image)
            }
            Err(e) => {
                log::warn!("Failed to load hero image {:?}: {}", path, e);
                None
            }
        },
        ImageRef::Remote(uri) => {
            log::info!("Not fetching remote image {}; showing placeholder", uri);
            None
        }
        ImageRef::Missing => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui_constants::glyph;
    use storefront_ui::{Size, UiState};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Back,
        AddToCart(OrderLine),
        BuyNow(OrderLine),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl ProductActions for Recorder {
        fn on_back(&mut self) {
            self.calls.push(Call::Back);
        }

        fn on_add_to_cart(&mut self, order: &OrderLine) {
            self.calls.push(Call::AddToCart(order.clone()));
        }

        fn on_buy_now(&mut self, order: &OrderLine) {
            self.calls.push(Call::BuyNow(order.clone()));
        }
    }

    fn view() -> ProductDetailView<Recorder> {
        ProductDetailView::new(Product::sample(), Recorder::default())
    }

    fn ui() -> UiState<ProductDetailView<Recorder>> {
        UiState::new(view(), Size::new(420.0, 820.0))
    }

    fn click_text(ui: &mut UiState<ProductDetailView<Recorder>>, label: &str) -> bool {
        let node = ui.find_text(label).unwrap_or_else(|| panic!("no {:?} on screen", label));
        ui.click(node.bounds.center())
    }

    #[test]
    fn test_initial_label() {
        let view = view();
        assert_eq!(view.state().quantity(), 1);
        assert_eq!(view.price_label(), "R$ 25.00");
    }

    #[test]
    fn test_stepper_messages() {
        let mut view = view();
        view.update(Message::Increment);
        view.update(Message::Increment);
        assert_eq!(view.price_label(), "R$ 75.00");
        view.update(Message::Decrement);
        view.update(Message::Decrement);
        view.update(Message::Decrement);
        assert_eq!(view.state().quantity(), 1);
        assert_eq!(view.price_label(), "R$ 25.00");
    }

    #[test]
    fn test_currency_symbol() {
        let view = view().currency_symbol("$");
        assert_eq!(view.price_label(), "$ 25.00");
    }

    #[test]
    fn test_actions_receive_order_line() {
        let mut view = view();
        view.update(Message::Increment);
        view.update(Message::AddToCart);
        view.update(Message::BuyNow);
        view.update(Message::Back);

        let order = OrderLine {
            product_name: "Blueberry and Raspberry Pancakes".to_string(),
            quantity: 2,
            unit_price: 25.0,
            total: 50.0,
        };
        assert_eq!(
            view.actions().calls,
            vec![
                Call::AddToCart(order.clone()),
                Call::BuyNow(order),
                Call::Back
            ]
        );
    }

    #[test]
    fn test_actions_leave_state_alone() {
        let mut view = view();
        view.update(Message::AddToCart);
        view.update(Message::Back);
        assert_eq!(view.state(), ViewState::new());
    }

    #[test]
    fn test_clicking_stepper_updates_label() {
        let mut ui = ui();
        assert!(click_text(&mut ui, glyph::INCREMENT));
        assert!(ui.find_text("R$ 50.00").is_some());
        assert!(ui.find_text("2").is_some());

        assert!(click_text(&mut ui, glyph::DECREMENT));
        assert!(ui.find_text("R$ 25.00").is_some());

        // Still emits the message, but quantity stays at one.
        assert!(click_text(&mut ui, glyph::DECREMENT));
        assert_eq!(ui.app().state().quantity(), 1);
        assert!(ui.find_text("R$ 25.00").is_some());
    }

    #[test]
    fn test_clicking_heart_toggles() {
        let mut ui = ui();
        assert!(click_text(&mut ui, glyph::FAVORITE_OFF));
        assert!(ui.app().state().is_favorite());
        assert!(click_text(&mut ui, glyph::FAVORITE_ON));
        assert!(!ui.app().state().is_favorite());
    }

    #[test]
    fn test_clicking_buttons_calls_actions() {
        let mut ui = ui();
        click_text(&mut ui, glyph::BACK);
        click_text(&mut ui, "Buy Now");
        let calls = &ui.app().actions().calls;
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], Call::Back);
        assert!(matches!(&calls[1], Call::BuyNow(order) if order.quantity == 1));
    }

    #[test]
    fn test_clicking_text_does_nothing() {
        let mut ui = ui();
        assert!(!click_text(&mut ui, "Description"));
        assert_eq!(ui.app().state(), ViewState::new());
    }

    #[test]
    fn test_remote_image_not_loaded() {
        assert!(load_hero_image(&Product::sample(), None).is_none());
    }

    #[test]
    fn test_local_image_loaded_relative_to_base() {
        let dir = tempfile::tempdir().unwrap();
        image::RgbaImage::from_pixel(4, 2, image::Rgba([200, 100, 50, 255]))
            .save(dir.path().join("hero.png"))
            .unwrap();
        let mut product = Product::sample();
        product.image = "hero.png".to_string();

        let hero = load_hero_image(&product, Some(dir.path())).unwrap();
        assert_eq!((hero.width(), hero.height()), (4, 2));
    }

    #[test]
    fn test_missing_local_image_falls_back() {
        let mut product = Product::sample();
        product.image = "/definitely/not/here.png".to_string();
        assert!(load_hero_image(&product, None).is_none());
    }
}
