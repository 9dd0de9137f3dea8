//! Product detail view: header, hero, stepper and price, info row,
//! description and the two call-to-action buttons.

use storefront_ui::widgets::{button, column, container, image, row, space, text, Element};
use storefront_ui::{Alignment, Background, ImageData, Justify, Length};

use crate::message::Message;
use crate::model::Product;
use crate::state::ViewState;
use crate::theme::Theme;
use crate::ui_constants::{
    border, glyph, image as image_size, padding, radius, spacing, text as text_size,
};

/// Everything the product detail view reads.
pub struct DetailViewModel<'a> {
    pub product: &'a Product,
    pub state: ViewState,
    /// Formatted total, e.g. "R$ 50.00"
    pub price_label: String,
    pub hero_image: Option<&'a ImageData>,
    pub theme: &'a Theme,
}

/// Build the whole screen.
pub fn view_product_detail(model: &DetailViewModel<'_>) -> Element<Message> {
    let theme = model.theme;

    let card = column()
        .spacing(0.0)
        .padding(padding::CARD)
        .push(header(model))
        .push(gap(spacing::AFTER_HEADER))
        .push(hero(model))
        .push(gap(spacing::SECTION))
        .push(stepper_and_price(model))
        .push(gap(spacing::SECTION))
        .push(info_row(model.product, theme))
        .push(gap(spacing::SECTION))
        .push(description(model.product, theme))
        .push(gap(spacing::BEFORE_ACTIONS))
        .push(action_buttons(theme));

    container(
        container(card)
            .width(Length::FILL)
            .background(Background::Solid(theme.card_color()))
            .radius(radius::CARD),
    )
    .width(Length::FILL)
    .padding(padding::SCREEN)
    .into()
}

fn gap(height: f32) -> Element<Message> {
    space(0.0, height).into()
}

/// Back button, centered title, favorite toggle.
fn header(model: &DetailViewModel<'_>) -> Element<Message> {
    let theme = model.theme;
    let (heart, heart_color) = if model.state.is_favorite() {
        (glyph::FAVORITE_ON, theme.favorite_color())
    } else {
        (glyph::FAVORITE_OFF, theme.icon_color())
    };

    row()
        .width(Length::FILL)
        .spacing(0.0)
        .push(
            button(
                text(glyph::BACK)
                    .size(text_size::ICON)
                    .bold()
                    .color(theme.icon_color()),
            )
            .on_press(Message::Back)
            .background(theme.background_color())
            .radius(radius::BACK_BUTTON)
            .padding(padding::BACK_BUTTON),
        )
        .push(
            text("Product Details")
                .size(text_size::HEADER_TITLE)
                .bold()
                .color(theme.text_color())
                .width(Length::FILL)
                .align_x(Alignment::Center),
        )
        .push(
            button(text(heart).size(text_size::ICON).color(heart_color))
                .on_press(Message::ToggleFavorite)
                .padding(padding::ICON_BUTTON),
        )
        .into()
}

/// Product name and image over the warm gradient.
fn hero(model: &DetailViewModel<'_>) -> Element<Message> {
    let theme = model.theme;
    let content = column()
        .spacing(spacing::HERO_INNER)
        .push(
            text(model.product.name.as_str())
                .size(text_size::PRODUCT_NAME)
                .bold()
                .color(theme.text_color())
                .width(Length::FILL)
                .wrap(),
        )
        .push(
            image(model.hero_image.cloned())
                .height(image_size::HEIGHT)
                .radius(radius::IMAGE)
                .placeholder(model.product.name.as_str()),
        );

    container(content)
        .width(Length::FILL)
        .padding(padding::HERO)
        .background(theme.hero_background())
        .radius(radius::HERO)
        .into()
}

/// Quantity pill on the left, total on the right.
fn stepper_and_price(model: &DetailViewModel<'_>) -> Element<Message> {
    let theme = model.theme;
    let symbol = |label: &str, message: Message| {
        button(
            text(label)
                .size(text_size::STEPPER)
                .bold()
                .color(theme.on_accent_text_color()),
        )
        .on_press(message)
        .padding(padding::STEPPER_BUTTON)
    };

    let stepper = row()
        .spacing(spacing::STEPPER_INNER)
        .push(symbol(glyph::DECREMENT, Message::Decrement))
        .push(
            text(model.state.quantity().to_string())
                .size(text_size::STEPPER)
                .bold()
                .color(theme.on_accent_text_color()),
        )
        .push(symbol(glyph::INCREMENT, Message::Increment));

    row()
        .width(Length::FILL)
        .justify(Justify::SpaceBetween)
        .push(
            container(stepper)
                .padding(padding::STEPPER)
                .background(Background::Solid(theme.accent_color()))
                .radius(radius::STEPPER),
        )
        .push(
            text(model.price_label.as_str())
                .size(text_size::PRICE)
                .bold()
                .color(theme.text_color()),
        )
        .into()
}

/// Rating, calories and preparation time.
fn info_row(product: &Product, theme: &Theme) -> Element<Message> {
    let item = |label: String| {
        text(label)
            .size(text_size::INFO)
            .color(theme.text_color())
    };

    row()
        .width(Length::FILL)
        .justify(Justify::SpaceBetween)
        .push(item(format!("{} {}", glyph::RATING, product.rating)))
        .push(item(format!("{} {} Calories", glyph::CALORIES, product.calories)))
        .push(item(format!("{} {} min", glyph::TIME, product.prep_time)))
        .into()
}

fn description(product: &Product, theme: &Theme) -> Element<Message> {
    column()
        .spacing(spacing::AFTER_SECTION_HEADER)
        .push(
            text("Description")
                .size(text_size::SECTION_HEADER)
                .bold()
                .color(theme.text_color()),
        )
        .push(
            text(product.description.as_str())
                .size(text_size::BODY)
                .color(theme.secondary_text_color())
                .width(Length::FILL)
                .wrap(),
        )
        .into()
}

/// Outlined "Add to Cart" and filled "Buy Now", sharing the width.
fn action_buttons(theme: &Theme) -> Element<Message> {
    row()
        .width(Length::FILL)
        .spacing(spacing::ACTIONS)
        .push(
            button(
                text("Add to Cart")
                    .size(text_size::BUTTON)
                    .bold()
                    .color(theme.accent_text_color()),
            )
            .on_press(Message::AddToCart)
            .width(Length::FILL)
            .padding(padding::ACTION_BUTTON)
            .background(theme.background_color())
            .border(theme.accent_color(), border::ACTION_OUTLINE)
            .radius(radius::ACTION_BUTTON),
        )
        .push(
            button(
                text("Buy Now")
                    .size(text_size::BUTTON)
                    .bold()
                    .color(theme.on_accent_text_color()),
            )
            .on_press(Message::BuyNow)
            .width(Length::FILL)
            .padding(padding::ACTION_BUTTON)
            .background(theme.accent_color())
            .radius(radius::ACTION_BUTTON),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_ui::{Size, TextNode};

    fn texts(element: &mut Element<Message>) -> Vec<TextNode> {
        element.layout(Size::new(420.0, 820.0));
        let size = element.size();
        let mut nodes = Vec::new();
        element.collect_text(storefront_ui::Bounds::from_size(size), &mut nodes);
        nodes
    }

    fn model<'a>(product: &'a Product, theme: &'a Theme, state: ViewState) -> DetailViewModel<'a> {
        DetailViewModel {
            product,
            state,
            price_label: "R$ 25.00".to_string(),
            hero_image: None,
            theme,
        }
    }

    #[test]
    fn test_screen_shows_product_fields() {
        let product = Product::sample();
        let theme = Theme;
        let mut element = view_product_detail(&model(&product, &theme, ViewState::new()));
        let labels: Vec<String> = texts(&mut element).into_iter().map(|n| n.text).collect();

        for expected in [
            "Product Details",
            "Blueberry and Raspberry Pancakes",
            "1",
            "R$ 25.00",
            "★ 5.0",
            "♨ 450 Calories",
            "◷ 15-25 min",
            "Description",
            "Add to Cart",
            "Buy Now",
        ] {
            assert!(labels.iter().any(|l| l == expected), "missing {:?}", expected);
        }
        assert!(labels.iter().any(|l| l == glyph::FAVORITE_OFF));
        assert!(!labels.iter().any(|l| l == glyph::FAVORITE_ON));
    }

    #[test]
    fn test_numeric_rating_shown_unchanged() {
        let mut product = Product::sample();
        product.rating = crate::model::Rating::Number(4.55);
        let theme = Theme;
        let mut element = view_product_detail(&model(&product, &theme, ViewState::new()));
        let nodes = texts(&mut element);
        assert!(nodes.iter().any(|n| n.text == "★ 4.55"));
        assert!(!nodes.iter().any(|n| n.text == "★ 4.5"));
    }

    #[test]
    fn test_hero_image_height() {
        let product = Product::sample();
        let theme = Theme;
        let mut element = view_product_detail(&model(&product, &theme, ViewState::new()));
        let nodes = texts(&mut element);
        let find = |t: &str| nodes.iter().find(|n| n.text == t).map(|n| n.bounds);
        let name = find("Blueberry and Raspberry Pancakes").unwrap();
        let stepper = find(glyph::INCREMENT).unwrap();
        // Name, gap, image and hero padding all sit above the stepper row.
        assert!(stepper.y - name.bottom() >= spacing::HERO_INNER + image_size::HEIGHT + padding::HERO);
    }

    #[test]
    fn test_favorite_glyph_follows_state() {
        let product = Product::sample();
        let theme = Theme;
        let mut state = ViewState::new();
        state.toggle_favorite();
        let mut element = view_product_detail(&model(&product, &theme, state));
        assert!(texts(&mut element).iter().any(|n| n.text == glyph::FAVORITE_ON));
    }

    #[test]
    fn test_price_sits_right_of_stepper() {
        let product = Product::sample();
        let theme = Theme;
        let mut element = view_product_detail(&model(&product, &theme, ViewState::new()));
        let nodes = texts(&mut element);
        let find = |t: &str| nodes.iter().find(|n| n.text == t).map(|n| n.bounds);
        let plus = find(glyph::INCREMENT).unwrap();
        let minus = find(glyph::DECREMENT).unwrap();
        let price = find("R$ 25.00").unwrap();
        assert!(minus.x < plus.x);
        assert!(plus.right() < price.x);
        // Price is flush with the right edge of the card content.
        assert!((price.right() - (420.0 - padding::SCREEN - padding::CARD)).abs() < 0.5);
    }

    #[test]
    fn test_action_buttons_split_width() {
        let product = Product::sample();
        let theme = Theme;
        let mut element = view_product_detail(&model(&product, &theme, ViewState::new()));
        let nodes = texts(&mut element);
        let cart = nodes.iter().find(|n| n.text == "Add to Cart").unwrap().bounds;
        let buy = nodes.iter().find(|n| n.text == "Buy Now").unwrap().bounds;
        assert_eq!(cart.y, buy.y);
        assert!(cart.right() < 210.0);
        assert!(buy.x > 210.0);
    }
}
