use log::debug;

use super::section::{non_empty, section_title, text_or, SectionContent};
use crate::interaction::{CategorySelector, Lightbox};
use crate::types::{MenuCategory, MenuItem, MenuSection};
use crate::utils::{escape_attr, escape_html};

const FACEBOOK_URL: &str = "https://www.facebook.com/cochiskitchen/";

/// Menu tabs with item cards; each pictured item carries its lightbox as a template
/// next to the shared dialog, which starts closed
pub struct MenuComponent;

impl MenuComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, content: SectionContent<'_, MenuSection>) -> String {
        content.render_with(|menu| {
            let builtin;
            let categories: &[MenuCategory] = if menu.categories.is_empty() {
                builtin = builtin_menu();
                &builtin
            } else {
                &menu.categories
            };
            let selector = CategorySelector::new(categories.iter().map(|c| c.id.clone()));
            let lightbox: Lightbox<&MenuItem> = Lightbox::default();
            debug!("Rendering menu with {} categories, active '{}'", categories.len(), selector.active());

            let mut html = String::from("<section id=\"menu\" class=\"section menu\"><div class=\"container\">");
            html.push_str(&section_title(
                text_or(&menu.section_label, "Our Offerings"),
                text_or(&menu.title, "Menu Highlights"),
            ));

            html.push_str("<div class=\"menu-tabs\" role=\"tablist\">");
            for category in categories {
                let active = category.id == selector.active();
                html.push_str(&format!(
                    "<button role=\"tab\" class=\"menu-tab{}\" data-category=\"{}\" aria-selected=\"{}\">{}</button>",
                    if active { " active" } else { "" },
                    escape_attr(&category.id),
                    active,
                    escape_html(&category.name)
                ));
            }
            html.push_str("</div>");

            html.push_str(&format!(
                "<div class=\"menu-sheet\" data-open=\"{}\"><h3>Select a Category</h3></div>",
                selector.is_panel_open()
            ));

            for category in categories {
                let hidden = if category.id == selector.active() { "" } else { " hidden" };
                html.push_str(&format!(
                    "<div class=\"menu-grid\" data-category=\"{}\"{}>",
                    escape_attr(&category.id),
                    hidden
                ));
                for (index, item) in category.items.iter().enumerate() {
                    let lightbox_id = format!("lightbox-{}-{}", category.id, index);
                    html.push_str(&item_card(item, &lightbox_id));
                    if non_empty(&item.image).is_some() {
                        let mut item_lightbox = Lightbox::default();
                        item_lightbox.open(item);
                        html.push_str(&format!(
                            "<template id=\"{}\">{}</template>",
                            escape_attr(&lightbox_id),
                            lightbox_markup(&item_lightbox)
                        ));
                    }
                }
                html.push_str("</div>");
            }

            html.push_str("<div class=\"menu-footer\">");
            if let Some(footer) = non_empty(&menu.footer_text) {
                html.push_str(&format!("<p>{}</p>", escape_html(footer)));
            }
            if let Some(link_text) = non_empty(&menu.specials_link_text) {
                html.push_str(&format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                    escape_attr(text_or(&menu.specials_url, FACEBOOK_URL)),
                    escape_html(link_text)
                ));
            }
            html.push_str("</div></div>");
            html.push_str(&lightbox_markup(&lightbox));
            html.push_str("</section>");
            html
        })
    }
}

impl Default for MenuComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn item_card(item: &MenuItem, lightbox_id: &str) -> String {
    let mut html = format!(
        "<article class=\"menu-card{}\" data-item=\"{}\">",
        if item.featured { " featured" } else { "" },
        escape_attr(&item.name)
    );
    if let Some(image) = non_empty(&item.image) {
        html.push_str(&format!(
            "<button class=\"menu-card-image\" data-lightbox=\"{}\"><img src=\"{}\" alt=\"{}\"></button>",
            escape_attr(lightbox_id),
            escape_attr(image),
            escape_attr(&item.name)
        ));
    }
    if item.featured {
        html.push_str("<span class=\"badge\">&#9733; House Favorite</span>");
    }
    html.push_str(&format!("<h3>{}</h3>", escape_html(&item.name)));
    if let Some(price) = non_empty(&item.price) {
        html.push_str(&format!("<span class=\"price\">{}</span>", escape_html(price)));
    }
    if let Some(description) = non_empty(&item.description) {
        html.push_str(&format!("<p>{}</p>", escape_html(description)));
    }
    html.push_str("</article>");
    html
}

fn lightbox_markup(lightbox: &Lightbox<&MenuItem>) -> String {
    match lightbox.item() {
        Some(item) => format!(
            "<div class=\"lightbox\" role=\"dialog\" data-state=\"open\"><img src=\"{}\" alt=\"{} image\"><h3>{}</h3><p>{}</p><span class=\"price\">{}</span><button class=\"lightbox-close\" aria-label=\"Close\"></button></div>",
            escape_attr(text_or(&item.image, "")),
            escape_attr(&item.name),
            escape_html(&item.name),
            escape_html(text_or(&item.description, "")),
            escape_html(text_or(&item.price, ""))
        ),
        None => "<div class=\"lightbox\" role=\"dialog\" data-state=\"closed\" hidden><button class=\"lightbox-close\" aria-label=\"Close\"></button></div>".to_string(),
    }
}

fn item(name: &str, description: &str, price: &str, image: &str, featured: bool) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        description: Some(description.to_string()),
        price: Some(price.to_string()),
        image: Some(format!("/images/menu/{}", image)),
        featured,
    }
}

fn category(id: &str, name: &str, items: Vec<MenuItem>) -> MenuCategory {
    MenuCategory { id: id.to_string(), name: name.to_string(), items }
}

/// Menu shown when the page document carries no categories
pub fn builtin_menu() -> Vec<MenuCategory> {
    vec![
        category("breakfast", "Breakfast", vec![
            item("Breakfast Burrito", "Roasted red potatoes, scrambled eggs, Swiss American cheese, and choice of protein.", "$12.25", "menu-breakfast-burrito.png", false),
            item("Bialy Sando", "Choice of house-made bialy, 2 fried eggs, American cheese, and choice of protein.", "$11.25", "menu-breakfast-bialy.png", false),
            item("Breakfast Tacos", "2-6\" flour tortillas, scrambled eggs, cheddar cheese, pico de gallo, avocado, chipotle crema and choice of protein.", "$12.50", "menu-breakfast-tacos.png", false),
            item("Breakfast Bowl", "Roasted red potatoes, scrambled eggs, pico de gallo, cheddar cheese, avocado, and choice of protein.", "$12.50", "menu-breakfast-bowl.png", false),
        ]),
        category("sandwiches", "Sandwiches", vec![
            item("Guido", "Hot Copa, Mortadella, hard salami, provolone, pepperoncini & house Italian dressing on a sweet roll.", "$17.50", "menu-guido-sandwich.png", true),
            item("The Basic B", "Smoked turkey, avocado, imported Swiss cheese on Dutch crunch.", "$17.25", "menu-basicb-sandwich.png", false),
            item("Garden Gobbler", "Double-cream cheese, tomato, cucumber, avocado, pepperoncini, black olives, artichoke hearts, garlic sauce on a spinach wrap.", "$15.50", "menu-gardengobbler.png", false),
            item("The Godfather", "Basil pesto, sundried tomato pesto, parma prosciutto, mortadella, hard salami, pepperoni, roasted piquillo peppers, balsamic olive oil glaze and mozzarella on house focaccia.", "$19.00", "menu-godfather.png", false),
        ]),
        category("salads", "Salads", vec![
            item("Fiesta Salad", "Romaine, chicken breast, pico de gallo, black beans, cheddar cheese, avocado and tortilla strips served with your choice of salad dressing.", "$17.00", "menu-fiesta-salad.png", false),
            item("Chopped Italian", "Salami, artichoke hearts, sundried tomatoes, pepperoncini, parmesan cheese with an Italian dressing.", "$16.00", "menu-italian-salad.png", false),
            item("Cochi Cobb", "Romaine, sliced chicken breast, blue cheese, hardboiled egg, marinated tomatoes, chicken breast, avocado & crispy onions.", "$17.00", "menu-cobb-salad.png", false),
        ]),
        category("bakery", "Bakery", vec![
            item("Scones", "House-made daily. Ask about our current flavors.", "$4.75", "menu-scones.png", false),
            item("Cookies", "Freshly baked chocolate chip, oatmeal raisin, or sugar cookies.", "$3.50", "menu-cookies.png", false),
            item("House-made Focaccia", "Our signature herb-infused focaccia bread.", "$6.50", "menu-focaccia.png", false),
        ]),
        category("specials", "Monthly Specials", vec![
            item("Nashville Fried Chicken", "Our famous Nashville-style hot fried chicken sandwich with house pickles and slaw.", "$18.50", "menu-fried-chicken-sandwich.png", true),
            item("Tri-tip Sandwich", "House-smoked tri-tip with caramelized onions and horseradish aioli on a freshly baked roll.", "$19.00", "menu-tritip-sandwich.png", true),
        ]),
    ]
}
