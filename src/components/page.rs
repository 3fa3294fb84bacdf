use log::debug;

use super::about::AboutComponent;
use super::contact::ContactComponent;
use super::hero::HeroComponent;
use super::location::LocationComponent;
use super::menu::MenuComponent;
use super::navigation::NavigationComponent;
use super::reviews::ReviewsComponent;
use super::section::SectionContent;
use super::top_bar::TopBarComponent;
use crate::services::MarkdownService;
use crate::types::Page;

/// Composes a page's sections in display order
pub struct PageComponent<'a> {
    markdown: &'a MarkdownService,
}

impl<'a> PageComponent<'a> {
    pub fn new(markdown: &'a MarkdownService) -> Self {
        Self { markdown }
    }

    pub fn render(&self, page: &Page) -> String {
        debug!("Composing sections for '{}'", page.sys.relative_path);
        let mut html = TopBarComponent::new().render(SectionContent::from(&page.top_bar));
        let hero = SectionContent::from(&page.hero);
        if hero.is_present() {
            html.push_str(&NavigationComponent::new().section_bar());
        }
        html.push_str(&HeroComponent::new().render(hero));
        html.push_str(&AboutComponent::new(self.markdown).render(SectionContent::from(&page.about)));
        html.push_str(&MenuComponent::new().render(SectionContent::from(&page.menu)));
        html.push_str(&ReviewsComponent::new().render(SectionContent::from(&page.reviews)));
        html.push_str(&LocationComponent::new().render(SectionContent::from(&page.location)));
        html.push_str(&ContactComponent::new().render(SectionContent::from(&page.contact)));
        html
    }
}
