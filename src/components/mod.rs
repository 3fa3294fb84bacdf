pub mod about;
pub mod contact;
pub mod hero;
pub mod layout;
pub mod location;
pub mod menu;
pub mod navigation;
pub mod page;
pub mod reviews;
pub mod section;
pub mod templates;
pub mod top_bar;

pub use about::AboutComponent;
pub use contact::ContactComponent;
pub use hero::HeroComponent;
pub use layout::LayoutShell;
pub use location::LocationComponent;
pub use menu::MenuComponent;
pub use navigation::NavigationComponent;
pub use page::PageComponent;
pub use reviews::ReviewsComponent;
pub use section::SectionContent;
pub use templates::TemplateComponent;
pub use top_bar::TopBarComponent;
