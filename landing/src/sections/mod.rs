// Page sections and the layout shell

mod about;
mod cta;
mod footer;
mod hero;
mod home_hero;
mod industries;
mod nav;
mod shell;
mod solutions;
mod stats;

pub use about::About;
pub use cta::CallToActionBlock;
pub use footer::Footer;
pub use hero::IndustryHero;
pub use home_hero::HomeHero;
pub use industries::Industries;
pub use nav::Header;
pub use shell::Shell;
pub use solutions::SolutionsGrid;
pub use stats::StatsGrid;
