// Landing page sections

mod features;
mod footer;
mod hero;
mod how_it_works;
mod nav;

pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use nav::Nav;
