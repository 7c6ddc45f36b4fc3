mod contact;
mod footer;
mod header;
mod hero;
mod how_it_works;
mod testimonials;
mod why_choose_us;

pub use contact::Contact;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use testimonials::Testimonials;
pub use why_choose_us::WhyChooseUs;
