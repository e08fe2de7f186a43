pub mod html;
pub mod net;
pub mod scrape;
pub mod structs;
