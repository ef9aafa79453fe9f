mod client;
mod collector;
mod extractor;
mod helper;
mod layout;
mod parser_traits;

pub use client::Client;
pub use collector::ModemStatusCollector;
#[cfg(test)]
pub use extractor::parse_status_page;
