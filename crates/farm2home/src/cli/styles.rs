use console::Style;
use once_cell::sync::Lazy;

pub static INDEX: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static PRICE: Lazy<Style> = Lazy::new(|| Style::new().green().bold());
pub static OFFER: Lazy<Style> = Lazy::new(|| Style::new().color256(208));
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().color256(246).italic());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red());
