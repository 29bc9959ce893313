mod button;
mod input;
mod textarea;

pub use button::HtmlButtonElement;
pub use input::HtmlInputElement;
pub use textarea::HtmlTextAreaElement;
