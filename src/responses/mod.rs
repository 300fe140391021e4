pub mod assets;
pub mod html;

pub use assets::static_response;
pub use html::html_response;
