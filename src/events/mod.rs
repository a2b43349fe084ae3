pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_slider_keys;
pub use pointer::wire_slider_pointer;
