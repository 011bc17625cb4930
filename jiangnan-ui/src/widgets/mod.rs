pub mod button;
pub mod label;
pub mod panel;

pub use button::Button;
pub use label::Label;
pub use panel::Panel;
