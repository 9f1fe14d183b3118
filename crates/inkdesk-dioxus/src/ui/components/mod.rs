pub mod align_button;
pub mod color_picker;
pub mod dropdown;
pub mod editing_surface;
pub mod favicon;
pub mod font_family_button;
pub mod font_size_button;
pub mod heading_button;
pub mod highlight_color_button;
pub mod image_button;
pub mod line_height_button;
pub mod link_button;
pub mod link_popup;
pub mod list_button;
pub mod text_color_button;
pub mod toolbar;
pub mod tooltip;

pub use align_button::AlignButton;
pub use color_picker::ColorPicker;
pub use dropdown::Backdrop;
pub use editing_surface::{EditingSurface, PopupAnchor};
pub use favicon::FaviconIcon;
pub use font_family_button::FontFamilyButton;
pub use font_size_button::FontSizeButton;
pub use heading_button::HeadingButton;
pub use highlight_color_button::HighlightColorButton;
pub use image_button::ImageButton;
pub use line_height_button::LineHeightButton;
pub use link_button::LinkButton;
pub use link_popup::LinkPopup;
pub use list_button::ListButton;
pub use text_color_button::TextColorButton;
pub use toolbar::Toolbar;
pub use tooltip::EditorTooltip;
