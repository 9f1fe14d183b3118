pub mod domain;
pub mod image;
pub mod resolver;
pub mod title;
pub mod url;

pub use domain::{favicon_src, is_valid_domain};
pub use image::probe_image;
pub use resolver::{LinkPreview, PreviewClient, has_plausible_host};
pub use title::derive_title;
pub use url::{host_of, normalize_url};
