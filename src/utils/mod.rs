pub mod conference;
pub mod normalize;

pub use conference::{build_targets, format_url, output_path, YEAR_PLACEHOLDER};
pub use normalize::{first_present, normalize_paper};
