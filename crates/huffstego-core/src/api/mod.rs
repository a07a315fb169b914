pub mod compare;
pub mod hide;
pub mod unveil;

pub use hide::HideReport;
