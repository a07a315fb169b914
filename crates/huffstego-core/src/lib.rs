//! # Huffstego Core API
//!
//! A text message is compressed with a Huffman code and the resulting bits
//! are hidden in the least significant bits of an RGB image, one bit per
//! color channel. Unveiling needs the [`MessageKey`] that is written next to
//! the image, it carries the symbol frequencies and the exact bit count.
//!
//! The building blocks are
//! - [`huffman`] for counting, building the tree, encoding and decoding
//! - [`LsbCodec`] for embedding bits into and extracting them from an `RgbImage`
//! - [`metrics`] for measuring the distortion of the carrier
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! image::RgbImage::from_fn(64, 64, |x, y| image::Rgb([x as u8, y as u8, 128]))
//!     .save(&carrier)
//!     .expect("Failed to write carrier image");
//!
//! let report = huffstego_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("secret.png"))
//!     .with_key_output(temp_dir.path().join("secret.key"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//! println!("{report}");
//!
//! let text = huffstego_core::api::unveil::prepare()
//!     .from_secret_file(temp_dir.path().join("secret.png"))
//!     .with_key(temp_dir.path().join("secret.key"))
//!     .execute()
//!     .expect("Failed to unveil message from image");
//! assert_eq!(text, "Hello, World!");
//! ```
//!
//! ## Work on a pixel buffer directly
//!
//! ```rust
//! use huffstego_core::{DistortionMetrics, EncodedMessage, LsbCodec};
//!
//! let carrier = image::RgbImage::from_pixel(2, 1, image::Rgb([10, 20, 30]));
//! let mut stego = carrier.clone();
//!
//! let message = EncodedMessage::from_text("aaab").unwrap();
//! assert_eq!(message.bits().to_string(), "1110");
//! LsbCodec::embed(&mut stego, message.bits()).unwrap();
//!
//! let key = message.key();
//! let bits = LsbCodec::extract(&stego, key.bit_count());
//! assert_eq!(key.decode(&bits).unwrap(), "aaab");
//!
//! let metrics = DistortionMetrics::measure(&carrier, &stego).unwrap();
//! assert!(metrics.norm_l1 < 1.0);
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bitstream;
pub mod commands;
pub mod error;
pub mod huffman;
pub mod key;
pub mod media;
pub mod message;
pub mod metrics;
pub mod result;

pub use crate::bitstream::Bitstream;
pub use crate::error::HuffstegoError;
pub use crate::key::MessageKey;
pub use crate::media::image::LsbCodec;
pub use crate::media::{Media, Persist};
pub use crate::message::EncodedMessage;
pub use crate::metrics::DistortionMetrics;
pub use crate::result::Result;
