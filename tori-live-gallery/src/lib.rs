//! tori-live gallery library
//!
//! Wires a configured video source to the card formatters. The presentation
//! layer calls [`Gallery::load`] (or [`Gallery::from_config`]) once per render
//! and draws the resulting [`GalleryCard`]s.
//!
//! ```no_run
//! use tori_live_gallery::{Gallery, GalleryConfig};
//!
//! # async fn render() -> anyhow::Result<()> {
//! let config = GalleryConfig::load_default()?;
//! let gallery = Gallery::from_config(&config).await?;
//! for card in &gallery.cards {
//!     println!("{} - {}", card.title, card.watch_url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod card;
pub mod config;
pub mod gallery;
pub mod source;

pub use card::{CardFormatter, GalleryCard};
pub use config::{DisplayConfig, GalleryConfig, SourceConfig, SourceKind};
pub use gallery::Gallery;
pub use source::{build_source, fetch_videos};
