//! Serializable views of the hosted presenters

use serde::Serialize;

use crate::{
    content::{GalleryImage, HeroImage},
    presenters::{lightbox::LightboxSnapshot, CarouselSnapshot},
};

pub type HeroSnapshot = CarouselSnapshot<HeroImage>;
pub type GallerySnapshot = LightboxSnapshot<GalleryImage>;

/// Everything a rendering client needs to draw both carousels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteSnapshot {
    pub hero: HeroSnapshot,
    pub lightbox: GallerySnapshot,
}
