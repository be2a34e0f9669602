//! Gallery images shown in the masonry grid and the lightbox

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GalleryImage {
    pub url: &'static str,
    pub caption: &'static str,
}

const fn image(url: &'static str, caption: &'static str) -> GalleryImage {
    GalleryImage { url, caption }
}

pub const GALLERY_IMAGES: &[GalleryImage] = &[
    image("/images/hero/hero1.jpg", "Majestic Iceland Landscape"),
    image("/images/hero/hero2.jpg", "Northern Lights Aurora"),
    image("/images/hero/hero3.jpg", "Glacial Adventure"),
    image("/images/hero/hero4.jpg", "Volcanic Terrain"),
    image("/images/hero/hero5.jpg", "Pristine Wilderness"),
    image("/images/photo1.jpg", "Mountain Sunset"),
    image("/images/photo2.jpg", "Coastal Beauty"),
    image("/images/adv1.jpg", "Adventure Awaits"),
    image("/images/gallery/aurora-1.svg", "Aurora Over Mountains"),
    image("/images/gallery/aurora-2.svg", "Dancing Northern Lights"),
    image("/images/gallery/waterfall-1.svg", "Powerful Waterfall"),
    image("/images/gallery/waterfall-2.svg", "Misty Falls"),
    image("/images/gallery/glacier-1.svg", "Ice Cave Wonder"),
];
