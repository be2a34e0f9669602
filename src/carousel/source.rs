//! Slide sources

/// Anything that can be presented one slide at a time
pub trait SlideSource {
    type Slide;

    /// Number of slides. Fixed for the lifetime of a presenter.
    fn count(&self) -> usize;

    /// The slide at `index`, if it exists
    fn slide(&self, index: usize) -> Option<&Self::Slide>;

    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl<T> SlideSource for [T] {
    type Slide = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn slide(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<D: SlideSource + ?Sized> SlideSource for &D {
    type Slide = D::Slide;

    fn count(&self) -> usize {
        (**self).count()
    }

    fn slide(&self, index: usize) -> Option<&D::Slide> {
        (**self).slide(index)
    }
}

impl<T> SlideSource for Vec<T> {
    type Slide = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn slide(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_and_vecs_are_sources() {
        let names = ["aurora", "geysir", "glacier"];
        assert_eq!(SlideSource::count(&names[..]), 3);
        assert_eq!(names[..].slide(1), Some(&"geysir"));
        assert_eq!(names[..].slide(3), None);

        let empty: Vec<u8> = Vec::new();
        assert!(SlideSource::is_empty(&empty));
    }
}
