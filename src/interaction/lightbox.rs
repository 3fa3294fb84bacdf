/// Keys the lightbox reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// Modal image viewer: closed, or open on one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lightbox<T> {
    Closed,
    Open(T),
}

impl<T> Lightbox<T> {
    pub fn open(&mut self, item: T) {
        *self = Lightbox::Open(item);
    }

    pub fn close(&mut self) {
        *self = Lightbox::Closed;
    }

    /// Clicks on the backdrop close; clicks inside the content do not
    pub fn click(&mut self, on_backdrop: bool) {
        if on_backdrop {
            self.close();
        }
    }

    pub fn key(&mut self, key: Key) {
        if key == Key::Escape {
            self.close();
        }
    }

    pub fn item(&self) -> Option<&T> {
        match self {
            Lightbox::Open(item) => Some(item),
            Lightbox::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open(_))
    }
}

impl<T> Default for Lightbox<T> {
    fn default() -> Self {
        Lightbox::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_on_item_and_closes_on_backdrop() {
        let mut lightbox = Lightbox::default();
        lightbox.open("Guido");
        assert_eq!(lightbox.item(), Some(&"Guido"));
        lightbox.click(false);
        assert!(lightbox.is_open());
        lightbox.click(true);
        assert_eq!(lightbox, Lightbox::Closed);
    }

    #[test]
    fn escape_closes() {
        let mut lightbox = Lightbox::Open(3);
        lightbox.key(Key::Other);
        assert!(lightbox.is_open());
        lightbox.key(Key::Escape);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn opening_another_item_replaces_the_first() {
        let mut lightbox = Lightbox::Open("Scones");
        lightbox.open("Cookies");
        assert_eq!(lightbox.item(), Some(&"Cookies"));
    }
}
