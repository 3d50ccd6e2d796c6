/// Host capability that opens a handoff URL in a new browsing context.
///
/// Fire-and-forget: there is no return value and no way to learn whether the
/// target was reached.
pub trait Navigator: Send + Sync {
    fn open(&self, url: &str);
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn open(&self, url: &str) {
        (**self).open(url)
    }
}

impl<N: Navigator + ?Sized> Navigator for Box<N> {
    fn open(&self, url: &str) {
        (**self).open(url)
    }
}
