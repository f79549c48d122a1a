use std::{borrow::Cow, rc::Rc, sync::Arc};

/// A record whose text can be indexed.
pub trait TextRecord {
    /// Every indexable text field of the record. Numeric fields are rendered as
    /// decimal text.
    fn text_fields(&self) -> Vec<Cow<'_, str>>;
}

impl TextRecord for str {
    fn text_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self)]
    }
}

impl TextRecord for String {
    fn text_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.as_str())]
    }
}

impl<T: TextRecord + ?Sized> TextRecord for &T {
    fn text_fields(&self) -> Vec<Cow<'_, str>> {
        (**self).text_fields()
    }
}

impl<T: TextRecord + ?Sized> TextRecord for Box<T> {
    fn text_fields(&self) -> Vec<Cow<'_, str>> {
        (**self).text_fields()
    }
}

impl<T: TextRecord + ?Sized> TextRecord for Rc<T> {
    fn text_fields(&self) -> Vec<Cow<'_, str>> {
        (**self).text_fields()
    }
}

impl<T: TextRecord + ?Sized> TextRecord for Arc<T> {
    fn text_fields(&self) -> Vec<Cow<'_, str>> {
        (**self).text_fields()
    }
}
