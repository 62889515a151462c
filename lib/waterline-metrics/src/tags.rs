use metrics::{Label, SharedString};

mod private {
    use metrics::SharedString;

    pub trait Sealed {}

    impl Sealed for &'static str {}
    impl Sealed for String {}
    impl<T> Sealed for (&'static str, T) where T: Into<SharedString> {}
}

/// A metric tag.
///
/// Marker trait for the forms a tag can be supplied in: a bare or
/// `key:value`-style string (`&'static str` or `String`), or a key/value
/// tuple with a static key. Conversion produces the label representation the
/// [`metrics`][metrics] crate works in.
///
/// This trait is sealed and cannot be implemented outside of this crate.
///
/// [metrics]: https://docs.rs/metrics
pub trait MetricTag: private::Sealed {
    /// Consumes `self` and converts it to a label.
    fn into_label(self) -> Label;
}

impl MetricTag for &'static str {
    fn into_label(self) -> Label {
        match self.split_once(':') {
            Some((key, value)) => Label::from_static_parts(key, value),
            None => Label::from_static_parts(self, ""),
        }
    }
}

impl MetricTag for String {
    fn into_label(self) -> Label {
        match self.split_once(':') {
            Some((key, value)) => Label::new(key.to_string(), value.to_string()),
            None => Label::new(self, ""),
        }
    }
}

impl<T> MetricTag for (&'static str, T)
where
    T: Into<SharedString>,
{
    fn into_label(self) -> Label {
        Label::new(SharedString::const_str(self.0), self.1.into())
    }
}

/// Converts a collection of tags into labels.
///
/// Accepts any of the tag forms supported by [`MetricTag`].
pub fn into_labels<I, T>(tags: I) -> Vec<Label>
where
    I: IntoIterator<Item = T>,
    T: MetricTag,
{
    tags.into_iter().map(MetricTag::into_label).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_str_forms() {
        assert_eq!("env:prod".into_label(), Label::new("env", "prod"));
        assert_eq!("standalone".into_label(), Label::new("standalone", ""));
    }

    #[test]
    fn owned_string_forms() {
        assert_eq!(String::from("env:prod").into_label(), Label::new("env", "prod"));
        assert_eq!(String::from("standalone").into_label(), Label::new("standalone", ""));
    }

    #[test]
    fn tuple_form() {
        let workflow_name = String::from("checkout");
        assert_eq!(
            ("workflow_name", workflow_name).into_label(),
            Label::new("workflow_name", "checkout")
        );
    }
}
