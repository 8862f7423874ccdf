//! Conversions for property group arguments.

use crate::property::Property;

/// A collection of properties that may itself be absent, and whose entries
/// may be absent.
///
/// [`Text::property_group`](crate::Text::property_group) accepts any
/// implementor so callers can pass a `Vec` or array of properties directly,
/// a collection of `Option<Property<M>>` (owned or borrowed), or `None` for
/// no collection at all.
/// Absent entries are reported by position rather than skipped.
pub trait IntoProperties<M> {
    /// Convert into an optional list of optional properties, preserving order.
    fn into_properties(self) -> Option<Vec<Option<Property<M>>>>;
}

impl<M, P> IntoProperties<M> for Vec<P>
where
    P: Into<Option<Property<M>>>,
{
    fn into_properties(self) -> Option<Vec<Option<Property<M>>>> {
        Some(self.into_iter().map(Into::into).collect())
    }
}

impl<M, P, const N: usize> IntoProperties<M> for [P; N]
where
    P: Into<Option<Property<M>>>,
{
    fn into_properties(self) -> Option<Vec<Option<Property<M>>>> {
        Some(self.into_iter().map(Into::into).collect())
    }
}

impl<M: Clone> IntoProperties<M> for &[Property<M>] {
    fn into_properties(self) -> Option<Vec<Option<Property<M>>>> {
        Some(self.iter().cloned().map(Some).collect())
    }
}

impl<M: Clone> IntoProperties<M> for &Vec<Property<M>> {
    fn into_properties(self) -> Option<Vec<Option<Property<M>>>> {
        self.as_slice().into_properties()
    }
}

impl<M: Clone> IntoProperties<M> for &[Option<Property<M>>] {
    fn into_properties(self) -> Option<Vec<Option<Property<M>>>> {
        Some(self.to_vec())
    }
}

impl<M, C> IntoProperties<M> for Option<C>
where
    C: IntoProperties<M>,
{
    fn into_properties(self) -> Option<Vec<Option<Property<M>>>> {
        self.and_then(IntoProperties::into_properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tps() -> Property<&'static str> {
        Property::of("TPS", "20").unwrap()
    }

    type Entries = Option<Vec<Option<Property<&'static str>>>>;

    #[test]
    fn vec_of_properties() {
        let properties: Entries = vec![tps()].into_properties();
        assert_eq!(properties, Some(vec![Some(tps())]));
    }

    #[test]
    fn array_with_absent_entry_keeps_position() {
        let properties: Entries = [None, Some(tps())].into_properties();
        assert_eq!(properties, Some(vec![None, Some(tps())]));
    }

    #[test]
    fn slice_is_cloned() {
        let owned = vec![tps(), tps()];
        let properties: Entries = owned.as_slice().into_properties();
        assert_eq!(properties.map(|p| p.len()), Some(2));
    }

    #[test]
    fn borrowed_vec_is_cloned() {
        let owned = vec![tps()];
        let properties: Entries = (&owned).into_properties();
        assert_eq!(properties, Some(vec![Some(tps())]));
        assert_eq!(owned.len(), 1);
    }

    #[test]
    fn borrowed_optional_entries_keep_position() {
        let owned = vec![Some(tps()), None];
        let properties: Entries = owned.as_slice().into_properties();
        assert_eq!(properties, Some(vec![Some(tps()), None]));
    }

    #[test]
    fn absent_collection() {
        let properties: Option<Vec<Property<&'static str>>> = None;
        let entries: Entries = properties.into_properties();
        assert_eq!(entries, None);
    }
}
