//! Attribute mappings attached to graphs, nodes and edges.
//!
//! Attribute names and values are open-ended: anything Graphviz (or another
//! DOT consumer) understands can be passed through. Nothing here validates the
//! vocabulary; values are stringified once and emitted verbatim.

use indexmap::IndexMap;

/// An ordered mapping from attribute name to attribute value.
///
/// Insertion order is preserved and determines emission order.
pub type Attributes = IndexMap<String, String>;

/// Build an [`Attributes`] mapping from any sequence of name/value pairs.
///
/// Values only need to implement [`ToString`], so numbers can be passed
/// directly:
///
/// ```
/// use dotstyle::attributes;
///
/// let attrs = attributes([("arrowsize", 2.0), ("penwidth", 1.5)]);
/// assert_eq!(attrs["arrowsize"], "2");
/// ```
pub fn attributes<I, K, V>(pairs: I) -> Attributes
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: ToString,
{
    pairs
        .into_iter()
        .map(|(name, value)| (name.into(), value.to_string()))
        .collect()
}

/// Build an [`Attributes`] mapping with mixed value types.
///
/// ```
/// use dotstyle::attrs;
///
/// let style = attrs! { "label" => "binds", "labelangle" => 90 };
/// assert_eq!(style.get_index(0), Some((&"label".to_string(), &"binds".to_string())));
/// assert_eq!(style["labelangle"], "90");
///
/// let empty = attrs! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::Attributes::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut attrs = $crate::Attributes::new();
        $(
            attrs.insert(::std::string::String::from($name), ::std::string::ToString::to_string(&$value));
        )+
        attrs
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_keep_insertion_order() {
        let attrs = attributes([("size", "10,10"), ("rankdir", "RL"), ("page", "5, 5")]);
        let names: Vec<&str> = attrs.keys().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["size", "rankdir", "page"]);
    }

    #[test]
    fn test_later_duplicate_overwrites_value_in_place() {
        let attrs = attributes([("color", "blue"), ("shape", "box"), ("color", "red")]);
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get_index(0).map(|(_, v)| v.as_str()), Some("red"));
    }

    #[test]
    fn test_macro_stringifies_values() {
        let attrs = attrs! { "ranksep" => 0.75, "style" => "bold" };
        assert_eq!(attrs["ranksep"], "0.75");
        assert_eq!(attrs["style"], "bold");
    }
}
