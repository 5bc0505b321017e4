use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned, de::Error};
use tracing::debug;

use crate::{style::Value, theme::Breakpoint};

/// A partial map from breakpoint to value.
///
/// Breakpoints that are not set inherit the value of the nearest narrower
/// breakpoint that is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Responsive<V = Value>(BTreeMap<Breakpoint, V>);

impl<V> Responsive<V> {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn at(mut self, breakpoint: Breakpoint, value: impl Into<V>) -> Self {
        self.0.insert(breakpoint, value.into());
        self
    }

    pub fn xs(self, value: impl Into<V>) -> Self {
        self.at(Breakpoint::Xs, value)
    }

    pub fn sm(self, value: impl Into<V>) -> Self {
        self.at(Breakpoint::Sm, value)
    }

    pub fn md(self, value: impl Into<V>) -> Self {
        self.at(Breakpoint::Md, value)
    }

    pub fn lg(self, value: impl Into<V>) -> Self {
        self.at(Breakpoint::Lg, value)
    }

    pub fn xl(self, value: impl Into<V>) -> Self {
        self.at(Breakpoint::Xl, value)
    }

    pub fn insert(&mut self, breakpoint: Breakpoint, value: V) -> Option<V> {
        self.0.insert(breakpoint, value)
    }

    /// The value set at exactly `breakpoint`.
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&V> {
        self.0.get(&breakpoint)
    }

    /// The value in effect at `breakpoint`, inherited from narrower
    /// breakpoints when it is not set there.
    pub fn resolve_at(&self, breakpoint: Breakpoint) -> Option<&V> {
        self.0.range(..=breakpoint).next_back().map(|(_, value)| value)
    }

    pub fn breakpoints(&self) -> impl Iterator<Item = Breakpoint> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &V)> {
        self.0.iter().map(|(breakpoint, value)| (*breakpoint, value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V> Default for Responsive<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(Breakpoint, V)> for Responsive<V> {
    fn from_iter<I: IntoIterator<Item = (Breakpoint, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// How a single property is specified: once for every viewport, or per
/// breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertySpec<V = Value> {
    Scalar(V),
    Responsive(Responsive<V>),
}

impl<V> PropertySpec<V> {
    pub fn scalar(value: impl Into<V>) -> Self {
        Self::Scalar(value.into())
    }

    /// True iff this is a breakpoint map with at least one value in it.
    pub fn is_responsive(&self) -> bool {
        match self {
            Self::Scalar(_) => false,
            Self::Responsive(responsive) => !responsive.is_empty(),
        }
    }

    /// The value set for exactly `breakpoint`. Scalars are set everywhere.
    pub fn value_at(&self, breakpoint: Breakpoint) -> Option<&V> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::Responsive(responsive) => responsive.get(breakpoint),
        }
    }

    /// The value in effect at `breakpoint`, following inheritance.
    pub fn resolve_at(&self, breakpoint: Breakpoint) -> Option<&V> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::Responsive(responsive) => responsive.resolve_at(breakpoint),
        }
    }
}

impl<V> From<Responsive<V>> for PropertySpec<V> {
    fn from(responsive: Responsive<V>) -> Self {
        Self::Responsive(responsive)
    }
}

/// Conversion used when filling a [`PropertyBag`] from component fields.
/// `None` means the property is absent.
pub trait IntoPropertySpec<V> {
    fn into_property_spec(self) -> Option<PropertySpec<V>>;
}

impl<V> IntoPropertySpec<V> for PropertySpec<V> {
    fn into_property_spec(self) -> Option<PropertySpec<V>> {
        Some(self)
    }
}

impl<V> IntoPropertySpec<V> for Responsive<V> {
    fn into_property_spec(self) -> Option<PropertySpec<V>> {
        Some(PropertySpec::Responsive(self))
    }
}

impl<V, T: IntoPropertySpec<V>> IntoPropertySpec<V> for Option<T> {
    fn into_property_spec(self) -> Option<PropertySpec<V>> {
        self.and_then(IntoPropertySpec::into_property_spec)
    }
}

/// Named component properties, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PropertyBag<V = Value>(IndexMap<String, PropertySpec<V>>);

impl<V> PropertyBag<V> {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn insert(&mut self, name: impl Into<String>, spec: PropertySpec<V>) -> Option<PropertySpec<V>> {
        self.0.insert(name.into(), spec)
    }

    /// Inserts `spec` unless it is absent, in which case the bag is left untouched.
    pub fn insert_opt(&mut self, name: impl Into<String>, spec: impl IntoPropertySpec<V>) {
        if let Some(spec) = spec.into_property_spec() {
            self.0.insert(name.into(), spec);
        }
    }

    pub fn with(mut self, name: impl Into<String>, spec: impl IntoPropertySpec<V>) -> Self {
        self.insert_opt(name, spec);
        self
    }

    pub fn with_scalar(mut self, name: impl Into<String>, value: impl Into<V>) -> Self {
        self.0.insert(name.into(), PropertySpec::Scalar(value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&PropertySpec<V>> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertySpec<V>)> {
        self.0.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Splits the property names into `(responsive, static)`.
    ///
    /// Breakpoint maps without any value belong to neither list.
    pub fn partition(&self) -> (Vec<&str>, Vec<&str>) {
        let mut responsive = Vec::new();
        let mut scalar = Vec::new();

        for (name, spec) in self.iter() {
            match spec {
                PropertySpec::Scalar(_) => scalar.push(name),
                PropertySpec::Responsive(map) if !map.is_empty() => responsive.push(name),
                PropertySpec::Responsive(_) => {}
            }
        }

        (responsive, scalar)
    }
}

impl<V> Default for PropertyBag<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, K: Into<String>> FromIterator<(K, PropertySpec<V>)> for PropertyBag<V> {
    fn from_iter<I: IntoIterator<Item = (K, PropertySpec<V>)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, spec)| (name.into(), spec)).collect())
    }
}

/// Types that describe their styling inputs as a [`PropertyBag`].
///
/// Usually derived with `#[derive(IntoPropertyBag)]`.
pub trait IntoPropertyBag {
    type Value;

    fn into_property_bag(self) -> PropertyBag<Self::Value>;
}

impl<V> IntoPropertyBag for PropertyBag<V> {
    type Value = V;

    fn into_property_bag(self) -> PropertyBag<V> {
        self
    }
}

impl<'de, V> Deserialize<'de> for PropertyBag<V>
where
    V: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, serde_json::Value>::deserialize(deserializer)?;

        let mut bag = PropertyBag::new();
        for (name, value) in raw {
            if let Some(spec) = classify(&name, value).map_err(D::Error::custom)? {
                bag.0.insert(name, spec);
            }
        }

        Ok(bag)
    }
}

/// Decides whether a loosely typed JSON value is responsive: it has to be an
/// object owning at least one breakpoint key. Other keys are ignored.
fn classify<V: DeserializeOwned>(
    name: &str,
    value: serde_json::Value,
) -> Result<Option<PropertySpec<V>>, serde_json::Error> {
    let map = match value {
        serde_json::Value::Null => return Ok(None),
        serde_json::Value::Object(map)
            if map.keys().any(|key| Breakpoint::from_name(key).is_some()) =>
        {
            map
        }
        serde_json::Value::Object(map) => {
            // Not a breakpoint map, so it's a scalar if the value type accepts objects.
            return match serde_json::from_value(serde_json::Value::Object(map)) {
                Ok(value) => Ok(Some(PropertySpec::Scalar(value))),
                Err(err) => {
                    debug!(property = name, error = %err, "dropping object without breakpoint keys");
                    Ok(None)
                }
            };
        }
        value => return Ok(Some(PropertySpec::Scalar(serde_json::from_value(value)?))),
    };

    let mut responsive = Responsive::new();
    for (key, value) in map {
        let Some(breakpoint) = Breakpoint::from_name(&key) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        responsive.insert(breakpoint, serde_json::from_value(value)?);
    }

    if responsive.is_empty() {
        return Ok(None);
    }

    Ok(Some(PropertySpec::Responsive(responsive)))
}
