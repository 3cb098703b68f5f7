/// A configurable value, together with the (inclusive) bounds a value must fall within.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Whether the value is within the bounds of the option.
    pub fn permits(&self, value: &T) -> bool {
        self.min <= *value && *value <= self.max
    }
}
