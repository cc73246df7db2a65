#![cfg(feature = "serde")]

use serde::ser::*;

use crate::pixel::Dimensions;

impl Serialize for Dimensions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Dimensions", 2)?;

        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;

        state.end()
    }
}
