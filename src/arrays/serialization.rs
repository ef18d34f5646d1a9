/*!
 * Serde support, only compiled with the `serde` feature.
 *
 * An array serializes as a struct of its dimensions and its elements in
 * row-major traversal order, which flattens any view into a plain owned
 * shape. Deserializing always rebuilds a base array and fails when the
 * element count does not match the dimensions.
 */

use crate::arrays::Array;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize + Clone> Serialize for Array<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Array", 2)?;
        state.serialize_field("dims", self.dims())?;
        state.serialize_field("data", &self.to_vec())?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename = "Array")]
struct ArrayParts<T> {
    dims: Vec<i64>,
    data: Vec<T>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Array<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Array<T>, D::Error> {
        let parts = ArrayParts::deserialize(deserializer)?;
        Array::try_from(&parts.dims, parts.data).map_err(serde::de::Error::custom)
    }
}
