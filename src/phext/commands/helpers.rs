use crate::coordinate::Coordinate;
use crate::error::{PhextError, Result};
use crate::model::StoredPhext;
use crate::store::DataStore;

/// Loads an existing document, or starts an empty one under `label`.
pub fn load_or_create<S: DataStore>(store: &S, label: &str) -> Result<StoredPhext> {
    match store.get_phext(label) {
        Ok(phext) => Ok(phext),
        Err(PhextError::PhextNotFound(_)) => {
            Ok(StoredPhext::new(label.to_string(), String::new()))
        }
        Err(e) => Err(e),
    }
}

/// An explicit coordinate wins; otherwise the document's current one.
pub fn target_coordinate(phext: &StoredPhext, requested: Option<Coordinate>) -> Coordinate {
    requested.unwrap_or(phext.metadata.coordinate)
}
