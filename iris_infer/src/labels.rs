//! Label table for the iris classifier
//!
//! The table order must match the class encoding the model was trained
//! with. Cardinality is validated once at artifact load time; per-request
//! lookups stay checked so a disagreement can never panic a handler.

/// Total number of iris classes
pub const NUM_CLASSES: usize = 3;

/// Class names, indexed by the model's predicted class
pub const CLASS_NAMES: [&str; NUM_CLASSES] = [
    "Iris Setosa",
    "Iris Versicolour",
    "Iris Virginica",
];

/// Get the label for a predicted class index
pub fn class_name(index: usize) -> Option<&'static str> {
    CLASS_NAMES.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name_valid_indices() {
        assert_eq!(class_name(0), Some("Iris Setosa"));
        assert_eq!(class_name(1), Some("Iris Versicolour"));
        assert_eq!(class_name(2), Some("Iris Virginica"));
    }

    #[test]
    fn test_class_name_out_of_range() {
        assert_eq!(class_name(NUM_CLASSES), None);
        assert_eq!(class_name(usize::MAX), None);
    }

    #[test]
    fn test_table_matches_cardinality() {
        assert_eq!(CLASS_NAMES.len(), NUM_CLASSES);
    }
}
