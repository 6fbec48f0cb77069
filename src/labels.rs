/// Species the classifier was trained on, index-aligned with the model's
/// output layer.
const SPECIES: [&str; 11] = [
    "Animal Fish",
    "Bass",
    "Black Sea Sprat",
    "Gilt Head Bream",
    "Hourse Mackerel",
    "Red Mullet",
    "Red Sea Bream",
    "Sea Bass",
    "Shrimp",
    "Striped Red Mullet",
    "Trout",
];

/// Ordered, immutable set of class labels. The index of a name is its
/// class identifier.
#[derive(Debug, Clone)]
pub struct LabelSet {
    names: &'static [&'static str],
}

impl LabelSet {
    pub fn builtin() -> Self {
        Self { names: &SPECIES }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static str> {
        self.names.get(index).copied()
    }

    pub fn names(&self) -> &[&'static str] {
        self.names
    }
}

impl Default for LabelSet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_labels_cover_eleven_species() {
        let labels = LabelSet::builtin();

        assert_eq!(labels.len(), 11);
        assert_eq!(labels.get(0), Some("Animal Fish"));
        assert_eq!(labels.get(3), Some("Gilt Head Bream"));
        assert_eq!(labels.get(10), Some("Trout"));
        assert_eq!(labels.get(11), None);
    }
}
