use crate::model::id::RoomId;

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub location: String,
}

/// Reduces a room name to the form used for uniqueness comparison
/// and storage: surrounding whitespace removed, lowercased.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_trims_and_lowercases() {
        assert_eq!(normalize_name(" Lab A "), "lab a");
        assert_eq!(normalize_name("lab a"), "lab a");
    }

    #[test]
    fn differently_cased_names_normalize_to_the_same_form() {
        assert_eq!(normalize_name("Lab A"), normalize_name(" lab a "));
    }

    #[test]
    fn distinct_names_stay_distinct() {
        assert_ne!(normalize_name("Lab A"), normalize_name("Lab B"));
    }
}
