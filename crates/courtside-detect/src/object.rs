/// Classes the tennis object detector reports.
///
/// The discriminant doubles as the fixed slot index inside an
/// `ObjectFrame`, so consumers can address "the ball's box" positionally
/// without searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectClass {
    TennisBall = 0,
    PlayerFront = 1,
    PlayerBack = 2,
}

impl ObjectClass {
    pub const COUNT: usize = 3;

    pub const ALL: [ObjectClass; ObjectClass::COUNT] = [
        ObjectClass::TennisBall,
        ObjectClass::PlayerFront,
        ObjectClass::PlayerBack,
    ];

    /// The label string the native detector uses for this class.
    pub fn label(&self) -> &'static str {
        match self {
            ObjectClass::TennisBall => "tennis-ball",
            ObjectClass::PlayerFront => "player-front",
            ObjectClass::PlayerBack => "player-back",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "tennis-ball" => Some(ObjectClass::TennisBall),
            "player-front" => Some(ObjectClass::PlayerFront),
            "player-back" => Some(ObjectClass::PlayerBack),
            _ => None,
        }
    }

    /// Slot index inside an `ObjectFrame`.
    pub fn slot(&self) -> usize {
        *self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_order() {
        assert_eq!(ObjectClass::TennisBall.slot(), 0);
        assert_eq!(ObjectClass::PlayerFront.slot(), 1);
        assert_eq!(ObjectClass::PlayerBack.slot(), 2);
    }

    #[test]
    fn test_label_roundtrip() {
        for class in ObjectClass::ALL {
            assert_eq!(ObjectClass::from_label(class.label()), Some(class));
        }
        assert_eq!(ObjectClass::from_label("racquet"), None);
    }
}
