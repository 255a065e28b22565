//! Tournament discipline keys

/// Tournament discipline
///
/// The host application identifies disciplines by the string keys stored on
/// the tournament record (`BIG_GAME`, `BOLENTINO`, ...). Keys that do not
/// match any known discipline resolve to the generic fallback catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discipline {
    BigGame,
    Drifting,
    TrainaCostiera,
    Bolentino,
    SurfCasting,
    Shore,
    Eging,
    VerticalJigging,
}

impl Discipline {
    pub fn from_key(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "BIG_GAME" => Some(Discipline::BigGame),
            "DRIFTING" => Some(Discipline::Drifting),
            "TRAINA_COSTIERA" => Some(Discipline::TrainaCostiera),
            "BOLENTINO" => Some(Discipline::Bolentino),
            "SURF_CASTING" => Some(Discipline::SurfCasting),
            "SHORE" => Some(Discipline::Shore),
            "EGING" => Some(Discipline::Eging),
            "VERTICAL_JIGGING" => Some(Discipline::VerticalJigging),
            _ => None,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            Discipline::BigGame => "BIG_GAME",
            Discipline::Drifting => "DRIFTING",
            Discipline::TrainaCostiera => "TRAINA_COSTIERA",
            Discipline::Bolentino => "BOLENTINO",
            Discipline::SurfCasting => "SURF_CASTING",
            Discipline::Shore => "SHORE",
            Discipline::Eging => "EGING",
            Discipline::VerticalJigging => "VERTICAL_JIGGING",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_known() {
        assert_eq!(Discipline::from_key("BOLENTINO"), Some(Discipline::Bolentino));
        assert_eq!(Discipline::from_key("big_game"), Some(Discipline::BigGame));
    }

    #[test]
    fn test_from_key_unknown() {
        assert_eq!(Discipline::from_key("CARP_FISHING"), None);
        assert_eq!(Discipline::from_key(""), None);
    }

    #[test]
    fn test_key_round_trip() {
        for d in [
            Discipline::BigGame,
            Discipline::Drifting,
            Discipline::TrainaCostiera,
            Discipline::Bolentino,
            Discipline::SurfCasting,
            Discipline::Shore,
            Discipline::Eging,
            Discipline::VerticalJigging,
        ] {
            assert_eq!(Discipline::from_key(d.as_key()), Some(d));
        }
    }
}
