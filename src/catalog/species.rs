//! Static species preset tables per discipline
//!
//! Point values and size thresholds follow the federation catch & release
//! regulations (fipsas.it). Point tiers are ordered S, M, L, XL; thresholds
//! are the centimeter boundaries S/M, M/L and L/XL.

use crate::catalog::Discipline;

/// A species preset from the discipline catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub scientific_name: &'static str,
    /// Point tiers [small, medium, large, extra_large]
    pub points: [i32; 4],
    /// Tier boundaries in cm [small/medium, medium/large, large/extra_large]
    pub thresholds_cm: [f64; 3],
}

/// Big game - large Mediterranean pelagics
const BIG_GAME: &[SpeciesPreset] = &[
    SpeciesPreset {
        id: "tonno_rosso",
        name: "Tonno Rosso",
        scientific_name: "Thunnus thynnus",
        points: [500, 1000, 2000, 4000],
        thresholds_cm: [100.0, 150.0, 200.0],
    },
    SpeciesPreset {
        id: "pesce_spada",
        name: "Pesce Spada",
        scientific_name: "Xiphias gladius",
        points: [400, 800, 1500, 3000],
        thresholds_cm: [120.0, 180.0, 250.0],
    },
    SpeciesPreset {
        id: "aguglia_imperiale",
        name: "Aguglia Imperiale",
        scientific_name: "Tetrapturus belone",
        points: [600, 1200, 2500, 5000],
        thresholds_cm: [140.0, 180.0, 220.0],
    },
    SpeciesPreset {
        id: "alalunga",
        name: "Alalunga",
        scientific_name: "Thunnus alalunga",
        points: [300, 600, 1000, 1800],
        thresholds_cm: [60.0, 80.0, 100.0],
    },
    SpeciesPreset {
        id: "lampuga_bg",
        name: "Lampuga",
        scientific_name: "Coryphaena hippurus",
        points: [150, 300, 500, 800],
        thresholds_cm: [50.0, 80.0, 110.0],
    },
];

/// Drifting - same pelagics as big game, narrower list
const DRIFTING: &[SpeciesPreset] = &[
    SpeciesPreset {
        id: "tonno_rosso_dr",
        name: "Tonno Rosso",
        scientific_name: "Thunnus thynnus",
        points: [500, 1000, 2000, 4000],
        thresholds_cm: [100.0, 150.0, 200.0],
    },
    SpeciesPreset {
        id: "alalunga_dr",
        name: "Alalunga",
        scientific_name: "Thunnus alalunga",
        points: [300, 600, 1000, 1800],
        thresholds_cm: [60.0, 80.0, 100.0],
    },
    SpeciesPreset {
        id: "pesce_spada_dr",
        name: "Pesce Spada",
        scientific_name: "Xiphias gladius",
        points: [400, 800, 1500, 3000],
        thresholds_cm: [120.0, 180.0, 250.0],
    },
];

/// Coastal trolling - coastal pelagics
const TRAINA_COSTIERA: &[SpeciesPreset] = &[
    SpeciesPreset {
        id: "ricciola",
        name: "Ricciola",
        scientific_name: "Seriola dumerili",
        points: [200, 400, 800, 1500],
        thresholds_cm: [50.0, 80.0, 110.0],
    },
    SpeciesPreset {
        id: "dentice_tc",
        name: "Dentice",
        scientific_name: "Dentex dentex",
        points: [150, 300, 600, 1000],
        thresholds_cm: [30.0, 45.0, 60.0],
    },
    SpeciesPreset {
        id: "leccia",
        name: "Leccia",
        scientific_name: "Lichia amia",
        points: [180, 350, 700, 1200],
        thresholds_cm: [50.0, 75.0, 100.0],
    },
    SpeciesPreset {
        id: "lampuga_tc",
        name: "Lampuga",
        scientific_name: "Coryphaena hippurus",
        points: [100, 200, 400, 700],
        thresholds_cm: [40.0, 60.0, 85.0],
    },
    SpeciesPreset {
        id: "serra",
        name: "Serra",
        scientific_name: "Pomatomus saltatrix",
        points: [80, 160, 300, 500],
        thresholds_cm: [35.0, 50.0, 70.0],
    },
    SpeciesPreset {
        id: "palamita",
        name: "Palamita",
        scientific_name: "Sarda sarda",
        points: [80, 150, 280, 450],
        thresholds_cm: [35.0, 50.0, 65.0],
    },
];

/// Bottom fishing
const BOLENTINO: &[SpeciesPreset] = &[
    SpeciesPreset {
        id: "cernia",
        name: "Cernia Bruna",
        scientific_name: "Epinephelus marginatus",
        points: [2126, 4890, 9330, 12512],
        thresholds_cm: [45.0, 60.0, 75.0],
    },
    SpeciesPreset {
        id: "dentice_bo",
        name: "Dentice",
        scientific_name: "Dentex dentex",
        points: [150, 300, 550, 900],
        thresholds_cm: [30.0, 45.0, 60.0],
    },
    SpeciesPreset {
        id: "pagello",
        name: "Pagello Fragolino",
        scientific_name: "Pagellus erythrinus",
        points: [50, 100, 180, 300],
        thresholds_cm: [18.0, 25.0, 35.0],
    },
    SpeciesPreset {
        id: "sarago_maggiore",
        name: "Sarago Maggiore",
        scientific_name: "Diplodus sargus",
        points: [80, 150, 280, 450],
        thresholds_cm: [23.0, 32.0, 42.0],
    },
    SpeciesPreset {
        id: "tanuta",
        name: "Tanuta",
        scientific_name: "Spondyliosoma cantharus",
        points: [60, 120, 220, 350],
        thresholds_cm: [20.0, 28.0, 38.0],
    },
    SpeciesPreset {
        id: "orata_bo",
        name: "Orata",
        scientific_name: "Sparus aurata",
        points: [100, 200, 380, 600],
        thresholds_cm: [25.0, 38.0, 50.0],
    },
];

/// Surf casting - shore species
const SURF_CASTING: &[SpeciesPreset] = &[
    SpeciesPreset {
        id: "spigola",
        name: "Spigola",
        scientific_name: "Dicentrarchus labrax",
        points: [150, 300, 550, 900],
        thresholds_cm: [36.0, 50.0, 70.0],
    },
    SpeciesPreset {
        id: "orata_sc",
        name: "Orata",
        scientific_name: "Sparus aurata",
        points: [100, 200, 380, 600],
        thresholds_cm: [25.0, 38.0, 50.0],
    },
    SpeciesPreset {
        id: "sarago_sc",
        name: "Sarago",
        scientific_name: "Diplodus sargus",
        points: [70, 140, 260, 420],
        thresholds_cm: [23.0, 32.0, 42.0],
    },
    SpeciesPreset {
        id: "mormora",
        name: "Mormora",
        scientific_name: "Lithognathus mormyrus",
        points: [50, 100, 180, 280],
        thresholds_cm: [20.0, 28.0, 38.0],
    },
    SpeciesPreset {
        id: "ombrina",
        name: "Ombrina",
        scientific_name: "Umbrina cirrosa",
        points: [120, 240, 450, 750],
        thresholds_cm: [30.0, 45.0, 65.0],
    },
];

/// Shore spinning - coastal predators
const SHORE: &[SpeciesPreset] = &[
    SpeciesPreset {
        id: "spigola_sp",
        name: "Spigola",
        scientific_name: "Dicentrarchus labrax",
        points: [150, 300, 550, 900],
        thresholds_cm: [36.0, 50.0, 70.0],
    },
    SpeciesPreset {
        id: "serra_sp",
        name: "Serra",
        scientific_name: "Pomatomus saltatrix",
        points: [80, 160, 300, 500],
        thresholds_cm: [35.0, 50.0, 70.0],
    },
    SpeciesPreset {
        id: "barracuda",
        name: "Barracuda",
        scientific_name: "Sphyraena sphyraena",
        points: [100, 200, 380, 600],
        thresholds_cm: [40.0, 55.0, 75.0],
    },
    SpeciesPreset {
        id: "leccia_sp",
        name: "Leccia Stella",
        scientific_name: "Trachinotus ovatus",
        points: [70, 140, 260, 420],
        thresholds_cm: [25.0, 35.0, 50.0],
    },
];

/// Eging - cephalopods
const EGING: &[SpeciesPreset] = &[
    SpeciesPreset {
        id: "totano",
        name: "Totano",
        scientific_name: "Todarodes sagittatus",
        points: [100, 200, 350, 550],
        thresholds_cm: [20.0, 30.0, 45.0],
    },
    SpeciesPreset {
        id: "calamaro",
        name: "Calamaro",
        scientific_name: "Loligo vulgaris",
        points: [80, 160, 280, 450],
        thresholds_cm: [15.0, 25.0, 35.0],
    },
    SpeciesPreset {
        id: "seppia",
        name: "Seppia",
        scientific_name: "Sepia officinalis",
        points: [60, 120, 220, 350],
        thresholds_cm: [12.0, 18.0, 28.0],
    },
];

const VERTICAL_JIGGING: &[SpeciesPreset] = &[
    SpeciesPreset {
        id: "ricciola_vj",
        name: "Ricciola",
        scientific_name: "Seriola dumerili",
        points: [200, 400, 800, 1500],
        thresholds_cm: [50.0, 80.0, 110.0],
    },
    SpeciesPreset {
        id: "dentice_vj",
        name: "Dentice",
        scientific_name: "Dentex dentex",
        points: [150, 300, 600, 1000],
        thresholds_cm: [30.0, 45.0, 60.0],
    },
    SpeciesPreset {
        id: "cernia_vj",
        name: "Cernia",
        scientific_name: "Epinephelus marginatus",
        points: [250, 500, 1000, 1800],
        thresholds_cm: [45.0, 65.0, 90.0],
    },
    SpeciesPreset {
        id: "leccia_vj",
        name: "Leccia",
        scientific_name: "Lichia amia",
        points: [180, 350, 700, 1200],
        thresholds_cm: [50.0, 75.0, 100.0],
    },
];

/// Fallback for disciplines without a dedicated species list
pub const DEFAULT_PRESETS: &[SpeciesPreset] = &[SpeciesPreset {
    id: "generic_1",
    name: "Specie 1",
    scientific_name: "",
    points: [100, 200, 400, 800],
    thresholds_cm: [30.0, 50.0, 80.0],
}];

/// Species presets for a known discipline
pub fn presets_for(discipline: Discipline) -> &'static [SpeciesPreset] {
    match discipline {
        Discipline::BigGame => BIG_GAME,
        Discipline::Drifting => DRIFTING,
        Discipline::TrainaCostiera => TRAINA_COSTIERA,
        Discipline::Bolentino => BOLENTINO,
        Discipline::SurfCasting => SURF_CASTING,
        Discipline::Shore => SHORE,
        Discipline::Eging => EGING,
        Discipline::VerticalJigging => VERTICAL_JIGGING,
    }
}

/// Species presets for a host-supplied discipline key, falling back to the
/// generic catalog when the key is unknown
pub fn presets_for_key(key: &str) -> &'static [SpeciesPreset] {
    match Discipline::from_key(key) {
        Some(discipline) => presets_for(discipline),
        None => DEFAULT_PRESETS,
    }
}

/// Look up a preset by id within a discipline's list
pub fn find_preset(key: &str, species_id: &str) -> Option<&'static SpeciesPreset> {
    presets_for_key(key).iter().find(|p| p.id == species_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bolentino_catalog() {
        let presets = presets_for(Discipline::Bolentino);
        assert_eq!(presets.len(), 6);

        let cernia = presets.iter().find(|p| p.id == "cernia").unwrap();
        assert_eq!(cernia.points, [2126, 4890, 9330, 12512]);
        assert_eq!(cernia.thresholds_cm, [45.0, 60.0, 75.0]);
    }

    #[test]
    fn test_unknown_key_falls_back() {
        let presets = presets_for_key("KAYAK_TROLLING");
        assert_eq!(presets.len(), 1);
        assert_eq!(presets[0].id, "generic_1");
    }

    #[test]
    fn test_ids_unique_within_discipline() {
        for key in [
            "BIG_GAME",
            "DRIFTING",
            "TRAINA_COSTIERA",
            "BOLENTINO",
            "SURF_CASTING",
            "SHORE",
            "EGING",
            "VERTICAL_JIGGING",
        ] {
            let presets = presets_for_key(key);
            let mut seen = std::collections::HashSet::new();
            for p in presets {
                assert!(seen.insert(p.id), "duplicate id {} in {}", p.id, key);
            }
        }
    }

    #[test]
    fn test_thresholds_ascending() {
        for key in ["BIG_GAME", "BOLENTINO", "EGING", "VERTICAL_JIGGING"] {
            for p in presets_for_key(key) {
                assert!(p.thresholds_cm[0] < p.thresholds_cm[1]);
                assert!(p.thresholds_cm[1] < p.thresholds_cm[2]);
            }
        }
    }

    #[test]
    fn test_find_preset() {
        assert!(find_preset("BOLENTINO", "cernia").is_some());
        assert!(find_preset("BOLENTINO", "spigola").is_none());
        assert!(find_preset("NO_SUCH", "generic_1").is_some());
    }
}
