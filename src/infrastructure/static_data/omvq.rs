//! OMVQ, Portrait démographique de la profession vétérinaire (26 September 2024).

use chrono::NaiveDate;

use crate::domain::entities::{PracticeType, RegionalFigure, RegionalFinding, ReportedShare};

pub const AS_OF: NaiveDate = match NaiveDate::from_ymd_opt(2024, 9, 26) {
    Some(date) => date,
    None => panic!("invalid OMVQ snapshot date"),
};

/// Members practicing in Québec.
pub const TOTAL_MEMBERS: u32 = 2804;
/// "statut actif (85%; n=2 381)".
pub const ACTIVE_STATUS: u32 = 2381;
/// "Féminin 72%; n=2 025".
pub const FEMALE: u32 = 2025;
/// "Masculin 28%; n=779".
pub const MALE: u32 = 779;

/// Main practice, base: OMVQ member veterinarians.
pub const PRACTICE_TYPES: [PracticeType; 11] = [
    PracticeType::new("Animaux de compagnie", 1674),
    PracticeType::new("Grands animaux", 305),
    PracticeType::new("Santé publique", 172),
    PracticeType::new("Services-conseils", 149),
    PracticeType::new("Équins", 94),
    PracticeType::new("Enseignement", 95),
    PracticeType::new("Administration", 76),
    PracticeType::new("Petits ruminants", 0),
    PracticeType::new("Grandes populations animales", 42),
    PracticeType::new("Faune et zoos", 15),
    PracticeType::new("Animaux de bassecour", 1),
];

/// Companion-animal practice by administrative region.
pub const REGIONAL_FIGURES: [RegionalFigure; 6] = [
    RegionalFigure {
        region: "Montérégie",
        headcount: 405,
        share: ReportedShare::Percent(24),
        finding: RegionalFinding::HighestConcentration,
    },
    RegionalFigure {
        region: "Montréal",
        headcount: 352,
        share: ReportedShare::Percent(21),
        finding: RegionalFinding::HighestConcentration,
    },
    RegionalFigure {
        region: "Abitibi-Témiscamingue",
        headcount: 20,
        share: ReportedShare::Percent(1),
        finding: RegionalFinding::Underserved,
    },
    RegionalFigure {
        region: "Gaspésie–Îles-de-la-Madeleine",
        headcount: 10,
        share: ReportedShare::Percent(1),
        finding: RegionalFinding::Underserved,
    },
    RegionalFigure {
        region: "Côte-Nord",
        headcount: 9,
        share: ReportedShare::Percent(1),
        finding: RegionalFinding::Underserved,
    },
    RegionalFigure {
        region: "Nord-du-Québec",
        headcount: 2,
        share: ReportedShare::LessThanOne,
        finding: RegionalFinding::Underserved,
    },
];
