//! Source documents shown on the sources panel.

use crate::domain::entities::{Citation, Publisher};

pub const CITATIONS: [Citation; 3] = [
    Citation {
        publisher: Publisher::Cvma,
        title: "CVMA — Economic Impact 2024 Update (rapport PDF, 2023-24)",
        link_label: "Document complet (PDF)",
        url: "https://www.canadianveterinarians.net/media/jo4hqvwc/cvma_final-report-en.pdf",
        highlights: &[
            "15 278 vétérinaires actifs et 4 328 établissements accrédités (2023-24)",
            "répartition par province (figures)",
            "impacts économiques (tables : production/PIB/emplois/recettes fiscales)",
        ],
    },
    Citation {
        publisher: Publisher::Cvma,
        title: "CVMA — Economic Impact Study 2024 Update (page de synthèse)",
        link_label: "Page de synthèse",
        url: "https://www.canadianveterinarians.net/about-cvma/latest-news/economic-impact-study-2024-update/",
        highlights: &[],
    },
    Citation {
        publisher: Publisher::Omvq,
        title: "OMVQ — Portrait démographique de la profession vétérinaire au Québec (au 26 septembre 2024)",
        link_label: "Document complet (PDF)",
        url: "https://www.omvq.qc.ca/DATA/TEXTEDOC/2024---Portrait-de-la-profession-veterinaire---Document.pdf",
        highlights: &[
            "2 804 membres au Québec",
            "répartition par pratique principale (effectifs)",
            "constats régionaux (ex. animaux de compagnie)",
        ],
    },
];
