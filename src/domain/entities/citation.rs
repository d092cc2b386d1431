//! Cited source documents.

/// Organisation that published a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Publisher {
    /// Canadian Veterinary Medical Association.
    Cvma,
    /// Ordre des médecins vétérinaires du Québec.
    Omvq,
}

impl Publisher {
    pub fn acronym(self) -> &'static str {
        match self {
            Publisher::Cvma => "CVMA",
            Publisher::Omvq => "OMVQ",
        }
    }
}

/// A public document the dashboard figures are copied from.
///
/// The URL is displayed as-is and never fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Citation {
    pub publisher: Publisher,
    pub title: &'static str,
    pub link_label: &'static str,
    pub url: &'static str,
    pub highlights: &'static [&'static str],
}
