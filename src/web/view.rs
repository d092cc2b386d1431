//! Panel view models.
//!
//! Each panel is built from the services alone and holds display-ready
//! strings, so the HTML templates and the terminal report print the same
//! labels. Building a view never touches another panel.

use crate::application::services::{MarketService, ScenarioOutcome};
use crate::domain::entities::{
    Citation, JurisdictionRow, JurisdictionSort, Province, RegionalFigure, RegionalFinding,
};
use crate::domain::repositories::MarketDataRepository;
use crate::domain::scenario::{
    SOLO_SHARE_MAX, SOLO_SHARE_MIN, SOLO_SHARE_STEP, VETS_PER_SOLO_FACILITY,
};
use crate::utils::format::{format_decimal, format_percent, french_date, group_thousands};
use crate::web::charts::BarChart;

/// Which of the three levels a displayed figure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureKind {
    Official,
    Derived,
    Estimate,
}

impl FigureKind {
    pub fn badge(self) -> &'static str {
        match self {
            FigureKind::Official => "Officiel",
            FigureKind::Derived => "Indicateur dérivé",
            FigureKind::Estimate => "Scénario (estimation)",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            FigureKind::Official => "official",
            FigureKind::Derived => "derived",
            FigureKind::Estimate => "estimate",
        }
    }
}

/// A labelled metric card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub kind: FigureKind,
}

impl Metric {
    fn new(label: impl Into<String>, value: impl Into<String>, kind: FigureKind) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            kind,
        }
    }

    fn count(label: impl Into<String>, n: u32) -> Self {
        Self::new(label, group_thousands(i64::from(n)), FigureKind::Official)
    }

    fn amount(label: impl Into<String>, value: f64) -> Self {
        Self::new(label, format_decimal(value, 1), FigureKind::Official)
    }
}

/// One line of the jurisdiction table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JurisdictionLine {
    pub code: &'static str,
    pub name: &'static str,
    pub active_vets: String,
    pub facilities: String,
    pub ratio: String,
}

impl From<&JurisdictionRow> for JurisdictionLine {
    fn from(row: &JurisdictionRow) -> Self {
        Self {
            code: row.province().code(),
            name: row.province().name(),
            active_vets: group_thousands(i64::from(row.active_vets())),
            facilities: group_thousands(i64::from(row.accredited_facilities())),
            ratio: format_decimal(row.ratio, 2),
        }
    }
}

/// A column the jurisdiction table can be reordered by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortLink {
    pub key: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Canada panel (CVMA, 2023-24).
#[derive(Debug, Clone, PartialEq)]
pub struct CanadaView {
    pub headline: Vec<Metric>,
    pub economic: Vec<Metric>,
    pub direct: Vec<Metric>,
    pub active_vets_chart: BarChart,
    pub facilities_chart: BarChart,
    pub ratio_chart: BarChart,
    pub sort: JurisdictionSort,
    pub sort_links: Vec<SortLink>,
    pub table: Vec<JurisdictionLine>,
}

impl CanadaView {
    pub fn build<R: MarketDataRepository>(
        market: &MarketService<R>,
        sort: JurisdictionSort,
    ) -> Self {
        let national = market.national();
        let impact = market.economic_impact();

        let headline = vec![
            Metric::count("Vétérinaires enregistrés (2024)", national.registered_vets),
            Metric::count("Vétérinaires actifs (2023-24)", national.active_vets),
            Metric::count(
                "Établissements accrédités (2023-24)",
                national.accredited_facilities,
            ),
            Metric::new(
                "Ratio (vétos / établissement) — indicateur dérivé",
                format_decimal(market.national_ratio(), 2),
                FigureKind::Derived,
            ),
        ];

        let economic = vec![
            Metric::amount("Production totale (M$ CAD)", impact.output_mcad),
            Metric::amount("PIB total (M$ CAD)", impact.gdp_mcad),
            Metric::count("Emplois (ETP/FTE)", impact.employment_fte),
            Metric::new(
                "Recettes fiscales totales (M$ CAD)",
                format_decimal(market.total_tax_mcad(), 1),
                FigureKind::Derived,
            ),
        ];

        let direct = vec![
            Metric::amount("Production directe (M$ CAD)", impact.output_direct_mcad),
            Metric::amount("PIB direct (M$ CAD)", impact.gdp_direct_mcad),
            Metric::count("Emplois directs (ETP/FTE)", impact.employment_direct_fte),
            Metric::amount("Recettes fédérales (M$ CAD)", impact.tax_federal_mcad),
            Metric::amount("Recettes provinciales (M$ CAD)", impact.tax_provincial_mcad),
            Metric::amount("Recettes municipales (M$ CAD)", impact.tax_municipal_mcad),
        ];

        let rows = market.jurisdiction_table(JurisdictionSort::ActiveVets);

        let active_vets_chart = BarChart::descending(
            "Vétérinaires actifs par juridiction (2023-24)",
            JurisdictionSort::ActiveVets.label(),
            rows.iter()
                .map(|r| (r.province().name(), f64::from(r.active_vets()))),
        );
        let facilities_chart = BarChart::descending(
            "Établissements accrédités par juridiction (2023-24)",
            JurisdictionSort::Facilities.label(),
            rows.iter()
                .map(|r| (r.province().name(), f64::from(r.accredited_facilities()))),
        );
        let ratio_chart = BarChart::descending(
            "Ratio vétérinaires actifs / établissements accrédités (proxy de concentration)",
            "Ratio",
            rows.iter().map(|r| (r.province().name(), r.ratio)),
        )
        .with_decimals(2);

        let table = market
            .jurisdiction_table(sort)
            .iter()
            .map(JurisdictionLine::from)
            .collect();

        let sort_links = JurisdictionSort::ALL
            .into_iter()
            .map(|s| SortLink {
                key: s.key(),
                label: s.label(),
                active: s == sort,
            })
            .collect();

        Self {
            headline,
            economic,
            direct,
            active_vets_chart,
            facilities_chart,
            ratio_chart,
            sort,
            sort_links,
            table,
        }
    }
}

/// One line of the practice table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeLine {
    pub label: &'static str,
    pub headcount: String,
    pub share: String,
}

/// A highlighted practice type, e.g. `Animaux de compagnie : 60% (n=1674)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightLine {
    pub label: &'static str,
    pub percent: String,
    pub headcount: u32,
}

/// A regional finding line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionLine {
    pub region: &'static str,
    pub share: String,
    pub headcount: u32,
}

impl From<&RegionalFigure> for RegionLine {
    fn from(figure: &RegionalFigure) -> Self {
        Self {
            region: figure.region,
            share: figure.share.to_string(),
            headcount: figure.headcount,
        }
    }
}

/// Québec panel (OMVQ).
#[derive(Debug, Clone, PartialEq)]
pub struct QuebecView {
    pub as_of: String,
    pub headline: Vec<Metric>,
    pub practice_chart: BarChart,
    pub highlights: Vec<HighlightLine>,
    pub practices: Vec<PracticeLine>,
    pub unallocated: PracticeLine,
    pub concentrated: Vec<RegionLine>,
    pub underserved: Vec<RegionLine>,
}

impl QuebecView {
    pub fn build<R: MarketDataRepository>(market: &MarketService<R>) -> Self {
        let membership = market.membership();

        let headline = vec![
            Metric::count(
                "Médecins vétérinaires membres (total)",
                membership.total_members,
            ),
            Metric::count("Statut actif (n)", membership.active_status),
            Metric::count("Femmes (n)", membership.female),
            Metric::count("Hommes (n)", membership.male),
        ];

        let shares = market.practice_shares();

        let practice_chart = BarChart::descending(
            "Répartition des pratiques principales (effectifs)",
            "Effectif",
            shares.iter().map(|s| (s.label, f64::from(s.headcount))),
        );

        let practices = shares
            .iter()
            .map(|s| PracticeLine {
                label: s.label,
                headcount: group_thousands(i64::from(s.headcount)),
                share: format_percent(s.share_pct, 1),
            })
            .collect();

        let unallocated = market.unallocated_members();
        let unallocated = PracticeLine {
            label: "Non répartis (indicateur dérivé)",
            headcount: group_thousands(i64::from(unallocated.headcount)),
            share: format_percent(unallocated.share_pct, 1),
        };

        let highlights = market
            .practice_highlights(3)
            .into_iter()
            .map(|h| HighlightLine {
                label: h.label,
                percent: format!("{}%", h.rounded_pct),
                headcount: h.headcount,
            })
            .collect();

        let regions = market.regional_figures();
        let lines_for = |finding: RegionalFinding| -> Vec<RegionLine> {
            regions
                .iter()
                .filter(|r| r.finding == finding)
                .map(RegionLine::from)
                .collect()
        };

        Self {
            as_of: french_date(membership.as_of),
            headline,
            practice_chart,
            highlights,
            practices,
            unallocated,
            concentrated: lines_for(RegionalFinding::HighestConcentration),
            underserved: lines_for(RegionalFinding::Underserved),
        }
    }
}

/// An entry of the jurisdiction selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JurisdictionOption {
    pub code: &'static str,
    pub name: &'static str,
    pub selected: bool,
}

/// Scenario panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioView {
    pub options: Vec<JurisdictionOption>,
    pub jurisdiction: &'static str,
    pub solo_share: u8,
    pub share_min: u8,
    pub share_max: u8,
    pub share_step: u8,
    pub official: Vec<Metric>,
    pub estimates: Vec<Metric>,
    pub hypothesis: String,
}

impl ScenarioView {
    pub fn build(outcome: &ScenarioOutcome) -> Self {
        let selected = outcome.input.province;
        let options = Province::ALL
            .into_iter()
            .map(|p| JurisdictionOption {
                code: p.code(),
                name: p.name(),
                selected: p == selected,
            })
            .collect();

        let row = &outcome.row;
        let official = vec![
            Metric::count("Vétérinaires actifs (officiel)", row.active_vets()),
            Metric::count(
                "Établissements accrédités (officiel)",
                row.accredited_facilities(),
            ),
            Metric::new(
                "Ratio (indicateur dérivé)",
                format_decimal(row.ratio, 2),
                FigureKind::Derived,
            ),
        ];

        let est = &outcome.estimate;
        let estimates = vec![
            Metric::new(
                "Établissements 'solo' (estim.)",
                format_decimal(est.solo_facilities, 0),
                FigureKind::Estimate,
            ),
            Metric::new(
                "Établissements multi-vétérinaires (estim.)",
                format_decimal(est.multi_facilities, 0),
                FigureKind::Estimate,
            ),
            Metric::new(
                "Vétérinaires 'solo' (estim.)",
                format_decimal(est.solo_vets, 0),
                FigureKind::Estimate,
            ),
            Metric::new(
                "Vétérinaires en structure multi (estim.)",
                format_decimal(est.multi_vets, 0),
                FigureKind::Estimate,
            ),
        ];

        Self {
            options,
            jurisdiction: selected.name(),
            solo_share: outcome.input.solo_share_pct,
            share_min: SOLO_SHARE_MIN,
            share_max: SOLO_SHARE_MAX,
            share_step: SOLO_SHARE_STEP,
            official,
            estimates,
            hypothesis: format!(
                "Hypothèse explicite : {} vétérinaire actif par établissement « solo »",
                format_decimal(VETS_PER_SOLO_FACILITY, 0)
            ),
        }
    }
}

/// Sources panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcesView {
    pub citations: Vec<Citation>,
}

impl SourcesView {
    pub fn build<R: MarketDataRepository>(market: &MarketService<R>) -> Self {
        Self {
            citations: market.citations(),
        }
    }
}
