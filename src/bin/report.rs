//! Terminal rendition of the dashboard panels.
//!
//! Prints the same figures, labels and levels as the web panels, built from
//! the same view models.
//!
//! # Usage
//!
//! ```bash
//! # Canada panel, table ordered by ratio
//! cargo run --bin report -- canada --sort ratio
//!
//! # Québec panel
//! cargo run --bin report -- quebec
//!
//! # Scenario for Ontario at 35% solo facilities
//! cargo run --bin report -- scenario --jurisdiction ON --solo-share 35
//!
//! # Pick the scenario parameters from prompts
//! cargo run --bin report -- scenario --interactive
//!
//! # Source links
//! cargo run --bin report -- sources
//! ```
//!
//! # Environment Variables
//!
//! - `DEFAULT_JURISDICTION`, `DEFAULT_SOLO_SHARE`: scenario defaults, as for the server.
//!   Server-only settings are not read.

use linkinvet::application::services::{MarketService, ScenarioService};
use linkinvet::config;
use linkinvet::domain::entities::{JurisdictionSort, Province};
use linkinvet::domain::scenario::{
    SOLO_SHARE_MAX, SOLO_SHARE_MIN, SOLO_SHARE_STEP, ScenarioInput, is_valid_solo_share,
    solo_share_steps,
};
use linkinvet::infrastructure::static_data::StaticMarketData;
use linkinvet::web::view::{
    CanadaView, FigureKind, Metric, QuebecView, ScenarioView, SourcesView,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Select;
use std::sync::Arc;

/// Veterinary market figures for Canada and Québec in the terminal.
#[derive(Parser)]
#[command(name = "report")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// One subcommand per panel.
#[derive(Subcommand)]
enum Commands {
    /// National and per-jurisdiction figures (CVMA 2023-24)
    Canada {
        /// Table order: active_vets, facilities or ratio
        #[arg(short, long, default_value = "active_vets")]
        sort: String,
    },

    /// Québec membership figures (OMVQ)
    Quebec,

    /// Solo-practice what-if estimate
    Scenario {
        /// Jurisdiction code (e.g. QC, ON, YK)
        #[arg(short, long)]
        jurisdiction: Option<String>,

        /// Share of single-vet facilities, percent (0-80, step 5)
        #[arg(short = 's', long)]
        solo_share: Option<u8>,

        /// Choose the parameters from prompts
        #[arg(short, long)]
        interactive: bool,
    },

    /// Official source links
    Sources,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let repository = Arc::new(StaticMarketData::new());

    match cli.command {
        Commands::Canada { sort } => {
            let sort: JurisdictionSort = sort.parse()?;
            print_canada(&CanadaView::build(&MarketService::new(repository), sort));
        }
        Commands::Quebec => print_quebec(&QuebecView::build(&MarketService::new(repository))),
        Commands::Scenario {
            jurisdiction,
            solo_share,
            interactive,
        } => {
            let defaults = config::scenario_defaults_from_env()?;
            let input = if interactive {
                prompt_scenario(defaults)?
            } else {
                scenario_from_args(defaults, jurisdiction, solo_share)?
            };
            let outcome = ScenarioService::new(repository)
                .run(input)
                .context("Scenario failed")?;
            print_scenario(&ScenarioView::build(&outcome));
        }
        Commands::Sources => print_sources(&SourcesView::build(&MarketService::new(repository))),
    }

    Ok(())
}

/// Applies the command-line overrides with the same checks as the web form.
fn scenario_from_args(
    defaults: ScenarioInput,
    jurisdiction: Option<String>,
    solo_share: Option<u8>,
) -> Result<ScenarioInput> {
    let province = match jurisdiction {
        Some(code) => code.parse::<Province>()?,
        None => defaults.province,
    };
    let solo_share_pct = solo_share.unwrap_or(defaults.solo_share_pct);

    if !is_valid_solo_share(solo_share_pct) {
        anyhow::bail!(
            "--solo-share must be between {SOLO_SHARE_MIN} and {SOLO_SHARE_MAX} in steps of {SOLO_SHARE_STEP}, got {solo_share_pct}"
        );
    }

    Ok(ScenarioInput {
        province,
        solo_share_pct,
    })
}

fn prompt_scenario(defaults: ScenarioInput) -> Result<ScenarioInput> {
    let names: Vec<&str> = Province::ALL.iter().map(|p| p.name()).collect();
    let default_index = Province::ALL
        .iter()
        .position(|p| *p == defaults.province)
        .unwrap_or(0);

    let index = Select::new()
        .with_prompt("Juridiction (CVMA, 2023-24)")
        .items(&names)
        .default(default_index)
        .interact()?;
    let province = *Province::ALL
        .get(index)
        .context("Selected jurisdiction out of range")?;

    let shares: Vec<u8> = solo_share_steps().collect();
    let share_labels: Vec<String> = shares.iter().map(|s| format!("{s}%")).collect();
    let default_share = shares
        .iter()
        .position(|s| *s == defaults.solo_share_pct)
        .unwrap_or(0);

    let index = Select::new()
        .with_prompt("Part hypothétique d’établissements à vétérinaire unique")
        .items(&share_labels)
        .default(default_share)
        .interact()?;
    let solo_share_pct = *shares.get(index).context("Selected share out of range")?;

    Ok(ScenarioInput {
        province,
        solo_share_pct,
    })
}

fn badge(kind: FigureKind) -> ColoredString {
    let text = format!("[{}]", kind.badge());
    match kind {
        FigureKind::Official => text.green(),
        FigureKind::Derived => text.blue(),
        FigureKind::Estimate => text.yellow(),
    }
}

fn print_metrics(metrics: &[Metric]) {
    for m in metrics {
        println!(
            "  {:<52} {:>12}  {}",
            m.label,
            m.value.bright_white().bold(),
            badge(m.kind)
        );
    }
    println!();
}

fn print_heading(text: &str) {
    println!("{}", text.bright_blue().bold());
    println!();
}

fn print_canada(view: &CanadaView) {
    print_heading("Canada — Indicateurs nationaux (CVMA, 2023-24)");
    print_metrics(&view.headline);

    print_heading("Contribution économique (CVMA, 2023-24 — Canada)");
    print_metrics(&view.economic);
    print_metrics(&view.direct);

    print_heading(&format!("Répartition provinciale — tri : {}", view.sort.label()));
    println!(
        "  {:<34} {:>10} {:>14} {:>8}",
        "Juridiction".bright_white().bold(),
        "Vétos".bright_white().bold(),
        "Établissements".bright_white().bold(),
        "Ratio".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());
    for row in &view.table {
        println!(
            "  {:<34} {:>10} {:>14} {:>8}",
            row.name.cyan(),
            row.active_vets,
            row.facilities,
            row.ratio.blue()
        );
    }
    println!();
}

fn print_quebec(view: &QuebecView) {
    print_heading(&format!("Québec — Indicateurs (OMVQ, au {})", view.as_of));
    print_metrics(&view.headline);

    print_heading("Points saillants (officiels)");
    for h in &view.highlights {
        println!("  {} : {} (n={})", h.label, h.percent.bold(), h.headcount);
    }
    println!();

    print_heading("Pratique principale (OMVQ)");
    for p in view.practices.iter().chain(std::iter::once(&view.unallocated)) {
        println!("  {:<52} {:>6} {:>7}", p.label, p.headcount, p.share);
    }
    println!();

    print_heading("Répartition régionale — animaux de compagnie (OMVQ, constats)");
    println!("  Concentration la plus élevée :");
    for r in &view.concentrated {
        println!("    {} : {} (n={})", r.region.cyan(), r.share, r.headcount);
    }
    println!("  Régions plus touchées par un manque :");
    for r in &view.underserved {
        println!("    {} : {} (n={})", r.region.cyan(), r.share, r.headcount);
    }
    println!();
}

fn print_scenario(view: &ScenarioView) {
    print_heading(&format!(
        "Scénario (estimation) — {} à {}% d’établissements solo",
        view.jurisdiction, view.solo_share
    ));
    print_metrics(&view.official);
    print_metrics(&view.estimates);
    println!("  {}", view.hypothesis.yellow());
    println!();
}

fn print_sources(view: &SourcesView) {
    print_heading("Sources (liens officiels)");
    for (i, c) in view.citations.iter().enumerate() {
        println!("  {}. {}", i + 1, c.title.bold());
        println!("     {} : {}", c.link_label, c.url.bright_cyan());
        for h in c.highlights {
            println!("       - {h}");
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> ScenarioInput {
        ScenarioInput {
            province: Province::Bc,
            solo_share_pct: 35,
        }
    }

    #[test]
    fn test_defaults_used_without_arguments() {
        assert_eq!(scenario_from_args(defaults(), None, None).unwrap(), defaults());
    }

    #[test]
    fn test_arguments_override_defaults() {
        let input = scenario_from_args(defaults(), Some("qc".to_string()), Some(20)).unwrap();
        assert_eq!(input.province, Province::Qc);
        assert_eq!(input.solo_share_pct, 20);
    }

    #[test]
    fn test_invalid_arguments_rejected() {
        assert!(scenario_from_args(defaults(), Some("NU".to_string()), None).is_err());
        assert!(scenario_from_args(defaults(), None, Some(85)).is_err());
        assert!(scenario_from_args(defaults(), None, Some(22)).is_err());
    }

    #[test]
    fn test_off_step_default_rejected() {
        let defaults = ScenarioInput {
            province: Province::Qc,
            solo_share_pct: 12,
        };
        assert!(scenario_from_args(defaults, None, None).is_err());
    }
}
