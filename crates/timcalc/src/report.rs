//! Calculator reports: build them from the timing tables, render as text or JSON.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use anyhow::{Context, Result};
use clap::ValueEnum;
use sdrc::{Calculator, ClockCycleRecord, OverflowPolicy, Register};
use sdrc_memories::{find_part, DeviceTiming, MemoryPart, ALL_PARTS};
use serde::Serialize;

/// Output format for every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable register dump
    Text,
    /// Pretty-printed JSON on stdout
    Json,
}

/// Calculators for one part (or one input file).
#[derive(Debug)]
pub struct Group {
    pub title: String,
    pub entries: Vec<Entry>,
}

/// One computed register set.
#[derive(Debug)]
pub struct Entry {
    /// Nominal clock, when the record came from a table.
    pub freq_mhz: Option<u32>,
    pub sdrc: Calculator,
}

/// Every part at every tabulated clock rate.
pub fn all(policy: OverflowPolicy) -> Result<Vec<Group>> {
    ALL_PARTS
        .iter()
        .map(|part| part_group(part, part.timings, policy))
        .collect()
}

/// One part, optionally narrowed to a single clock rate.
pub fn show(name: &str, mhz: Option<u32>, policy: OverflowPolicy) -> Result<Vec<Group>> {
    let part =
        find_part(name).with_context(|| format!("unknown part `{name}` (see `timcalc list`)"))?;
    let group = match mhz {
        None => part_group(part, part.timings, policy)?,
        Some(mhz) => {
            let timing = part.at_mhz(mhz).with_context(|| {
                format!(
                    "{} has no timings for {mhz} MHz (available: {})",
                    part.name,
                    frequency_list(part)
                )
            })?;
            part_group(part, [timing], policy)?
        }
    };
    Ok(vec![group])
}

fn part_group<'a>(
    part: &MemoryPart,
    timings: impl IntoIterator<Item = &'a DeviceTiming>,
    policy: OverflowPolicy,
) -> Result<Group> {
    let entries = timings
        .into_iter()
        .map(|timing| {
            let sdrc = Calculator::with_policy(timing.record, policy)
                .with_context(|| format!("{} @ {} MHz", part.name, timing.freq_mhz))?;
            Ok(Entry {
                freq_mhz: Some(timing.freq_mhz),
                sdrc,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(part = part.name, entries = entries.len(), "part computed");
    Ok(Group {
        title: part.name.to_owned(),
        entries,
    })
}

fn frequency_list(part: &MemoryPart) -> String {
    part.frequencies()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// ── Rendering ───────────────────────────────────────────────────────────────

pub fn render(groups: &[Group], format: Format) -> Result<String> {
    match format {
        Format::Text => render_text(groups),
        Format::Json => render_json(groups),
    }
}

/// Part name, then one calculator dump per clock rate, blank-line separated.
fn render_text(groups: &[Group]) -> Result<String> {
    let mut out = String::new();
    for group in groups {
        writeln!(out, "{}", group.title)?;
        for entry in &group.entries {
            if let Some(mhz) = entry.freq_mhz {
                writeln!(out, "@ {mhz} MHz")?;
            }
            writeln!(out, "{}", entry.sdrc)?;
            writeln!(out)?;
        }
    }
    Ok(out)
}

#[derive(Serialize)]
struct EntryJson<'a> {
    part: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    freq_mhz: Option<u32>,
    t_ck: f64,
    policy: OverflowPolicy,
    registers: BTreeMap<&'static str, String>,
    cycles: &'a ClockCycleRecord,
}

fn render_json(groups: &[Group]) -> Result<String> {
    let entries: Vec<EntryJson<'_>> = groups
        .iter()
        .flat_map(|group| {
            group.entries.iter().map(move |entry| EntryJson {
                part: &group.title,
                freq_mhz: entry.freq_mhz,
                t_ck: entry.sdrc.clock_period_ns(),
                policy: entry.sdrc.policy(),
                registers: Register::ALL
                    .into_iter()
                    .map(|r| (r.name(), entry.sdrc.register(r).to_string()))
                    .collect(),
                cycles: entry.sdrc.cycles(),
            })
        })
        .collect();
    let mut json = serde_json::to_string_pretty(&entries)?;
    json.push('\n');
    Ok(json)
}

/// Known parts with their clock rates.
pub fn render_list(format: Format) -> Result<String> {
    match format {
        Format::Text => {
            let mut out = String::new();
            for part in ALL_PARTS {
                writeln!(
                    out,
                    "{:<20} {:<8} {} MHz",
                    part.name,
                    part.vendor,
                    frequency_list(part)
                )?;
            }
            Ok(out)
        }
        Format::Json => {
            let mut json = serde_json::to_string_pretty(ALL_PARTS)?;
            json.push('\n');
            Ok(json)
        }
    }
}
