//! Layout reports: JSON documents and plain-text tables.

use pallet_layout_bed::LoadPlan;
use pallet_layout_core::{ArrangeSummary, Config, Placement, PlacementStats, AABB3D};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Everything a renderer or a spreadsheet needs from one arrangement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutReport {
    /// The configuration the plan was built from.
    pub config: Config,
    /// Pass statistics.
    pub summary: ArrangeSummary,
    /// One record per pallet, overflowed ones included.
    pub placements: Vec<Placement>,
    /// Display counts over `placements`.
    pub stats: PlacementStats,
    /// The cargo space, for drawing the trailer outline.
    pub bed: AABB3D<f64>,
    /// Share of the cargo space filled by placed pallets.
    pub volume_utilization_percent: f64,
}

impl LayoutReport {
    /// Captures the current state of an arranged plan.
    pub fn from_plan(plan: &LoadPlan) -> Self {
        let placements = plan.placements();
        let stats = PlacementStats::from_placements(&placements);

        let bed_volume = plan.bed().volume();
        let placed_volume: f64 = placements
            .iter()
            .filter(|p| !p.overflow)
            .map(|p| p.bounding_box().volume())
            .sum();
        let volume_utilization_percent = if bed_volume > 0.0 {
            placed_volume / bed_volume * 100.0
        } else {
            0.0
        };

        Self {
            config: plan.to_config(),
            summary: plan.summary().clone(),
            placements,
            stats,
            bed: plan.bed().bounding_box(),
            volume_utilization_percent,
        }
    }

    /// Serializes the report as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Writes the report as pretty JSON.
    pub fn save_json(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = self.to_json()?;
        fs::write(path, json)
    }

    /// Renders the report as a fixed-width table followed by a summary line.
    pub fn to_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<12} {:>7} {:>7} {:>6} {:>6} {:>6}  {:<8} {}",
            "name", "x", "z", "w", "l", "h", "color", "status"
        );
        let _ = writeln!(out, "{:-<72}", "");

        for p in &self.placements {
            let status = if p.overflow {
                "OVERFLOW"
            } else if !p.visible {
                "hidden"
            } else {
                "placed"
            };
            let _ = writeln!(
                out,
                "{:<12} {:>7.3} {:>7.3} {:>6.2} {:>6.2} {:>6.2}  {:<8} {}",
                p.name,
                p.position[0],
                p.position[2],
                p.width(),
                p.length(),
                p.height(),
                p.color.to_string(),
                status
            );
        }

        let s = &self.summary;
        let _ = writeln!(out, "{:-<72}", "");
        let _ = writeln!(
            out,
            "bed {}x{} m: {}/{} placed, {} rows, {:.2} loading meters, {:.1}% floor used",
            self.config.trailer_width,
            self.config.trailer_length,
            s.total_placed,
            s.total_requested,
            s.rows_used,
            s.loading_meters,
            s.utilization_percent
        );
        let _ = writeln!(
            out,
            "{} hidden, {} wireframe, {:.1}% volume used",
            self.stats.hidden_count, self.stats.wireframe_count, self.volume_utilization_percent
        );
        if !s.overflow.is_empty() {
            let _ = writeln!(out, "overflow: {}", s.overflow.join(", "));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(count: usize) -> LayoutReport {
        let plan = LoadPlan::new(Config::new().with_pallet_count(count)).unwrap();
        LayoutReport::from_plan(&plan)
    }

    #[test]
    fn test_from_plan() {
        let report = report(4);
        assert_eq!(report.placements.len(), 4);
        assert_eq!(report.summary.total_placed, 4);
        assert_eq!(report.summary.rows_used, 2);
        assert_eq!(report.config.pallet_count, 4);
        assert_eq!(report.stats.count, 4);
        assert_eq!(report.stats.placed_count(), 4);
        assert_eq!(report.stats.color_distribution.len(), 4);
    }

    #[test]
    fn test_volume_utilization() {
        let report = report(33);
        // 33 pallets of 0.8 x 1.2 x 0.6 in a 2.5 x 13.6 x 2.7 trailer
        let expected = 33.0 * 0.576 / (2.5 * 13.6 * 2.7) * 100.0;
        assert!((report.volume_utilization_percent - expected).abs() < 1e-9);
        assert!((report.bed.height() - 2.7).abs() < 1e-12);
        assert!((report.bed.length() - 13.6).abs() < 1e-12);
    }

    #[test]
    fn test_overflow_excluded_from_stats_placed() {
        let report = report(35);
        assert_eq!(report.stats.overflow_count, 2);
        assert_eq!(report.stats.placed_count(), report.summary.total_placed);
    }

    #[test]
    fn test_json_round_trip() {
        let report = report(3);
        let json = report.to_json().unwrap();
        assert!(json.contains("\"pallet_3\""));
        assert!(json.contains("\"#1f77b4\""));

        let back: LayoutReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.placements, report.placements);
        assert_eq!(back.summary.total_placed, 3);
        assert_eq!(back.summary.overflow, report.summary.overflow);
    }

    #[test]
    fn test_table_lists_overflow() {
        let table = report(35).to_table();
        assert!(table.contains("pallet_1 "));
        assert!(table.contains("OVERFLOW"));
        assert!(table.contains("33/35 placed"));
        assert!(table.contains("overflow: pallet_34, pallet_35"));
        assert!(table.contains("0 hidden, 0 wireframe"));
    }

    #[test]
    fn test_save_json() {
        let dir = std::env::temp_dir().join("pallet_layout_test_save_json");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("layout.json");
        report(2).save_json(&path).unwrap();
        let saved: LayoutReport =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved.placements.len(), 2);
    }
}
