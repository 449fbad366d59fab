//! Layout configuration for the dashboard.

/// Split of the middle row between the left panel and the medal chart.
#[derive(Debug, Clone)]
pub struct PanelLayoutConfig {
    /// Width share of the word cloud / discipline panel, in percent.
    pub detail_percent: u16,
    /// Width share of the medal chart, in percent.
    pub chart_percent: u16,
    /// Height share of the middle row, in percent.
    pub middle_percent: u16,
}

impl Default for PanelLayoutConfig {
    fn default() -> Self {
        Self {
            detail_percent: 60,
            chart_percent: 40,
            middle_percent: 55,
        }
    }
}

/// Relative column weights of the two tables.
#[derive(Debug, Clone)]
pub struct TableLayoutConfig {
    /// Weights for Name, Gender, Birthday, Deathday, Place of birth, Place of death.
    pub medalist_weights: [u16; 6],
    /// Weights for Discipline, Name, Medal Color, Olympic Event.
    pub discipline_weights: [u16; 4],
}

impl Default for TableLayoutConfig {
    fn default() -> Self {
        Self {
            medalist_weights: [21, 7, 18, 18, 18, 18],
            discipline_weights: [25, 35, 20, 20],
        }
    }
}

/// Configuration for the medal bar chart.
#[derive(Debug, Clone)]
pub struct ChartLayoutConfig {
    /// Width of each bar in characters; fits a four digit year label.
    pub bar_width: u16,
    /// Gap between bars.
    pub bar_gap: u16,
}

impl Default for ChartLayoutConfig {
    fn default() -> Self {
        Self {
            bar_width: 4,
            bar_gap: 1,
        }
    }
}

/// Combined layout configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Panel split.
    pub panels: PanelLayoutConfig,
    /// Table column weights.
    pub tables: TableLayoutConfig,
    /// Bar chart sizing.
    pub chart: ChartLayoutConfig,
}
