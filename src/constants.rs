pub mod files {
    /// Suffix of the per-run result tables written by the colony
    pub const DATA_SUFFIX: &str = ".csv";
    /// Folder created next to each result table to hold its charts
    pub const PLOTS_DIR: &str = "plots";
    pub const RENAME_FROM: &str = ".stg";
    pub const RENAME_TO: &str = ".csv";
}

pub mod charts {
    pub const CHART_IMAGE_FORMAT: &str = "png";
    pub const CHART_DIMS: (u32, u32) = (1000, 600);
    pub const FONT: &str = "sans-serif";

    pub const MAX_WEIGHT_NAME: &str = "epoch_vs_max_weight";
    pub const CYCLES_SPENT_NAME: &str = "epoch_vs_cycles_spent";

    pub const MAX_WEIGHT_TITLE: &str = "Epoch vs. Max Weight";
    pub const CYCLES_SPENT_TITLE: &str = "Epoch vs. Cycles Spent with Trend Analysis";
    pub const EPOCH_LABEL: &str = "Epoch";
    pub const MAX_WEIGHT_LABEL: &str = "Max Weight";
    pub const CYCLES_SPENT_LABEL: &str = "Cycles Spent";
    pub const ACTUAL_CYCLES_LABEL: &str = "Actual Cycles";

    /// Fraction of the value range added above and below the data
    pub const Y_PADDING: f64 = 0.05;
}
