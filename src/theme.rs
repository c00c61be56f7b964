// Chart palettes. `mocha` is the Catppuccin Mocha palette, `light` is a plain
// white chart close to what the experiment notebooks used to produce.

use plotters::style::RGBColor;

pub mod mocha {
    use super::RGBColor;

    pub const BASE: RGBColor = RGBColor(30, 30, 46); // #1e1e2e
    pub const TEXT: RGBColor = RGBColor(205, 214, 244); // #cdd6f4
    pub const SURFACE0: RGBColor = RGBColor(49, 50, 68); // #313244
    pub const SURFACE1: RGBColor = RGBColor(69, 71, 90); // #45475a
    pub const BLUE: RGBColor = RGBColor(137, 180, 250); // #89b4fa
    pub const RED: RGBColor = RGBColor(243, 139, 168); // #f38ba8
    pub const YELLOW: RGBColor = RGBColor(249, 226, 175); // #f9e2af
}

pub mod light {
    use super::RGBColor;

    pub const BASE: RGBColor = RGBColor(255, 255, 255);
    pub const TEXT: RGBColor = RGBColor(0, 0, 0);
    pub const GRID: RGBColor = RGBColor(235, 235, 235);
    pub const AXIS: RGBColor = RGBColor(120, 120, 120);
    pub const BLUE: RGBColor = RGBColor(0, 0, 255);
    pub const RED: RGBColor = RGBColor(255, 0, 0);
}
