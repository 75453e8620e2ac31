//! # GUI Theme
//!
//! ShapShap dark theme for egui: deep slate background with cyan and blue
//! accents, tuned for a fintech dashboard rather than a terminal.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable theme configuration for persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Deep slate background
    pub background: [u8; 3],
    /// Raised card/panel surface
    pub surface: [u8; 3],
    /// Primary text
    pub text: [u8; 3],
    /// Secondary/placeholder text
    pub text_dim: [u8; 3],
    /// Primary accent (cyan)
    pub primary: [u8; 3],
    /// Secondary accent (blue)
    pub secondary: [u8; 3],
    /// Success green
    pub success: [u8; 3],
    /// Error red
    pub error: [u8; 3],
    /// Warning amber
    pub warning: [u8; 3],
    /// Card borders
    pub border: [u8; 3],
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            background: [15, 23, 42],   // #0F172A
            surface: [30, 41, 59],      // #1E293B
            text: [226, 232, 240],      // #E2E8F0
            text_dim: [148, 163, 184],  // #94A3B8
            primary: [0, 229, 255],     // #00E5FF
            secondary: [41, 121, 255],  // #2979FF
            success: [0, 230, 118],     // #00E676
            error: [255, 82, 82],       // #FF5252
            warning: [255, 179, 0],     // #FFB300
            border: [51, 65, 85],       // #334155
        }
    }
}

impl ThemeConfig {
    /// Load theme configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: ThemeConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save theme configuration to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the config into an egui color palette
    pub fn to_palette(&self) -> Palette {
        let rgb = |c: [u8; 3]| Color32::from_rgb(c[0], c[1], c[2]);
        Palette {
            background: rgb(self.background),
            surface: rgb(self.surface),
            text: rgb(self.text),
            dim: rgb(self.text_dim),
            primary: rgb(self.primary),
            secondary: rgb(self.secondary),
            success: rgb(self.success),
            error: rgb(self.error),
            warning: rgb(self.warning),
            border: rgb(self.border),
        }
    }
}

/// Resolved color palette used by widgets
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color32,
    pub surface: Color32,
    pub text: Color32,
    pub dim: Color32,
    pub primary: Color32,
    pub secondary: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub border: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        ThemeConfig::default().to_palette()
    }
}

impl Palette {
    /// Color for a rate trend arrow
    pub fn trend_color(&self, delta_positive: Option<bool>) -> Color32 {
        match delta_positive {
            Some(true) => self.success,
            Some(false) => self.error,
            None => self.dim,
        }
    }

    /// Build egui Visuals from a theme config
    pub fn visuals_from_config(config: &ThemeConfig) -> Visuals {
        let palette = config.to_palette();
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(palette.text);

        visuals.faint_bg_color = palette.surface;
        visuals.extreme_bg_color = palette.background;
        visuals.panel_fill = palette.background;
        visuals.window_fill = palette.surface;
        visuals.window_stroke = Stroke::new(1.0, palette.border);

        visuals.widgets.noninteractive.bg_fill = palette.surface;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text);

        visuals.widgets.inactive.bg_fill = palette.surface;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, palette.border);
        visuals.widgets.inactive.weak_bg_fill = palette.surface;

        visuals.widgets.hovered.bg_fill = Color32::from_rgb(40, 54, 76);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, palette.primary);
        visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(36, 49, 70);

        visuals.widgets.active.bg_fill = Color32::from_rgb(20, 70, 86);
        visuals.widgets.active.bg_stroke = Stroke::new(1.5, palette.primary);
        visuals.widgets.active.weak_bg_fill = Color32::from_rgb(22, 60, 76);

        visuals.widgets.open.bg_fill = Color32::from_rgb(40, 54, 76);
        visuals.widgets.open.bg_stroke = Stroke::new(1.5, palette.primary);

        // 30% opacity cyan selection
        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(0, 229, 255, 76);
        visuals.selection.stroke = Stroke::new(1.5, palette.primary);

        visuals.hyperlink_color = palette.secondary;
        visuals.slider_trailing_fill = true;

        visuals
    }

    /// Apply the ShapShap theme to an egui context.
    ///
    /// Uses `style_mut_of` per egui 0.33 so both built-in themes carry the
    /// same visuals.
    pub fn apply(ctx: &Context, config: &ThemeConfig) {
        let visuals = Self::visuals_from_config(config);

        for theme in [EguiTheme::Dark, EguiTheme::Light] {
            let visuals = visuals.clone();
            ctx.style_mut_of(theme, move |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(6.0, 4.0);
                style.spacing.window_margin = egui::Margin::same(8);
                style.spacing.button_padding = egui::Vec2::new(10.0, 6.0);
                style.spacing.indent = 12.0;
            });
        }
    }
}
