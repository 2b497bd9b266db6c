//! Theme configuration for the Moro Games entry screen.
//!
//! Black backdrop with a cyan/magenta neon accent pair. The progress bar
//! colors are fixed by the brand; everything else is exposed as CSS custom
//! properties so `styles/main.css` never hard-codes a color.

/// Color palette.
pub mod colors {
    /// Backdrop colors.
    pub mod background {
        /// Screen background behind every overlay.
        pub const PRIMARY: &str = "#000000";
        /// Darkening layer over the blurred logo backdrop.
        pub const SCRIM: &str = "rgba(0, 0, 0, 0.45)";
        /// Panel behind the label and bar.
        pub const PANEL: &str = "rgba(0, 0, 0, 0.22)";
    }

    /// Text colors.
    pub mod text {
        /// Loading label.
        pub const PRIMARY: &str = "#ffffff";
        /// Error indicator.
        pub const ERROR: &str = "#ff3b30";
        /// Offline indicator.
        pub const OFFLINE: &str = "#8e8e93";
    }

    /// Neon accents of the progress bar.
    pub mod neon {
        /// Cyan, start of the fill and even particles.
        pub const CYAN: &str = "#00D4FF";
        /// Darker cyan.
        pub const CYAN_DIM: &str = "#0099CC";
        /// Magenta, odd particles.
        pub const MAGENTA: &str = "#FF0080";
        /// Darker magenta, end of the fill.
        pub const MAGENTA_DIM: &str = "#CC0066";
    }

    /// Empty track colors.
    pub mod track {
        /// Track edges.
        pub const EDGE: &str = "#0D1117";
        /// Track center.
        pub const CENTER: &str = "#1C2128";
    }

    /// Gradients.
    pub mod gradient {
        /// Empty track.
        pub const TRACK: &str = "linear-gradient(90deg, #0D1117 0%, #1C2128 50%, #0D1117 100%)";
        /// Track outline.
        pub const TRACK_STROKE: &str = "linear-gradient(90deg, rgba(0, 212, 255, 0.3) 0%, rgba(255, 0, 128, 0.3) 50%, rgba(0, 212, 255, 0.3) 100%)";
        /// Filled part.
        pub const FILL: &str =
            "linear-gradient(90deg, #00D4FF 0%, #0099CC 33%, #FF0080 67%, #CC0066 100%)";
        /// Shimmer highlight sweeping over the fill.
        pub const SHIMMER: &str = "linear-gradient(90deg, transparent 0%, rgba(255, 255, 255, 0.6) 50%, transparent 100%)";
        /// Inner glow of the fill.
        pub const INNER_GLOW: &str =
            "radial-gradient(ellipse at center, rgba(255, 255, 255, 0.4) 0%, transparent 70%)";
    }

    /// Glows and shadows.
    pub mod shadow {
        /// Fill glow.
        pub const FILL_GLOW: &str =
            "0 0 12px rgba(0, 212, 255, 0.8), 0 0 8px rgba(255, 0, 128, 0.6)";
        /// Track drop shadow.
        pub const TRACK: &str = "0 4px 8px rgba(0, 0, 0, 0.8)";
        /// Logo drop shadow.
        pub const LOGO: &str = "drop-shadow(0 8px 16px rgba(0, 0, 0, 0.25))";
    }
}

/// Typography configuration.
pub mod typography {
    /// Font family.
    pub const FONT_FAMILY: &str =
        "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";

    /// Font sizes.
    pub mod sizes {
        /// Status indicator text.
        pub const STATUS: &str = "1.125rem";
        /// Loading label.
        pub const LABEL: &str = "24px";
    }
}

/// Spacing values.
pub mod spacing {
    /// Gap between label and bar.
    pub const LABEL_GAP: &str = "14px";
    /// Padding of the label panel.
    pub const PANEL_PADDING: &str = "14px";
    /// Gap between the pulsing logo and the panel.
    pub const LOGO_GAP: &str = "36px";
}

/// Border radius values.
pub mod radius {
    /// Label panel.
    pub const PANEL: &str = "14px";
    /// Full/pill radius.
    pub const FULL: &str = "9999px";
}

/// Animation/transition configuration.
pub mod animation {
    /// Fill width follows progress with a short linear ease.
    pub const FILL: &str = "width 0.3s linear";
    /// Content fade between dimmed and full opacity.
    pub const CONTENT_FADE: &str = "opacity 0.3s ease-in-out";
}

/// Generate CSS custom properties for the theme.
pub fn generate_css_variables() -> String {
    format!(
        r":root {{
  /* Backdrop */
  --bg-primary: {bg_primary};
  --bg-scrim: {bg_scrim};
  --bg-panel: {bg_panel};

  /* Text */
  --text-primary: {text_primary};
  --text-error: {text_error};
  --text-offline: {text_offline};

  /* Neon accents */
  --neon-cyan: {neon_cyan};
  --neon-cyan-dim: {neon_cyan_dim};
  --neon-magenta: {neon_magenta};
  --neon-magenta-dim: {neon_magenta_dim};

  /* Track */
  --track-edge: {track_edge};
  --track-center: {track_center};

  /* Gradients */
  --gradient-track: {gradient_track};
  --gradient-track-stroke: {gradient_track_stroke};
  --gradient-fill: {gradient_fill};
  --gradient-shimmer: {gradient_shimmer};
  --gradient-inner-glow: {gradient_inner_glow};

  /* Shadows */
  --shadow-fill: {shadow_fill};
  --shadow-track: {shadow_track};
  --shadow-logo: {shadow_logo};

  /* Typography */
  --font-family: {font_family};
  --font-size-status: {font_status};
  --font-size-label: {font_label};

  /* Spacing */
  --spacing-label-gap: {spacing_label_gap};
  --spacing-panel: {spacing_panel};
  --spacing-logo-gap: {spacing_logo_gap};

  /* Radius */
  --radius-panel: {radius_panel};
  --radius-full: {radius_full};

  /* Transitions */
  --transition-fill: {transition_fill};
  --transition-content: {transition_content};
}}",
        bg_primary = colors::background::PRIMARY,
        bg_scrim = colors::background::SCRIM,
        bg_panel = colors::background::PANEL,
        text_primary = colors::text::PRIMARY,
        text_error = colors::text::ERROR,
        text_offline = colors::text::OFFLINE,
        neon_cyan = colors::neon::CYAN,
        neon_cyan_dim = colors::neon::CYAN_DIM,
        neon_magenta = colors::neon::MAGENTA,
        neon_magenta_dim = colors::neon::MAGENTA_DIM,
        track_edge = colors::track::EDGE,
        track_center = colors::track::CENTER,
        gradient_track = colors::gradient::TRACK,
        gradient_track_stroke = colors::gradient::TRACK_STROKE,
        gradient_fill = colors::gradient::FILL,
        gradient_shimmer = colors::gradient::SHIMMER,
        gradient_inner_glow = colors::gradient::INNER_GLOW,
        shadow_fill = colors::shadow::FILL_GLOW,
        shadow_track = colors::shadow::TRACK,
        shadow_logo = colors::shadow::LOGO,
        font_family = typography::FONT_FAMILY,
        font_status = typography::sizes::STATUS,
        font_label = typography::sizes::LABEL,
        spacing_label_gap = spacing::LABEL_GAP,
        spacing_panel = spacing::PANEL_PADDING,
        spacing_logo_gap = spacing::LOGO_GAP,
        radius_panel = radius::PANEL,
        radius_full = radius::FULL,
        transition_fill = animation::FILL,
        transition_content = animation::CONTENT_FADE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_css_variables() {
        let css = generate_css_variables();
        assert!(css.contains(":root"));
        assert!(css.contains("--neon-cyan: #00D4FF"));
        assert!(css.contains("--neon-magenta: #FF0080"));
        assert!(css.contains("--gradient-fill"));
        assert!(css.contains("--text-error"));
    }

    #[test]
    fn test_color_values() {
        assert!(colors::neon::CYAN.starts_with('#'));
        assert!(colors::track::EDGE.starts_with('#'));
        assert!(colors::gradient::FILL.contains(colors::neon::MAGENTA_DIM));
    }
}
