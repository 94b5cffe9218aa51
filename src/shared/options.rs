//! Zentrale Konfiguration für beide Graphenpapier-Anwendungen.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::scene::Color;

// ── Dots ────────────────────────────────────────────────────────────

/// Sichtbarer Radius eines Dot-Markers in Canvas-Einheiten (zugleich Hitbox).
pub const DOT_RADIUS: f32 = 2.0;
/// Highlight-Farbe des wartenden Startvertex (RGBA: Rot).
pub const START_VERTEX_COLOR: Color = [1.0, 0.0, 0.0, 1.0];
/// Highlight-Farbe akkumulierter Dreiecks-Vertices (RGBA: Blau).
pub const ACCUMULATE_COLOR: Color = [0.0, 0.0, 1.0, 1.0];
/// Highlight-Farbe des gepickten nächsten Vertex (RGBA: Rot).
pub const PICK_COLOR: Color = [1.0, 0.0, 0.0, 1.0];

// ── Linien ──────────────────────────────────────────────────────────

/// Linienstärke von Kanten-Segmenten.
pub const EDGE_WIDTH: f32 = 0.5;
/// Linienstärke der Dreiecks-Umrandung.
pub const TRIANGLE_STROKE_WIDTH: f32 = 0.25;
/// Linienstärke der Sketch-Polyline.
pub const POLYLINE_WIDTH: f32 = 0.25;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `graphpaper_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Sichtbarer Radius eines Dot-Markers (zugleich Hitbox)
    pub dot_radius: f32,
    /// Highlight-Farbe des wartenden Startvertex
    pub start_vertex_color: Color,
    /// Highlight-Farbe akkumulierter Dreiecks-Vertices
    pub accumulate_color: Color,
    /// Highlight-Farbe des gepickten nächsten Vertex
    pub pick_color: Color,
    /// Linienstärke von Kanten-Segmenten
    pub edge_width: f32,
    /// Linienstärke der Dreiecks-Umrandung
    pub triangle_stroke_width: f32,
    /// Linienstärke der Sketch-Polyline
    pub polyline_width: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            dot_radius: DOT_RADIUS,
            start_vertex_color: START_VERTEX_COLOR,
            accumulate_color: ACCUMULATE_COLOR,
            pick_color: PICK_COLOR,
            edge_width: EDGE_WIDTH,
            triangle_stroke_width: TRIANGLE_STROKE_WIDTH,
            polyline_width: POLYLINE_WIDTH,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("graphpaper_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("graphpaper_editor.toml")
    }
}
