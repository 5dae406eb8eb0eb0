// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Text renderers for the terminal binary.

use crate::models::{Location, MarkerPopup, WorkoutSummary};
use crate::ui::{FormField, MapView, WorkoutView};
use geo::{Contains, Point, Rect};
use std::collections::HashSet;
use std::io::Write;

/// Degrees of longitude covered by the map at zoom 0.
const WORLD_SPAN_DEG: f64 = 360.0;

/// Write one line, logging instead of failing when the output is gone.
fn emit<W: Write>(out: &mut W, line: &str) {
    if let Err(e) = writeln!(out, "{}", line) {
        tracing::warn!(error = %e, "Failed to write to terminal");
    }
}

/// Map rendered as log lines, tracking the visible viewport.
pub struct TerminalMap<W> {
    out: W,
    viewport: Option<Rect<f64>>,
    markers: usize,
}

impl<W: Write> TerminalMap<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            viewport: None,
            markers: 0,
        }
    }

    pub fn marker_count(&self) -> usize {
        self.markers
    }

    /// Whether `location` is inside the current viewport.
    pub fn is_visible(&self, location: Location) -> bool {
        self.viewport
            .is_some_and(|rect| rect.contains(&Point::from(location)))
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn set_viewport(&mut self, center: Location, zoom: u8) {
        // Each zoom level halves the visible span
        let half_lng = WORLD_SPAN_DEG / 2f64.powi(i32::from(zoom)) / 2.0;
        let half_lat = half_lng / 2.0;
        self.viewport = Some(Rect::new(
            (center.lng - half_lng, center.lat - half_lat),
            (center.lng + half_lng, center.lat + half_lat),
        ));
    }
}

impl<W: Write> MapView for TerminalMap<W> {
    fn show_map(&mut self, center: Location, zoom: u8) {
        self.set_viewport(center, zoom);
        emit(&mut self.out, &format!("🗺  Map centered on {} (zoom {})", center, zoom));
    }

    fn add_marker(&mut self, location: Location, popup: &MarkerPopup) {
        self.markers += 1;
        let note = if self.is_visible(location) {
            ""
        } else {
            " (outside current view)"
        };
        emit(
            &mut self.out,
            &format!("📍 {} at {}{}", popup.content, location, note),
        );
    }

    fn pan_to(&mut self, location: Location, zoom: u8) {
        self.set_viewport(location, zoom);
        emit(&mut self.out, &format!("🗺  Moved to {}", location));
    }

    fn clear_markers(&mut self) {
        self.markers = 0;
        emit(&mut self.out, "🗺  Markers cleared");
    }
}

/// Workout list and form rendered as text.
pub struct TerminalView<W> {
    out: W,
    rows: usize,
    form_visible: bool,
    hidden_fields: HashSet<FormField>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        // Running is the default kind, so the elevation row starts hidden
        let mut hidden_fields = HashSet::new();
        hidden_fields.insert(FormField::Elevation);

        Self {
            out,
            rows: 0,
            form_visible: false,
            hidden_fields,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn is_form_visible(&self) -> bool {
        self.form_visible
    }

    pub fn is_field_visible(&self, field: FormField) -> bool {
        !self.hidden_fields.contains(&field)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn field_prompt(&self) -> &'static str {
        if self.is_field_visible(FormField::Cadence) {
            "submit running <distance km> <duration min> <cadence spm>"
        } else {
            "submit cycling <distance km> <duration min> <elevation m>"
        }
    }
}

impl<W: Write> WorkoutView for TerminalView<W> {
    fn render_list_row(&mut self, row: &WorkoutSummary) {
        self.rows += 1;
        let details: Vec<String> = row
            .details
            .iter()
            .map(|d| format!("{} {} {}", d.icon, d.value, d.unit))
            .collect();
        emit(
            &mut self.out,
            &format!("[{}] {}  {}", row.id, row.label, details.join("  ")),
        );
    }

    fn clear_list(&mut self) {
        self.rows = 0;
        emit(&mut self.out, "(workout list cleared)");
    }

    fn show_form(&mut self) {
        self.form_visible = true;
        let prompt = self.field_prompt();
        emit(&mut self.out, &format!("✏️  New workout: {}", prompt));
    }

    fn hide_form(&mut self) {
        self.form_visible = false;
    }

    fn clear_form(&mut self) {}

    fn toggle_field(&mut self, field: FormField) {
        if !self.hidden_fields.remove(&field) {
            self.hidden_fields.insert(field);
        }
        if self.form_visible {
            let prompt = self.field_prompt();
            emit(&mut self.out, &format!("✏️  {}", prompt));
        }
    }

    fn alert(&mut self, message: &str) {
        emit(&mut self.out, &format!("⚠️  {}", message));
    }
}
