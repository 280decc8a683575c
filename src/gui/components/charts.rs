// src/gui/components/charts.rs
//
// Small painter-drawn charts. Each call allocates its own rect from the
// available width; data comes pre-aggregated from `stats`.

use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Shape, Stroke, StrokeKind, Vec2};

use crate::stats::counts;
use crate::stats::distribution::{Bin, BoxStats};
use crate::stats::prices::CategoryPrices;

const PALETTE: [Color32; 10] = [
    Color32::from_rgb(0x4C, 0x78, 0xA8),
    Color32::from_rgb(0xF5, 0x85, 0x18),
    Color32::from_rgb(0xE4, 0x57, 0x56),
    Color32::from_rgb(0x72, 0xB7, 0xB2),
    Color32::from_rgb(0x54, 0xA2, 0x4B),
    Color32::from_rgb(0xEE, 0xCA, 0x3B),
    Color32::from_rgb(0xB2, 0x79, 0xA2),
    Color32::from_rgb(0xFF, 0x9D, 0xA6),
    Color32::from_rgb(0x9D, 0x75, 0x5D),
    Color32::from_rgb(0xBA, 0xB0, 0xAC),
];

const ROW_H: f32 = 18.0;
const LABEL_W: f32 = 180.0;

pub fn color(i: usize) -> Color32 {
    PALETTE[i % PALETTE.len()]
}

fn font() -> FontId {
    FontId::proportional(12.0)
}

fn canvas(ui: &mut egui::Ui, height: f32) -> (Rect, Painter) {
    let w = ui.available_width().max(200.0);
    let (resp, painter) = ui.allocate_painter(Vec2::new(w, height), Sense::hover());
    (resp.rect, painter)
}

fn empty(ui: &mut egui::Ui) {
    ui.weak("(no data)");
}

fn short(label: &str, max: usize) -> String {
    if label.chars().count() <= max {
        s!(label)
    } else {
        let cut: String = label.chars().take(max.saturating_sub(1)).collect();
        join!(cut, "…")
    }
}

/* ---------------- Pie ---------------- */

/// Pie with a legend on the right (label, count, share).
pub fn pie(ui: &mut egui::Ui, counts: &[(String, usize)]) {
    let total = counts::total(counts);
    if total == 0 {
        return empty(ui);
    }
    let legend_h = counts.len() as f32 * ROW_H;
    let (rect, painter) = canvas(ui, legend_h.max(200.0));
    let text = ui.visuals().text_color();

    let radius = 95.0_f32.min(rect.height() / 2.0 - 4.0);
    let center = Pos2::new(rect.left() + radius + 4.0, rect.top() + radius + 4.0);

    let mut start = -FRAC_PI_2;
    for (i, (_, n)) in counts.iter().enumerate() {
        let sweep = *n as f32 / total as f32 * TAU;
        slice(&painter, center, radius, start, sweep, color(i));
        start += sweep;
    }

    let x = center.x + radius + 24.0;
    for (i, (label, n)) in counts.iter().enumerate() {
        let y = rect.top() + i as f32 * ROW_H + ROW_H / 2.0;
        painter.rect_filled(Rect::from_center_size(Pos2::new(x, y), Vec2::splat(10.0)), 2.0, color(i));
        let pct = *n as f64 / total as f64 * 100.0;
        painter.text(
            Pos2::new(x + 10.0, y),
            Align2::LEFT_CENTER,
            format!("{}  {n} ({pct:.1}%)", short(label, 40)),
            font(),
            text,
        );
    }
}

/// Fan of convex pieces (each ≤ 90°) so `convex_polygon` stays valid.
fn slice(painter: &Painter, center: Pos2, r: f32, start: f32, sweep: f32, fill: Color32) {
    let pieces = (sweep / FRAC_PI_2).ceil().max(1.0) as usize;
    let step = sweep / pieces as f32;
    for p in 0..pieces {
        let a0 = start + step * p as f32;
        let n = ((step / 0.05).ceil() as usize).max(2);
        let mut pts = vec![center];
        for k in 0..=n {
            let a = a0 + step * k as f32 / n as f32;
            pts.push(center + Vec2::new(a.cos(), a.sin()) * r);
        }
        painter.add(Shape::convex_polygon(pts, fill, Stroke::NONE));
    }
}

/* ---------------- Bars ---------------- */

/// Horizontal bars, one row per entry, in the given order.
pub fn bars(ui: &mut egui::Ui, values: &[(String, f64)]) {
    if values.is_empty() {
        return empty(ui);
    }
    let (rect, painter) = canvas(ui, values.len() as f32 * ROW_H + 4.0);
    let text = ui.visuals().text_color();
    let max = values.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max).max(f64::EPSILON);
    let span = (rect.width() - LABEL_W - 80.0).max(40.0);

    for (i, (label, v)) in values.iter().enumerate() {
        let y = rect.top() + i as f32 * ROW_H;
        painter.text(Pos2::new(rect.left(), y + ROW_H / 2.0), Align2::LEFT_CENTER, short(label, 28), font(), text);
        let w = (*v / max) as f32 * span;
        let bar = Rect::from_min_size(Pos2::new(rect.left() + LABEL_W, y + 3.0), Vec2::new(w.max(1.0), ROW_H - 6.0));
        painter.rect_filled(bar, 2.0, color(0));
        painter.text(
            Pos2::new(bar.right() + 6.0, y + ROW_H / 2.0),
            Align2::LEFT_CENTER,
            fmt_num(*v),
            font(),
            text,
        );
    }
}

pub fn bars_usize(ui: &mut egui::Ui, counts: &[(String, usize)]) {
    let v: Vec<(String, f64)> = counts.iter().map(|(l, n)| (l.clone(), *n as f64)).collect();
    bars(ui, &v);
}

/* ---------------- Strip ---------------- */

/// One row per category, a dot per price.
pub fn strip(ui: &mut egui::Ui, groups: &[CategoryPrices]) {
    if groups.iter().all(|g| g.prices.is_empty()) {
        return empty(ui);
    }
    let (rect, painter) = canvas(ui, groups.len() as f32 * ROW_H + 20.0);
    let text = ui.visuals().text_color();
    let max = groups
        .iter()
        .flat_map(|g| g.prices.iter().copied())
        .fold(0.0_f64, f64::max)
        .max(f64::EPSILON);
    let x0 = rect.left() + LABEL_W;
    let span = (rect.width() - LABEL_W - 10.0).max(40.0);

    for (i, g) in groups.iter().enumerate() {
        let y = rect.top() + i as f32 * ROW_H + ROW_H / 2.0;
        painter.text(Pos2::new(rect.left(), y), Align2::LEFT_CENTER, short(&g.category, 28), font(), text);
        let c = color(i).gamma_multiply(0.6);
        for (k, p) in g.prices.iter().enumerate() {
            // deterministic jitter, ±4 px
            let jitter = ((k * 7919) % 9) as f32 - 4.0;
            let x = x0 + (*p / max) as f32 * span;
            painter.circle_filled(Pos2::new(x, y + jitter), 2.0, c);
        }
    }
    axis(&painter, rect, x0, span, 0.0, max, text);
}

/* ---------------- Histogram ---------------- */

pub fn histogram(ui: &mut egui::Ui, bins: &[Bin]) {
    if bins.is_empty() {
        return empty(ui);
    }
    let (rect, painter) = canvas(ui, 180.0);
    let text = ui.visuals().text_color();
    let plot = Rect::from_min_max(rect.min + Vec2::new(40.0, 4.0), rect.max - Vec2::new(10.0, 20.0));
    let max = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1);
    let w = plot.width() / bins.len() as f32;

    for (i, b) in bins.iter().enumerate() {
        let h = b.count as f32 / max as f32 * plot.height();
        let r = Rect::from_min_max(
            Pos2::new(plot.left() + i as f32 * w + 0.5, plot.bottom() - h),
            Pos2::new(plot.left() + (i + 1) as f32 * w - 0.5, plot.bottom()),
        );
        painter.rect_filled(r, 0.0, color(0));
    }
    painter.text(Pos2::new(plot.left() - 4.0, plot.top()), Align2::RIGHT_TOP, max.to_string(), font(), text);
    painter.text(Pos2::new(plot.left() - 4.0, plot.bottom()), Align2::RIGHT_BOTTOM, "0", font(), text);
    let (lo, hi) = (bins[0].lo, bins[bins.len() - 1].hi);
    axis(&painter, rect, plot.left(), plot.width(), lo, hi, text);
}

/* ---------------- Box ---------------- */

/// Horizontal box plots sharing one axis.
pub fn boxes(ui: &mut egui::Ui, groups: &[(String, BoxStats)]) {
    if groups.is_empty() {
        return empty(ui);
    }
    let row = ROW_H + 8.0;
    let (rect, painter) = canvas(ui, groups.len() as f32 * row + 20.0);
    let text = ui.visuals().text_color();
    let lo = groups.iter().map(|(_, b)| b.min).fold(f64::INFINITY, f64::min);
    let hi = groups.iter().map(|(_, b)| b.max).fold(f64::NEG_INFINITY, f64::max);
    let range = (hi - lo).max(f64::EPSILON);
    let x0 = rect.left() + LABEL_W;
    let span = (rect.width() - LABEL_W - 10.0).max(40.0);
    let x = |v: f64| x0 + ((v - lo) / range) as f32 * span;

    for (i, (label, b)) in groups.iter().enumerate() {
        let y = rect.top() + i as f32 * row + row / 2.0;
        painter.text(
            Pos2::new(rect.left(), y),
            Align2::LEFT_CENTER,
            format!("{} (n={})", short(label, 22), b.n),
            font(),
            text,
        );
        let stroke = Stroke::new(1.0, text);
        painter.line_segment([Pos2::new(x(b.min), y), Pos2::new(x(b.q1), y)], stroke);
        painter.line_segment([Pos2::new(x(b.q3), y), Pos2::new(x(b.max), y)], stroke);
        let body = Rect::from_min_max(Pos2::new(x(b.q1), y - 7.0), Pos2::new(x(b.q3).max(x(b.q1) + 1.0), y + 7.0));
        painter.rect_filled(body, 1.0, color(i).gamma_multiply(0.7));
        painter.rect_stroke(body, 1.0, stroke, StrokeKind::Inside);
        painter.line_segment([Pos2::new(x(b.median), y - 7.0), Pos2::new(x(b.median), y + 7.0)], Stroke::new(2.0, text));
    }
    axis(&painter, rect, x0, span, lo, hi, text);
}

/* ---------------- Line ---------------- */

/// Running series over labelled x positions (e.g. months).
pub fn line(ui: &mut egui::Ui, points: &[(String, f64)]) {
    if points.is_empty() {
        return empty(ui);
    }
    let (rect, painter) = canvas(ui, 180.0);
    let text = ui.visuals().text_color();
    let plot = Rect::from_min_max(rect.min + Vec2::new(40.0, 4.0), rect.max - Vec2::new(10.0, 20.0));
    let max = points.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max).max(f64::EPSILON);
    let n = points.len().max(2) - 1;

    let pts: Vec<Pos2> = points
        .iter()
        .enumerate()
        .map(|(i, (_, v))| {
            Pos2::new(
                plot.left() + i as f32 / n as f32 * plot.width(),
                plot.bottom() - (*v / max) as f32 * plot.height(),
            )
        })
        .collect();
    painter.add(Shape::line(pts, Stroke::new(2.0, color(0))));

    painter.text(Pos2::new(plot.left() - 4.0, plot.top()), Align2::RIGHT_TOP, fmt_num(max), font(), text);
    painter.text(Pos2::new(plot.left(), rect.bottom()), Align2::LEFT_BOTTOM, &points[0].0, font(), text);
    painter.text(
        Pos2::new(plot.right(), rect.bottom()),
        Align2::RIGHT_BOTTOM,
        &points[points.len() - 1].0,
        font(),
        text,
    );
}

/* ---------------- Shared ---------------- */

fn axis(painter: &Painter, rect: Rect, x0: f32, span: f32, lo: f64, hi: f64, color: Color32) {
    let y = rect.bottom() - 14.0;
    painter.line_segment([Pos2::new(x0, y), Pos2::new(x0 + span, y)], Stroke::new(1.0, color.gamma_multiply(0.5)));
    painter.text(Pos2::new(x0, rect.bottom()), Align2::LEFT_BOTTOM, fmt_num(lo), font(), color);
    painter.text(Pos2::new(x0 + span, rect.bottom()), Align2::RIGHT_BOTTOM, fmt_num(hi), font(), color);
}

pub fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e12 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_shortened_with_ellipsis() {
        assert_eq!(short("Netherlands", 20), "Netherlands");
        assert_eq!(short("United Kingdom of Great Britain", 10), "United Ki…");
    }

    #[test]
    fn numbers_drop_zero_fraction() {
        assert_eq!(fmt_num(12.0), "12");
        assert_eq!(fmt_num(12.345), "12.35");
    }
}
