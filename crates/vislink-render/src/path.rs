//! SVG path data for arcs, ribbons and polygons.
//!
//! Angles follow the d3 convention: zero at 12 o'clock, increasing clockwise, y pointing down.

use crate::model::LayoutPoint;
use std::f64::consts::PI;

pub(crate) fn fmt_number(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut r = (v * 1000.0).round() / 1000.0;
    if r.abs() < 0.0005 {
        r = 0.0;
    }
    let mut s = format!("{r:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

/// Point at `radius` along clock angle `angle`.
pub(crate) fn clock_xy(radius: f64, angle: f64) -> LayoutPoint {
    LayoutPoint {
        x: radius * angle.sin(),
        y: -radius * angle.cos(),
    }
}

fn xy(p: &LayoutPoint) -> String {
    format!("{},{}", fmt_number(p.x), fmt_number(p.y))
}

fn large_arc(a0: f64, a1: f64) -> u8 {
    u8::from(a1 - a0 > PI)
}

/// Annular sector between `inner` and `outer` radii.
pub(crate) fn annulus_sector(inner: f64, outer: f64, a0: f64, a1: f64) -> String {
    let large = large_arc(a0, a1);
    let (ro, ri) = (fmt_number(outer), fmt_number(inner));
    format!(
        "M{} A{ro},{ro} 0 {large},1 {} L{} A{ri},{ri} 0 {large},0 {} Z",
        xy(&clock_xy(outer, a0)),
        xy(&clock_xy(outer, a1)),
        xy(&clock_xy(inner, a1)),
        xy(&clock_xy(inner, a0)),
    )
}

/// Ribbon joining two arcs of a circle of `radius` through quadratic curves via the center.
pub(crate) fn ribbon(radius: f64, source: (f64, f64), target: (f64, f64)) -> String {
    let r = fmt_number(radius);
    let (s0, s1) = (clock_xy(radius, source.0), clock_xy(radius, source.1));
    let mut out = format!(
        "M{} A{r},{r} 0 {},1 {}",
        xy(&s0),
        large_arc(source.0, source.1),
        xy(&s1)
    );
    if source == target {
        out.push_str(&format!(" Q0,0 {}", xy(&s0)));
    } else {
        let (t0, t1) = (clock_xy(radius, target.0), clock_xy(radius, target.1));
        out.push_str(&format!(
            " Q0,0 {} A{r},{r} 0 {},1 {} Q0,0 {}",
            xy(&t0),
            large_arc(target.0, target.1),
            xy(&t1),
            xy(&s0)
        ));
    }
    out.push_str(" Z");
    out
}

pub(crate) fn closed_polygon(points: &[LayoutPoint]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        out.push(if i == 0 { 'M' } else { 'L' });
        out.push_str(&xy(p));
        out.push(' ');
    }
    if !points.is_empty() {
        out.push('Z');
    }
    out
}
