// =====================================================================
// RENDER HELPERS
// =====================================================================
// Primitive drawing on the SDL canvas. Individual primitives that fail
// to draw are skipped (`unwrap_or(())`), a missing line is not worth
// aborting a frame for.

use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

use crate::assets::Glyph;
use crate::clef::ClefConfig;
use crate::config::{BLACK, STAFF_LINE_THICKNESS, WHITE};
use crate::firework::Firework;
use crate::staff::NotePlacement;

pub const CORNER_TL: u8 = 1;
pub const CORNER_TR: u8 = 2;
pub const CORNER_BL: u8 = 4;
pub const CORNER_BR: u8 = 8;
pub const CORNER_ALL: u8 = 15;

fn fill_quarter_circle(
    canvas: &mut Canvas<Window>, cx: i32, cy: i32,
    r: i32, quadrant: u8
) -> Result<(), String> {
    for dy in 0..=r {
        let dx = ((r * r - dy * dy) as f64).sqrt() as i32;
        match quadrant {
            0 => canvas.draw_line(Point::new(cx - dx, cy - dy), Point::new(cx, cy - dy))?, // TL
            1 => canvas.draw_line(Point::new(cx, cy - dy), Point::new(cx + dx, cy - dy))?, // TR
            2 => canvas.draw_line(Point::new(cx - dx, cy + dy), Point::new(cx, cy + dy))?, // BL
            3 => canvas.draw_line(Point::new(cx, cy + dy), Point::new(cx + dx, cy + dy))?, // BR
            _ => {},
        }
    }
    Ok(())
}

pub fn render_fill_rounded_rect(
    canvas: &mut Canvas<Window>, x: i32, y: i32,
    mut w: i32, mut h: i32, mut r: i32, corners: u8
) -> Result<(), String> {
    if w < 0 { w = 0; }
    if h < 0 { h = 0; }
    if r * 2 > w { r = w / 2; }
    if r * 2 > h { r = h / 2; }

    // Middle column, then the two side strips
    canvas.fill_rect(Rect::new(x + r, y, (w - 2 * r) as u32, h as u32))?;
    canvas.fill_rect(Rect::new(x, y + r, r as u32, (h - 2 * r) as u32))?;
    canvas.fill_rect(Rect::new(x + w - r, y + r, r as u32, (h - 2 * r) as u32))?;

    // Corners
    if corners & CORNER_TL != 0 { fill_quarter_circle(canvas, x + r, y + r, r, 0)?; }
    else { canvas.fill_rect(Rect::new(x, y, r as u32, r as u32))?; }

    if corners & CORNER_TR != 0 { fill_quarter_circle(canvas, x + w - r - 1, y + r, r, 1)?; }
    else { canvas.fill_rect(Rect::new(x + w - r, y, r as u32, r as u32))?; }

    if corners & CORNER_BL != 0 { fill_quarter_circle(canvas, x + r, y + h - r - 1, r, 2)?; }
    else { canvas.fill_rect(Rect::new(x, y + h - r, r as u32, r as u32))?; }

    if corners & CORNER_BR != 0 { fill_quarter_circle(canvas, x + w - r - 1, y + h - r - 1, r, 3)?; }
    else { canvas.fill_rect(Rect::new(x + w - r, y + h - r, r as u32, r as u32))?; }

    Ok(())
}

/// Filled disc from horizontal spans.
pub fn fill_circle(canvas: &mut Canvas<Window>, cx: i32, cy: i32, r: i32) -> Result<(), String> {
    if r <= 0 {
        return canvas.draw_point(Point::new(cx, cy));
    }
    for dy in -r..=r {
        let dx = ((r * r - dy * dy) as f64).sqrt() as i32;
        canvas.draw_line(Point::new(cx - dx, cy + dy), Point::new(cx + dx, cy + dy))?;
    }
    Ok(())
}

/// Horizontal line `STAFF_LINE_THICKNESS` pixels thick.
fn thick_hline(canvas: &mut Canvas<Window>, x1: i32, x2: i32, y: i32) -> Result<(), String> {
    let half = STAFF_LINE_THICKNESS as i32 / 2;
    canvas.fill_rect(Rect::new(x1, y - half, (x2 - x1).max(0) as u32, STAFF_LINE_THICKNESS))
}

/// Vertical gradient, one line per row. `color_at` maps a row to a color.
pub fn fill_gradient(canvas: &mut Canvas<Window>, color_at: impl Fn(i32) -> Color) {
    let Ok((w, h)) = canvas.output_size() else {
        return;
    };
    for y in 0..h as i32 {
        canvas.set_draw_color(color_at(y));
        canvas
            .draw_line(Point::new(0, y), Point::new(w as i32, y))
            .unwrap_or(());
    }
}

pub fn render_staff(canvas: &mut Canvas<Window>, clef: &ClefConfig, placement: &NotePlacement) {
    let staff = clef.staff;
    canvas.set_draw_color(BLACK);
    for y in staff.line_ys() {
        thick_hline(canvas, staff.x, staff.x + staff.width, y).unwrap_or(());
    }

    let note_x = staff.note_x();
    let half = clef.ledger_half_width;
    for ly in &placement.ledgers {
        thick_hline(canvas, note_x - half, note_x + half, *ly as i32).unwrap_or(());
    }

    // Hollow note head: black disc with a white one on top
    let (outer, inner) = clef.head_radius;
    let note_y = placement.y as i32;
    canvas.set_draw_color(BLACK);
    fill_circle(canvas, note_x, note_y, outer).unwrap_or(());
    canvas.set_draw_color(WHITE);
    fill_circle(canvas, note_x, note_y, inner).unwrap_or(());
}

/// Draws `glyph` scaled to `height`, centred on (cx, cy).
pub fn render_glyph(canvas: &mut Canvas<Window>, glyph: &Glyph, cx: i32, cy: i32, height: u32) {
    let width = glyph.width_for(height);
    let dst = Rect::from_center(Point::new(cx, cy), width.max(1), height.max(1));
    canvas.copy(&glyph.texture, None, dst).unwrap_or(());
}

pub fn render_fireworks(canvas: &mut Canvas<Window>, fireworks: &[Firework]) {
    canvas.set_blend_mode(BlendMode::Blend);
    for fw in fireworks {
        for p in &fw.particles {
            let c = p.color;
            canvas.set_draw_color(Color::RGBA(c.r, c.g, c.b, p.alpha()));
            fill_circle(canvas, p.x as i32, p.y as i32, p.radius().round() as i32).unwrap_or(());
        }
    }
    canvas.set_blend_mode(BlendMode::None);
}
